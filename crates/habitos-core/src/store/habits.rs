//! Habit completions and the derived day-state reads.

use chrono::NaiveDate;

use crate::shared::{FourDScan, Habit, HabitCompletion, HabitUpdate, DEFAULT_XP_WEIGHT};

use super::ProgressStore;

impl ProgressStore {
    /// True when a scan exists for today and its somatic reading is below 4.
    /// Without a scan the day is never minimum-viable.
    pub fn is_minimum_viable_day(&self) -> bool {
        match &self.today_scan {
            Some(scan) => scan.date == self.clock().today() && scan.somatic < 4,
            None => false,
        }
    }

    /// Records today's scan (dimensions clamped to range). Last write wins
    /// for the day; morning and evening readings are not reconciled.
    pub fn set_today_scan(&mut self, mut scan: FourDScan) {
        scan.clamp();
        tracing::debug!(
            target: "habitos::wellness",
            somatic = scan.somatic,
            structural = scan.structural,
            noetic = scan.noetic,
            sovereign = scan.sovereign,
            "scan recorded"
        );
        self.today_scan = Some(scan);
    }

    /// XP weight for `habit_id`, falling back to [`DEFAULT_XP_WEIGHT`] when
    /// the habit record no longer resolves.
    fn habit_weight(&self, habit_id: &str) -> u32 {
        self.habit(habit_id)
            .map(|h| h.xp_weight)
            .unwrap_or(DEFAULT_XP_WEIGHT)
    }

    /// Sum of the weights of today's completions. Recomputed on every call
    /// from the live completion set.
    pub fn today_xp(&self) -> u32 {
        let today = self.clock().today();
        self.completions
            .iter()
            .filter(|c| c.date == today)
            .map(|c| self.habit_weight(&c.habit_id))
            .sum()
    }

    /// Flips the completion state for (habit, date).
    ///
    /// When a completion exists it is removed; XP already granted for it is
    /// kept. When none exists one is created, stamped with the current
    /// minimum-viable-day flag, and the habit's weight is awarded.
    pub fn toggle_habit_completion(&mut self, habit_id: &str, date: NaiveDate) {
        if let Some(pos) = self
            .completions
            .iter()
            .position(|c| c.habit_id == habit_id && c.date == date)
        {
            self.completions.remove(pos);
            tracing::debug!(target: "habitos::habits", habit_id, %date, "completion removed");
        } else {
            let weight = self.habit_weight(habit_id);
            let completion = HabitCompletion {
                id: crate::shared::new_record_id(),
                habit_id: habit_id.to_string(),
                date,
                is_minimum_viable: self.is_minimum_viable_day(),
                created_at: self.clock().now(),
            };
            tracing::debug!(target: "habitos::habits", habit_id, %date, weight, "completion added");
            self.completions.push(completion);
            self.award_xp(weight);
        }
    }

    /// Adds a habit definition and returns its id.
    pub fn add_habit(&mut self, habit: Habit) -> String {
        let id = habit.id.clone();
        self.habits.push(habit);
        id
    }

    /// Applies a partial update to a habit definition. Unknown ids are a
    /// no-op.
    pub fn update_habit(&mut self, habit_id: &str, update: HabitUpdate) {
        if let Some(habit) = self.habits.iter_mut().find(|h| h.id == habit_id) {
            update.apply(habit);
        }
    }
}
