//! Energy, nutrition, body metrics, and the sobriety counter.

use crate::shared::{EnergyEntry, EnergyPeriod, NutritionFlag};

use super::ProgressStore;

impl ProgressStore {
    /// Writes one period's energy reading (clamped to 1–10), creating
    /// today's entry when none exists yet.
    pub fn set_energy(&mut self, period: EnergyPeriod, level: u8) {
        let today = self.clock().today();
        let now = self.clock().now();
        match self.energy_entries.iter_mut().find(|e| e.date == today) {
            Some(entry) => entry.set(period, level),
            None => {
                let mut entry = EnergyEntry::empty(today, now);
                entry.set(period, level);
                self.energy_entries.insert(0, entry);
            }
        }
    }

    /// Writes one of today's nutrition protocol flags.
    pub fn set_nutrition(&mut self, flag: NutritionFlag, value: bool) {
        self.today_nutrition.set(flag, value);
    }

    /// Records the current body weight in kilograms.
    pub fn set_body_weight(&mut self, weight_kg: f64) {
        self.body.weight_kg = weight_kg;
    }

    /// Records free-text body notes.
    pub fn set_body_notes(&mut self, notes: impl Into<String>) {
        self.body.notes = notes.into();
    }

    /// Whole days elapsed since the sobriety start date. Recomputed on every
    /// read; 0 on the day of a reset, 1 one calendar day later.
    pub fn sobriety_days(&self) -> i64 {
        (self.clock().today() - self.sobriety_start).num_days().max(0)
    }

    /// Restarts the sobriety counter at today.
    ///
    /// Callers supply a non-empty description of the trigger; the reset is
    /// recorded regardless, with the trigger kept to the log line.
    pub fn reset_sobriety(&mut self, trigger: &str) {
        debug_assert!(
            !trigger.trim().is_empty(),
            "sobriety reset requires a trigger description"
        );
        let today = self.clock().today();
        tracing::info!(
            target: "habitos::wellness",
            days_reached = self.sobriety_days(),
            trigger,
            "sobriety counter reset"
        );
        self.sobriety_start = today;
    }
}
