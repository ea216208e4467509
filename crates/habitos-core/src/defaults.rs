//! Starter fixtures: the default habit set and behavioral pattern library.
//!
//! Used by [`crate::ProgressStore`] when seeding a demo profile. Records are
//! stamped with the caller's clock so fixture timestamps stay consistent with
//! everything else the store derives from time.

use chrono::{DateTime, Utc};

use crate::shared::{Habit, HabitCategory, Pattern, Trend};

/// The eight keystone habits a fresh demo profile starts with.
pub fn starter_habits(created_at: DateTime<Utc>) -> Vec<Habit> {
    let habit = |name: &str, category, weight, mv: &str, why: &str, order| {
        Habit::new(name, category, weight, created_at)
            .with_minimum_viable(mv)
            .with_why(why)
            .with_sort_order(order)
    };
    vec![
        habit(
            "Morning Activation Protocol",
            HabitCategory::Physical,
            15,
            "5 min stretch",
            "Sets circadian rhythm",
            0,
        ),
        habit(
            "Cold Exposure",
            HabitCategory::Physical,
            10,
            "Cold face wash",
            "Norepinephrine + discipline",
            1,
        ),
        habit(
            "Sleep Protocol",
            HabitCategory::Physical,
            20,
            "Screens off by midnight",
            "Foundation of everything",
            2,
        ),
        habit(
            "Creative Block (30min+)",
            HabitCategory::Creative,
            15,
            "15 min creative touch",
            "Music is non-negotiable",
            3,
        ),
        habit(
            "Structured Meals",
            HabitCategory::Sovereign,
            10,
            "At least 2 real meals",
            "Counter grazing pattern",
            4,
        ),
        habit(
            "Daily Audit",
            HabitCategory::Structural,
            5,
            "4D evening scan",
            "Close the loop",
            5,
        ),
        habit(
            "Reading (20min+)",
            HabitCategory::Creative,
            10,
            "10 min reading",
            "Feed the noetic dimension",
            6,
        ),
        habit(
            "Movement / Training",
            HabitCategory::Physical,
            15,
            "Walk 15 min",
            "Body is the vehicle",
            7,
        ),
    ]
}

/// The catalogued behavioral patterns the shadow log draws from.
pub fn starter_patterns(created_at: DateTime<Utc>) -> Vec<Pattern> {
    let pattern = |name: &str,
                   description: &str,
                   trigger: &str,
                   payoff: &str,
                   cost: &str,
                   countermove: &str,
                   frequency,
                   trend| Pattern {
        id: crate::shared::new_record_id(),
        name: name.to_string(),
        description: description.to_string(),
        typical_trigger: trigger.to_string(),
        typical_payoff: payoff.to_string(),
        cost: cost.to_string(),
        countermove: countermove.to_string(),
        frequency_last_30: frequency,
        trend,
        created_at,
    };
    vec![
        pattern(
            "Perfectionism",
            "Refusing to start or ship until conditions are ideal",
            "Complex creative task or public-facing work",
            "Avoids judgment and failure",
            "Nothing ships. Stagnation disguised as standards.",
            "Ship ugly. Set a 25-min timer and publish whatever exists.",
            12,
            Trend::Stable,
        ),
        pattern(
            "Analysis Paralysis",
            "Researching endlessly instead of deciding",
            "Multiple good options with unclear winner",
            "Feels productive without commitment risk",
            "Days lost to research that never converts to action",
            "If you've researched >15 min, pick one and commit for 48h.",
            8,
            Trend::Decreasing,
        ),
        pattern(
            "Grazing",
            "Unstructured snacking instead of real meals",
            "Boredom, stress, or avoiding a hard task",
            "Dopamine micro-hits, procrastination cover",
            "Energy crashes, weight gain, broken meal structure",
            "Prep meals in advance. When urge hits, drink water and set 10-min timer.",
            15,
            Trend::Increasing,
        ),
        pattern(
            "Morning Latency",
            "Lying in bed scrolling instead of activating",
            "Poor sleep, no clear morning priority",
            "Comfort, avoidance of cold start",
            "First 2 hours wasted. Sets low-agency tone for entire day.",
            "Phone charges outside bedroom. First action: feet on floor, cold water.",
            10,
            Trend::Stable,
        ),
        pattern(
            "Avoidance",
            "Redirecting to easy tasks when hard ones loom",
            "Ambiguous or emotionally charged task",
            "Feels productive without real progress",
            "Important work stays undone. Anxiety compounds.",
            "Name the avoidance out loud. Do 5 min of the hard thing.",
            7,
            Trend::Decreasing,
        ),
        pattern(
            "Dopamine Seeking",
            "Compulsive checking of feeds, notifications, novelty",
            "Low stimulation, transition moments, fatigue",
            "Instant gratification, social validation",
            "Fractured attention, shallow work, time evaporation",
            "Block apps during focus blocks. Replace with 2-min breathing.",
            18,
            Trend::Increasing,
        ),
    ]
}
