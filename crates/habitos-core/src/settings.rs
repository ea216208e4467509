//! Runtime user preferences.
//!
//! Nested preference groups with one explicit setter per leaf field, so every
//! preference write is a typed call rather than a key-path lookup.

use serde::{Deserialize, Serialize};

use crate::console::Provider;

fn default_true() -> bool {
    true
}

/// Which store context gets injected into console exchanges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContextInjection {
    #[serde(default = "default_true")]
    pub habits: bool,
    #[serde(default = "default_true")]
    pub shadow: bool,
    #[serde(default = "default_true")]
    pub energy: bool,
    #[serde(default = "default_true")]
    pub blocks: bool,
}

impl Default for ContextInjection {
    fn default() -> Self {
        Self {
            habits: true,
            shadow: true,
            energy: true,
            blocks: true,
        }
    }
}

/// Reminder toggles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Notifications {
    /// Morning activation reminder.
    #[serde(default = "default_true")]
    pub morning: bool,
    /// Evening audit reminder.
    #[serde(default = "default_true")]
    pub evening: bool,
    /// Warn before a streak lapses.
    #[serde(default = "default_true")]
    pub streak_warning: bool,
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            morning: true,
            evening: true,
            streak_warning: true,
        }
    }
}

/// User preferences mutated at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Preferred console model family.
    #[serde(default)]
    pub model_preference: Provider,
    #[serde(default)]
    pub context_injection: ContextInjection,
    #[serde(default)]
    pub notifications: Notifications,
}

impl Settings {
    pub fn set_model_preference(&mut self, provider: Provider) {
        self.model_preference = provider;
    }

    pub fn set_inject_habits(&mut self, value: bool) {
        self.context_injection.habits = value;
    }

    pub fn set_inject_shadow(&mut self, value: bool) {
        self.context_injection.shadow = value;
    }

    pub fn set_inject_energy(&mut self, value: bool) {
        self.context_injection.energy = value;
    }

    pub fn set_inject_blocks(&mut self, value: bool) {
        self.context_injection.blocks = value;
    }

    pub fn set_notify_morning(&mut self, value: bool) {
        self.notifications.morning = value;
    }

    pub fn set_notify_evening(&mut self, value: bool) {
        self.notifications.evening = value;
    }

    pub fn set_notify_streak_warning(&mut self, value: bool) {
        self.notifications.streak_warning = value;
    }
}
