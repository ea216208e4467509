//! habitos-core: HabitOS core library (shared types, rank progression, and
//! the in-memory progress store).
//!
//! The [`ProgressStore`] owns the whole of a single user's daily-execution
//! state and exposes deterministic derived reads and synchronous mutations.
//! Presentation layers consume it directly; there is no network, storage, or
//! background work behind it.

mod clock;
mod config;
mod console;
mod defaults;
mod error;
mod progression;
mod settings;
mod shared;
mod store;

// Clock seam
pub use clock::{ClockSource, ManualClock, SystemClock};

// Configuration
pub use config::CoreConfig;

// Console types + responder seam
pub use console::{
    ConsoleMode, ConsoleResponder, Conversation, ConversationMessage, MessageRole, PinnedInsight,
    Provider,
};

// Starter fixtures
pub use defaults::{starter_habits, starter_patterns};

// Errors
pub use error::ProgressError;

// Progression
pub use progression::{Rank, RankUp, RANK_THRESHOLDS};

// Runtime preferences
pub use settings::{ContextInjection, Notifications, Settings};

// Entity types
pub use shared::{
    ActiveBlock, Artifact, ArtifactDomain, ArtifactDraft, BlockCategory, BodyMetrics, DailyMission,
    Decision, EnergyEntry, EnergyPeriod, ExecutionBlock, FourDScan, Habit, HabitCategory,
    HabitCompletion, HabitUpdate, JournalEntry, NutritionDay, NutritionFlag, Pattern, Phase,
    PhaseDraft, ShadowEntry, ShadowReport, TimeOfDay, Trend, UserProfile, DEFAULT_XP_WEIGHT,
};

// The Progress Aggregator
pub use store::{
    ProgressStore, ARTIFACT_XP_REWARD, BLOCK_XP_REWARD, SHADOW_RESOLVED_XP_REWARD,
};
