//! Shared entity types used across the HabitOS crates.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::progression::Rank;

/// Fresh record identifier (UUID v4, string form).
pub(crate) fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

// -----------------------------------------------------------------------------
// Profile & progression
// -----------------------------------------------------------------------------

/// The single user's profile. `total_xp` only ever grows; `rank` is derived
/// from it on every award and never written directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique profile identifier.
    pub id: String,
    /// Display name shown by presentation layers.
    pub display_name: String,
    /// Cumulative XP. Monotonically non-decreasing.
    #[serde(default)]
    pub total_xp: u32,
    /// Current tier, derived from `total_xp`.
    #[serde(default)]
    pub rank: Rank,
    /// Consecutive-day streak counter.
    #[serde(default)]
    pub current_streak: u32,
    /// Longest streak ever recorded.
    #[serde(default)]
    pub longest_streak: u32,
    /// Currently active phase, when one is selected.
    #[serde(default)]
    pub active_phase_id: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// New profile at zero XP (Novice, no streaks).
    pub fn new(display_name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: new_record_id(),
            display_name: display_name.into(),
            total_xp: 0,
            rank: Rank::Novice,
            current_streak: 0,
            longest_streak: 0,
            active_phase_id: None,
            created_at,
        }
    }
}

// -----------------------------------------------------------------------------
// Habits & completions
// -----------------------------------------------------------------------------

/// XP weight used when a completion references a habit record that no longer
/// resolves. A documented default, not an error.
pub const DEFAULT_XP_WEIGHT: u32 = 5;

fn default_xp_weight() -> u32 {
    DEFAULT_XP_WEIGHT
}

/// Dimension of daily practice a habit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitCategory {
    /// Body: training, sleep, cold exposure.
    Physical,
    /// Output: music, writing, making things.
    Creative,
    /// Order: systems, audits, planning.
    Structural,
    /// Agency: nutrition discipline, boundaries, decisions.
    Sovereign,
}

impl HabitCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            HabitCategory::Physical => "physical",
            HabitCategory::Creative => "creative",
            HabitCategory::Structural => "structural",
            HabitCategory::Sovereign => "sovereign",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "physical" => Some(HabitCategory::Physical),
            "creative" => Some(HabitCategory::Creative),
            "structural" => Some(HabitCategory::Structural),
            "sovereign" => Some(HabitCategory::Sovereign),
            _ => None,
        }
    }
}

/// A tracked daily habit. Each completion awards `xp_weight` XP; on a
/// minimum-viable day the `minimum_viable_version` is the variant that counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    /// Unique habit identifier.
    pub id: String,
    /// Full habit name (e.g. "Morning Activation Protocol").
    pub name: String,
    /// Practice dimension this habit belongs to.
    pub category: HabitCategory,
    /// XP granted per completion. Positive; 5 when unset.
    #[serde(default = "default_xp_weight")]
    pub xp_weight: u32,
    /// Reduced variant that still counts on a minimum-viable day.
    #[serde(default)]
    pub minimum_viable_version: String,
    /// Free-text rationale for keeping this habit.
    #[serde(default)]
    pub why: String,
    /// Phase this habit is associated with, if any.
    #[serde(default)]
    pub phase_id: Option<String>,
    /// Inactive habits are kept but not offered for completion.
    #[serde(default = "default_habit_active")]
    pub is_active: bool,
    /// Display ordering (ascending).
    #[serde(default)]
    pub sort_order: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

fn default_habit_active() -> bool {
    true
}

impl Habit {
    /// Creates a habit with the given name, category, and XP weight.
    pub fn new(
        name: impl Into<String>,
        category: HabitCategory,
        xp_weight: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            category,
            xp_weight: xp_weight.max(1),
            minimum_viable_version: String::new(),
            why: String::new(),
            phase_id: None,
            is_active: true,
            sort_order: 0,
            created_at,
        }
    }

    /// Sets the minimum-viable variant name.
    pub fn with_minimum_viable(mut self, version: impl Into<String>) -> Self {
        self.minimum_viable_version = version.into();
        self
    }

    /// Sets the rationale text.
    pub fn with_why(mut self, why: impl Into<String>) -> Self {
        self.why = why.into();
        self
    }

    /// Sets the display sort order.
    pub fn with_sort_order(mut self, order: u32) -> Self {
        self.sort_order = order;
        self
    }
}

/// Partial habit update. `None` fields are left untouched; `phase_id` carries
/// a nested `Option` so an update can both set and clear the association.
#[derive(Debug, Clone, Default)]
pub struct HabitUpdate {
    pub name: Option<String>,
    pub category: Option<HabitCategory>,
    pub xp_weight: Option<u32>,
    pub minimum_viable_version: Option<String>,
    pub why: Option<String>,
    pub phase_id: Option<Option<String>>,
    pub is_active: Option<bool>,
    pub sort_order: Option<u32>,
}

impl HabitUpdate {
    /// Applies the set fields onto `habit`.
    pub fn apply(self, habit: &mut Habit) {
        if let Some(name) = self.name {
            habit.name = name;
        }
        if let Some(category) = self.category {
            habit.category = category;
        }
        if let Some(weight) = self.xp_weight {
            habit.xp_weight = weight.max(1);
        }
        if let Some(version) = self.minimum_viable_version {
            habit.minimum_viable_version = version;
        }
        if let Some(why) = self.why {
            habit.why = why;
        }
        if let Some(phase_id) = self.phase_id {
            habit.phase_id = phase_id;
        }
        if let Some(active) = self.is_active {
            habit.is_active = active;
        }
        if let Some(order) = self.sort_order {
            habit.sort_order = order;
        }
    }
}

/// One habit done on one calendar day. At most one exists per (habit, date);
/// the minimum-viable flag is snapshotted at creation and never re-evaluated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitCompletion {
    pub id: String,
    pub habit_id: String,
    pub date: NaiveDate,
    /// Whether the day was minimum-viable when this completion was toggled on.
    pub is_minimum_viable: bool,
    pub created_at: DateTime<Utc>,
}

// -----------------------------------------------------------------------------
// 4D scan
// -----------------------------------------------------------------------------

/// When during the day a scan was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Evening,
}

/// Per-day self-assessment across four dimensions, each on a 1–10 scale.
/// The somatic reading gates the minimum-viable-day determination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FourDScan {
    pub id: String,
    pub date: NaiveDate,
    pub time_of_day: TimeOfDay,
    /// Body: energy, sleep quality, physical readiness.
    pub somatic: u8,
    /// Order: environment, schedule, system integrity.
    pub structural: u8,
    /// Mind: clarity, focus, learning appetite.
    pub noetic: u8,
    /// Agency: decision quality, boundary strength.
    pub sovereign: u8,
    pub created_at: DateTime<Utc>,
}

impl FourDScan {
    /// New scan with all dimensions clamped into range.
    pub fn new(
        date: NaiveDate,
        time_of_day: TimeOfDay,
        somatic: u8,
        structural: u8,
        noetic: u8,
        sovereign: u8,
        created_at: DateTime<Utc>,
    ) -> Self {
        let mut scan = Self {
            id: new_record_id(),
            date,
            time_of_day,
            somatic,
            structural,
            noetic,
            sovereign,
            created_at,
        };
        scan.clamp();
        scan
    }

    /// Clamps all four dimensions to [1, 10].
    pub fn clamp(&mut self) {
        self.somatic = self.somatic.clamp(1, 10);
        self.structural = self.structural.clamp(1, 10);
        self.noetic = self.noetic.clamp(1, 10);
        self.sovereign = self.sovereign.clamp(1, 10);
    }
}

// -----------------------------------------------------------------------------
// Execution blocks
// -----------------------------------------------------------------------------

/// Focus-session category for an execution block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockCategory {
    Creative,
    Structural,
    Physical,
    Learning,
}

impl BlockCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockCategory::Creative => "creative",
            BlockCategory::Structural => "structural",
            BlockCategory::Physical => "physical",
            BlockCategory::Learning => "learning",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "creative" => Some(BlockCategory::Creative),
            "structural" => Some(BlockCategory::Structural),
            "physical" => Some(BlockCategory::Physical),
            "learning" => Some(BlockCategory::Learning),
            _ => None,
        }
    }
}

/// A running execution block. At most one exists system-wide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveBlock {
    pub id: String,
    pub category: BlockCategory,
    pub started_at: DateTime<Utc>,
}

/// A finished execution block: start/stop timed, duration in whole minutes,
/// flat XP reward granted at completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionBlock {
    pub id: String,
    pub category: BlockCategory,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    /// Elapsed time rounded to whole minutes.
    pub duration_minutes: i64,
    /// Free-text note attached when the block was stopped.
    #[serde(default)]
    pub note: String,
    pub xp_earned: u32,
    pub created_at: DateTime<Utc>,
}

// -----------------------------------------------------------------------------
// Shadow log & pattern library
// -----------------------------------------------------------------------------

/// A logged instance of an undesirable behavioral pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShadowEntry {
    pub id: String,
    /// Name of the pattern this entry is an instance of.
    pub pattern_name: String,
    /// What set the pattern off.
    pub trigger: String,
    /// Severity 1–10.
    pub intensity: u8,
    /// Countermove applied, when one was.
    #[serde(default)]
    pub intervention: Option<String>,
    /// Whether the pattern was interrupted rather than run to completion.
    #[serde(default)]
    pub resolved: bool,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Input for a new shadow log entry. The store assigns id, date, and
/// timestamp.
#[derive(Debug, Clone)]
pub struct ShadowReport {
    pub pattern_name: String,
    pub trigger: String,
    /// Severity 1–10 (clamped on record).
    pub intensity: u8,
    pub intervention: Option<String>,
    pub resolved: bool,
}

/// Frequency trend of a behavioral pattern over the trailing month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Stable,
    Decreasing,
}

/// Catalogued behavioral pattern: what triggers it, what it pays off, what it
/// costs, and the rehearsed countermove.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pattern {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub typical_trigger: String,
    #[serde(default)]
    pub typical_payoff: String,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub countermove: String,
    /// Logged occurrences in the last 30 days.
    #[serde(default)]
    pub frequency_last_30: u32,
    #[serde(default = "default_trend")]
    pub trend: Trend,
    pub created_at: DateTime<Utc>,
}

fn default_trend() -> Trend {
    Trend::Stable
}

// -----------------------------------------------------------------------------
// Artifacts
// -----------------------------------------------------------------------------

/// Domain a shipped artifact belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactDomain {
    Music,
    Code,
    Writing,
    System,
    Physical,
    Other,
}

/// A shipped, finished piece of work. Creation grants a flat XP reward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub domain: ArtifactDomain,
    pub xp_earned: u32,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Input for a new artifact. The store assigns id, date, timestamp, and the
/// XP reward.
#[derive(Debug, Clone)]
pub struct ArtifactDraft {
    pub name: String,
    pub description: String,
    pub domain: ArtifactDomain,
}

// -----------------------------------------------------------------------------
// Journal, decisions, mission
// -----------------------------------------------------------------------------

/// Dated free-text journal record. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub content: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A recorded decision with its reasoning. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub id: String,
    pub title: String,
    pub reasoning: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// The single mission statement for a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMission {
    pub id: String,
    pub date: NaiveDate,
    pub statement: String,
    #[serde(default)]
    pub is_ai_generated: bool,
    pub created_at: DateTime<Utc>,
}

// -----------------------------------------------------------------------------
// Energy, nutrition, body
// -----------------------------------------------------------------------------

/// Period of day an energy reading belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyPeriod {
    Morning,
    Afternoon,
    Evening,
}

/// Per-day energy readings (1–10), one optional slot per period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyEntry {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub morning: Option<u8>,
    #[serde(default)]
    pub afternoon: Option<u8>,
    #[serde(default)]
    pub evening: Option<u8>,
    pub created_at: DateTime<Utc>,
}

impl EnergyEntry {
    /// Empty entry for the given date.
    pub fn empty(date: NaiveDate, created_at: DateTime<Utc>) -> Self {
        Self {
            id: new_record_id(),
            date,
            morning: None,
            afternoon: None,
            evening: None,
            created_at,
        }
    }

    /// Writes the reading for one period, clamped to [1, 10].
    pub fn set(&mut self, period: EnergyPeriod, level: u8) {
        let level = Some(level.clamp(1, 10));
        match period {
            EnergyPeriod::Morning => self.morning = level,
            EnergyPeriod::Afternoon => self.afternoon = level,
            EnergyPeriod::Evening => self.evening = level,
        }
    }
}

/// Nutrition protocol flag for today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutritionFlag {
    StructuredMeals,
    BloodTypeProtocol,
}

/// Today's nutrition protocol adherence.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NutritionDay {
    #[serde(default)]
    pub structured_meals: bool,
    #[serde(default)]
    pub blood_type_protocol: bool,
}

impl NutritionDay {
    /// Writes one flag.
    pub fn set(&mut self, flag: NutritionFlag, value: bool) {
        match flag {
            NutritionFlag::StructuredMeals => self.structured_meals = value,
            NutritionFlag::BloodTypeProtocol => self.blood_type_protocol = value,
        }
    }
}

/// Current body metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyMetrics {
    /// Weight in kilograms.
    #[serde(default)]
    pub weight_kg: f64,
    #[serde(default)]
    pub notes: String,
}

impl Default for BodyMetrics {
    fn default() -> Self {
        Self {
            weight_kg: 0.0,
            notes: String::new(),
        }
    }
}

// -----------------------------------------------------------------------------
// Phases
// -----------------------------------------------------------------------------

/// A bounded campaign of work (e.g. "Foundation Reset"). At most one phase is
/// active at a time; activating one deactivates the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Input for a new phase. The store assigns id and timestamp; new phases
/// start inactive.
#[derive(Debug, Clone)]
pub struct PhaseDraft {
    pub name: String,
    pub description: String,
    pub goal: String,
    pub start_date: Option<NaiveDate>,
}
