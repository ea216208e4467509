//! The Progress Aggregator: authoritative in-memory state for a single user.
//!
//! One owning [`ProgressStore`] instance holds the profile, habit definitions,
//! per-day completions, execution blocks, wellness tracking, shadow and
//! journal logs, phases, and the console conversation log. All mutations are
//! synchronous; derived values (today's XP, minimum-viable day, sobriety day
//! count) are recomputed on every read and never cached.
//!
//! Collaborators are injected at construction: a [`ClockSource`] for every
//! time-derived read and a [`ConsoleResponder`] for console replies. There is
//! no ambient singleton.

mod console;
mod execution;
mod habits;
mod journal;
mod phases;
mod wellness;

use std::sync::Arc;

use chrono::{Days, NaiveDate};

use crate::clock::{ClockSource, SystemClock};
use crate::config::CoreConfig;
use crate::console::{
    ConsoleMode, ConsoleResponder, Conversation, ConversationMessage, PinnedInsight, Provider,
};
use crate::defaults::{starter_habits, starter_patterns};
use crate::progression::{Rank, RankUp};
use crate::settings::Settings;
use crate::shared::{
    ActiveBlock, Artifact, BodyMetrics, DailyMission, Decision, EnergyEntry, ExecutionBlock,
    FourDScan, Habit, HabitCompletion, JournalEntry, NutritionDay, Pattern, Phase, ShadowEntry,
    UserProfile,
};

/// Flat XP reward granted when an execution block completes.
pub const BLOCK_XP_REWARD: u32 = 10;

/// Flat XP reward granted when an artifact is shipped.
pub const ARTIFACT_XP_REWARD: u32 = 50;

/// Flat XP reward granted when a shadow entry is logged already resolved.
pub const SHADOW_RESOLVED_XP_REWARD: u32 = 100;

/// In-memory state store for a single user's daily execution.
pub struct ProgressStore {
    clock: Arc<dyn ClockSource>,
    responder: Box<dyn ConsoleResponder>,

    profile: UserProfile,
    pub(crate) habits: Vec<Habit>,
    pub(crate) completions: Vec<HabitCompletion>,
    pub(crate) today_scan: Option<FourDScan>,
    pub(crate) today_mission: Option<DailyMission>,

    pub(crate) shadow_entries: Vec<ShadowEntry>,
    pub(crate) patterns: Vec<Pattern>,
    pub(crate) artifacts: Vec<Artifact>,
    pub(crate) journal_entries: Vec<JournalEntry>,
    pub(crate) decisions: Vec<Decision>,

    pub(crate) blocks: Vec<ExecutionBlock>,
    pub(crate) active_block: Option<ActiveBlock>,

    pub(crate) energy_entries: Vec<EnergyEntry>,
    pub(crate) today_nutrition: NutritionDay,
    pub(crate) body: BodyMetrics,
    pub(crate) sobriety_start: NaiveDate,

    pub(crate) phases: Vec<Phase>,

    pub(crate) conversations: Vec<Conversation>,
    pub(crate) messages: Vec<ConversationMessage>,
    pub(crate) pinned_insights: Vec<PinnedInsight>,
    pub(crate) active_conversation_id: Option<String>,
    pub(crate) provider: Provider,
    pub(crate) console_mode: ConsoleMode,

    settings: Settings,
    pending_rank_up: Option<RankUp>,
}

impl ProgressStore {
    /// Empty store on the system clock.
    pub fn new(responder: Box<dyn ConsoleResponder>) -> Self {
        Self::with_clock(responder, Arc::new(SystemClock))
    }

    /// Empty store on the given clock.
    pub fn with_clock(responder: Box<dyn ConsoleResponder>, clock: Arc<dyn ClockSource>) -> Self {
        let now = clock.now();
        let today = clock.today();
        Self {
            clock,
            responder,
            profile: UserProfile::new("Operator", now),
            habits: Vec::new(),
            completions: Vec::new(),
            today_scan: None,
            today_mission: None,
            shadow_entries: Vec::new(),
            patterns: Vec::new(),
            artifacts: Vec::new(),
            journal_entries: Vec::new(),
            decisions: Vec::new(),
            blocks: Vec::new(),
            active_block: None,
            energy_entries: Vec::new(),
            today_nutrition: NutritionDay::default(),
            body: BodyMetrics::default(),
            sobriety_start: today,
            phases: Vec::new(),
            conversations: Vec::new(),
            messages: Vec::new(),
            pinned_insights: Vec::new(),
            active_conversation_id: None,
            provider: Provider::default(),
            console_mode: ConsoleMode::default(),
            settings: Settings::default(),
            pending_rank_up: None,
        }
    }

    /// Store seeded from startup configuration.
    pub fn from_config(config: &CoreConfig, responder: Box<dyn ConsoleResponder>) -> Self {
        let mut store = Self::new(responder);
        store.profile.display_name = config.display_name.clone();
        store.provider = config.default_provider();
        store.console_mode = config.default_mode();
        store.settings.model_preference = config.default_provider();
        if config.seed_demo_data {
            store.seed_demo_data();
        }
        store
    }

    /// Loads the starter habit set and pattern library, and a demo profile
    /// consistent with them.
    pub fn seed_demo_data(&mut self) {
        let now = self.clock.now();
        let today = self.clock.today();

        self.habits = starter_habits(now);
        self.patterns = starter_patterns(now);
        self.sobriety_start = today.checked_sub_days(Days::new(23)).unwrap_or(today);

        self.profile.total_xp = 580;
        self.profile.rank = Rank::for_xp(self.profile.total_xp);
        self.profile.current_streak = 7;
        self.profile.longest_streak = 12;

        let phase = Phase {
            id: crate::shared::new_record_id(),
            name: "Foundation Reset".to_string(),
            description: "Rebuild core habits and tracking systems".to_string(),
            goal: "Consistent 80%+ habit completion for 30 days".to_string(),
            is_active: true,
            start_date: today.checked_sub_days(Days::new(14)),
            end_date: None,
            created_at: now,
        };
        self.profile.active_phase_id = Some(phase.id.clone());
        self.phases = vec![phase];

        tracing::info!(target: "habitos::store", habits = self.habits.len(), "demo data seeded");
    }

    // -----------------------------------------------------------------------
    // Time
    // -----------------------------------------------------------------------

    /// Calendar date of the current instant.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub(crate) fn clock(&self) -> &dyn ClockSource {
        self.clock.as_ref()
    }

    pub(crate) fn respond(&self, mode: ConsoleMode, user_text: &str) -> String {
        self.responder.respond(mode, user_text)
    }

    // -----------------------------------------------------------------------
    // XP & rank
    // -----------------------------------------------------------------------

    /// Adds `amount` XP and recomputes the rank. Crossing a tier threshold
    /// arms the one-shot rank-up notification with the new rank; an award
    /// that crosses while one is already pending replaces it. Zero is a
    /// no-op; negative amounts are unrepresentable.
    pub fn award_xp(&mut self, amount: u32) {
        if amount == 0 {
            return;
        }
        let old_rank = self.profile.rank;
        self.profile.total_xp = self.profile.total_xp.saturating_add(amount);
        let new_rank = Rank::for_xp(self.profile.total_xp);
        self.profile.rank = new_rank;
        if new_rank != old_rank {
            self.pending_rank_up = Some(RankUp {
                from: old_rank,
                to: new_rank,
            });
            tracing::info!(
                target: "habitos::progression",
                total_xp = self.profile.total_xp,
                rank = new_rank.as_str(),
                "rank up"
            );
        } else {
            tracing::debug!(
                target: "habitos::progression",
                total_xp = self.profile.total_xp,
                amount,
                "xp awarded"
            );
        }
    }

    /// The pending rank-up notification, if an award crossed a threshold and
    /// no dismiss has happened since.
    pub fn pending_rank_up(&self) -> Option<RankUp> {
        self.pending_rank_up
    }

    /// Clears the pending rank-up notification. Dismissing when none is
    /// pending is a no-op.
    pub fn dismiss_rank_up(&mut self) {
        self.pending_rank_up = None;
    }

    // -----------------------------------------------------------------------
    // Read accessors
    // -----------------------------------------------------------------------

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Habit by id, when it still resolves.
    pub fn habit(&self, habit_id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == habit_id)
    }

    pub fn completions(&self) -> &[HabitCompletion] {
        &self.completions
    }

    /// Completions recorded for one calendar day.
    pub fn completions_on(&self, date: NaiveDate) -> impl Iterator<Item = &HabitCompletion> {
        self.completions.iter().filter(move |c| c.date == date)
    }

    pub fn today_scan(&self) -> Option<&FourDScan> {
        self.today_scan.as_ref()
    }

    pub fn today_mission(&self) -> Option<&DailyMission> {
        self.today_mission.as_ref()
    }

    pub fn shadow_entries(&self) -> &[ShadowEntry] {
        &self.shadow_entries
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn journal_entries(&self) -> &[JournalEntry] {
        &self.journal_entries
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    /// Finished blocks, newest first.
    pub fn block_history(&self) -> &[ExecutionBlock] {
        &self.blocks
    }

    pub fn active_block(&self) -> Option<&ActiveBlock> {
        self.active_block.as_ref()
    }

    pub fn energy_entries(&self) -> &[EnergyEntry] {
        &self.energy_entries
    }

    pub fn today_nutrition(&self) -> NutritionDay {
        self.today_nutrition
    }

    pub fn body_metrics(&self) -> &BodyMetrics {
        &self.body
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// The single active phase, when one is.
    pub fn active_phase(&self) -> Option<&Phase> {
        self.phases.iter().find(|p| p.is_active)
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    /// Messages belonging to one conversation, oldest first.
    pub fn messages_in(&self, conversation_id: &str) -> impl Iterator<Item = &ConversationMessage> {
        let id = conversation_id.to_string();
        self.messages.iter().filter(move |m| m.conversation_id == id)
    }

    pub fn pinned_insights(&self) -> &[PinnedInsight] {
        &self.pinned_insights
    }

    pub fn active_conversation_id(&self) -> Option<&str> {
        self.active_conversation_id.as_deref()
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn console_mode(&self) -> ConsoleMode {
        self.console_mode
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable settings access; writes go through the per-leaf setters on
    /// [`Settings`].
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }
}
