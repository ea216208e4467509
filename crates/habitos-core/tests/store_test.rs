//! Integration test: the wider store surface: sobriety counter, shadow and
//! artifact rewards, journal records, energy upserts, phase exclusivity, the
//! console flow, and demo seeding.
//!
//! ## Scenarios
//! 1. Sobriety days read 0 on the reset day and 1 a calendar day later.
//! 2. A resolved shadow entry grants 100 XP; an unresolved one grants none.
//! 3. Shipping an artifact grants 50 XP.
//! 4. Journal entries, decisions, and the daily mission are dated today.
//! 5. Energy readings upsert today's entry and clamp into range.
//! 6. At most one phase is active; re-toggling leaves none.
//! 7. The console creates conversations on demand and pins insights.
//! 8. Demo seeding produces a consistent profile.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use habitos_core::{
    ArtifactDomain, ArtifactDraft, ConsoleMode, ConsoleResponder, EnergyPeriod, ManualClock,
    MessageRole, NutritionFlag, PhaseDraft, ProgressStore, Provider, Rank, ShadowReport,
    ARTIFACT_XP_REWARD, SHADOW_RESOLVED_XP_REWARD,
};

struct StubResponder;

impl ConsoleResponder for StubResponder {
    fn respond(&self, mode: ConsoleMode, _user_text: &str) -> String {
        format!("[{}] ack", mode.as_str())
    }
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap()
}

fn test_store() -> (ProgressStore, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(t0()));
    let store = ProgressStore::with_clock(Box::new(StubResponder), clock.clone());
    (store, clock)
}

fn shadow_report(resolved: bool) -> ShadowReport {
    ShadowReport {
        pattern_name: "Grazing".to_string(),
        trigger: "Bored while waiting for build".to_string(),
        intensity: 6,
        intervention: resolved.then(|| "Drank water, went for walk".to_string()),
        resolved,
    }
}

// ===========================================================================
// Test 1: Sobriety counter
// ===========================================================================

#[test]
fn sobriety_days_recompute_from_the_reset_date() {
    let (mut store, clock) = test_store();
    assert_eq!(store.sobriety_days(), 0);

    let xp_before = store.profile().total_xp;
    store.reset_sobriety("slipped after a rough evening");
    assert_eq!(store.sobriety_days(), 0, "day of reset reads 0");
    assert_eq!(store.profile().total_xp, xp_before, "reset never touches XP");

    clock.advance(Duration::days(1));
    assert_eq!(store.sobriety_days(), 1, "one calendar day later reads 1");

    clock.advance(Duration::days(6));
    assert_eq!(store.sobriety_days(), 7);
}

// ===========================================================================
// Test 2: Shadow entry rewards
// ===========================================================================

#[test]
fn resolved_shadow_entry_grants_the_resolution_reward() {
    let (mut store, _clock) = test_store();

    store.add_shadow_entry(shadow_report(false));
    assert_eq!(store.profile().total_xp, 0);
    assert_eq!(store.shadow_entries().len(), 1);

    store.add_shadow_entry(shadow_report(true));
    assert_eq!(store.profile().total_xp, SHADOW_RESOLVED_XP_REWARD);
    // Newest first.
    assert!(store.shadow_entries()[0].resolved);
    assert!(!store.shadow_entries()[1].resolved);
}

#[test]
fn shadow_intensity_clamps_into_range() {
    let (mut store, _clock) = test_store();
    let mut report = shadow_report(false);
    report.intensity = 14;
    store.add_shadow_entry(report);
    assert_eq!(store.shadow_entries()[0].intensity, 10);
}

// ===========================================================================
// Test 3: Artifact reward
// ===========================================================================

#[test]
fn shipping_an_artifact_grants_the_flat_reward() {
    let (mut store, _clock) = test_store();
    store.add_artifact(ArtifactDraft {
        name: "Lo-fi Beat Pack Vol.3".to_string(),
        description: "8 beats, mastered and uploaded".to_string(),
        domain: ArtifactDomain::Music,
    });

    assert_eq!(store.artifacts().len(), 1);
    assert_eq!(store.artifacts()[0].xp_earned, ARTIFACT_XP_REWARD);
    assert_eq!(store.profile().total_xp, ARTIFACT_XP_REWARD);
    assert_eq!(store.artifacts()[0].date, store.today());
}

// ===========================================================================
// Test 4: Journal, decisions, mission
// ===========================================================================

#[test]
fn dated_records_use_today() {
    let (mut store, _clock) = test_store();
    let today = store.today();

    store.add_journal_entry("Grazing kicks in hardest around 3pm.");
    store.add_decision(
        "Reduced habit count from 12 to 8",
        "Completion rate was 45% with 12 habits.",
    );
    store.set_today_mission("Ship the beat pack");

    assert_eq!(store.journal_entries()[0].date, today);
    assert_eq!(store.decisions()[0].date, today);
    let mission = store.today_mission().unwrap();
    assert_eq!(mission.date, today);
    assert_eq!(mission.statement, "Ship the beat pack");
    assert!(!mission.is_ai_generated);

    // A later mission replaces the earlier one.
    store.set_today_mission("Close the loop tonight");
    assert_eq!(store.today_mission().unwrap().statement, "Close the loop tonight");
}

// ===========================================================================
// Test 5: Energy upsert + body metrics
// ===========================================================================

#[test]
fn energy_readings_upsert_todays_entry() {
    let (mut store, _clock) = test_store();

    store.set_energy(EnergyPeriod::Morning, 7);
    store.set_energy(EnergyPeriod::Afternoon, 11);

    assert_eq!(store.energy_entries().len(), 1, "same day shares one entry");
    let entry = &store.energy_entries()[0];
    assert_eq!(entry.date, store.today());
    assert_eq!(entry.morning, Some(7));
    assert_eq!(entry.afternoon, Some(10), "readings clamp to 1-10");
    assert_eq!(entry.evening, None);
}

#[test]
fn energy_entries_split_across_days() {
    let (mut store, clock) = test_store();
    store.set_energy(EnergyPeriod::Evening, 4);
    clock.advance(Duration::days(1));
    store.set_energy(EnergyPeriod::Morning, 6);

    assert_eq!(store.energy_entries().len(), 2);
    // Newest entry sits first.
    assert_eq!(store.energy_entries()[0].morning, Some(6));
    assert_eq!(store.energy_entries()[1].evening, Some(4));
}

#[test]
fn nutrition_and_body_metrics_are_recorded() {
    let (mut store, _clock) = test_store();

    store.set_nutrition(NutritionFlag::StructuredMeals, true);
    store.set_body_weight(71.2);
    store.set_body_notes("post-travel recovery week");

    assert!(store.today_nutrition().structured_meals);
    assert!(!store.today_nutrition().blood_type_protocol);
    assert_eq!(store.body_metrics().weight_kg, 71.2);
    assert_eq!(store.body_metrics().notes, "post-travel recovery week");
}

// ===========================================================================
// Test 6: Phase exclusivity
// ===========================================================================

#[test]
fn at_most_one_phase_is_active() {
    let (mut store, _clock) = test_store();
    let a = store.add_phase(PhaseDraft {
        name: "Foundation Reset".to_string(),
        description: "Rebuild core habits".to_string(),
        goal: "80%+ completion for 30 days".to_string(),
        start_date: Some(store.today()),
    });
    let b = store.add_phase(PhaseDraft {
        name: "Creative Sprint".to_string(),
        description: "Ship 3 music projects".to_string(),
        goal: "3 released tracks".to_string(),
        start_date: None,
    });

    store.toggle_phase(&a);
    assert_eq!(store.active_phase().map(|p| p.id.clone()), Some(a.clone()));

    store.toggle_phase(&b);
    assert_eq!(store.active_phase().map(|p| p.id.clone()), Some(b.clone()));
    assert_eq!(
        store.phases().iter().filter(|p| p.is_active).count(),
        1,
        "activation deactivates every other phase"
    );

    // Toggling the active phase itself leaves none active.
    store.toggle_phase(&b);
    assert!(store.active_phase().is_none());
}

// ===========================================================================
// Test 7: Console flow
// ===========================================================================

#[test]
fn console_creates_conversations_on_demand() {
    let (mut store, _clock) = test_store();
    store.set_console_mode(ConsoleMode::Architect);

    let reply = store.send_message("Analyze my current habit system.");
    assert_eq!(reply, "[architect] ack");

    assert_eq!(store.conversations().len(), 1);
    let conversation = &store.conversations()[0];
    assert_eq!(conversation.mode, ConsoleMode::Architect);
    assert_eq!(conversation.title, "Analyze my current habit system.");
    assert_eq!(conversation.tags, vec!["architect".to_string()]);
    assert_eq!(
        store.active_conversation_id(),
        Some(conversation.id.as_str())
    );

    let messages: Vec<_> = store.messages_in(&conversation.id).collect();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, MessageRole::User);
    assert_eq!(messages[1].role, MessageRole::Assistant);
    assert_eq!(messages[1].content, "[architect] ack");

    // A follow-up lands in the same conversation.
    store.send_message("Am I over-indexed on any category?");
    assert_eq!(store.conversations().len(), 1);
    assert_eq!(store.messages().len(), 4);
}

#[test]
fn long_first_messages_truncate_the_title() {
    let (mut store, _clock) = test_store();
    let content = "This opening message is considerably longer than the title budget allows";
    store.send_message(content);

    let title = &store.conversations()[0].title;
    assert!(title.ends_with("..."));
    assert_eq!(title.chars().count(), 43);
    assert!(content.starts_with(title.trim_end_matches("...")));
}

#[test]
fn start_new_conversation_detaches_the_log() {
    let (mut store, _clock) = test_store();
    store.send_message("first thread");
    store.start_new_conversation();
    assert_eq!(store.active_conversation_id(), None);

    store.send_message("second thread");
    assert_eq!(store.conversations().len(), 2);
}

#[test]
fn pin_insight_copies_content_and_marks_the_message() {
    let (mut store, _clock) = test_store();
    store.set_console_mode(ConsoleMode::Shadow);
    store.send_message("What's really going on?");

    let assistant_id = store
        .messages()
        .iter()
        .find(|m| m.role == MessageRole::Assistant)
        .map(|m| m.id.clone())
        .unwrap();

    store.pin_insight(&assistant_id, "Shadow Work");

    assert_eq!(store.pinned_insights().len(), 1);
    let insight = &store.pinned_insights()[0];
    assert_eq!(insight.topic, "Shadow Work");
    assert_eq!(insight.content, "[shadow] ack");
    assert!(
        store
            .messages()
            .iter()
            .find(|m| m.id == assistant_id)
            .unwrap()
            .is_pinned
    );

    // Unknown ids are a no-op.
    store.pin_insight("missing-message", "Anything");
    assert_eq!(store.pinned_insights().len(), 1);
}

#[test]
fn provider_setter_attributes_later_messages() {
    let (mut store, _clock) = test_store();
    store.set_provider(Provider::Gemini);
    store.send_message("council assessment please");
    assert_eq!(store.conversations()[0].provider, Provider::Gemini);
    assert!(store
        .messages()
        .iter()
        .all(|m| m.provider == Provider::Gemini));
}

// ===========================================================================
// Test 8: Demo seeding
// ===========================================================================

#[test]
fn demo_seed_is_internally_consistent() {
    let (mut store, _clock) = test_store();
    store.seed_demo_data();

    assert_eq!(store.habits().len(), 8);
    assert_eq!(store.patterns().len(), 6);
    assert_eq!(store.profile().total_xp, 580);
    assert_eq!(store.profile().rank, Rank::for_xp(580));
    assert_eq!(store.profile().rank, Rank::Architect);
    assert_eq!(store.sobriety_days(), 23);
    assert_eq!(store.today_xp(), 0, "no completions are seeded");

    let active = store.active_phase().unwrap();
    assert_eq!(active.name, "Foundation Reset");
    assert_eq!(
        store.profile().active_phase_id.as_deref(),
        Some(active.id.as_str())
    );
}

// ===========================================================================
// Test 9: Habit definitions are editable in place
// ===========================================================================

#[test]
fn habit_updates_apply_partially() {
    let (mut store, _clock) = test_store();
    store.seed_demo_data();
    let habit_id = store
        .habits()
        .iter()
        .find(|h| h.name == "Cold Exposure")
        .map(|h| h.id.clone())
        .unwrap();

    store.update_habit(
        &habit_id,
        habitos_core::HabitUpdate {
            xp_weight: Some(25),
            why: Some("Stress inoculation".to_string()),
            ..Default::default()
        },
    );

    let habit = store.habit(&habit_id).unwrap();
    assert_eq!(habit.xp_weight, 25);
    assert_eq!(habit.why, "Stress inoculation");
    assert_eq!(habit.name, "Cold Exposure", "untouched fields are kept");

    // Later completions pay the new weight.
    let today = store.today();
    let xp_before = store.profile().total_xp;
    store.toggle_habit_completion(&habit_id, today);
    assert_eq!(store.profile().total_xp, xp_before + 25);

    // Unknown ids are a no-op.
    store.update_habit(
        "missing-habit",
        habitos_core::HabitUpdate {
            name: Some("Ghost".to_string()),
            ..Default::default()
        },
    );
    assert!(store.habits().iter().all(|h| h.name != "Ghost"));
}

// ===========================================================================
// Test 10: Serialized records keep the expected wire shape
// ===========================================================================

#[test]
fn serialized_records_use_lowercase_tags() {
    let (mut store, _clock) = test_store();
    store.seed_demo_data();

    let habit = serde_json::to_value(&store.habits()[0]).unwrap();
    assert_eq!(habit["category"], "physical");
    assert_eq!(habit["name"], "Morning Activation Protocol");

    let profile = serde_json::to_value(store.profile()).unwrap();
    assert_eq!(profile["rank"], "Architect");
    assert_eq!(profile["total_xp"], 580);

    let pattern = serde_json::to_value(&store.patterns()[2]).unwrap();
    assert_eq!(pattern["trend"], "increasing");
}

// ===========================================================================
// Test 11: Settings setters reach the nested leaves
// ===========================================================================

#[test]
fn settings_setters_reach_nested_leaves() {
    let (mut store, _clock) = test_store();

    store.settings_mut().set_inject_energy(false);
    store.settings_mut().set_notify_streak_warning(false);
    store.settings_mut().set_model_preference(Provider::Gemini);

    let settings = store.settings();
    assert!(!settings.context_injection.energy);
    assert!(settings.context_injection.habits);
    assert!(!settings.notifications.streak_warning);
    assert!(settings.notifications.morning);
    assert_eq!(settings.model_preference, Provider::Gemini);
}
