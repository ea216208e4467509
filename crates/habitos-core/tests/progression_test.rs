//! Integration test: XP awards and rank progression: verifies that rank is
//! derived from cumulative XP on every award and that the one-shot rank-up
//! notification arms exactly when a tier threshold is crossed.
//!
//! ## Scenarios
//! 1. Boundary-inclusive rank lookup across the whole threshold table.
//! 2. Awarding 100 XP from zero promotes Novice -> Operator and arms the
//!    notification.
//! 3. Awarding 400 more (total 500) promotes Operator -> Architect.
//! 4. Awards inside a tier never arm a notification.
//! 5. Dismissing is idempotent.
//! 6. Zero awards are a no-op.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use habitos_core::{
    ConsoleMode, ConsoleResponder, ManualClock, ProgressStore, Rank, RankUp, RANK_THRESHOLDS,
};

struct StubResponder;

impl ConsoleResponder for StubResponder {
    fn respond(&self, mode: ConsoleMode, _user_text: &str) -> String {
        format!("[{}] ack", mode.as_str())
    }
}

fn test_store() -> ProgressStore {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap(),
    ));
    ProgressStore::with_clock(Box::new(StubResponder), clock)
}

// ===========================================================================
// Test 1: Boundary-inclusive rank lookup
// ===========================================================================

#[test]
fn rank_lookup_is_boundary_inclusive_over_the_table() {
    for (rank, threshold) in RANK_THRESHOLDS {
        assert_eq!(
            Rank::for_xp(threshold),
            rank,
            "XP exactly at {} must land on {}",
            threshold,
            rank.as_str()
        );
        if let Some(next) = rank.next() {
            assert_eq!(
                Rank::for_xp(next.threshold() - 1),
                rank,
                "one below the {} threshold must stay {}",
                next.as_str(),
                rank.as_str()
            );
        }
    }
    assert_eq!(Rank::for_xp(0), Rank::Novice);
}

// ===========================================================================
// Test 2: Novice -> Operator at 100 XP
// ===========================================================================

#[test]
fn first_threshold_crossing_arms_notification() {
    let mut store = test_store();
    assert_eq!(store.profile().total_xp, 0);
    assert_eq!(store.profile().rank, Rank::Novice);
    assert_eq!(store.pending_rank_up(), None);

    store.award_xp(100);

    assert_eq!(store.profile().total_xp, 100);
    assert_eq!(store.profile().rank, Rank::Operator);
    assert_eq!(
        store.pending_rank_up(),
        Some(RankUp {
            from: Rank::Novice,
            to: Rank::Operator,
        })
    );
}

// ===========================================================================
// Test 3: Operator -> Architect at 500 XP total
// ===========================================================================

#[test]
fn second_crossing_replaces_the_pending_notification() {
    let mut store = test_store();
    store.award_xp(100);
    store.award_xp(400);

    assert_eq!(store.profile().total_xp, 500);
    assert_eq!(store.profile().rank, Rank::Architect);
    assert_eq!(
        store.pending_rank_up(),
        Some(RankUp {
            from: Rank::Operator,
            to: Rank::Architect,
        })
    );
}

// ===========================================================================
// Test 4: Awards inside a tier never arm a notification
// ===========================================================================

#[test]
fn awards_inside_a_tier_do_not_notify() {
    let mut store = test_store();
    store.award_xp(50);
    assert_eq!(store.profile().rank, Rank::Novice);
    assert_eq!(store.pending_rank_up(), None);

    store.award_xp(49);
    assert_eq!(store.profile().total_xp, 99);
    assert_eq!(store.pending_rank_up(), None);

    // One more point lands exactly on the threshold.
    store.award_xp(1);
    assert_eq!(store.profile().rank, Rank::Operator);
    assert!(store.pending_rank_up().is_some());
}

// ===========================================================================
// Test 5: Dismiss is idempotent
// ===========================================================================

#[test]
fn dismiss_clears_and_is_idempotent() {
    let mut store = test_store();
    store.award_xp(100);
    assert!(store.pending_rank_up().is_some());

    store.dismiss_rank_up();
    assert_eq!(store.pending_rank_up(), None);

    // Dismissing with nothing pending is a no-op, not an error.
    store.dismiss_rank_up();
    assert_eq!(store.pending_rank_up(), None);

    // The rank itself is untouched by the dismiss.
    assert_eq!(store.profile().rank, Rank::Operator);
}

// ===========================================================================
// Test 6: Zero award is a no-op
// ===========================================================================

#[test]
fn zero_award_changes_nothing() {
    let mut store = test_store();
    store.award_xp(0);
    assert_eq!(store.profile().total_xp, 0);
    assert_eq!(store.profile().rank, Rank::Novice);
    assert_eq!(store.pending_rank_up(), None);
}

// ===========================================================================
// Test 7: Rank always matches the derived value
// ===========================================================================

#[test]
fn stored_rank_tracks_the_derivation() {
    let mut store = test_store();
    for amount in [10, 95, 300, 600, 1_500, 2_600] {
        store.award_xp(amount);
        assert_eq!(store.profile().rank, Rank::for_xp(store.profile().total_xp));
    }
    assert_eq!(store.profile().total_xp, 5_105);
    assert_eq!(store.profile().rank, Rank::Archon);
}
