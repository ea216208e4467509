//! Integration test: execution block lifecycle: verifies the single-active
//! invariant, duration rounding, the flat completion reward, and the history
//! ordering.
//!
//! ## Scenarios
//! 1. Start records category and start instant; a second start is rejected.
//! 2. Stop rounds the elapsed time to whole minutes and grants 10 XP.
//! 3. Stop with nothing running is rejected.
//! 4. Sub-minute blocks round to the nearest minute (half up).
//! 5. Finished blocks stack newest first.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use habitos_core::{
    BlockCategory, ConsoleMode, ConsoleResponder, ManualClock, ProgressError, ProgressStore,
    BLOCK_XP_REWARD,
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

// ===========================================================================
// Test 1: Start, and start-while-active is rejected
// ===========================================================================

#[test]
fn start_records_block_and_double_start_is_rejected() {
    let (mut store, _clock) = test_store();

    let block = store.start_block(BlockCategory::Creative).unwrap();
    assert_eq!(block.category, BlockCategory::Creative);
    assert_eq!(block.started_at, t0());

    assert!(store.active_block().is_some());
    assert_eq!(
        store.start_block(BlockCategory::Learning).err(),
        Some(ProgressError::BlockAlreadyActive)
    );
    // The running block is untouched by the rejected start.
    assert_eq!(
        store.active_block().unwrap().category,
        BlockCategory::Creative
    );
}

// ===========================================================================
// Test 2: Stop rounds to whole minutes and grants the flat reward
// ===========================================================================

#[test]
fn stop_computes_duration_and_awards_xp() {
    let (mut store, clock) = test_store();

    store.start_block(BlockCategory::Structural).unwrap();
    clock.advance(Duration::minutes(25));

    let finished = store.stop_block("Session notes").unwrap();
    assert_eq!(finished.duration_minutes, 25);
    assert_eq!(finished.note, "Session notes");
    assert_eq!(finished.xp_earned, BLOCK_XP_REWARD);
    assert_eq!(finished.ended_at - finished.started_at, Duration::minutes(25));

    assert!(store.active_block().is_none());
    assert_eq!(store.block_history().len(), 1);
    assert_eq!(store.profile().total_xp, BLOCK_XP_REWARD);
}

// ===========================================================================
// Test 3: Stop with nothing running is rejected
// ===========================================================================

#[test]
fn stop_without_active_block_is_rejected() {
    let (mut store, _clock) = test_store();
    assert_eq!(
        store.stop_block("nothing running").map(|b| b.id),
        Err(ProgressError::NoActiveBlock)
    );
    assert_eq!(store.profile().total_xp, 0);
}

// ===========================================================================
// Test 4: Duration rounds half up
// ===========================================================================

#[test]
fn duration_rounds_to_nearest_minute() {
    let (mut store, clock) = test_store();

    // 90 seconds rounds up to 2 minutes.
    store.start_block(BlockCategory::Learning).unwrap();
    clock.advance(Duration::seconds(90));
    assert_eq!(store.stop_block("").unwrap().duration_minutes, 2);

    // 29 seconds rounds down to 0 minutes.
    store.start_block(BlockCategory::Learning).unwrap();
    clock.advance(Duration::seconds(29));
    assert_eq!(store.stop_block("").unwrap().duration_minutes, 0);
}

// ===========================================================================
// Test 5: History stacks newest first
// ===========================================================================

#[test]
fn history_is_newest_first() {
    let (mut store, clock) = test_store();

    store.start_block(BlockCategory::Creative).unwrap();
    clock.advance(Duration::minutes(30));
    store.stop_block("first").unwrap();

    clock.advance(Duration::minutes(5));
    store.start_block(BlockCategory::Physical).unwrap();
    clock.advance(Duration::minutes(45));
    store.stop_block("second").unwrap();

    let history = store.block_history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].note, "second");
    assert_eq!(history[1].note, "first");
    assert_eq!(store.profile().total_xp, 2 * BLOCK_XP_REWARD);
}
