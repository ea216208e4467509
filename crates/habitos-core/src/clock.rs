//! Clock abstraction for time-derived reads.
//!
//! The store derives "today", sobriety day counts, and block durations from
//! the current time on every read. Routing those reads through a
//! [`ClockSource`] keeps them controllable in tests.

use std::sync::Mutex;

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Source of the current wall-clock time.
pub trait ClockSource: Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date of the current instant (UTC, day granularity).
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// System clock. The default source.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Settable clock for tests.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// New clock frozen at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock to `now`.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().expect("clock lock") = now;
    }

    /// Advances the clock by `delta`.
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().expect("clock lock");
        *now += delta;
    }
}

impl ClockSource for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock")
    }
}
