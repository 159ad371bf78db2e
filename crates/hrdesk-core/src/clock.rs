//! Time source and record id generation.

use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of "now", injected so submissions are reproducible in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Formats a timestamp the way `createdAt` is stored.
pub fn to_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Issues employee ids from millisecond timestamps.
///
/// Two submissions within the same millisecond (or a clock that steps back)
/// still get distinct, increasing ids.
#[derive(Debug, Default)]
pub struct RecordIdGenerator {
    last: AtomicI64,
}

impl RecordIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id for a record created at `at`.
    pub fn next_id(&self, at: DateTime<Utc>) -> String {
        let candidate = at.timestamp_millis();
        let mut previous = self.last.load(Ordering::SeqCst);
        loop {
            let next = candidate.max(previous + 1);
            match self
                .last
                .compare_exchange(previous, next, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return next.to_string(),
                Err(actual) => previous = actual,
            }
        }
    }
}
