//! Wall-clock source for handlers.

use chrono::{DateTime, FixedOffset, Local};

/// Source of the current time.
///
/// Handlers read time only through this trait so responses can be pinned
/// to a known instant.
pub trait Clock: Send + Sync {
    /// Returns the current time with its local UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Reads the host's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
