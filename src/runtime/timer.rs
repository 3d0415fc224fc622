//! Periodic and one-shot timers evaluated against [`Clock`](super::Clock) readings.
//!
//! Timers never read a clock themselves. The owner passes the current
//! reading in, which keeps every timer decision reproducible.

use std::time::Duration;

/// Upper bound on how many missed periods a single poll will replay.
///
/// Beyond this (e.g. after the process was suspended) the schedule is
/// re-anchored at the current time instead.
const MAX_CATCH_UP: u32 = 32;

/// Fires once per elapsed period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    next_due: Duration,
}

impl Interval {
    /// Start an interval whose first firing is one period after `now`.
    ///
    /// A zero period is bumped to one millisecond.
    pub fn new(period: Duration, now: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_due(&self) -> Duration {
        self.next_due
    }

    /// Count the periods that have elapsed up to `now` and advance past them.
    pub fn poll(&mut self, now: Duration) -> u32 {
        let mut fired = 0;
        while now >= self.next_due {
            fired += 1;
            self.next_due += self.period;
            if fired == MAX_CATCH_UP {
                self.next_due = now + self.period;
                break;
            }
        }
        fired
    }
}

/// A single point in time after which something expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Duration,
}

impl Deadline {
    pub fn after(delay: Duration, now: Duration) -> Self {
        Self { at: now + delay }
    }

    pub fn at(&self) -> Duration {
        self.at
    }

    pub fn has_passed(&self, now: Duration) -> bool {
        now >= self.at
    }

    pub fn remaining(&self, now: Duration) -> Duration {
        self.at.saturating_sub(now)
    }
}
