//! Monotonic clocks.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A monotonic time source.
///
/// Readings are offsets from the clock's own origin, so two clocks are never
/// compared with each other.
pub trait Clock: Send + Debug {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Wall-clock time measured from the moment the clock was created.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying time, so a test can keep one handle and
/// give another to the [`App`](crate::App).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use publicrush::runtime::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// handle.advance(Duration::from_millis(2000));
/// assert_eq!(clock.now(), Duration::from_millis(2000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
    /// Added to the time on every read when non-zero.
    step_ms: u64,
}

impl ManualClock {
    /// Create a clock stopped at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock that moves forward by `step` each time it is read.
    pub fn stepping(step: Duration) -> Self {
        Self {
            millis: Arc::default(),
            step_ms: step.as_millis() as u64,
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        self.millis.fetch_add(by.as_millis() as u64, Ordering::SeqCst);
    }

    /// Jump to an absolute reading. Callers are responsible for not going backwards.
    pub fn set(&self, to: Duration) {
        self.millis.store(to.as_millis() as u64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        let ms = if self.step_ms > 0 {
            self.millis.fetch_add(self.step_ms, Ordering::SeqCst) + self.step_ms
        } else {
            self.millis.load(Ordering::SeqCst)
        };
        Duration::from_millis(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_starts_at_zero() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
        assert_eq!(clock.now(), Duration::ZERO);
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();

        handle.advance(Duration::from_millis(1500));
        handle.advance(Duration::from_millis(500));
        assert_eq!(clock.now(), Duration::from_secs(2));

        handle.set(Duration::from_secs(10));
        assert_eq!(clock.now(), Duration::from_secs(10));
    }

    #[test]
    fn test_stepping_clock_advances_per_read() {
        let clock = ManualClock::stepping(Duration::from_millis(250));
        assert_eq!(clock.now(), Duration::from_millis(250));
        assert_eq!(clock.now(), Duration::from_millis(500));
        assert_eq!(clock.now(), Duration::from_millis(750));
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
