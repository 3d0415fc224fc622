//! One-shot manual overrides: the emergency alarm and the emergency demo.

use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::runtime::Deadline;

/// Two-state toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleState {
    #[default]
    Idle,
    Active,
}

/// Emergency alarm that clears itself after a hold period.
///
/// Triggering while already active re-arms the hold from the new trigger.
///
/// [`state`](Self::state) and [`is_active`](Self::is_active) report the state
/// as of the last [`poll`](Self::poll). Use [`is_active_at`](Self::is_active_at)
/// for an answer that does not depend on polling.
#[derive(Debug, Clone)]
pub struct AlarmToggle {
    hold: Duration,
    expires: Option<Deadline>,
}

impl AlarmToggle {
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            expires: None,
        }
    }

    pub fn trigger(&mut self, now: Duration) {
        let deadline = Deadline::after(self.hold, now);
        info!(
            at_ms = now.as_millis() as u64,
            hold_ms = self.hold.as_millis() as u64,
            "alarm triggered"
        );
        self.expires = Some(deadline);
    }

    /// Clear the alarm if its hold has run out. Returns true if it just cleared.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.expires {
            Some(deadline) if deadline.has_passed(now) => {
                self.expires = None;
                info!(at_ms = now.as_millis() as u64, "alarm cleared");
                true
            }
            _ => false,
        }
    }

    pub fn state(&self) -> ToggleState {
        if self.expires.is_some() {
            ToggleState::Active
        } else {
            ToggleState::Idle
        }
    }

    pub fn is_active(&self) -> bool {
        self.state() == ToggleState::Active
    }

    /// Whether the alarm is still within its hold at `now`, polled or not.
    pub fn is_active_at(&self, now: Duration) -> bool {
        self.expires.is_some_and(|deadline| !deadline.has_passed(now))
    }

    /// Time left before the alarm clears, if it is active.
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.expires.map(|d| d.remaining(now))
    }
}

/// Emergency demo on the mobile page. Stays active until reset.
#[derive(Debug, Clone, Default)]
pub struct DemoToggle {
    state: ToggleState,
}

impl DemoToggle {
    /// Idle -> Active. Returns false if it was already active.
    pub fn trigger(&mut self) -> bool {
        if self.state == ToggleState::Active {
            return false;
        }
        self.state = ToggleState::Active;
        info!("emergency demo triggered");
        true
    }

    /// Active -> Idle. Returns false if it was already idle.
    pub fn reset(&mut self) -> bool {
        if self.state == ToggleState::Idle {
            return false;
        }
        self.state = ToggleState::Idle;
        info!("emergency demo reset");
        true
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == ToggleState::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_alarm_activates_immediately_and_clears_after_hold() {
        let mut alarm = AlarmToggle::new(ms(5000));
        assert!(!alarm.is_active());

        alarm.trigger(ms(1000));
        assert!(alarm.is_active());
        assert_eq!(alarm.remaining(ms(1000)), Some(ms(5000)));

        assert!(!alarm.poll(ms(5999)));
        assert!(alarm.is_active());

        assert!(alarm.poll(ms(6000)));
        assert!(!alarm.is_active());
        assert_eq!(alarm.remaining(ms(6000)), None);

        // Already idle
        assert!(!alarm.poll(ms(9000)));
    }

    #[test]
    fn test_alarm_retrigger_extends_hold() {
        let mut alarm = AlarmToggle::new(ms(5000));
        alarm.trigger(ms(0));
        alarm.trigger(ms(3000));

        assert!(!alarm.poll(ms(5000)));
        assert!(alarm.is_active());
        assert!(alarm.poll(ms(8000)));
    }

    #[test]
    fn test_active_at_ignores_missed_poll() {
        let mut alarm = AlarmToggle::new(ms(5000));
        assert!(!alarm.is_active_at(ms(0)));

        alarm.trigger(ms(1000));
        assert!(alarm.is_active_at(ms(5999)));
        assert!(!alarm.is_active_at(ms(6000)));
        // Unpolled state still reads active until the next poll
        assert!(alarm.is_active());

        alarm.poll(ms(6000));
        assert!(!alarm.is_active());
        assert!(!alarm.is_active_at(ms(6000)));
    }

    #[test]
    fn test_demo_toggle_has_no_timer() {
        let mut demo = DemoToggle::default();
        assert_eq!(demo.state(), ToggleState::Idle);

        assert!(demo.trigger());
        assert!(demo.is_active());
        assert!(!demo.trigger());

        assert!(demo.reset());
        assert_eq!(demo.state(), ToggleState::Idle);
        assert!(!demo.reset());
    }
}
