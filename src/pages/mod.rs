//! Per-view state.
//!
//! Exactly one page is mounted at a time. Mounting builds fresh state from
//! the configuration (simulators start from their seed value, timers are
//! anchored at the mount time); unmounting drops it, which is also what
//! cancels the page's timers. Two pages never share state.

pub mod authorities;
pub mod command_center;
pub mod mobile_alert;
pub mod monitoring;

pub use authorities::AuthoritiesPage;
pub use command_center::CommandCenterPage;
pub use mobile_alert::MobileAlertPage;
pub use monitoring::LiveMonitoringPage;

use std::time::Duration;

use crate::app::View;
use crate::config::AppConfig;
use crate::data::{DensitySimulator, Reading};
use crate::runtime::RandomSource;

/// The mounted page.
#[derive(Debug, Clone)]
pub enum Page {
    CommandCenter(CommandCenterPage),
    LiveMonitoring(LiveMonitoringPage),
    MobileAlert(MobileAlertPage),
    Authorities(AuthoritiesPage),
}

impl Page {
    /// Build fresh state for `view`.
    pub fn mount(
        view: View,
        config: &AppConfig,
        now: Duration,
        rng: &mut dyn RandomSource,
    ) -> Self {
        match view {
            View::CommandCenter => {
                Page::CommandCenter(CommandCenterPage::mount(&config.command_center, now))
            }
            View::LiveMonitoring => {
                Page::LiveMonitoring(LiveMonitoringPage::mount(&config.monitoring, now, rng))
            }
            View::MobileAlert => Page::MobileAlert(MobileAlertPage::mount()),
            View::Authorities => Page::Authorities(AuthoritiesPage::mount(Duration::from_millis(
                config.alarm_hold_ms,
            ))),
        }
    }

    pub fn view(&self) -> View {
        match self {
            Page::CommandCenter(_) => View::CommandCenter,
            Page::LiveMonitoring(_) => View::LiveMonitoring,
            Page::MobileAlert(_) => View::MobileAlert,
            Page::Authorities(_) => View::Authorities,
        }
    }

    /// Run whatever timers are due at `now`. Returns the readings produced.
    pub fn update(&mut self, now: Duration, rng: &mut dyn RandomSource) -> Vec<Reading> {
        match self {
            Page::CommandCenter(page) => page.update(now, rng),
            Page::LiveMonitoring(page) => page.update(now, rng),
            Page::MobileAlert(_) => Vec::new(),
            Page::Authorities(page) => {
                page.update(now);
                Vec::new()
            }
        }
    }

    /// The density simulator of this page, if it has one.
    pub fn simulator(&self) -> Option<&DensitySimulator> {
        match self {
            Page::CommandCenter(page) => Some(page.simulator()),
            Page::LiveMonitoring(page) => Some(page.simulator()),
            Page::MobileAlert(_) | Page::Authorities(_) => None,
        }
    }

    pub fn export(&self) -> serde_json::Value {
        match self {
            Page::CommandCenter(page) => page.export(),
            Page::LiveMonitoring(page) => page.export(),
            Page::MobileAlert(page) => page.export(),
            Page::Authorities(page) => page.export(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::ScriptedRandom;

    #[test]
    fn test_mount_matches_view() {
        let config = AppConfig::default();
        let mut rng = ScriptedRandom::default();
        for view in View::ALL {
            let page = Page::mount(view, &config, Duration::ZERO, &mut rng);
            assert_eq!(page.view(), view);
            assert_eq!(page.simulator().is_some(), view.has_simulator());
        }
    }

    #[test]
    fn test_instances_are_independent() {
        let config = AppConfig::default();
        let mut rng = ScriptedRandom::new([5]);
        let mut a = Page::mount(View::CommandCenter, &config, Duration::ZERO, &mut rng);
        let b = Page::mount(View::CommandCenter, &config, Duration::ZERO, &mut rng);

        a.update(Duration::from_millis(2000), &mut rng);
        assert_eq!(a.simulator().unwrap().value(), 72);
        assert_eq!(b.simulator().unwrap().value(), 67);
    }
}
