//! Application state and navigation logic.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::AppConfig;
use crate::data::Reading;
use crate::pages::Page;
use crate::runtime::{Clock, Deadline, RandomSource};
use crate::ui::Theme;

/// The current view/tab in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    /// Crowd density, risk score and zone overview.
    #[serde(rename = "/")]
    CommandCenter,
    /// People count and camera grid.
    #[serde(rename = "/monitoring")]
    LiveMonitoring,
    /// Phone mockup for the emergency notification demo.
    #[serde(rename = "/alerts")]
    MobileAlert,
    /// Emergency alarm, alert log and heatmap.
    #[serde(rename = "/authorities")]
    Authorities,
}

impl View {
    pub const ALL: [View; 4] = [
        View::CommandCenter,
        View::LiveMonitoring,
        View::MobileAlert,
        View::Authorities,
    ];

    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            View::CommandCenter => View::LiveMonitoring,
            View::LiveMonitoring => View::MobileAlert,
            View::MobileAlert => View::Authorities,
            View::Authorities => View::CommandCenter,
        }
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        match self {
            View::CommandCenter => View::Authorities,
            View::LiveMonitoring => View::CommandCenter,
            View::MobileAlert => View::LiveMonitoring,
            View::Authorities => View::MobileAlert,
        }
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::CommandCenter => "Dashboard",
            View::LiveMonitoring => "Live Monitor",
            View::MobileAlert => "Mobile Alert",
            View::Authorities => "Authorities",
        }
    }

    pub fn route(&self) -> &'static str {
        match self {
            View::CommandCenter => "/",
            View::LiveMonitoring => "/monitoring",
            View::MobileAlert => "/alerts",
            View::Authorities => "/authorities",
        }
    }

    pub fn from_route(route: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.route() == route)
    }

    /// Position in the tab bar.
    pub fn index(&self) -> usize {
        match self {
            View::CommandCenter => 0,
            View::LiveMonitoring => 1,
            View::MobileAlert => 2,
            View::Authorities => 3,
        }
    }

    /// Whether this view runs a density simulator.
    pub fn has_simulator(&self) -> bool {
        matches!(self, View::CommandCenter | View::LiveMonitoring)
    }
}

/// Message shown on the status line until its deadline passes.
#[derive(Debug, Clone)]
struct Notice {
    message: String,
    expires: Deadline,
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub page: Page,
    pub theme: Theme,

    config: AppConfig,
    clock: Box<dyn Clock>,
    rng: Box<dyn RandomSource>,

    notice: Option<Notice>,
    last_update: Duration,
}

impl App {
    /// Create the app and mount the configured start view.
    pub fn new(config: AppConfig, clock: Box<dyn Clock>, mut rng: Box<dyn RandomSource>) -> Self {
        let now = clock.now();
        let page = Page::mount(config.start_view, &config, now, rng.as_mut());
        info!(view = page.view().route(), "mounted");

        Self {
            running: true,
            show_help: false,
            page,
            theme: Theme::from_choice(config.theme),
            config,
            clock,
            rng,
            notice: None,
            last_update: now,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn current_view(&self) -> View {
        self.page.view()
    }

    /// Clock reading taken by the most recent [`App::update`].
    pub fn last_update(&self) -> Duration {
        self.last_update
    }

    /// Advance the mounted page to the current time.
    ///
    /// Reads the clock once. Returns any density readings produced.
    pub fn update(&mut self) -> Vec<Reading> {
        let now = self.clock.now();
        self.last_update = now;

        if self.notice.as_ref().is_some_and(|n| n.expires.has_passed(now)) {
            self.notice = None;
        }

        self.page.update(now, self.rng.as_mut())
    }

    /// Unmount the current page and mount `view` with fresh state.
    pub fn set_view(&mut self, view: View) {
        if view == self.current_view() {
            return;
        }
        let now = self.clock.now();
        info!(from = self.current_view().route(), to = view.route(), "switching view");
        self.page = Page::mount(view, &self.config, now, self.rng.as_mut());
    }

    /// Switch to the next view.
    pub fn next_view(&mut self) {
        self.set_view(self.current_view().next());
    }

    /// Switch to the previous view.
    pub fn prev_view(&mut self) {
        self.set_view(self.current_view().prev());
    }

    /// Show a transient message on the status line.
    pub fn notify(&mut self, message: impl Into<String>) {
        let now = self.clock.now();
        self.notice = Some(Notice {
            message: message.into(),
            expires: Deadline::after(Duration::from_millis(self.config.notice_ms), now),
        });
    }

    /// The current notice, if one is showing.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.message.as_str())
    }

    /// Emergency alarm. Only available on the authorities view.
    pub fn trigger_alarm(&mut self) -> bool {
        let now = self.clock.now();
        let Page::Authorities(ref mut page) = self.page else {
            return false;
        };
        page.trigger_alarm(now);
        self.notify("EMERGENCY ALARM ACTIVATED - All units notified");
        true
    }

    /// "Trigger Emergency Demo" on the mobile view.
    pub fn trigger_demo(&mut self) -> bool {
        match self.page {
            Page::MobileAlert(ref mut page) => page.trigger(),
            _ => false,
        }
    }

    /// "Reset Demo" on the mobile view.
    pub fn reset_demo(&mut self) -> bool {
        match self.page {
            Page::MobileAlert(ref mut page) => page.reset(),
            _ => false,
        }
    }

    /// Scroll the alert log (authorities view).
    pub fn scroll_down(&mut self) {
        if let Page::Authorities(ref mut page) = self.page {
            page.scroll_down();
        }
    }

    pub fn scroll_up(&mut self) {
        if let Page::Authorities(ref mut page) = self.page {
            page.scroll_up();
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export the mounted page's state to a JSON file.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        let mut export = serde_json::Map::new();
        export.insert("view".to_string(), serde_json::json!(self.current_view()));
        export.insert(
            "at_ms".to_string(),
            serde_json::json!(self.last_update.as_millis() as u64),
        );
        export.insert("page".to_string(), self.page.export());

        let json = serde_json::to_string_pretty(&serde_json::Value::Object(export))?;
        std::fs::write(path, json)?;

        info!(path = %path.display(), "exported state");
        Ok(())
    }
}
