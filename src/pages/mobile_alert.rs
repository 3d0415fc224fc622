//! Mobile alert demo: a phone mockup that flips into an emergency screen.

use serde_json::json;

use crate::data::{DemoToggle, ToggleState};

#[derive(Debug, Clone, Default)]
pub struct MobileAlertPage {
    demo: DemoToggle,
}

impl MobileAlertPage {
    pub fn mount() -> Self {
        Self::default()
    }

    /// "Trigger Emergency Demo". Returns false if already showing the alert.
    pub fn trigger(&mut self) -> bool {
        self.demo.trigger()
    }

    /// "Reset Demo". Returns false if already idle.
    pub fn reset(&mut self) -> bool {
        self.demo.reset()
    }

    pub fn state(&self) -> ToggleState {
        self.demo.state()
    }

    pub fn alert_shown(&self) -> bool {
        self.demo.is_active()
    }

    pub fn export(&self) -> serde_json::Value {
        json!({ "demo": self.state() })
    }
}
