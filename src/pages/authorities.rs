//! Authorities panel: emergency alarm, alert log and heatmap.

use std::time::Duration;

use serde_json::json;

use crate::data::fixtures::{HeatmapZone, ALERT_LOG, HEATMAP_THRESHOLDS, HEATMAP_ZONES};
use crate::data::{AlarmToggle, Band};

#[derive(Debug, Clone)]
pub struct AuthoritiesPage {
    alarm: AlarmToggle,
    /// First alert log row shown.
    log_offset: usize,
}

impl AuthoritiesPage {
    pub fn mount(alarm_hold: Duration) -> Self {
        Self {
            alarm: AlarmToggle::new(alarm_hold),
            log_offset: 0,
        }
    }

    /// Expire the alarm if its hold has elapsed. Returns true if it just cleared.
    pub fn update(&mut self, now: Duration) -> bool {
        self.alarm.poll(now)
    }

    pub fn trigger_alarm(&mut self, now: Duration) {
        self.alarm.trigger(now);
    }

    pub fn alarm(&self) -> &AlarmToggle {
        &self.alarm
    }

    pub fn log_offset(&self) -> usize {
        self.log_offset
    }

    pub fn scroll_down(&mut self) {
        self.log_offset = (self.log_offset + 1).min(ALERT_LOG.len().saturating_sub(1));
    }

    pub fn scroll_up(&mut self) {
        self.log_offset = self.log_offset.saturating_sub(1);
    }

    pub fn heatmap(&self) -> impl Iterator<Item = (&'static HeatmapZone, Band)> {
        HEATMAP_ZONES
            .iter()
            .map(|z| (z, HEATMAP_THRESHOLDS.classify(z.intensity)))
    }

    pub fn export(&self) -> serde_json::Value {
        json!({
            "alarm": self.alarm.state(),
            "alert_log": ALERT_LOG,
            "heatmap": self.heatmap().map(|(z, band)| json!({
                "name": z.name,
                "intensity": z.intensity,
                "band": band,
            })).collect::<Vec<_>>(),
        })
    }
}
