//! Command center: crowd density, risk score and zone overview.

use std::time::Duration;

use serde_json::json;

use crate::data::fixtures::{ZoneSummary, ZONES};
use crate::data::{Band, DensityConfig, DensityHistory, DensitySimulator, Reading};
use crate::runtime::{Interval, RandomSource};

/// Number of segments in the risk meter.
pub const RISK_SEGMENTS: u32 = 10;

/// Risk score out of 100: density scaled by 0.85, half rounding up.
pub fn risk_score(density: i64) -> i64 {
    let score = (i128::from(density) * 85 + 50).div_euclid(100);
    score.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Lit segments of the risk meter: `floor(density * 0.085)`, capped at the meter size.
pub fn risk_segments(density: i64) -> u32 {
    (i128::from(density) * 85)
        .div_euclid(1000)
        .clamp(0, i128::from(RISK_SEGMENTS)) as u32
}

#[derive(Debug, Clone)]
pub struct CommandCenterPage {
    simulator: DensitySimulator,
    interval: Interval,
    history: DensityHistory,
}

impl CommandCenterPage {
    pub fn mount(config: &DensityConfig, now: Duration) -> Self {
        let simulator = DensitySimulator::new(config.clone());
        let mut history = DensityHistory::new(config.min, config.max);
        history.record(simulator.value());

        Self {
            simulator,
            interval: Interval::new(config.interval(), now),
            history,
        }
    }

    pub fn update(&mut self, now: Duration, rng: &mut dyn RandomSource) -> Vec<Reading> {
        let due = self.interval.poll(now);
        (0..due)
            .map(|_| {
                let reading = self.simulator.tick(rng);
                self.history.record(reading.value);
                reading
            })
            .collect()
    }

    pub fn simulator(&self) -> &DensitySimulator {
        &self.simulator
    }

    pub fn history(&self) -> &DensityHistory {
        &self.history
    }

    /// The high-density banner is shown exactly while the reading is in the top band.
    pub fn alert_visible(&self) -> bool {
        self.simulator.alert_visible()
    }

    pub fn risk_score(&self) -> i64 {
        risk_score(self.simulator.value())
    }

    pub fn risk_segments(&self) -> u32 {
        risk_segments(self.simulator.value())
    }

    /// Static zones with their bands under this page's cut points.
    pub fn zones(&self) -> impl Iterator<Item = (&'static str, i64, Band)> + '_ {
        let thresholds = self.simulator.config().thresholds;
        ZONES
            .iter()
            .map(move |z| (z.name, z.density, thresholds.classify(z.density)))
    }

    pub fn zone_summary(&self) -> ZoneSummary {
        ZoneSummary::from_zones(ZONES, &self.simulator.config().thresholds)
    }

    pub fn export(&self) -> serde_json::Value {
        let zones: Vec<serde_json::Value> = self
            .zones()
            .map(|(name, density, band)| {
                json!({
                    "name": name,
                    "density": density,
                    "band": band,
                })
            })
            .collect();

        json!({
            "density": self.simulator.value(),
            "band": self.simulator.label(),
            "alert_visible": self.alert_visible(),
            "risk_score": self.risk_score(),
            "risk_segments": self.risk_segments(),
            "ticks": self.simulator.ticks(),
            "zone_summary": self.zone_summary(),
            "zones": zones,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::ScriptedRandom;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_risk_score() {
        assert_eq!(risk_score(67), 57);
        assert_eq!(risk_score(10), 9);
        assert_eq!(risk_score(100), 85);
        assert_eq!(risk_score(30), 26);
    }

    #[test]
    fn test_risk_segments() {
        assert_eq!(risk_segments(67), 5);
        assert_eq!(risk_segments(100), 8);
        assert_eq!(risk_segments(11), 0);
        assert_eq!(risk_segments(12), 1);
    }

    #[test]
    fn test_risk_math_at_extremes() {
        assert_eq!(risk_score(i64::MAX / 2), 3_919_933_115_663_279_718);
        assert_eq!(risk_score(i64::MIN), -7_839_866_231_326_559_437);
        assert_eq!(risk_segments(i64::MAX), RISK_SEGMENTS);
        assert_eq!(risk_segments(i64::MIN), 0);
    }

    #[test]
    fn test_ticks_on_two_second_interval() {
        let mut page = CommandCenterPage::mount(&DensityConfig::command_center(), ms(0));
        let mut rng = ScriptedRandom::new([5, 5, 5]);

        assert!(page.update(ms(1999), &mut rng).is_empty());
        let readings = page.update(ms(2000), &mut rng);
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].value, 72);

        let readings = page.update(ms(6000), &mut rng);
        assert_eq!(readings.iter().map(|r| r.value).collect::<Vec<_>>(), vec![77, 82]);
        assert!(page.alert_visible());
        assert_eq!(page.history().len(), 4);
    }

    #[test]
    fn test_zone_summary() {
        let page = CommandCenterPage::mount(&DensityConfig::command_center(), ms(0));
        let summary = page.zone_summary();
        assert_eq!((summary.low, summary.medium, summary.high), (3, 2, 1));
        let stage = page.zones().find(|(name, _, _)| *name == "Stage Area").unwrap();
        assert_eq!(stage.2, Band::High);
    }

    #[test]
    fn test_export_shape() {
        let page = CommandCenterPage::mount(&DensityConfig::command_center(), ms(0));
        let value = page.export();
        assert_eq!(value["density"], 67);
        assert_eq!(value["band"], "Medium");
        assert_eq!(value["alert_visible"], false);
        assert_eq!(value["risk_score"], 57);
        assert_eq!(value["zones"].as_array().unwrap().len(), 6);
    }
}
