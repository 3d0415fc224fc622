//! The density random walk and its derived risk band.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::band::{Band, BandScale, Thresholds};
use crate::runtime::RandomSource;

/// Parameters of one density simulator.
///
/// The command center and live monitoring pages run the same algorithm
/// with different bounds, steps, cut points and tick intervals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DensityConfig {
    /// Value the simulator starts from when its page mounts.
    pub initial: i64,
    pub min: i64,
    pub max: i64,
    /// Each tick moves the value by a draw from `-max_step..=max_step`.
    pub max_step: i64,
    pub thresholds: Thresholds,
    pub scale: BandScale,
    pub interval_ms: u64,
}

impl DensityConfig {
    /// Crowd density percentage shown on the command center.
    pub fn command_center() -> Self {
        Self {
            initial: 67,
            min: 10,
            max: 100,
            max_step: 5,
            thresholds: Thresholds::new(50, 80),
            scale: BandScale::Risk,
            interval_ms: 2000,
        }
    }

    /// People count shown on the live monitoring page.
    pub fn live_monitoring() -> Self {
        Self {
            initial: 1247,
            min: 0,
            max: 5000,
            max_step: 10,
            thresholds: Thresholds::new(1200, 1400),
            scale: BandScale::Status,
            interval_ms: 3000,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Clamp into `[min, max]`. Total even for an unvalidated config.
    pub fn clamp(&self, value: i64) -> i64 {
        value.max(self.min).min(self.max)
    }

    pub fn reading_for(&self, value: i64) -> Reading {
        let value = self.clamp(value);
        Reading {
            value,
            band: self.thresholds.classify(value),
        }
    }

    /// The pure step function: apply `draw` to `previous`, clamp, classify.
    pub fn next_reading(&self, previous: i64, draw: i64) -> Reading {
        self.reading_for(previous.saturating_add(draw))
    }
}

/// A density value together with its band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub value: i64,
    pub band: Band,
}

/// Owns one density value and advances it on demand.
///
/// Scheduling lives with the page that owns the simulator. This type only
/// knows how to take one step.
#[derive(Debug, Clone)]
pub struct DensitySimulator {
    config: DensityConfig,
    reading: Reading,
    alert_visible: bool,
    ticks: u64,
}

impl DensitySimulator {
    pub fn new(config: DensityConfig) -> Self {
        let reading = config.reading_for(config.initial);
        Self {
            config,
            reading,
            alert_visible: reading.band.is_top(),
            ticks: 0,
        }
    }

    /// Advance one step using a draw from `rng`.
    ///
    /// The alert flag follows the band on every tick: it is set while the
    /// reading sits in the top band and cleared as soon as it leaves it.
    pub fn tick(&mut self, rng: &mut dyn RandomSource) -> Reading {
        let draw = rng.draw(-self.config.max_step, self.config.max_step);
        let reading = self.config.next_reading(self.reading.value, draw);

        self.reading = reading;
        self.alert_visible = reading.band.is_top();
        self.ticks += 1;

        debug!(
            value = reading.value,
            draw,
            band = self.label(),
            tick = self.ticks,
            "density tick"
        );
        reading
    }

    pub fn config(&self) -> &DensityConfig {
        &self.config
    }

    pub fn reading(&self) -> Reading {
        self.reading
    }

    pub fn value(&self) -> i64 {
        self.reading.value
    }

    pub fn band(&self) -> Band {
        self.reading.band
    }

    /// Band label in this simulator's scale.
    pub fn label(&self) -> &'static str {
        self.config.scale.label(self.reading.band)
    }

    pub fn alert_visible(&self) -> bool {
        self.alert_visible
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{ScriptedRandom, SeededRandom};

    #[test]
    fn test_clamped_step_stays_in_bounds() {
        let config = DensityConfig::command_center();
        for v in 10..=100 {
            for d in -5..=5 {
                let r = config.next_reading(v, d);
                assert!((10..=100).contains(&r.value), "{} + {} -> {}", v, d, r.value);
            }
        }
    }

    #[test]
    fn test_out_of_range_draw_is_clamped() {
        let mut sim = DensitySimulator::new(DensityConfig::command_center());
        assert_eq!(sim.value(), 67);

        let reading = sim.tick(&mut ScriptedRandom::new([20]));
        assert_eq!(reading.value, 87);
        assert_eq!(reading.band, Band::High);
        assert!(sim.alert_visible());
    }

    #[test]
    fn test_clamps_at_both_ends() {
        let mut sim = DensitySimulator::new(DensityConfig::command_center());
        sim.tick(&mut ScriptedRandom::new([500]));
        assert_eq!(sim.value(), 100);
        sim.tick(&mut ScriptedRandom::new([-500]));
        assert_eq!(sim.value(), 10);
        assert_eq!(sim.band(), Band::Low);
    }

    #[test]
    fn test_lower_boundary_uses_strict_comparison() {
        let mut config = DensityConfig::command_center();
        config.initial = 50;
        let sim = DensitySimulator::new(config.clone());
        assert_eq!(sim.band(), Band::Low);

        config.initial = 51;
        let sim = DensitySimulator::new(config);
        assert_eq!(sim.band(), Band::Medium);
        assert_eq!(sim.label(), "Medium");
    }

    #[test]
    fn test_alert_is_level_triggered() {
        let mut sim = DensitySimulator::new(DensityConfig::command_center());
        let mut rng = ScriptedRandom::new([14, 5, -10, 5]);

        sim.tick(&mut rng); // 81
        assert!(sim.alert_visible());
        sim.tick(&mut rng); // 86, still high
        assert!(sim.alert_visible());
        sim.tick(&mut rng); // 76
        assert!(!sim.alert_visible());
        sim.tick(&mut rng); // 81
        assert!(sim.alert_visible());
        assert_eq!(sim.ticks(), 4);
    }

    #[test]
    fn test_live_monitoring_uses_status_labels() {
        let mut sim = DensitySimulator::new(DensityConfig::live_monitoring());
        assert_eq!(sim.value(), 1247);
        assert_eq!(sim.label(), "Warning");

        sim.tick(&mut ScriptedRandom::new([200]));
        assert_eq!(sim.value(), 1447);
        assert_eq!(sim.label(), "Critical");
    }

    #[test]
    fn test_seeded_walk_respects_bounds() {
        let mut sim = DensitySimulator::new(DensityConfig::command_center());
        let mut rng = SeededRandom::from_seed(3);
        let mut previous = sim.value();
        for _ in 0..5000 {
            let r = sim.tick(&mut rng);
            assert!((10..=100).contains(&r.value));
            assert!((r.value - previous).abs() <= 5);
            previous = r.value;
        }
    }

    #[test]
    fn test_initial_value_is_clamped() {
        let mut config = DensityConfig::command_center();
        config.initial = 250;
        let sim = DensitySimulator::new(config);
        assert_eq!(sim.value(), 100);
        assert!(sim.alert_visible());
    }
}
