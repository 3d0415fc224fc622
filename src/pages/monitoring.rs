//! Live monitoring: people count, camera grid and analytics.

use std::time::Duration;

use serde_json::json;

use crate::data::fixtures::{cameras_online, CameraFeed, FeedStatus, CAMERA_FEEDS, DETECTION_RANGE};
use crate::data::{DensityConfig, DensityHistory, DensitySimulator, Reading};
use crate::runtime::{Interval, RandomSource};

#[derive(Debug, Clone)]
pub struct LiveMonitoringPage {
    simulator: DensitySimulator,
    interval: Interval,
    history: DensityHistory,
    /// People detected per feed, `None` for offline feeds.
    detections: Vec<Option<i64>>,
}

impl LiveMonitoringPage {
    pub fn mount(config: &DensityConfig, now: Duration, rng: &mut dyn RandomSource) -> Self {
        let simulator = DensitySimulator::new(config.clone());
        let mut history = DensityHistory::new(config.min, config.max);
        history.record(simulator.value());

        Self {
            simulator,
            interval: Interval::new(config.interval(), now),
            history,
            detections: draw_detections(CAMERA_FEEDS, rng),
        }
    }

    pub fn update(&mut self, now: Duration, rng: &mut dyn RandomSource) -> Vec<Reading> {
        let due = self.interval.poll(now);
        let mut readings = Vec::with_capacity(due as usize);
        for _ in 0..due {
            let reading = self.simulator.tick(rng);
            self.history.record(reading.value);
            self.detections = draw_detections(CAMERA_FEEDS, rng);
            readings.push(reading);
        }
        readings
    }

    pub fn simulator(&self) -> &DensitySimulator {
        &self.simulator
    }

    pub fn history(&self) -> &DensityHistory {
        &self.history
    }

    /// Feeds paired with their current detection count.
    pub fn feeds(&self) -> impl Iterator<Item = (&'static CameraFeed, Option<i64>)> + '_ {
        CAMERA_FEEDS.iter().zip(self.detections.iter().copied())
    }

    pub fn cameras_online(&self) -> usize {
        cameras_online(CAMERA_FEEDS)
    }

    pub fn camera_count(&self) -> usize {
        CAMERA_FEEDS.len()
    }

    pub fn export(&self) -> serde_json::Value {
        let feeds: Vec<serde_json::Value> = self
            .feeds()
            .map(|(feed, detected)| {
                json!({
                    "name": feed.name,
                    "status": feed.status.label(),
                    "detected": detected,
                })
            })
            .collect();

        json!({
            "people": self.simulator.value(),
            "status": self.simulator.label(),
            "ticks": self.simulator.ticks(),
            "cameras_online": self.cameras_online(),
            "cameras_total": self.camera_count(),
            "feeds": feeds,
        })
    }
}

fn draw_detections(feeds: &[CameraFeed], rng: &mut dyn RandomSource) -> Vec<Option<i64>> {
    let (low, high) = DETECTION_RANGE;
    feeds
        .iter()
        .map(|feed| match feed.status {
            FeedStatus::Active => Some(rng.draw(low, high)),
            FeedStatus::Offline => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{ScriptedRandom, SeededRandom};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_ticks_every_three_seconds() {
        let mut rng = ScriptedRandom::new([150, 160, 170]);
        let mut page = LiveMonitoringPage::mount(&DensityConfig::live_monitoring(), ms(0), &mut rng);
        assert_eq!(page.simulator().value(), 1247);

        let mut rng = ScriptedRandom::new([-10, 101, 102, 103]);
        assert!(page.update(ms(2999), &mut rng).is_empty());
        let readings = page.update(ms(3000), &mut rng);
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].value, 1237);
        assert_eq!(page.simulator().label(), "Warning");

        let detected: Vec<Option<i64>> = page.feeds().map(|(_, d)| d).collect();
        assert_eq!(detected, vec![Some(101), Some(102), Some(103), None]);
    }

    #[test]
    fn test_offline_feed_never_reports() {
        let mut rng = SeededRandom::from_seed(11);
        let mut page = LiveMonitoringPage::mount(&DensityConfig::live_monitoring(), ms(0), &mut rng);

        for step in 1..=50 {
            page.update(ms(step * 3000), &mut rng);
            for (feed, detected) in page.feeds() {
                match feed.status {
                    FeedStatus::Offline => assert_eq!(detected, None),
                    FeedStatus::Active => {
                        let n = detected.unwrap();
                        assert!((100..=299).contains(&n));
                    }
                }
            }
        }
        assert_eq!(page.simulator().ticks(), 50);
    }

    #[test]
    fn test_cameras_online() {
        let mut rng = ScriptedRandom::default();
        let page = LiveMonitoringPage::mount(&DensityConfig::live_monitoring(), ms(0), &mut rng);
        assert_eq!(page.cameras_online(), 3);
        assert_eq!(page.camera_count(), 4);

        let value = page.export();
        assert_eq!(value["status"], "Warning");
        assert_eq!(value["feeds"][3]["detected"], serde_json::Value::Null);
    }
}
