//! Recent density readings for the trend sparkline.

use std::collections::VecDeque;

/// Maximum number of readings to keep.
const MAX_HISTORY_SIZE: usize = 60;

/// Rolling window of density values for one mounted simulator.
///
/// The sparkline is normalized against the simulator's configured bounds
/// rather than the observed range, so a flat walk near the floor reads low.
#[derive(Debug, Clone)]
pub struct DensityHistory {
    values: VecDeque<i64>,
    min: i64,
    max: i64,
}

impl DensityHistory {
    /// Create an empty history for values in `[min, max]`.
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            values: VecDeque::with_capacity(MAX_HISTORY_SIZE),
            min,
            max,
        }
    }

    /// Record a reading, dropping the oldest once full.
    pub fn record(&mut self, value: i64) {
        self.values.push_back(value);
        if self.values.len() > MAX_HISTORY_SIZE {
            self.values.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().copied()
    }

    /// Change between the two most recent readings.
    pub fn latest_delta(&self) -> Option<i64> {
        let n = self.values.len();
        if n < 2 {
            return None;
        }
        Some(self.values[n - 1].saturating_sub(self.values[n - 2]))
    }

    /// Last `width` readings normalized to 0-7 for 8 bar levels.
    pub fn sparkline(&self, width: usize) -> Vec<u8> {
        let range = (i128::from(self.max) - i128::from(self.min)).max(1) as f64;
        let skip = self.values.len().saturating_sub(width);

        self.values
            .iter()
            .skip(skip)
            .map(|&v| {
                let offset = (i128::from(v) - i128::from(self.min)).max(0) as f64;
                let normalized = (offset / range * 7.0).round() as u8;
                normalized.min(7)
            })
            .collect()
    }
}
