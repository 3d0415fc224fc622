//! Risk banding: a two-cut-point classifier shared by every simulated metric.

use serde::{Deserialize, Serialize};

/// Discrete risk tier, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Band {
    Low,
    Medium,
    High,
}

impl Band {
    pub const ALL: [Band; 3] = [Band::Low, Band::Medium, Band::High];

    /// True for the most severe tier.
    pub fn is_top(self) -> bool {
        self == Band::High
    }
}

/// Which set of labels a band is displayed with.
///
/// The command center speaks in risk (`Low`/`Medium`/`High`), live monitoring
/// in status (`Safe`/`Warning`/`Critical`). Both map onto the same [`Band`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandScale {
    #[default]
    Risk,
    Status,
}

impl BandScale {
    pub fn label(self, band: Band) -> &'static str {
        match (self, band) {
            (BandScale::Risk, Band::Low) => "Low",
            (BandScale::Risk, Band::Medium) => "Medium",
            (BandScale::Risk, Band::High) => "High",
            (BandScale::Status, Band::Low) => "Safe",
            (BandScale::Status, Band::Medium) => "Warning",
            (BandScale::Status, Band::High) => "Critical",
        }
    }
}

/// Two strict cut points.
///
/// `value > critical_above` is [`Band::High`], `value > elevated_above` is
/// [`Band::Medium`], anything else is [`Band::Low`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub elevated_above: i64,
    pub critical_above: i64,
}

impl Thresholds {
    pub const fn new(elevated_above: i64, critical_above: i64) -> Self {
        Self {
            elevated_above,
            critical_above,
        }
    }

    pub fn classify(&self, value: i64) -> Band {
        if value > self.critical_above {
            Band::High
        } else if value > self.elevated_above {
            Band::Medium
        } else {
            Band::Low
        }
    }

    /// Whether the lower cut sits strictly below the upper one.
    pub fn is_ordered(&self) -> bool {
        self.elevated_above < self.critical_above
    }
}
