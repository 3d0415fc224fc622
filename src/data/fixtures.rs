//! Static demo content shown alongside the simulated metrics.
//!
//! Everything here is fixed for the session. Where an entry carries a
//! number that maps to a band (zone density, heatmap intensity), the band is
//! derived with [`Thresholds::classify`] rather than stored.

use serde::Serialize;

use super::band::{Band, Thresholds};

/// A monitored perimeter with its occupancy percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Zone {
    pub name: &'static str,
    pub density: i64,
}

pub const ZONES: &[Zone] = &[
    Zone { name: "Main Gate", density: 72 },
    Zone { name: "Food Court", density: 45 },
    Zone { name: "Stage Area", density: 91 },
    Zone { name: "Parking Lot", density: 28 },
    Zone { name: "Exit B", density: 65 },
    Zone { name: "VIP Section", density: 38 },
];

/// Number of zones in each band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ZoneSummary {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl ZoneSummary {
    pub fn from_zones(zones: &[Zone], thresholds: &Thresholds) -> Self {
        let mut summary = Self::default();
        for zone in zones {
            match thresholds.classify(zone.density) {
                Band::Low => summary.low += 1,
                Band::Medium => summary.medium += 1,
                Band::High => summary.high += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

/// Color family of a feed or log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Critical,
    Warning,
    Success,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub age: &'static str,
    pub message: &'static str,
    pub tone: Tone,
}

pub const RECENT_ACTIVITY: &[ActivityEntry] = &[
    ActivityEntry {
        age: "2 min ago",
        message: "Crowd density spike detected at Stage Area",
        tone: Tone::Critical,
    },
    ActivityEntry {
        age: "5 min ago",
        message: "Exit B cleared, density reduced to safe levels",
        tone: Tone::Success,
    },
    ActivityEntry {
        age: "12 min ago",
        message: "Warning issued for Main Gate zone",
        tone: Tone::Warning,
    },
    ActivityEntry {
        age: "18 min ago",
        message: "System scan completed, all sensors operational",
        tone: Tone::Muted,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeedStatus {
    Active,
    Offline,
}

impl FeedStatus {
    pub fn label(self) -> &'static str {
        match self {
            FeedStatus::Active => "Active",
            FeedStatus::Offline => "Offline",
        }
    }
}

/// A simulated CCTV feed. Offline feeds stay offline for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CameraFeed {
    pub id: u32,
    pub name: &'static str,
    pub status: FeedStatus,
}

pub const CAMERA_FEEDS: &[CameraFeed] = &[
    CameraFeed { id: 1, name: "CAM-01: Main Gate", status: FeedStatus::Active },
    CameraFeed { id: 2, name: "CAM-02: Stage Area", status: FeedStatus::Active },
    CameraFeed { id: 3, name: "CAM-03: Food Court", status: FeedStatus::Active },
    CameraFeed { id: 4, name: "CAM-04: Exit B", status: FeedStatus::Offline },
];

/// Range for the per-feed "people detected" figure, drawn every monitoring tick.
pub const DETECTION_RANGE: (i64, i64) = (100, 299);

pub const DETECTION_ACCURACY: &str = "98.7%";

pub const FEED_FORMAT: &str = "1080p • 30fps";

pub fn cameras_online(feeds: &[CameraFeed]) -> usize {
    feeds.iter().filter(|f| f.status == FeedStatus::Active).count()
}

/// A label/value tile in a stats row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatTile {
    pub label: &'static str,
    pub value: &'static str,
}

pub const MONITORING_ANALYTICS: &[StatTile] = &[
    StatTile { label: "Avg. Dwell Time", value: "4.2m" },
    StatTile { label: "Flow Rate", value: "23/min" },
    StatTile { label: "Anomalies", value: "2" },
    StatTile { label: "Data Processed", value: "1.2TB" },
];

pub const AUTHORITY_STATS: &[StatTile] = &[
    StatTile { label: "Units Deployed", value: "12" },
    StatTile { label: "Alerts Today", value: "8" },
    StatTile { label: "Response Time", value: "2.3m" },
    StatTile { label: "PA Broadcasts", value: "3" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertLogEntry {
    pub id: u32,
    pub time: &'static str,
    pub zone: &'static str,
    pub severity: Severity,
    pub message: &'static str,
}

pub const ALERT_LOG: &[AlertLogEntry] = &[
    AlertLogEntry {
        id: 1,
        time: "14:32:05",
        zone: "Stage Area",
        severity: Severity::Critical,
        message: "Crowd exceeds 90% capacity",
    },
    AlertLogEntry {
        id: 2,
        time: "14:28:41",
        zone: "Main Gate",
        severity: Severity::Warning,
        message: "Unusual movement pattern detected",
    },
    AlertLogEntry {
        id: 3,
        time: "14:15:22",
        zone: "Exit B",
        severity: Severity::Warning,
        message: "Bottleneck forming at chokepoint",
    },
    AlertLogEntry {
        id: 4,
        time: "14:02:10",
        zone: "Food Court",
        severity: Severity::Info,
        message: "Density normalized after intervention",
    },
    AlertLogEntry {
        id: 5,
        time: "13:55:33",
        zone: "VIP Section",
        severity: Severity::Info,
        message: "Routine scan completed, all clear",
    },
    AlertLogEntry {
        id: 6,
        time: "13:41:08",
        zone: "Parking Lot",
        severity: Severity::Warning,
        message: "Vehicle congestion increasing",
    },
];

/// A heatmap hotspot. Position and intensity are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeatmapZone {
    pub name: &'static str,
    pub x: u16,
    pub y: u16,
    pub intensity: i64,
}

pub const HEATMAP_ZONES: &[HeatmapZone] = &[
    HeatmapZone { name: "Stage", x: 20, y: 25, intensity: 90 },
    HeatmapZone { name: "Gate", x: 70, y: 20, intensity: 65 },
    HeatmapZone { name: "Food", x: 45, y: 55, intensity: 40 },
    HeatmapZone { name: "Exit B", x: 80, y: 70, intensity: 60 },
    HeatmapZone { name: "VIP", x: 30, y: 75, intensity: 30 },
    HeatmapZone { name: "Parking", x: 60, y: 85, intensity: 25 },
];

/// Heatmap legend cut points (intensity %).
pub const HEATMAP_THRESHOLDS: Thresholds = Thresholds::new(50, 70);

/// Copy for the mobile alert mockup.
pub mod mobile {
    pub const YOUR_ZONE: &str = "Food Court, Section B";
    pub const ALERT_TITLE: &str = "EMERGENCY ALERT";
    pub const ALERT_BODY: &str = "High Crowd Density Detected. Proceed to Nearest Safe Exit.";
    pub const ALERT_SOURCE: &str = "Just now • PublicRush";
    pub const SAFE_EXIT: &str = "Exit B, Gate 3";
    pub const SAFE_EXIT_DISTANCE: &str = "120m ahead • ~2 min walk";
    pub const SAFE_ZONE: &str = "Open field near Parking Lot C";
    pub const SAFE_ZONE_STATUS: &str = "Capacity: Available • Crowd: Low";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DensityConfig;

    #[test]
    fn test_zone_summary_with_command_center_cuts() {
        let cuts = DensityConfig::command_center().thresholds;
        let summary = ZoneSummary::from_zones(ZONES, &cuts);
        assert_eq!(summary, ZoneSummary { low: 3, medium: 2, high: 1 });
        assert_eq!(summary.total(), ZONES.len());
    }

    #[test]
    fn test_one_camera_offline() {
        assert_eq!(cameras_online(CAMERA_FEEDS), 3);
        let offline: Vec<_> =
            CAMERA_FEEDS.iter().filter(|f| f.status == FeedStatus::Offline).collect();
        assert_eq!(offline.len(), 1);
        assert_eq!(offline[0].name, "CAM-04: Exit B");
    }

    #[test]
    fn test_heatmap_bands() {
        let bands: Vec<Band> =
            HEATMAP_ZONES.iter().map(|z| HEATMAP_THRESHOLDS.classify(z.intensity)).collect();
        assert_eq!(
            bands,
            vec![Band::High, Band::Medium, Band::Low, Band::Medium, Band::Low, Band::Low]
        );
    }

    #[test]
    fn test_alert_log_severity_labels() {
        assert_eq!(ALERT_LOG[0].severity.label(), "CRITICAL");
        assert!(Severity::Critical > Severity::Warning);
    }
}
