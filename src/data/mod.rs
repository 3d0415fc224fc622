//! Simulation state and static content behind the dashboard pages.
//!
//! ## Submodules
//!
//! - [`band`]: Two-cut-point risk banding ([`Band`], [`Thresholds`], [`BandScale`])
//! - [`density`]: The bounded density random walk ([`DensitySimulator`])
//! - [`toggle`]: Emergency alarm and emergency demo state machines
//! - [`history`]: Rolling window of readings for the trend sparkline
//! - [`fixtures`]: Zones, feeds, logs and other fixed demo content
//!
//! ## Tick Flow
//!
//! ```text
//! Interval::poll(now)
//!        │  (one per elapsed period)
//!        ▼
//! DensitySimulator::tick(rng)
//!        │
//!        ├──▶ Reading { value, band }   (band = Thresholds::classify)
//!        ├──▶ alert_visible = band.is_top()
//!        └──▶ DensityHistory::record()  (for sparklines)
//! ```

pub mod band;
pub mod density;
pub mod fixtures;
pub mod history;
pub mod toggle;

pub use band::{Band, BandScale, Thresholds};
pub use density::{DensityConfig, DensitySimulator, Reading};
pub use history::DensityHistory;
pub use toggle::{AlarmToggle, DemoToggle, ToggleState};
