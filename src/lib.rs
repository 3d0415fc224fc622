//! # publicrush
//!
//! A terminal dashboard for a crowd-safety command center, driven by
//! simulated sensor data.
//!
//! Four views share one shell: a command center with a live crowd density
//! reading, a live monitoring wall with a people count and camera feeds, a
//! mobile alert demo, and an authorities panel with an emergency alarm. The
//! two live metrics come from a bounded random walk that is re-classified
//! into a risk band on every tick.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌──────────┐  │
//! │  │ events  │───▶│   app    │───▶│   ui    │───▶│ Terminal │  │
//! │  │ (input) │    │ (state)  │    │(render) │    │          │  │
//! │  └─────────┘    └────┬─────┘    └─────────┘    └──────────┘  │
//! │                      │                                       │
//! │                      ▼                                       │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐                  │
//! │  │ runtime │───▶│  pages   │───▶│  data   │                  │
//! │  │clock/rng│    │ (mounted)│    │(sim/band)                  │
//! │  └─────────┘    └──────────┘    └─────────┘                  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`runtime`]**: injectable [`Clock`](runtime::Clock) and
//!   [`RandomSource`](runtime::RandomSource), plus the interval and deadline
//!   timers pages schedule with
//! - **[`data`]**: banding, the density simulator, alarm/demo toggles,
//!   trend history and the fixed demo content
//! - **[`pages`]**: per-view state; exactly one page is mounted at a time
//! - **[`app`]**: navigation, actions, transient notices and export
//! - **[`config`]**: layered configuration (defaults, TOML, environment)
//! - **[`ui`]** / **[`events`]**: ratatui rendering and crossterm input
//! - **[`headless`]**: JSON-lines output without a terminal
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Interactive dashboard
//! publicrush
//!
//! # Start on the monitoring wall with a reproducible walk
//! publicrush --view /monitoring --seed 7
//!
//! # Ten readings as JSON lines
//! publicrush --headless --ticks 10
//! ```
//!
//! ### As a library
//!
//! ```
//! use std::time::Duration;
//! use publicrush::{App, AppConfig, ThemeChoice};
//! use publicrush::runtime::{ManualClock, ScriptedRandom};
//!
//! let config = AppConfig {
//!     theme: ThemeChoice::Dark,
//!     ..AppConfig::default()
//! };
//! let clock = ManualClock::new();
//! let mut app = App::new(
//!     config,
//!     Box::new(clock.clone()),
//!     Box::new(ScriptedRandom::new([20])),
//! );
//!
//! clock.advance(Duration::from_millis(2000));
//! let readings = app.update();
//! assert_eq!(readings[0].value, 87);
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod headless;
pub mod pages;
pub mod runtime;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, View};
pub use config::{AppConfig, ConfigError, ThemeChoice};
pub use data::{Band, BandScale, DensityConfig, DensitySimulator, Reading, Thresholds};
pub use pages::Page;
