//! Application configuration.
//!
//! Values are layered, later sources winning:
//!
//! 1. Built-in defaults ([`AppConfig::default`])
//! 2. An optional TOML file passed with `--config`
//! 3. `PUBLICRUSH_*` environment variables, with `__` separating nested keys
//! 4. Command-line flags (applied by the binary)
//!
//! ```toml
//! start_view = "/monitoring"
//! alarm_hold_ms = 5000
//!
//! [command_center]
//! interval_ms = 1000
//!
//! [monitoring.thresholds]
//! elevated_above = 1100
//! critical_above = 1300
//! ```
//!
//! ```bash
//! PUBLICRUSH_COMMAND_CENTER__MAX_STEP=8 publicrush
//! ```

use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app::View;
use crate::data::DensityConfig;

const ENV_PREFIX: &str = "PUBLICRUSH";

/// Command center density is a percentage.
const PERCENT_RANGE: std::ops::RangeInclusive<i64> = 0..=100;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("{section}: min ({min}) is greater than max ({max})")]
    InvertedBounds {
        section: &'static str,
        min: i64,
        max: i64,
    },

    #[error("{section}: initial value {initial} is outside {min}..={max}")]
    InitialOutOfBounds {
        section: &'static str,
        initial: i64,
        min: i64,
        max: i64,
    },

    #[error("{section}: max_step must not be negative (got {max_step})")]
    NegativeStep { section: &'static str, max_step: i64 },

    #[error("{section}: elevated_above ({elevated}) must be below critical_above ({critical})")]
    InvertedThresholds {
        section: &'static str,
        elevated: i64,
        critical: i64,
    },

    #[error("{section}: bounds {min}..={max} must lie within the percentage range 0..=100")]
    PercentOutOfRange {
        section: &'static str,
        min: i64,
        max: i64,
    },

    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },

    #[error("unknown view route: {0} (expected /, /monitoring, /alerts or /authorities)")]
    UnknownRoute(String),
}

/// Color theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Pick based on the terminal background.
    #[default]
    Auto,
    Dark,
    Light,
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// View mounted at startup.
    pub start_view: View,
    /// Density simulator on the command center.
    pub command_center: DensityConfig,
    /// People-count simulator on the live monitoring page.
    pub monitoring: DensityConfig,
    /// How long the emergency alarm stays active.
    pub alarm_hold_ms: u64,
    /// How long a transient notice stays on screen.
    pub notice_ms: u64,
    /// Fixed RNG seed. Entropy-seeded when absent.
    pub seed: Option<u64>,
    pub theme: ThemeChoice,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_view: View::CommandCenter,
            command_center: DensityConfig::command_center(),
            monitoring: DensityConfig::live_monitoring(),
            alarm_hold_ms: 5000,
            notice_ms: 5000,
            seed: None,
            theme: ThemeChoice::Auto,
        }
    }
}

impl AppConfig {
    /// Load defaults, then the optional file, then the environment, and validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, environment())
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let config: AppConfig = builder
            .add_source(env)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Check bounds, cut points and durations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_density("command_center", &self.command_center)?;
        validate_density("monitoring", &self.monitoring)?;

        let cc = &self.command_center;
        if !PERCENT_RANGE.contains(&cc.min) || !PERCENT_RANGE.contains(&cc.max) {
            return Err(ConfigError::PercentOutOfRange {
                section: "command_center",
                min: cc.min,
                max: cc.max,
            });
        }

        if self.alarm_hold_ms == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "alarm_hold_ms",
            });
        }
        if self.notice_ms == 0 {
            return Err(ConfigError::ZeroDuration { field: "notice_ms" });
        }
        Ok(())
    }

    /// Set the start view from a route such as `/monitoring`.
    pub fn set_start_route(&mut self, route: &str) -> Result<(), ConfigError> {
        self.start_view =
            View::from_route(route).ok_or_else(|| ConfigError::UnknownRoute(route.to_string()))?;
        Ok(())
    }
}

/// `PUBLICRUSH_*` variables, `__` between nested keys.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn validate_density(section: &'static str, config: &DensityConfig) -> Result<(), ConfigError> {
    if config.min > config.max {
        return Err(ConfigError::InvertedBounds {
            section,
            min: config.min,
            max: config.max,
        });
    }
    if !(config.min..=config.max).contains(&config.initial) {
        return Err(ConfigError::InitialOutOfBounds {
            section,
            initial: config.initial,
            min: config.min,
            max: config.max,
        });
    }
    if config.max_step < 0 {
        return Err(ConfigError::NegativeStep {
            section,
            max_step: config.max_step,
        });
    }
    if !config.thresholds.is_ordered() {
        return Err(ConfigError::InvertedThresholds {
            section,
            elevated: config.thresholds.elevated_above,
            critical: config.thresholds.critical_above,
        });
    }
    if config.interval_ms == 0 {
        return Err(ConfigError::ZeroDuration {
            field: match section {
                "command_center" => "command_center.interval_ms",
                _ => "monitoring.interval_ms",
            },
        });
    }
    Ok(())
}
