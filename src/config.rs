//! Configuration file support.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/cycle-engine/config.toml`.

use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{CycleProfile, WeekStart};

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileDefaults,

    #[serde(default)]
    pub calendar: CalendarConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Profile used when the settings store has no record yet.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProfileDefaults {
    #[serde(default = "default_cycle_length")]
    pub cycle_length: u32,

    #[serde(default = "default_period_length")]
    pub period_length: u32,

    /// The guest profile's last period started this many days before today.
    #[serde(default = "default_last_period_days_ago")]
    pub last_period_days_ago: u32,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            cycle_length: default_cycle_length(),
            period_length: default_period_length(),
            last_period_days_ago: default_last_period_days_ago(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalendarConfig {
    #[serde(default)]
    pub week_start: WeekStart,

    /// Days shown on each side of the selected day in the strip.
    #[serde(default = "default_strip_radius")]
    pub strip_radius: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            strip_radius: default_strip_radius(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_cycle_length() -> u32 {
    28
}

fn default_period_length() -> u32 {
    5
}

fn default_last_period_days_ago() -> u32 {
    22
}

fn default_strip_radius() -> u32 {
    3
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        if config.profile.cycle_length == 0 {
            return Err(Error::Config("profile.cycle_length must be at least 1".into()));
        }
        Ok(config)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::Config("no config directory on this platform".into()))?;
        Ok(base.join("cycle-engine").join("config.toml"))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Guest profile relative to `today`.
    pub fn default_profile(&self, today: NaiveDate) -> Result<CycleProfile> {
        let defaults = &self.profile;
        let days_ago = defaults.last_period_days_ago;
        let anchor = today
            .checked_sub_days(Days::new(u64::from(days_ago)))
            .ok_or_else(|| Error::InvalidDate(format!("{today} minus {days_ago} days")))?;
        CycleProfile::new(defaults.cycle_length, defaults.period_length, anchor)
    }
}
