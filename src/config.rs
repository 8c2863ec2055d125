//! Planner configuration.
//!
//! The reference implementation hard-coded its limits (100 events, 48
//! thirty-minute slots). Here they are explicit configuration, loadable from
//! a TOML file with serde defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PlannerError;

/// Capacity and slot-granularity settings for the planner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Maximum number of events the store accepts.
    #[serde(default = "default_max_events")]
    pub max_events: usize,
    /// Width of a discrete slot used by the alternative-slot search.
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: u32,
    /// Day horizon in minutes. Events must end at or before this boundary.
    #[serde(default = "default_day_minutes")]
    pub day_minutes: u32,
}

fn default_max_events() -> usize {
    100
}

fn default_slot_minutes() -> u32 {
    30
}

fn default_day_minutes() -> u32 {
    crate::models::MINUTES_PER_DAY
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_events: default_max_events(),
            slot_minutes: default_slot_minutes(),
            day_minutes: default_day_minutes(),
        }
    }
}

impl PlannerConfig {
    /// Number of discrete slots in the configured day.
    pub fn slot_count(&self) -> u32 {
        self.day_minutes / self.slot_minutes
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.max_events == 0 {
            return Err(PlannerError::Configuration(
                "max_events must be at least 1".to_string(),
            ));
        }
        if self.slot_minutes == 0 {
            return Err(PlannerError::Configuration(
                "slot_minutes must be positive".to_string(),
            ));
        }
        if self.day_minutes < self.slot_minutes || self.day_minutes % self.slot_minutes != 0 {
            return Err(PlannerError::Configuration(format!(
                "day_minutes ({}) must be a positive multiple of slot_minutes ({})",
                self.day_minutes, self.slot_minutes
            )));
        }
        Ok(())
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PlannerError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            PlannerError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: PlannerConfig = toml::from_str(&content).map_err(|e| {
            PlannerError::Configuration(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `scheduler.toml` in the current directory, then the
    /// parent directory.
    pub fn from_default_location() -> Result<Self, PlannerError> {
        let search_paths = vec![
            PathBuf::from("scheduler.toml"),
            PathBuf::from("../scheduler.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(PlannerError::Configuration(
            "No scheduler.toml found in standard locations".to_string(),
        ))
    }
}
