// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::params::{ConstantSet, SolverParameters};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Named constant table to calculate with.
    pub constant_set: ConstantSet,
    /// Full custom constant table. Takes precedence over `constant_set`.
    pub parameters: Option<SolverParameters>,
    /// Model preselected when none is given on the command line.
    pub default_aircraft: Option<String>,
    /// Extra aircraft JSON merged into the built-in catalog.
    pub aircraft_overlay: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            constant_set: ConstantSet::Canonical,
            parameters: None,
            default_aircraft: Some("Aérospatiale Caravelle 12".to_string()),
            aircraft_overlay: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    pub fn solver_parameters(&self) -> SolverParameters {
        self.parameters
            .unwrap_or_else(|| self.constant_set.parameters())
    }

    /// `None` when `log_level` is not a level name `log` understands.
    pub fn log_level_filter(&self) -> Option<log::LevelFilter> {
        self.log_level.trim().parse().ok()
    }
}

#[derive(Debug, Clone)]
pub struct SettingsManager {
    config_path: PathBuf,
}

impl SettingsManager {
    pub fn new() -> Self {
        Self::with_path(Self::default_path())
    }

    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    pub fn default_path() -> PathBuf {
        crate::get_config_root().join("settings.json")
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<Settings> {
        if !self.config_path.exists() {
            log::debug!(
                "No settings file at {:?}, using defaults",
                self.config_path
            );
            return Ok(Settings::default());
        }

        let content =
            fs::read_to_string(&self.config_path).context("Failed to read settings.json")?;

        serde_json::from_str(&content).context("Failed to parse settings.json")
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
        }

        let content =
            serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;

        fs::write(&self.config_path, content).context("Failed to write settings.json")
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let manager = SettingsManager::with_path(dir.path().join("settings.json"));
        assert_eq!(manager.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(
            Settings::default().log_level_filter(),
            Some(log::LevelFilter::Warn)
        );
        let mut settings = Settings {
            log_level: "DEBUG".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.log_level_filter(), Some(log::LevelFilter::Debug));
        settings.log_level = "verbose".to_string();
        assert_eq!(settings.log_level_filter(), None);
    }

    #[test]
    fn test_parameters_override_constant_set() {
        let mut settings = Settings {
            constant_set: ConstantSet::Simplified,
            ..Settings::default()
        };
        assert_eq!(settings.solver_parameters(), SolverParameters::simplified());

        let mut custom = SolverParameters::canonical();
        custom.default_round_trip_cap = 12;
        settings.parameters = Some(custom);
        assert_eq!(settings.solver_parameters().default_round_trip_cap, 12);
    }
}
