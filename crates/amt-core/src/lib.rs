// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub mod aircraft;
pub mod demand;
pub mod params;
pub mod report;
pub mod settings;
pub mod solver;

use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

pub use aircraft::{AircraftCatalog, AircraftLimits, AircraftSelection};
pub use demand::{DemandVector, Schedule, TimeBudget};
pub use params::{ConstantSet, SolverParameters};
pub use solver::{ComparisonTable, ConfigurationCandidate, LimitingFactor, SeatAllocation, SeatSolver};

#[derive(Error, Debug)]
pub enum ConfiguratorError {
    #[error("Unknown aircraft model: {0}")]
    UnknownAircraft(String),
    #[error("Flight time hours must be between 2 and 24, got {0}")]
    HoursOutOfRange(u32),
    #[error("Flight time minutes must be 0, 15, 30 or 45, got {0}")]
    MinutesNotQuarter(u32),
    #[error("Could not read a flight duration from '{0}'")]
    InvalidDuration(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Directory holding `settings.json` and any aircraft overlay files.
///
/// Falls back to the working directory when the platform has no config dir
/// (e.g. a stripped-down container without `$HOME`).
pub fn get_config_root() -> PathBuf {
    ProjectDirs::from("org", "amt-configurator", "amt-configurator")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
