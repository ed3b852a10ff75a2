// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use serde::{Deserialize, Serialize};

/// Minutes in a game day. An aircraft cannot fly more than this per day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Round-trip ceiling used when no flight-time budget is active.
pub const DEFAULT_ROUND_TRIP_CAP: u32 = 8;

/// Weight in tonnes of one seat (or one cargo unit) of each class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeatWeights {
    pub economy: f64,
    pub business: f64,
    pub first: f64,
    pub cargo: f64,
}

/// Cabin space a seat consumes, in economy-seat equivalents.
/// Cargo rides in the hold and has no entry here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpaceMultipliers {
    pub economy: f64,
    pub business: f64,
    pub first: f64,
}

/// The named constant tables found in the game calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstantSet {
    /// Measured in-game seat ratios. Used unless a user opts out.
    #[default]
    Canonical,
    /// Rounded 1/2/5 seat sizes used by the quick-estimate variant.
    Simplified,
}

impl ConstantSet {
    pub fn parameters(self) -> SolverParameters {
        match self {
            ConstantSet::Canonical => SolverParameters::canonical(),
            ConstantSet::Simplified => SolverParameters::simplified(),
        }
    }
}

impl std::str::FromStr for ConstantSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "canonical" => Ok(ConstantSet::Canonical),
            "simplified" | "simple" => Ok(ConstantSet::Simplified),
            other => Err(format!("unknown constant set '{}'", other)),
        }
    }
}

/// Every constant the solver reads. Passed in explicitly so a table can be
/// computed against any constant set without touching globals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverParameters {
    pub weights: SeatWeights,
    pub space: SpaceMultipliers,
    #[serde(default = "default_minutes_per_day")]
    pub minutes_per_day: u32,
    #[serde(default = "default_round_trip_cap")]
    pub default_round_trip_cap: u32,
}

fn default_minutes_per_day() -> u32 {
    MINUTES_PER_DAY
}

fn default_round_trip_cap() -> u32 {
    DEFAULT_ROUND_TRIP_CAP
}

impl SolverParameters {
    pub fn canonical() -> Self {
        Self {
            weights: SeatWeights {
                economy: 0.1,
                business: 0.12498942917,
                first: 0.15,
                cargo: 1.0,
            },
            space: SpaceMultipliers {
                economy: 1.0,
                business: 1.80338266394,
                first: 4.20197044351,
            },
            minutes_per_day: MINUTES_PER_DAY,
            default_round_trip_cap: DEFAULT_ROUND_TRIP_CAP,
        }
    }

    pub fn simplified() -> Self {
        Self {
            weights: SeatWeights {
                economy: 0.1,
                business: 0.12458253968253967,
                first: 0.15,
                cargo: 1.0,
            },
            space: SpaceMultipliers {
                economy: 1.0,
                business: 2.0,
                first: 5.0,
            },
            minutes_per_day: MINUTES_PER_DAY,
            default_round_trip_cap: DEFAULT_ROUND_TRIP_CAP,
        }
    }
}

impl Default for SolverParameters {
    fn default() -> Self {
        Self::canonical()
    }
}
