// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Seat and payload arithmetic.
//!
//! Daily demand is split evenly across every one-way leg flown in a day.
//! For each candidate round-trip count the solver works out how many seats
//! of each class a single flight needs, then checks the resulting weight
//! and cabin space against the aircraft.

use crate::aircraft::AircraftLimits;
use crate::demand::{DemandVector, Schedule};
use crate::params::SolverParameters;
use serde::{Deserialize, Serialize};

/// Per-flight seat counts for one round-trip count, plus their totals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeatAllocation {
    pub economy: u64,
    pub business: u64,
    pub first: u64,
    pub cargo: u64,
    /// Tonnes, cargo included.
    pub total_payload: f64,
    /// Economy-seat equivalents, cargo excluded.
    pub total_space_used: f64,
}

/// Which aircraft limit a configuration breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitingFactor {
    Payload,
    Capacity,
    PayloadAndCapacity,
}

impl LimitingFactor {
    pub fn classify(payload_valid: bool, capacity_valid: bool) -> Option<Self> {
        match (payload_valid, capacity_valid) {
            (false, false) => Some(LimitingFactor::PayloadAndCapacity),
            (false, true) => Some(LimitingFactor::Payload),
            (true, false) => Some(LimitingFactor::Capacity),
            (true, true) => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LimitingFactor::Payload => "Payload",
            LimitingFactor::Capacity => "Capacity",
            LimitingFactor::PayloadAndCapacity => "Payload & Capacity",
        }
    }
}

impl std::fmt::Display for LimitingFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationCandidate {
    pub round_trips: u32,
    #[serde(flatten)]
    pub seats: SeatAllocation,
    pub payload_valid: bool,
    pub capacity_valid: bool,
    pub limiting_factor: Option<LimitingFactor>,
    /// Minutes left in the day after flying `round_trips` cycles. Negative
    /// means the schedule does not fit. Only set under a time budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_minutes: Option<i64>,
}

impl ConfigurationCandidate {
    pub fn is_valid(&self) -> bool {
        self.payload_valid && self.capacity_valid
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComparisonTable {
    /// Round trips 1 up to the default cap.
    FixedCeiling { rows: Vec<ConfigurationCandidate> },
    /// Round trips 1 up to however many cycles fit in a day.
    TimeLimited {
        cycle_minutes: u32,
        rows: Vec<ConfigurationCandidate>,
    },
    /// A single cycle is longer than a day, so nothing can be scheduled.
    TimeExceeded { cycle_minutes: u32 },
}

impl ComparisonTable {
    pub fn rows(&self) -> &[ConfigurationCandidate] {
        match self {
            ComparisonTable::FixedCeiling { rows } => rows,
            ComparisonTable::TimeLimited { rows, .. } => rows,
            ComparisonTable::TimeExceeded { .. } => &[],
        }
    }

    pub fn is_time_exceeded(&self) -> bool {
        matches!(self, ComparisonTable::TimeExceeded { .. })
    }

    /// Fewest round trips that fit the aircraft on both limits.
    pub fn first_valid(&self) -> Option<&ConfigurationCandidate> {
        self.rows().iter().find(|row| row.is_valid())
    }
}

/// Pure calculator over a fixed set of [`SolverParameters`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SeatSolver {
    params: SolverParameters,
}

impl SeatSolver {
    pub fn new(params: SolverParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SolverParameters {
        &self.params
    }

    /// Seats per flight when daily demand is spread over `round_trips`
    /// round trips. Fractional leftovers are dropped, never rounded up.
    pub fn evaluate_configuration(&self, demand: &DemandVector, round_trips: u32) -> SeatAllocation {
        if round_trips == 0 {
            return SeatAllocation::default();
        }

        let divisor = 2.0 * f64::from(round_trips);
        let per_leg = |total: f64| (total / divisor).floor() as u64;

        let economy = per_leg(demand.economy);
        let business = per_leg(demand.business);
        let first = per_leg(demand.first);
        let cargo = per_leg(demand.cargo);

        let w = &self.params.weights;
        let s = &self.params.space;

        let total_payload = economy as f64 * w.economy
            + business as f64 * w.business
            + first as f64 * w.first
            + cargo as f64 * w.cargo;

        let total_space_used =
            economy as f64 * s.economy + business as f64 * s.business + first as f64 * s.first;

        SeatAllocation {
            economy,
            business,
            first,
            cargo,
            total_payload,
            total_space_used,
        }
    }

    /// Highest round-trip count the table should cover, or `None` when a
    /// single cycle already overruns the day.
    pub fn round_trip_limit(&self, schedule: &Schedule) -> Option<u32> {
        match schedule {
            Schedule::TimeLimited(budget) if budget.cycle_minutes > 0 => {
                let limit = self.params.minutes_per_day / budget.cycle_minutes;
                (limit > 0).then_some(limit)
            }
            _ => Some(self.params.default_round_trip_cap),
        }
    }

    pub fn build_comparison_table(
        &self,
        demand: &DemandVector,
        aircraft: &AircraftLimits,
        schedule: &Schedule,
    ) -> ComparisonTable {
        let cycle_minutes = match schedule {
            Schedule::TimeLimited(budget) if budget.cycle_minutes > 0 => Some(budget.cycle_minutes),
            _ => None,
        };

        let Some(limit) = self.round_trip_limit(schedule) else {
            let cycle_minutes = cycle_minutes.unwrap_or_default();
            log::warn!(
                "Round trip of {} min exceeds the {} min day; no schedule possible",
                cycle_minutes,
                self.params.minutes_per_day
            );
            return ComparisonTable::TimeExceeded { cycle_minutes };
        };

        log::debug!(
            "Building table for '{}' over 1..={} round trips",
            aircraft.model,
            limit
        );

        let rows = (1..=limit)
            .map(|round_trips| self.candidate(demand, aircraft, round_trips, cycle_minutes))
            .collect();

        match cycle_minutes {
            Some(cycle_minutes) => ComparisonTable::TimeLimited {
                cycle_minutes,
                rows,
            },
            None => ComparisonTable::FixedCeiling { rows },
        }
    }

    fn candidate(
        &self,
        demand: &DemandVector,
        aircraft: &AircraftLimits,
        round_trips: u32,
        cycle_minutes: Option<u32>,
    ) -> ConfigurationCandidate {
        let seats = self.evaluate_configuration(demand, round_trips);

        let payload_valid =
            aircraft.max_payload == 0.0 || seats.total_payload <= aircraft.max_payload;
        let capacity_valid = aircraft.max_capacity == 0
            || seats.total_space_used <= f64::from(aircraft.max_capacity);

        let remaining_minutes = cycle_minutes.map(|cycle| {
            i64::from(self.params.minutes_per_day) - i64::from(cycle) * i64::from(round_trips)
        });

        ConfigurationCandidate {
            round_trips,
            seats,
            payload_valid,
            capacity_valid,
            limiting_factor: LimitingFactor::classify(payload_valid, capacity_valid),
            remaining_minutes,
        }
    }
}
