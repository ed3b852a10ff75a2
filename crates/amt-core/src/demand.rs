// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::ConfiguratorError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Hours offered by the flight-time dropdown.
pub const HOURS_RANGE: std::ops::RangeInclusive<u32> = 2..=24;

/// Minutes offered by the flight-time dropdown.
pub const MINUTE_OPTIONS: [u32; 4] = [0, 15, 30, 45];

/// Reads a number the way a form field does: the leading decimal literal
/// counts, everything after it is ignored, and anything unusable is 0.
///
/// Negative and non-finite values also collapse to 0, since demand and
/// aircraft limits are never below zero. Values above [`MAX_FIELD_VALUE`]
/// are clamped to it.
pub fn parse_numeric_field(text: &str) -> f64 {
    static NUM_RE: OnceLock<Regex> = OnceLock::new();
    let num_re = NUM_RE.get_or_init(|| {
        Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").unwrap()
    });

    num_re
        .captures(text)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .map(sanitize)
        .unwrap_or(0.0)
}

/// Keystroke filter for numeric fields: digits with at most one decimal
/// point. Empty text is accepted so a field can be cleared.
pub fn is_acceptable_input(text: &str) -> bool {
    static INPUT_RE: OnceLock<Regex> = OnceLock::new();
    let input_re = INPUT_RE.get_or_init(|| Regex::new(r"^\d*\.?\d*$").unwrap());
    input_re.is_match(text)
}

/// Largest demand or limit value accepted. Every whole number up to here is
/// exact in an `f64`, so per-flight seat counts come out exact as well.
pub const MAX_FIELD_VALUE: f64 = 1e15;

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value.min(MAX_FIELD_VALUE)
    } else {
        0.0
    }
}

/// Total daily one-way demand on a route.
/// Passengers for the three seat classes, tonnes for cargo.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DemandVector {
    pub economy: f64,
    pub business: f64,
    pub first: f64,
    pub cargo: f64,
}

impl DemandVector {
    pub fn new(economy: f64, business: f64, first: f64, cargo: f64) -> Self {
        Self {
            economy: sanitize(economy),
            business: sanitize(business),
            first: sanitize(first),
            cargo: sanitize(cargo),
        }
    }

    pub fn parse(economy: &str, business: &str, first: &str, cargo: &str) -> Self {
        Self {
            economy: parse_numeric_field(economy),
            business: parse_numeric_field(business),
            first: parse_numeric_field(first),
            cargo: parse_numeric_field(cargo),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.economy == 0.0 && self.business == 0.0 && self.first == 0.0 && self.cargo == 0.0
    }
}

/// Duration of one full round trip (out and back), in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBudget {
    pub cycle_minutes: u32,
}

impl TimeBudget {
    pub fn from_minutes(cycle_minutes: u32) -> Self {
        Self { cycle_minutes }
    }

    /// Builds a budget from the hour/minute dropdown pair, rejecting values
    /// the dropdowns never offer.
    pub fn from_dropdown(hours: u32, minutes: u32) -> Result<Self, ConfiguratorError> {
        if !HOURS_RANGE.contains(&hours) {
            return Err(ConfiguratorError::HoursOutOfRange(hours));
        }
        if !MINUTE_OPTIONS.contains(&minutes) {
            return Err(ConfiguratorError::MinutesNotQuarter(minutes));
        }
        Ok(Self::from_minutes(hours * 60 + minutes))
    }

    /// Parses a free-form duration: `2h30m`, `2h`, `150m`, `2:30` or a bare
    /// minute count.
    pub fn parse(input: &str) -> Result<Self, ConfiguratorError> {
        let text = input.trim().to_lowercase();
        let invalid = || ConfiguratorError::InvalidDuration(input.to_string());

        static HM_RE: OnceLock<Regex> = OnceLock::new();
        let hm_re = HM_RE.get_or_init(|| {
            Regex::new(r"^(\d+)\s*h(?:\s*(\d+)\s*m(?:in)?)?$").unwrap()
        });
        static M_RE: OnceLock<Regex> = OnceLock::new();
        let m_re = M_RE.get_or_init(|| Regex::new(r"^(\d+)\s*(?:m|min)?$").unwrap());
        static CLOCK_RE: OnceLock<Regex> = OnceLock::new();
        let clock_re = CLOCK_RE.get_or_init(|| Regex::new(r"^(\d+):([0-5]\d)$").unwrap());

        let number = |s: &str| s.parse::<u32>().map_err(|_| invalid());

        let minutes = if let Some(caps) = hm_re.captures(&text) {
            let hours = number(&caps[1])?;
            let mins = match caps.get(2) {
                Some(m) => number(m.as_str())?,
                None => 0,
            };
            hours
                .checked_mul(60)
                .and_then(|h| h.checked_add(mins))
                .ok_or_else(invalid)?
        } else if let Some(caps) = clock_re.captures(&text) {
            let hours = number(&caps[1])?;
            let mins = number(&caps[2])?;
            hours
                .checked_mul(60)
                .and_then(|h| h.checked_add(mins))
                .ok_or_else(invalid)?
        } else if let Some(caps) = m_re.captures(&text) {
            number(&caps[1])?
        } else {
            return Err(invalid());
        };

        Ok(Self::from_minutes(minutes))
    }
}

/// How many round trips the comparison table should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Schedule {
    /// Up to the default round-trip cap, ignoring flight time.
    #[default]
    Fixed,
    /// As many round trips as fit in one day.
    TimeLimited(TimeBudget),
}

impl Schedule {
    /// Mirrors the time-limit toggle: the budget only applies while enabled.
    pub fn from_toggle(enabled: bool, budget: TimeBudget) -> Self {
        if enabled {
            Schedule::TimeLimited(budget)
        } else {
            Schedule::Fixed
        }
    }
}
