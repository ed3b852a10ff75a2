// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::demand::parse_numeric_field;
use crate::ConfiguratorError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One row of the built-in aircraft table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AircraftSpec {
    pub model: &'static str,
    pub max_capacity: u32,
    pub max_payload: f64,
}

const fn spec(model: &'static str, max_capacity: u32, max_payload: f64) -> AircraftSpec {
    AircraftSpec {
        model,
        max_capacity,
        max_payload,
    }
}

/// In-game passenger aircraft: seat-equivalent capacity and payload in tonnes.
/// The 737-800 is listed twice in the game; lookups resolve to the first row.
pub const BUILTIN_AIRCRAFT: &[AircraftSpec] = &[
    spec("Aérospatiale Caravelle 12", 130, 13.0),
    spec("Aérospatiale Concorde", 128, 12.8),
    spec("Airbus A220-100", 135, 15.1),
    spec("Airbus A220-300", 160, 18.71),
    spec("Airbus A300-600R", 360, 36.0),
    spec("Airbus A310-300", 275, 27.5),
    spec("Airbus A318-100", 136, 13.6),
    spec("Airbus A319-100", 160, 16.00),
    spec("Airbus A319-100LR", 160, 16.00),
    spec("Airbus A319neo", 160, 16.00),
    spec("Airbus A320-200", 180, 18.29),
    spec("Airbus A320neo", 195, 19.65),
    spec("Airbus A321-200", 220, 22.0),
    spec("Airbus A321XLR", 244, 24.4),
    spec("Airbus A321neo", 244, 24.4),
    spec("Airbus A321neo-LR", 244, 24.9),
    spec("Airbus A330-200", 406, 40.59),
    spec("Airbus A330-300", 440, 56.0),
    spec("Airbus A330-800", 406, 46.0),
    spec("Airbus A330-900", 460, 46.0),
    spec("Airbus A340-200", 420, 43.5),
    spec("Airbus A340-300", 440, 44.0),
    spec("Airbus A340-500", 475, 47.5),
    spec("Airbus A340-600", 530, 55.6),
    spec("Airbus A350-1000", 522, 56.1),
    spec("Airbus A350-900ULR", 440, 44.0),
    spec("Airbus A350-900XWB", 475, 48.0),
    spec("Airbus A380-800", 853, 89.2),
    spec("ATR 42-500", 50, 5.4),
    spec("ATR 42-600", 50, 5.9),
    spec("ATR 72-500", 74, 7.5),
    spec("ATR 72-600", 74, 8.0),
    spec("Bae Systems Jetstream-41", 30, 3.5),
    spec("Bae Systems RJ-85", 118, 11.8),
    spec("Boeing 707-320C", 219, 34.0),
    spec("Boeing 717-200", 134, 14.5),
    spec("Boeing 737-200", 136, 14.0),
    spec("Boeing 737-300", 149, 16.1),
    spec("Boeing 737-400", 189, 19.9),
    spec("Boeing 737-500", 132, 15.2),
    spec("Boeing 737-600", 132, 15.6),
    spec("Boeing 737-700", 149, 17.5),
    spec("Boeing 737-700ER", 149, 17.0),
    spec("Boeing 737-800", 189, 20.3),
    spec("Boeing 737-800", 189, 21.3),
    spec("Boeing 737-900ER", 220, 23.0),
    spec("Boeing 737-MAX8", 189, 18.9),
    spec("Boeing 737-MAX8-200", 200, 20.0),
    spec("Boeing 737-MAX9", 210, 22.0),
    spec("Boeing 747-100B", 520, 52.0),
    spec("Boeing 747-200B", 595, 68.0),
    spec("Boeing 747-300", 608, 66.0),
    spec("Boeing 747-400", 660, 67.50),
    spec("Boeing 747-8I", 730, 76.0),
    spec("Boeing 757-200", 239, 26.7),
    spec("Boeing 757-300", 295, 31.0),
    spec("Boeing 767-200ER", 290, 35.59),
    spec("Boeing 767-300ER", 351, 43.8),
    spec("Boeing 767-400ER", 409, 46.50),
    spec("Boeing 777-200", 440, 57.4),
    spec("Boeing 777-200ER", 440, 59.4),
    spec("Boeing 777-200LR", 440, 64.0),
    spec("Boeing 777-300", 550, 66.9),
    spec("Boeing 777-300ER", 550, 69.9),
    spec("Boeing 787-10", 440, 44.0),
    spec("Boeing 787-8", 381, 43.3),
    spec("Boeing 787-9", 420, 42.0),
    spec("Boeing B727-100", 131, 13.8),
    spec("Boeing DC-3", 32, 3.2),
    spec("Boeing DC8-55", 189, 20.46),
    spec("Boeing DC8-73", 259, 26.37),
    spec("Boeing MD-11", 410, 52.6),
    spec("Boeing MD-83", 167, 19.20),
    spec("Boeing MD-90-30", 167, 19.00),
    spec("Bombardier CRJ-1000", 104, 12.0),
    spec("Bombardier CRJ-200", 50, 6.1),
    spec("Bombardier CRJ-550", 57, 8.5),
    spec("Bombardier CRJ-700", 78, 8.5),
    spec("Bombardier CRJ-900", 90, 10.6),
    spec("Bombardier Q-200", 40, 4.6),
    spec("Bombardier Q-300", 56, 6.1),
    spec("Bombardier Q-400", 80, 8.5),
    spec("Comac C909", 90, 10.0),
    spec("Comac C919", 174, 18.9),
    spec("Dassault Aviation F900-B", 19, 2.0),
    spec("Dornier D328-100", 32, 4.8),
    spec("Embraer E190-E2", 114, 11.4),
    spec("Embraer E195-E2", 146, 14.6),
    spec("Embraer EMB-120", 30, 3.3),
    spec("Embraer ERJ-135", 37, 4.5),
    spec("Embraer ERJ-140", 44, 5.3),
    spec("Embraer ERJ-145", 50, 5.8),
    spec("Embraer ERJ-145XR", 50, 6.0),
    spec("Embraer ERJ-170", 80, 9.8),
    spec("Embraer ERJ-175", 88, 10.4),
    spec("Embraer ERJ-190", 114, 13.1),
    spec("Embraer ERJ-195", 124, 13.6),
    spec("Fokker F-100", 122, 12.2),
    spec("Gulfstream G650", 19, 2.9),
    spec("Ilyushin Il-114", 64, 6.5),
    spec("Ilyushin Il-96-300", 300, 40.0),
    spec("Ilyushin Il-96M", 436, 45.0),
    spec("IPTN CN-235", 44, 4.5),
    spec("Lockheed L-100", 128, 23.2),
    spec("Lockheed L-1011-200", 400, 46.0),
    spec("Lockheed L-1011-500", 330, 41.0),
    spec("Lockheed L-1049G", 106, 12.0),
    spec("Saab S-2000", 58, 5.9),
    spec("Saab S-340B", 37, 3.7),
    spec("Sukhoi SSJ-100-95", 98, 12.2),
    spec("Tupolev TU-214-210", 210, 25.20),
];

/// Display name used for user-entered limits.
pub const CUSTOM_MODEL_NAME: &str = "Custom Aircraft";

/// Limits the solver checks a configuration against.
/// A zero limit means the dimension is unconstrained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftLimits {
    pub model: String,
    #[serde(alias = "maxCapacity")]
    pub max_capacity: u32,
    #[serde(alias = "maxPayload")]
    pub max_payload: f64,
}

impl AircraftLimits {
    pub fn new(model: impl Into<String>, max_capacity: u32, max_payload: f64) -> Self {
        let max_payload = if max_payload.is_finite() && max_payload > 0.0 {
            max_payload
        } else {
            0.0
        };
        Self {
            model: model.into(),
            max_capacity,
            max_payload,
        }
    }

    /// Limits typed in by the user. Both fields go through the same parsing
    /// as the demand inputs. A fractional capacity rounds up to whole seats,
    /// so only a non-positive entry means unlimited.
    pub fn custom(capacity: &str, payload: &str) -> Self {
        Self::new(
            CUSTOM_MODEL_NAME,
            parse_numeric_field(capacity).ceil() as u32,
            parse_numeric_field(payload),
        )
    }

    pub fn unconstrained() -> Self {
        Self::new(CUSTOM_MODEL_NAME, 0, 0.0)
    }

    pub fn is_payload_constrained(&self) -> bool {
        self.max_payload > 0.0
    }

    pub fn is_capacity_constrained(&self) -> bool {
        self.max_capacity > 0
    }
}

impl From<&AircraftSpec> for AircraftLimits {
    fn from(spec: &AircraftSpec) -> Self {
        Self::new(spec.model, spec.max_capacity, spec.max_payload)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AircraftCatalog {
    entries: Vec<AircraftLimits>,
}

impl AircraftCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_AIRCRAFT.iter().map(AircraftLimits::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AircraftLimits> {
        self.entries.iter()
    }

    pub fn push(&mut self, aircraft: AircraftLimits) {
        self.entries.push(aircraft);
    }

    /// Exact model lookup, ignoring case. The first matching row wins.
    pub fn find(&self, model: &str) -> Option<&AircraftLimits> {
        let wanted = model.trim().to_lowercase();
        self.entries
            .iter()
            .find(|a| a.model.to_lowercase() == wanted)
    }

    /// Case-insensitive substring search, in catalog order.
    pub fn search(&self, fragment: &str) -> Vec<&AircraftLimits> {
        let wanted = fragment.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|a| a.model.to_lowercase().contains(&wanted))
            .collect()
    }

    /// Appends models from a JSON array of `{model, max_capacity, max_payload}`
    /// objects. Returns how many were added.
    pub fn extend_from_json<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, ConfiguratorError> {
        let content = fs::read_to_string(path.as_ref())?;
        let extra: Vec<AircraftLimits> = serde_json::from_str(&content)?;
        let added = extra.len();
        self.entries.extend(
            extra
                .into_iter()
                .map(|a| AircraftLimits::new(a.model, a.max_capacity, a.max_payload)),
        );
        log::debug!(
            "Loaded {} extra aircraft from {:?}",
            added,
            path.as_ref()
        );
        Ok(added)
    }
}

/// Which aircraft the user picked: a catalog row or hand-entered limits.
#[derive(Debug, Clone, PartialEq)]
pub enum AircraftSelection {
    Catalog(String),
    Custom { capacity: String, payload: String },
}

impl AircraftSelection {
    pub fn resolve(&self, catalog: &AircraftCatalog) -> Result<AircraftLimits, ConfiguratorError> {
        match self {
            AircraftSelection::Catalog(model) => catalog
                .find(model)
                .cloned()
                .ok_or_else(|| ConfiguratorError::UnknownAircraft(model.clone())),
            AircraftSelection::Custom { capacity, payload } => {
                Ok(AircraftLimits::custom(capacity, payload))
            }
        }
    }
}
