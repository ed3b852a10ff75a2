// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::aircraft::AircraftLimits;
use crate::solver::{ComparisonTable, ConfigurationCandidate};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::io::Write;

/// `"3h 20m"`, or `"OVERTIME"` once the schedule runs past the day.
pub fn format_time(total_minutes: i64) -> String {
    if total_minutes < 0 {
        return "OVERTIME".to_string();
    }
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}

fn format_limit(value: f64, unit: &str) -> String {
    if value == 0.0 {
        "unlimited".to_string()
    } else {
        format!("{}{}", value, unit)
    }
}

fn status(row: &ConfigurationCandidate) -> String {
    match row.limiting_factor {
        None => "OK".to_string(),
        Some(factor) => format!("Over {}", factor),
    }
}

/// Fixed-width table for terminal output.
pub fn render_text(table: &ComparisonTable, aircraft: &AircraftLimits) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} (capacity {}, payload {})",
        aircraft.model,
        format_limit(f64::from(aircraft.max_capacity), ""),
        format_limit(aircraft.max_payload, " t")
    );

    if let ComparisonTable::TimeExceeded { cycle_minutes } = table {
        let _ = writeln!(
            out,
            "Round trip time of {} exceeds 24 hours. No flights fit in a day.",
            format_time(i64::from(*cycle_minutes))
        );
        return out;
    }

    if let ComparisonTable::TimeLimited { cycle_minutes, .. } = table {
        let _ = writeln!(
            out,
            "Round trip time: {}",
            format_time(i64::from(*cycle_minutes))
        );
    }

    let timed = matches!(table, ComparisonTable::TimeLimited { .. });

    let _ = write!(
        out,
        "{:>5} {:>6} {:>6} {:>6} {:>6} {:>9} {:>9}  {:<24}",
        "Trips", "Eco", "Bus", "First", "Cargo", "Payload", "Space", "Status"
    );
    if timed {
        let _ = write!(out, " {:>9}", "Time left");
    }
    out.push('\n');

    for row in table.rows() {
        let _ = write!(
            out,
            "{:>5} {:>6} {:>6} {:>6} {:>6} {:>9.2} {:>9.2}  {:<24}",
            row.round_trips,
            row.seats.economy,
            row.seats.business,
            row.seats.first,
            row.seats.cargo,
            row.seats.total_payload,
            row.seats.total_space_used,
            status(row)
        );
        if let Some(remaining) = row.remaining_minutes {
            let _ = write!(out, " {:>9}", format_time(remaining));
        }
        out.push('\n');
    }

    match table.first_valid() {
        Some(best) => {
            let _ = writeln!(
                out,
                "Best fit: {} round trip(s) with {}/{}/{} seats and {} cargo",
                best.round_trips,
                best.seats.economy,
                best.seats.business,
                best.seats.first,
                best.seats.cargo
            );
        }
        None => {
            let _ = writeln!(out, "No configuration fits this aircraft.");
        }
    }

    out
}

/// One CSV record per candidate. A time-exceeded table writes only the header.
pub fn write_csv<W: Write>(table: &ComparisonTable, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "round_trips",
        "economy",
        "business",
        "first",
        "cargo",
        "total_payload",
        "total_space_used",
        "payload_valid",
        "capacity_valid",
        "limiting_factor",
        "remaining_minutes",
    ])
    .context("Failed to write CSV header")?;

    for row in table.rows() {
        wtr.write_record([
            row.round_trips.to_string(),
            row.seats.economy.to_string(),
            row.seats.business.to_string(),
            row.seats.first.to_string(),
            row.seats.cargo.to_string(),
            format!("{:.4}", row.seats.total_payload),
            format!("{:.4}", row.seats.total_space_used),
            row.payload_valid.to_string(),
            row.capacity_valid.to_string(),
            row.limiting_factor
                .map(|f| f.label().to_string())
                .unwrap_or_default(),
            row.remaining_minutes
                .map(|m| m.to_string())
                .unwrap_or_default(),
        ])
        .context("Failed to write CSV row")?;
    }

    wtr.flush().context("Failed to flush CSV output")?;
    Ok(())
}
