// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use amt_core::report::{format_time, render_text};
use amt_core::{AircraftLimits, ComparisonTable, DemandVector, Schedule, SeatSolver, TimeBudget};

fn demand() -> DemandVector {
    DemandVector::new(2289.0, 404.0, 139.0, 0.0)
}

fn a320neo() -> AircraftLimits {
    AircraftLimits::new("Airbus A320neo", 195, 19.65)
}

#[test]
fn test_cycle_of_125_minutes_gives_eleven_rows() {
    let solver = SeatSolver::default();
    let schedule = Schedule::TimeLimited(TimeBudget::from_minutes(125));
    let table = solver.build_comparison_table(&demand(), &a320neo(), &schedule);

    match &table {
        ComparisonTable::TimeLimited {
            cycle_minutes,
            rows,
        } => {
            assert_eq!(*cycle_minutes, 125);
            assert_eq!(rows.len(), 11);
            assert_eq!(rows[0].remaining_minutes, Some(1440 - 125));
            assert_eq!(rows[10].remaining_minutes, Some(1440 - 125 * 11));
        }
        other => panic!("Expected a time-limited table, got {:?}", other),
    }
}

#[test]
fn test_cycle_over_a_day_is_exceeded_not_empty() {
    let solver = SeatSolver::default();
    let schedule = Schedule::TimeLimited(TimeBudget::from_minutes(1500));
    let table = solver.build_comparison_table(&demand(), &a320neo(), &schedule);

    assert_eq!(table, ComparisonTable::TimeExceeded { cycle_minutes: 1500 });
    assert!(table.is_time_exceeded());
    assert!(table.rows().is_empty());
    assert!(table.first_valid().is_none());
}

#[test]
fn test_longest_dropdown_cycle_is_exceeded() {
    let solver = SeatSolver::default();
    let budget = TimeBudget::from_dropdown(24, 45).unwrap();
    let table = solver.build_comparison_table(&demand(), &a320neo(), &Schedule::TimeLimited(budget));
    assert!(table.is_time_exceeded());
}

#[test]
fn test_exact_day_fits_one_round_trip_with_nothing_left() {
    let solver = SeatSolver::default();
    let budget = TimeBudget::from_dropdown(24, 0).unwrap();
    let table = solver.build_comparison_table(&demand(), &a320neo(), &Schedule::TimeLimited(budget));

    assert_eq!(table.rows().len(), 1);
    assert_eq!(table.rows()[0].remaining_minutes, Some(0));
    assert_eq!(format_time(0), "0h 0m");
}

#[test]
fn test_disabled_toggle_ignores_budget() {
    let solver = SeatSolver::default();
    let schedule = Schedule::from_toggle(false, TimeBudget::from_minutes(1500));
    let table = solver.build_comparison_table(&demand(), &a320neo(), &schedule);

    assert!(matches!(table, ComparisonTable::FixedCeiling { .. }));
    assert_eq!(table.rows().len(), 8);
    assert!(table.rows().iter().all(|r| r.remaining_minutes.is_none()));
}

#[test]
fn test_remaining_minutes_follow_day_length() {
    let mut params = amt_core::SolverParameters::canonical();
    params.minutes_per_day = 600;
    let solver = SeatSolver::new(params);

    // 600 / 250 = 2 rows
    let table = solver.build_comparison_table(
        &demand(),
        &a320neo(),
        &Schedule::TimeLimited(TimeBudget::from_minutes(250)),
    );
    let remaining: Vec<Option<i64>> = table.rows().iter().map(|r| r.remaining_minutes).collect();
    assert_eq!(remaining, vec![Some(350), Some(100)]);
}

#[test]
fn test_negative_remaining_renders_overtime() {
    assert_eq!(format_time(-15), "OVERTIME");

    let table = ComparisonTable::TimeExceeded { cycle_minutes: 1485 };
    let text = render_text(&table, &a320neo());
    assert!(text.contains("24h 45m"));
    assert!(text.contains("exceeds 24 hours"));
}
