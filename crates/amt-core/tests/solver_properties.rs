// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use amt_core::aircraft::AircraftCatalog;
use amt_core::{
    AircraftLimits, ComparisonTable, ConstantSet, DemandVector, LimitingFactor, Schedule,
    SeatSolver, TimeBudget,
};

// --- Helpers ---

fn demand_grid() -> Vec<DemandVector> {
    vec![
        DemandVector::new(0.0, 0.0, 0.0, 0.0),
        DemandVector::new(2289.0, 404.0, 139.0, 0.0),
        DemandVector::new(1.0, 3.0, 5.0, 7.0),
        DemandVector::new(12.5, 0.0, 99.9, 250.0),
        DemandVector::new(100000.0, 25000.0, 4000.0, 1200.0),
        DemandVector::parse("20000000000", "9000000000", "1e15", "1e30"),
    ]
}

fn solvers() -> Vec<SeatSolver> {
    vec![
        SeatSolver::new(ConstantSet::Canonical.parameters()),
        SeatSolver::new(ConstantSet::Simplified.parameters()),
    ]
}

// --- Per-configuration arithmetic ---

#[test]
fn test_seats_are_floor_of_demand_share() {
    let solver = SeatSolver::default();
    for demand in demand_grid() {
        for round_trips in 1..=12u32 {
            let seats = solver.evaluate_configuration(&demand, round_trips);
            let divisor = 2.0 * f64::from(round_trips);
            assert_eq!(seats.economy, (demand.economy / divisor).floor() as u64);
            assert_eq!(seats.business, (demand.business / divisor).floor() as u64);
            assert_eq!(seats.first, (demand.first / divisor).floor() as u64);
            assert_eq!(seats.cargo, (demand.cargo / divisor).floor() as u64);
        }
    }
}

#[test]
fn test_seats_never_increase_with_more_round_trips() {
    let solver = SeatSolver::default();
    for demand in demand_grid() {
        let mut previous = solver.evaluate_configuration(&demand, 1);
        for round_trips in 2..=20u32 {
            let seats = solver.evaluate_configuration(&demand, round_trips);
            assert!(seats.economy <= previous.economy);
            assert!(seats.business <= previous.business);
            assert!(seats.first <= previous.first);
            assert!(seats.cargo <= previous.cargo);
            previous = seats;
        }
    }
}

#[test]
fn test_totals_are_non_negative() {
    for solver in solvers() {
        for demand in demand_grid() {
            for round_trips in 0..=10u32 {
                let seats = solver.evaluate_configuration(&demand, round_trips);
                assert!(seats.total_payload >= 0.0);
                assert!(seats.total_space_used >= 0.0);
            }
        }
    }
}

#[test]
fn test_simplified_constants_use_whole_seat_sizes() {
    let solver = SeatSolver::new(ConstantSet::Simplified.parameters());
    let seats = solver.evaluate_configuration(&DemandVector::new(2289.0, 404.0, 139.0, 0.0), 3);
    assert_eq!(seats.total_space_used, 381.0 + 67.0 * 2.0 + 23.0 * 5.0);
}

// --- Table validity ---

#[test]
fn test_unconstrained_limits_are_always_valid() {
    let solver = SeatSolver::default();
    let payload_only = AircraftLimits::new("Payload only", 0, 1.0);
    let capacity_only = AircraftLimits::new("Capacity only", 1, 0.0);

    for demand in demand_grid() {
        let table = solver.build_comparison_table(&demand, &AircraftLimits::unconstrained(), &Schedule::Fixed);
        assert!(table.rows().iter().all(|r| r.is_valid()));

        let table = solver.build_comparison_table(&demand, &payload_only, &Schedule::Fixed);
        assert!(table.rows().iter().all(|r| r.capacity_valid));

        let table = solver.build_comparison_table(&demand, &capacity_only, &Schedule::Fixed);
        assert!(table.rows().iter().all(|r| r.payload_valid));
    }
}

#[test]
fn test_limiting_factor_matches_validity_flags() {
    let solver = SeatSolver::default();
    let catalog = AircraftCatalog::builtin();
    let demand = DemandVector::new(2289.0, 404.0, 139.0, 40.0);

    for aircraft in catalog.iter() {
        let table = solver.build_comparison_table(&demand, aircraft, &Schedule::Fixed);
        for row in table.rows() {
            let expected = match (row.payload_valid, row.capacity_valid) {
                (false, false) => Some(LimitingFactor::PayloadAndCapacity),
                (false, true) => Some(LimitingFactor::Payload),
                (true, false) => Some(LimitingFactor::Capacity),
                (true, true) => None,
            };
            assert_eq!(row.limiting_factor, expected, "{} x{}", aircraft.model, row.round_trips);
        }
    }
}

#[test]
fn test_a320neo_capacity_invalid_at_three_round_trips() {
    let solver = SeatSolver::default();
    let catalog = AircraftCatalog::builtin();
    let a320neo = catalog.find("Airbus A320neo").unwrap();
    let demand = DemandVector::parse("2289", "404", "139", "0");

    let table = solver.build_comparison_table(&demand, a320neo, &Schedule::Fixed);
    let row = &table.rows()[2];

    assert_eq!(row.round_trips, 3);
    assert_eq!(
        (row.seats.economy, row.seats.business, row.seats.first, row.seats.cargo),
        (381, 67, 23, 0)
    );
    assert!((row.seats.total_space_used - 598.48).abs() < 0.01);
    assert!(!row.capacity_valid);
    assert!(!row.payload_valid);
    assert_eq!(row.limiting_factor, Some(LimitingFactor::PayloadAndCapacity));
}

#[test]
fn test_rows_ascend_from_one() {
    let solver = SeatSolver::default();
    let table = solver.build_comparison_table(
        &DemandVector::new(500.0, 50.0, 10.0, 5.0),
        &AircraftLimits::new("Boeing 737-800", 189, 20.3),
        &Schedule::Fixed,
    );
    let trips: Vec<u32> = table.rows().iter().map(|r| r.round_trips).collect();
    assert_eq!(trips, (1..=8).collect::<Vec<_>>());
}

#[test]
fn test_first_valid_picks_fewest_round_trips() {
    let solver = SeatSolver::default();
    let table = solver.build_comparison_table(
        &DemandVector::new(1500.0, 200.0, 50.0, 0.0),
        &AircraftLimits::new("Airbus A320neo", 195, 19.65),
        &Schedule::Fixed,
    );
    let best = table.first_valid().unwrap();
    assert_eq!(best.round_trips, 6);
    assert!(best.is_valid());
    assert!(table
        .rows()
        .iter()
        .take_while(|r| r.round_trips < best.round_trips)
        .all(|r| !r.is_valid()));
}

#[test]
fn test_table_is_idempotent() {
    let solver = SeatSolver::default();
    let demand = DemandVector::new(2289.0, 404.0, 139.0, 12.0);
    let aircraft = AircraftLimits::new("Airbus A320neo", 195, 19.65);
    let schedule = Schedule::TimeLimited(TimeBudget::from_minutes(125));

    let first = solver.build_comparison_table(&demand, &aircraft, &schedule);
    let second = solver.build_comparison_table(&demand, &aircraft, &schedule);
    assert_eq!(first, second);
}

#[test]
fn test_custom_limits_match_catalog_limits() {
    let solver = SeatSolver::default();
    let catalog = AircraftCatalog::builtin();
    let demand = DemandVector::new(900.0, 120.0, 30.0, 10.0);

    let from_catalog = catalog.find("Boeing 757-200").unwrap().clone();
    let custom = AircraftLimits::custom("239", "26.7");

    let a = solver.build_comparison_table(&demand, &from_catalog, &Schedule::Fixed);
    let b = solver.build_comparison_table(&demand, &custom, &Schedule::Fixed);
    assert_eq!(a.rows(), b.rows());
    assert!(!matches!(b, ComparisonTable::TimeExceeded { .. }));
}

#[test]
fn test_half_seat_capacity_still_limits_rows() {
    let solver = SeatSolver::default();
    let custom = AircraftLimits::custom("0.5", "0");
    let table = solver.build_comparison_table(
        &DemandVector::new(100.0, 0.0, 0.0, 0.0),
        &custom,
        &Schedule::Fixed,
    );

    assert_eq!(table.rows().len(), 8);
    for row in table.rows() {
        assert!(!row.capacity_valid, "x{}", row.round_trips);
        assert!(row.payload_valid);
        assert_eq!(row.limiting_factor, Some(LimitingFactor::Capacity));
    }
    assert!(table.first_valid().is_none());
}

#[test]
fn test_demand_beyond_u32_range_is_exact() {
    let solver = SeatSolver::default();
    let demand = DemandVector::parse("20000000000", "0", "0", "0");
    let table = solver.build_comparison_table(&demand, &AircraftLimits::unconstrained(), &Schedule::Fixed);

    assert_eq!(table.rows()[0].seats.economy, 10_000_000_000);
    assert_eq!(table.rows()[7].seats.economy, 1_250_000_000);
    assert!(table.rows().iter().all(|r| r.is_valid()));
}
