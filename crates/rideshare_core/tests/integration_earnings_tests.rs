mod support;

use rideshare_core::earnings::{driver_summary, passenger_summary, EarningsConfig};
use rideshare_core::entities::{DriverId, PassengerId};
use rideshare_core::test_helpers::completed_trip;
use rust_decimal::Decimal;
use support::ledger::LedgerBuilder;

#[test]
fn driver_summary_skips_in_progress_trips() {
    let mut rated_three = completed_trip(3, 1, 1, 500, 800);
    rated_three.rating = Some(3);
    rated_three.cost = Some("21.65".to_string());

    let repository = LedgerBuilder::new()
        .available_driver(1)
        .passenger(1)
        .completed(1, 1, 0, 60)
        .in_progress(1, 1, 100)
        .records()
        .with_trip(rated_three);
    let repository = rideshare_core::Repository::load(&repository).expect("load");

    let summary = driver_summary(&repository, DriverId(1), &EarningsConfig::default())
        .expect("summary");
    assert_eq!(summary.completed_trips, 2);
    assert_eq!(summary.average_rating, Some(4.0));
    // (10.00 - 1.65) * 0.8 + (21.65 - 1.65) * 0.8
    assert_eq!(summary.total_revenue, Decimal::new(2268, 2));
}

#[test]
fn driver_without_ratings_has_no_average() {
    let repository = LedgerBuilder::new()
        .available_driver(1)
        .passenger(1)
        .in_progress(1, 1, 0)
        .repository();
    let summary = driver_summary(&repository, DriverId(1), &EarningsConfig::default())
        .expect("summary");
    assert_eq!(summary.completed_trips, 0);
    assert_eq!(summary.average_rating, None);
    assert_eq!(summary.total_revenue, Decimal::ZERO);
}

#[test]
fn custom_fee_and_share_apply() {
    let repository = LedgerBuilder::new()
        .available_driver(1)
        .passenger(1)
        .completed(1, 1, 0, 60)
        .repository();
    let config = EarningsConfig::default()
        .with_trip_fee(Decimal::ZERO)
        .with_driver_share(Decimal::ONE);
    let summary = driver_summary(&repository, DriverId(1), &config).expect("summary");
    assert_eq!(summary.total_revenue, Decimal::new(10, 0));
}

#[test]
fn passenger_summary_totals_cost_and_time() {
    let repository = LedgerBuilder::new()
        .available_driver(1)
        .available_driver(2)
        .passenger(1)
        .completed(1, 1, 0, 60)
        .completed(2, 1, 100, 250)
        .in_progress(1, 1, 400)
        .repository();

    let summary = passenger_summary(&repository, PassengerId(1)).expect("summary");
    assert_eq!(summary.completed_trips, 2);
    assert_eq!(summary.net_expenditures, Decimal::new(2000, 2));
    assert_eq!(summary.total_time_spent_secs, 210);
}

#[test]
fn summaries_for_unknown_ids_are_none() {
    let repository = LedgerBuilder::new().repository();
    assert!(driver_summary(&repository, DriverId(5), &EarningsConfig::default()).is_none());
    assert!(passenger_summary(&repository, PassengerId(5)).is_none());
}
