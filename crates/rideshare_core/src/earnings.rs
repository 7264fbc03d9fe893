//! Per-driver and per-passenger aggregates over completed trips.
//!
//! In-progress trips carry no cost, rating or end time and are skipped.

use rust_decimal::Decimal;

use crate::entities::{DriverId, PassengerId, Trip};
use crate::repository::Repository;

/// Flat fee taken off every trip before the driver's share: 1.65.
pub const DEFAULT_TRIP_FEE: Decimal = Decimal::from_parts(165, 0, 0, false, 2);

/// Fraction of the post-fee amount paid to the driver: 0.8.
pub const DEFAULT_DRIVER_SHARE: Decimal = Decimal::from_parts(8, 0, 0, false, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarningsConfig {
    pub trip_fee: Decimal,
    pub driver_share: Decimal,
}

impl Default for EarningsConfig {
    fn default() -> Self {
        Self {
            trip_fee: DEFAULT_TRIP_FEE,
            driver_share: DEFAULT_DRIVER_SHARE,
        }
    }
}

impl EarningsConfig {
    pub fn with_trip_fee(mut self, trip_fee: Decimal) -> Self {
        self.trip_fee = trip_fee;
        self
    }

    pub fn with_driver_share(mut self, driver_share: Decimal) -> Self {
        self.driver_share = driver_share;
        self
    }

    /// Driver payout for one trip cost; a cost below the fee pays nothing.
    pub fn driver_payout(&self, cost: Decimal) -> Decimal {
        (cost - self.trip_fee).max(Decimal::ZERO) * self.driver_share
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriverSummary {
    pub driver: DriverId,
    pub completed_trips: usize,
    /// Mean of rated trips; `None` when no trip carries a rating.
    pub average_rating: Option<f64>,
    pub total_revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerSummary {
    pub passenger: PassengerId,
    pub completed_trips: usize,
    pub net_expenditures: Decimal,
    pub total_time_spent_secs: i64,
}

pub fn driver_summary(
    repository: &Repository,
    driver: DriverId,
    config: &EarningsConfig,
) -> Option<DriverSummary> {
    repository.driver(driver)?;

    let completed: Vec<&Trip> = repository
        .trips_for_driver(driver)
        .filter(|trip| !trip.is_in_progress())
        .collect();

    let ratings: Vec<u8> = completed.iter().filter_map(|trip| trip.rating()).collect();
    let average_rating = if ratings.is_empty() {
        None
    } else {
        let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
        Some(f64::from(sum) / ratings.len() as f64)
    };

    let total_revenue = completed
        .iter()
        .filter_map(|trip| trip.cost())
        .map(|cost| config.driver_payout(cost))
        .sum::<Decimal>()
        .round_dp(2);

    Some(DriverSummary {
        driver,
        completed_trips: completed.len(),
        average_rating,
        total_revenue,
    })
}

pub fn passenger_summary(
    repository: &Repository,
    passenger: PassengerId,
) -> Option<PassengerSummary> {
    repository.passenger(passenger)?;

    let mut summary = PassengerSummary {
        passenger,
        completed_trips: 0,
        net_expenditures: Decimal::ZERO,
        total_time_spent_secs: 0,
    };
    for trip in repository.trips_for_passenger(passenger) {
        let Some(duration) = trip.duration() else {
            continue;
        };
        summary.completed_trips += 1;
        summary.total_time_spent_secs += duration;
        summary.net_expenditures += trip.cost().unwrap_or_default();
    }
    Some(summary)
}
