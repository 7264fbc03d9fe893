//! Ledger entities: drivers, passengers and the trips that link them.
//!
//! Trips hold participant ids rather than references; drivers and passengers
//! keep an ordered list of trip ids. The [`crate::repository::Repository`]
//! is the arena that resolves ids back to entities.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::{InvalidArgument, TripField, ValidationError};

/// Length of a valid vehicle identification code.
pub const VEHICLE_CODE_LEN: usize = 17;

/// Placeholder stored when the source vehicle code has the wrong length.
pub const PLACEHOLDER_VEHICLE_CODE: &str = "00000000000000000";

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DriverId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PassengerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TripId(pub u64);

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverStatus {
    Available,
    Unavailable,
}

impl DriverStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DriverStatus::Available => "AVAILABLE",
            DriverStatus::Unavailable => "UNAVAILABLE",
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriverStatus {
    type Err = InvalidArgument;

    /// Case-sensitive: only the exact upper-case names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVAILABLE" => Ok(DriverStatus::Available),
            "UNAVAILABLE" => Ok(DriverStatus::Unavailable),
            other => Err(InvalidArgument::Malformed {
                field: "status",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    id: DriverId,
    name: String,
    vehicle_code: String,
    status: DriverStatus,
    trips: Vec<TripId>,
}

impl Driver {
    /// Builds a driver with an empty trip history. A vehicle code that is not
    /// exactly [`VEHICLE_CODE_LEN`] characters is replaced by the placeholder.
    pub fn new(
        id: DriverId,
        name: impl Into<String>,
        vehicle_code: &str,
        status: DriverStatus,
    ) -> Self {
        let vehicle_code = if vehicle_code.chars().count() == VEHICLE_CODE_LEN {
            vehicle_code.to_string()
        } else {
            PLACEHOLDER_VEHICLE_CODE.to_string()
        };
        Self {
            id,
            name: name.into(),
            vehicle_code,
            status,
            trips: Vec::new(),
        }
    }

    pub fn id(&self) -> DriverId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vehicle_code(&self) -> &str {
        &self.vehicle_code
    }

    pub fn status(&self) -> DriverStatus {
        self.status
    }

    pub fn is_available(&self) -> bool {
        self.status == DriverStatus::Available
    }

    /// Trip ids in load/assignment order.
    pub fn trips(&self) -> &[TripId] {
        &self.trips
    }

    pub(crate) fn add_trip(&mut self, trip: TripId) {
        self.trips.push(trip);
    }

    pub(crate) fn mark_unavailable(&mut self) {
        self.status = DriverStatus::Unavailable;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    id: PassengerId,
    name: String,
    phone: String,
    trips: Vec<TripId>,
}

impl Passenger {
    pub fn new(id: PassengerId, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
            trips: Vec::new(),
        }
    }

    pub fn id(&self) -> PassengerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Trip ids in load/request order.
    pub fn trips(&self) -> &[TripId] {
        &self.trips
    }

    pub(crate) fn add_trip(&mut self, trip: TripId) {
        self.trips.push(trip);
    }
}

/// Inputs for [`Trip::new`]. The rating is kept wide so out-of-range values
/// reach validation instead of being truncated.
#[derive(Debug, Clone, PartialEq)]
pub struct TripParams {
    pub id: TripId,
    pub driver: DriverId,
    pub passenger: PassengerId,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub cost: Option<Decimal>,
    pub rating: Option<i64>,
}

impl TripParams {
    /// A trip that has started but has no end time, cost or rating yet.
    pub fn in_progress(
        id: TripId,
        driver: DriverId,
        passenger: PassengerId,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            driver,
            passenger,
            start_time,
            end_time: None,
            cost: None,
            rating: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    id: TripId,
    driver: DriverId,
    passenger: PassengerId,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    cost: Option<Decimal>,
    rating: Option<u8>,
}

impl Trip {
    pub fn new(params: TripParams) -> Result<Self, ValidationError> {
        let rating = match params.rating {
            Some(rating) if !(MIN_RATING..=MAX_RATING).contains(&rating) => {
                return Err(ValidationError::new(TripField::Rating, rating));
            }
            Some(rating) => Some(rating as u8),
            None => None,
        };

        if let Some(end_time) = params.end_time {
            if end_time < params.start_time {
                return Err(ValidationError::new(
                    TripField::EndTime,
                    end_time.to_rfc3339(),
                ));
            }
        }

        Ok(Self {
            id: params.id,
            driver: params.driver,
            passenger: params.passenger,
            start_time: params.start_time,
            end_time: params.end_time,
            cost: params.cost,
            rating,
        })
    }

    pub fn id(&self) -> TripId {
        self.id
    }

    pub fn driver(&self) -> DriverId {
        self.driver
    }

    pub fn passenger(&self) -> PassengerId {
        self.passenger
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn cost(&self) -> Option<Decimal> {
        self.cost
    }

    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    pub fn is_in_progress(&self) -> bool {
        self.end_time.is_none()
    }

    /// Elapsed time from start to end in whole seconds; `None` while in progress.
    pub fn duration(&self) -> Option<i64> {
        self.end_time
            .map(|end| (end - self.start_time).num_seconds())
    }
}
