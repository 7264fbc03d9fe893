//! In-memory arena of drivers, passengers and trips.
//!
//! Entities live in load-order vectors with an id→index map beside each one.
//! Load order matters: trip lists and dispatch tie-breaks both follow it.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::entities::{
    Driver, DriverId, DriverStatus, Passenger, PassengerId, Trip, TripId, TripParams,
};
use crate::error::{check_id, InvalidArgument, LoadError, Result};
use crate::records::{DriverRecord, PassengerRecord, RecordLoader, TripRecord};

/// Naive timestamp layout accepted alongside RFC 3339; read as UTC.
const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Default)]
pub struct Repository {
    drivers: Vec<Driver>,
    passengers: Vec<Passenger>,
    trips: Vec<Trip>,
    driver_index: HashMap<DriverId, usize>,
    passenger_index: HashMap<PassengerId, usize>,
    trip_index: HashMap<TripId, usize>,
}

impl Repository {
    /// Loads drivers, then passengers, then trips from `loader`.
    pub fn load<L: RecordLoader>(loader: &L) -> std::result::Result<Self, LoadError<L::Error>> {
        let drivers = loader.load_drivers().map_err(LoadError::Source)?;
        let passengers = loader.load_passengers().map_err(LoadError::Source)?;
        let trips = loader.load_trips().map_err(LoadError::Source)?;
        Ok(Self::from_records(drivers, passengers, trips)?)
    }

    pub fn from_records(
        drivers: Vec<DriverRecord>,
        passengers: Vec<PassengerRecord>,
        trips: Vec<TripRecord>,
    ) -> Result<Self> {
        let mut repository = Self::default();
        for record in drivers {
            repository.insert_driver(record)?;
        }
        for record in passengers {
            repository.insert_passenger(record)?;
        }
        for record in trips {
            repository.insert_trip(record)?;
        }
        debug!(
            drivers = repository.drivers.len(),
            passengers = repository.passengers.len(),
            trips = repository.trips.len(),
            "repository loaded"
        );
        Ok(repository)
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Fails on an absent, zero or negative id; a well-formed id with no
    /// matching driver is `Ok(None)`.
    pub fn find_driver(&self, id: Option<i64>) -> Result<Option<&Driver>> {
        let id = DriverId(check_id(id)?);
        Ok(self.driver(id))
    }

    /// Same id rule as [`Repository::find_driver`].
    pub fn find_passenger(&self, id: Option<i64>) -> Result<Option<&Passenger>> {
        let id = PassengerId(check_id(id)?);
        Ok(self.passenger(id))
    }

    pub fn find_trip(&self, id: Option<i64>) -> Result<Option<&Trip>> {
        let id = TripId(check_id(id)?);
        Ok(self.trip(id))
    }

    pub fn driver(&self, id: DriverId) -> Option<&Driver> {
        self.driver_index.get(&id).map(|&idx| &self.drivers[idx])
    }

    pub fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.passenger_index.get(&id).map(|&idx| &self.passengers[idx])
    }

    pub fn trip(&self, id: TripId) -> Option<&Trip> {
        self.trip_index.get(&id).map(|&idx| &self.trips[idx])
    }

    /// A driver's trips in load/assignment order.
    pub fn trips_for_driver(&self, id: DriverId) -> impl Iterator<Item = &Trip> + '_ {
        self.driver(id)
            .map(Driver::trips)
            .unwrap_or_default()
            .iter()
            .filter_map(move |trip_id| self.trip(*trip_id))
    }

    /// A passenger's trips in load/request order.
    pub fn trips_for_passenger(&self, id: PassengerId) -> impl Iterator<Item = &Trip> + '_ {
        self.passenger(id)
            .map(Passenger::trips)
            .unwrap_or_default()
            .iter()
            .filter_map(move |trip_id| self.trip(*trip_id))
    }

    /// Id for the next dispatched trip: trip count + 1, or one past the
    /// largest existing id when that is already taken.
    pub fn next_trip_id(&self) -> TripId {
        let candidate = TripId(self.trips.len() as u64 + 1);
        if !self.trip_index.contains_key(&candidate) {
            return candidate;
        }
        let max = self.trip_index.keys().map(|id| id.0).max().unwrap_or(0);
        TripId(max + 1)
    }

    /// Appends a constructed trip and links it to both participants.
    ///
    /// The trip's participants must already be present; callers resolve them
    /// before building the trip, so this cannot fail halfway through.
    pub(crate) fn commit_trip(&mut self, trip: Trip) -> &Trip {
        let driver_idx = self.driver_index[&trip.driver()];
        let passenger_idx = self.passenger_index[&trip.passenger()];
        self.drivers[driver_idx].add_trip(trip.id());
        self.passengers[passenger_idx].add_trip(trip.id());

        let trip_idx = self.trips.len();
        self.trip_index.insert(trip.id(), trip_idx);
        self.trips.push(trip);
        &self.trips[trip_idx]
    }

    /// Flips the driver to unavailable and commits the trip in one step.
    pub(crate) fn commit_dispatch(&mut self, trip: Trip) -> &Trip {
        let driver_idx = self.driver_index[&trip.driver()];
        self.drivers[driver_idx].mark_unavailable();
        self.commit_trip(trip)
    }

    fn insert_driver(&mut self, record: DriverRecord) -> Result<()> {
        let id = DriverId(check_id(record.id)?);
        if self.driver_index.contains_key(&id) {
            return Err(InvalidArgument::DuplicateId {
                kind: "driver",
                id: id.0,
            }
            .into());
        }
        let status: DriverStatus = record.status.parse()?;
        trace!(driver = %id, %status, "driver loaded");
        self.driver_index.insert(id, self.drivers.len());
        self.drivers
            .push(Driver::new(id, record.name, &record.vehicle_code, status));
        Ok(())
    }

    fn insert_passenger(&mut self, record: PassengerRecord) -> Result<()> {
        let id = PassengerId(check_id(record.id)?);
        if self.passenger_index.contains_key(&id) {
            return Err(InvalidArgument::DuplicateId {
                kind: "passenger",
                id: id.0,
            }
            .into());
        }
        self.passenger_index.insert(id, self.passengers.len());
        self.passengers
            .push(Passenger::new(id, record.name, record.phone));
        Ok(())
    }

    fn insert_trip(&mut self, record: TripRecord) -> Result<()> {
        let id = TripId(check_id(record.id)?);
        if self.trip_index.contains_key(&id) {
            return Err(InvalidArgument::DuplicateId {
                kind: "trip",
                id: id.0,
            }
            .into());
        }

        let driver = self
            .find_driver(record.driver_id)?
            .map(Driver::id)
            .ok_or(InvalidArgument::DriverNotFound(
                record.driver_id.unwrap_or_default() as u64,
            ))?;
        let passenger = self
            .find_passenger(record.passenger_id)?
            .map(Passenger::id)
            .ok_or(InvalidArgument::PassengerNotFound(
                record.passenger_id.unwrap_or_default() as u64,
            ))?;

        let trip = Trip::new(TripParams {
            id,
            driver,
            passenger,
            start_time: parse_timestamp("start_time", &record.start_time)?,
            end_time: non_blank(record.end_time.as_deref())
                .map(|text| parse_timestamp("end_time", text))
                .transpose()?,
            cost: non_blank(record.cost.as_deref())
                .map(parse_cost)
                .transpose()?,
            rating: record.rating,
        })?;
        self.commit_trip(trip);
        Ok(())
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|text| !text.is_empty())
}

/// Accepts RFC 3339 or `YYYY-MM-DD HH:MM:SS` (UTC).
pub fn parse_timestamp(
    field: &'static str,
    text: &str,
) -> std::result::Result<DateTime<Utc>, InvalidArgument> {
    let text = text.trim();
    DateTime::parse_from_rfc3339(text)
        .map(|ts| ts.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(text, NAIVE_TIMESTAMP_FORMAT).map(|ts| ts.and_utc())
        })
        .map_err(|_| InvalidArgument::Malformed {
            field,
            value: text.to_string(),
        })
}

pub fn parse_cost(text: &str) -> std::result::Result<Decimal, InvalidArgument> {
    text.trim()
        .parse::<Decimal>()
        .map_err(|_| InvalidArgument::Malformed {
            field: "cost",
            value: text.to_string(),
        })
}
