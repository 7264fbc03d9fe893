//! Raw records handed to the repository by an external tabular source.
//!
//! Records are unvalidated: ids may be blank, timestamps and costs are still
//! text. [`crate::repository::Repository::load`] turns them into entities.

use std::convert::Infallible;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DriverRecord {
    pub id: Option<i64>,
    pub name: String,
    #[serde(alias = "vin")]
    pub vehicle_code: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PassengerRecord {
    pub id: Option<i64>,
    pub name: String,
    #[serde(alias = "phone_num")]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TripRecord {
    pub id: Option<i64>,
    pub driver_id: Option<i64>,
    pub passenger_id: Option<i64>,
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
}

/// Source of driver, passenger and trip records.
///
/// Implementations only read and decode; every semantic check happens when
/// the repository builds entities from the records.
pub trait RecordLoader {
    type Error: std::error::Error + 'static;

    fn load_drivers(&self) -> Result<Vec<DriverRecord>, Self::Error>;

    fn load_passengers(&self) -> Result<Vec<PassengerRecord>, Self::Error>;

    fn load_trips(&self) -> Result<Vec<TripRecord>, Self::Error>;
}

/// Records held in memory, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecords {
    pub drivers: Vec<DriverRecord>,
    pub passengers: Vec<PassengerRecord>,
    pub trips: Vec<TripRecord>,
}

impl MemoryRecords {
    pub fn with_driver(mut self, id: i64, name: &str, vehicle_code: &str, status: &str) -> Self {
        self.drivers.push(DriverRecord {
            id: Some(id),
            name: name.to_string(),
            vehicle_code: vehicle_code.to_string(),
            status: status.to_string(),
        });
        self
    }

    pub fn with_passenger(mut self, id: i64, name: &str, phone: &str) -> Self {
        self.passengers.push(PassengerRecord {
            id: Some(id),
            name: name.to_string(),
            phone: phone.to_string(),
        });
        self
    }

    pub fn with_trip(mut self, trip: TripRecord) -> Self {
        self.trips.push(trip);
        self
    }
}

impl RecordLoader for MemoryRecords {
    type Error = Infallible;

    fn load_drivers(&self) -> Result<Vec<DriverRecord>, Self::Error> {
        Ok(self.drivers.clone())
    }

    fn load_passengers(&self) -> Result<Vec<PassengerRecord>, Self::Error> {
        Ok(self.passengers.clone())
    }

    fn load_trips(&self) -> Result<Vec<TripRecord>, Self::Error> {
        Ok(self.trips.clone())
    }
}
