#![allow(dead_code)]

use chrono::{DateTime, Utc};
use rideshare_core::clock::ManualClock;
use rideshare_core::dispatch::{DispatchConfig, TripDispatcher};
use rideshare_core::records::MemoryRecords;
use rideshare_core::repository::Repository;
use rideshare_core::test_helpers::{at, completed_trip, in_progress_trip, VIN};

/// Instant used as "now" by dispatchers built from [`LedgerBuilder`].
pub fn request_time() -> DateTime<Utc> {
    at(1_000_000)
}

/// Builder for small ledgers where trips are described by driver, passenger
/// and start/end seconds. Trip ids are assigned in insertion order from 1.
#[derive(Clone, Debug, Default)]
pub struct LedgerBuilder {
    records: MemoryRecords,
    next_trip_id: i64,
}

impl LedgerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn available_driver(self, id: i64) -> Self {
        self.driver(id, "AVAILABLE")
    }

    pub fn unavailable_driver(self, id: i64) -> Self {
        self.driver(id, "UNAVAILABLE")
    }

    pub fn driver(mut self, id: i64, status: &str) -> Self {
        self.records = self
            .records
            .with_driver(id, &format!("Driver {id}"), VIN, status);
        self
    }

    pub fn passenger(mut self, id: i64) -> Self {
        self.records = self
            .records
            .with_passenger(id, &format!("Passenger {id}"), "555-0100");
        self
    }

    pub fn completed(mut self, driver: i64, passenger: i64, start: i64, end: i64) -> Self {
        self.next_trip_id += 1;
        self.records = self
            .records
            .with_trip(completed_trip(self.next_trip_id, driver, passenger, start, end));
        self
    }

    pub fn in_progress(mut self, driver: i64, passenger: i64, start: i64) -> Self {
        self.next_trip_id += 1;
        self.records = self
            .records
            .with_trip(in_progress_trip(self.next_trip_id, driver, passenger, start));
        self
    }

    pub fn records(&self) -> MemoryRecords {
        self.records.clone()
    }

    pub fn repository(&self) -> Repository {
        Repository::load(&self.records).expect("fixture records load")
    }

    pub fn dispatcher(&self) -> TripDispatcher<ManualClock> {
        self.dispatcher_with(DispatchConfig::default())
    }

    pub fn dispatcher_with(&self, config: DispatchConfig) -> TripDispatcher<ManualClock> {
        TripDispatcher::with_clock(self.repository(), config, ManualClock::new(request_time()))
    }
}
