//! Test helpers for building record fixtures.
//!
//! Times are given as seconds since the Unix epoch so tests can talk about
//! "t=50" and "t=100" directly.

use chrono::{DateTime, TimeZone, Utc};

use crate::records::TripRecord;

/// A well-formed 17-character vehicle code.
pub const VIN: &str = "1C9EVBRM0YBC564DZ";

/// Instant `secs` seconds after the Unix epoch.
///
/// # Panics
///
/// Panics if `secs` is outside chrono's representable range.
pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .expect("timestamp in range")
}

/// Completed trip record with a fixed cost and a rating of 5.
pub fn completed_trip(id: i64, driver: i64, passenger: i64, start: i64, end: i64) -> TripRecord {
    TripRecord {
        id: Some(id),
        driver_id: Some(driver),
        passenger_id: Some(passenger),
        start_time: at(start).to_rfc3339(),
        end_time: Some(at(end).to_rfc3339()),
        cost: Some("10.00".to_string()),
        rating: Some(5),
    }
}

/// Trip record with no end time, cost or rating.
pub fn in_progress_trip(id: i64, driver: i64, passenger: i64, start: i64) -> TripRecord {
    TripRecord {
        id: Some(id),
        driver_id: Some(driver),
        passenger_id: Some(passenger),
        start_time: at(start).to_rfc3339(),
        end_time: None,
        cost: None,
        rating: None,
    }
}
