use super::types::AssignmentCandidate;
use crate::entities::DriverId;

/// Rule for picking one driver out of the candidate pool.
///
/// The dispatcher builds the pool (available drivers with at least one
/// completed trip, in load order) and hands it to the policy; the policy
/// only chooses. An id that is not in the pool is treated like `None`.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use rideshare_core::dispatch::{AssignmentCandidate, AssignmentPolicy, FirstAvailablePolicy};
/// use rideshare_core::entities::DriverId;
///
/// let ended = Utc.with_ymd_and_hms(2016, 2, 9, 12, 0, 0).unwrap();
/// let pool = [
///     AssignmentCandidate { driver: DriverId(4), last_trip_ended_at: ended },
///     AssignmentCandidate { driver: DriverId(2), last_trip_ended_at: ended },
/// ];
/// assert_eq!(FirstAvailablePolicy.select(&pool), Some(DriverId(4)));
/// ```
pub trait AssignmentPolicy: std::fmt::Debug {
    /// Pick a driver from `candidates`, which is never empty.
    /// Returns None if no candidate is acceptable; the request then fails
    /// with `NoDriversAvailable`.
    fn select(&self, candidates: &[AssignmentCandidate]) -> Option<DriverId>;

    /// Short kebab-case name used in logs.
    fn name(&self) -> &'static str;
}
