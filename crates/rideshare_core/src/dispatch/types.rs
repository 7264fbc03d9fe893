use chrono::{DateTime, Utc};

use crate::entities::DriverId;

/// One member of the candidate pool as seen by an assignment policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentCandidate {
    pub driver: DriverId,
    /// End time of the driver's most recent completed trip.
    pub last_trip_ended_at: DateTime<Utc>,
}
