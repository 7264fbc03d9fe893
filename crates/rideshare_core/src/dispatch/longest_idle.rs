use super::policy::AssignmentPolicy;
use super::types::AssignmentCandidate;
use crate::entities::DriverId;

/// Longest-idle matching: the driver whose latest completed trip ended
/// earliest gets the request.
///
/// # Algorithm Behavior
///
/// 1. Picks the smallest `last_trip_ended_at`
/// 2. Equal end times go to the candidate that comes first in the pool (load order);
///    `min_by_key` keeps the first of several equal minima
///
/// Time complexity: O(n) in the pool size.
#[derive(Debug, Default, Clone, Copy)]
pub struct LongestIdlePolicy;

impl AssignmentPolicy for LongestIdlePolicy {
    fn select(&self, candidates: &[AssignmentCandidate]) -> Option<DriverId> {
        candidates
            .iter()
            .min_by_key(|candidate| candidate.last_trip_ended_at)
            .map(|candidate| candidate.driver)
    }

    fn name(&self) -> &'static str {
        "longest-idle"
    }
}
