use super::policy::AssignmentPolicy;
use super::types::AssignmentCandidate;
use crate::entities::DriverId;

/// First-come-first-served: returns the first candidate in load order,
/// ignoring how long each has been idle. Useful as a baseline against
/// [`super::LongestIdlePolicy`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstAvailablePolicy;

impl AssignmentPolicy for FirstAvailablePolicy {
    fn select(&self, candidates: &[AssignmentCandidate]) -> Option<DriverId> {
        candidates.first().map(|candidate| candidate.driver)
    }

    fn name(&self) -> &'static str {
        "first-available"
    }
}
