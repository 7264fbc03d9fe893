pub mod dispatcher;
pub mod first_available;
pub mod longest_idle;
pub mod policy;
pub mod types;

use serde::Deserialize;

pub use dispatcher::TripDispatcher;
pub use first_available::FirstAvailablePolicy;
pub use longest_idle::LongestIdlePolicy;
pub use policy::AssignmentPolicy;
pub use types::AssignmentCandidate;

/// Which assignment policy the dispatcher uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentPolicyKind {
    /// Driver idle the longest since their last completed trip.
    #[default]
    LongestIdle,
    /// First eligible driver in load order.
    FirstAvailable,
}

impl AssignmentPolicyKind {
    pub fn build(self) -> Box<dyn AssignmentPolicy> {
        match self {
            AssignmentPolicyKind::LongestIdle => Box::new(LongestIdlePolicy),
            AssignmentPolicyKind::FirstAvailable => Box::new(FirstAvailablePolicy),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub policy: AssignmentPolicyKind,
}

impl DispatchConfig {
    pub fn with_policy(mut self, policy: AssignmentPolicyKind) -> Self {
        self.policy = policy;
        self
    }
}
