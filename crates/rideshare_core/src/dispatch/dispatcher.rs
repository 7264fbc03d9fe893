//! Trip dispatcher: owns the repository for a run and turns passenger
//! requests into in-progress trips.

use tracing::debug;

use super::policy::AssignmentPolicy;
use super::types::AssignmentCandidate;
use super::DispatchConfig;
use crate::clock::{Clock, SystemClock};
use crate::entities::{Driver, Passenger, PassengerId, Trip, TripParams};
use crate::error::{check_id, InvalidArgument, LoadError, Result, RideShareError};
use crate::records::RecordLoader;
use crate::repository::Repository;

#[derive(Debug)]
pub struct TripDispatcher<C: Clock = SystemClock> {
    repository: Repository,
    policy: Box<dyn AssignmentPolicy>,
    clock: C,
}

impl TripDispatcher<SystemClock> {
    pub fn new(repository: Repository) -> Self {
        Self::with_clock(repository, DispatchConfig::default(), SystemClock)
    }

    /// Builds the repository from `loader` and wraps it with default settings.
    pub fn load<L: RecordLoader>(loader: &L) -> std::result::Result<Self, LoadError<L::Error>> {
        Ok(Self::new(Repository::load(loader)?))
    }
}

impl<C: Clock> TripDispatcher<C> {
    pub fn with_clock(repository: Repository, config: DispatchConfig, clock: C) -> Self {
        Self {
            repository,
            policy: config.policy.build(),
            clock,
        }
    }

    /// Swaps in a custom assignment policy.
    pub fn with_policy(mut self, policy: Box<dyn AssignmentPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn drivers(&self) -> &[Driver] {
        self.repository.drivers()
    }

    pub fn passengers(&self) -> &[Passenger] {
        self.repository.passengers()
    }

    pub fn trips(&self) -> &[Trip] {
        self.repository.trips()
    }

    pub fn find_driver(&self, id: Option<i64>) -> Result<Option<&Driver>> {
        self.repository.find_driver(id)
    }

    pub fn find_passenger(&self, id: Option<i64>) -> Result<Option<&Passenger>> {
        self.repository.find_passenger(id)
    }

    /// Available drivers with at least one completed trip, in load order.
    ///
    /// Drivers who have never taken a trip, or whose trips are all still in
    /// progress, have no idle time and stay out of the pool.
    pub fn candidate_pool(&self) -> Vec<AssignmentCandidate> {
        self.repository
            .drivers()
            .iter()
            .filter(|driver| driver.is_available())
            .filter_map(|driver| {
                self.repository
                    .trips_for_driver(driver.id())
                    .filter_map(Trip::end_time)
                    .max()
                    .map(|last_trip_ended_at| AssignmentCandidate {
                        driver: driver.id(),
                        last_trip_ended_at,
                    })
            })
            .collect()
    }

    /// Picks the driver for the next request without changing any state.
    ///
    /// A policy answer outside the pool counts as no answer.
    pub fn assign_driver(&self) -> Result<&Driver> {
        let pool = self.candidate_pool();
        debug!(
            candidates = pool.len(),
            policy = self.policy.name(),
            "assigning driver"
        );
        if pool.is_empty() {
            return Err(RideShareError::NoDriversAvailable);
        }

        self.policy
            .select(&pool)
            .filter(|id| pool.iter().any(|candidate| candidate.driver == *id))
            .and_then(|id| self.repository.driver(id))
            .ok_or(RideShareError::NoDriversAvailable)
    }

    /// Creates an in-progress trip for the passenger with the assigned driver.
    ///
    /// Every check runs before the first mutation, so a failed request leaves
    /// the repository untouched. On success the driver is unavailable and the
    /// trip is on the driver's list, the passenger's list and the trip list.
    pub fn request_trip(&mut self, passenger_id: Option<i64>) -> Result<&Trip> {
        let passenger = PassengerId(check_id(passenger_id)?);
        if self.repository.passenger(passenger).is_none() {
            return Err(InvalidArgument::PassengerNotFound(passenger.0).into());
        }

        let driver = self.assign_driver()?.id();
        let trip = Trip::new(TripParams::in_progress(
            self.repository.next_trip_id(),
            driver,
            passenger,
            self.clock.now(),
        ))?;

        debug!(trip = %trip.id(), %driver, %passenger, "trip requested");
        Ok(self.repository.commit_dispatch(trip))
    }
}
