mod support;

use rideshare_core::dispatch::{AssignmentPolicyKind, DispatchConfig};
use rideshare_core::entities::{DriverId, DriverStatus, PassengerId};
use rideshare_core::error::{InvalidArgument, RideShareError};
use support::ledger::{request_time, LedgerBuilder};

fn two_driver_ledger() -> LedgerBuilder {
    LedgerBuilder::new()
        .available_driver(1)
        .available_driver(2)
        .passenger(1)
        .passenger(3)
        .completed(1, 1, 40, 100)
        .completed(2, 1, 10, 50)
}

#[test]
fn assigns_driver_idle_the_longest() {
    let dispatcher = two_driver_ledger().dispatcher();
    let driver = dispatcher.assign_driver().expect("driver");
    assert_eq!(driver.id(), DriverId(2));
}

#[test]
fn assignment_uses_each_drivers_latest_trip() {
    // Driver 1's latest trip ends at t=300, driver 2's at t=200, driver 3's at t=250.
    let dispatcher = LedgerBuilder::new()
        .available_driver(1)
        .available_driver(2)
        .available_driver(3)
        .passenger(1)
        .completed(1, 1, 0, 10)
        .completed(2, 1, 0, 200)
        .completed(1, 1, 250, 300)
        .completed(3, 1, 200, 250)
        .completed(2, 1, 0, 20)
        .dispatcher();

    assert_eq!(dispatcher.assign_driver().expect("driver").id(), DriverId(2));
}

#[test]
fn ties_go_to_driver_loaded_first() {
    let dispatcher = LedgerBuilder::new()
        .available_driver(4)
        .available_driver(2)
        .passenger(1)
        .completed(2, 1, 0, 100)
        .completed(4, 1, 0, 100)
        .dispatcher();

    assert_eq!(dispatcher.assign_driver().expect("driver").id(), DriverId(4));
}

#[test]
fn assignment_never_returns_unavailable_or_inexperienced_driver() {
    let dispatcher = LedgerBuilder::new()
        .unavailable_driver(1)
        .available_driver(2)
        .available_driver(3)
        .passenger(1)
        .completed(1, 1, 0, 5)
        .completed(3, 1, 0, 500)
        .dispatcher();

    let driver = dispatcher.assign_driver().expect("driver");
    assert_eq!(driver.id(), DriverId(3));
    assert_eq!(driver.status(), DriverStatus::Available);
    assert!(!driver.trips().is_empty());
}

#[test]
fn assignment_does_not_mutate_state() {
    let dispatcher = two_driver_ledger().dispatcher();
    let _ = dispatcher.assign_driver().expect("driver");
    let _ = dispatcher.assign_driver().expect("driver");
    assert!(dispatcher.drivers().iter().all(|d| d.is_available()));
    assert_eq!(dispatcher.trips().len(), 2);
}

#[test]
fn request_trip_creates_in_progress_trip_atomically() {
    let mut dispatcher = two_driver_ledger().dispatcher();
    let trips_before = dispatcher.trips().len();
    let driver_trips_before = dispatcher
        .repository()
        .driver(DriverId(2))
        .expect("driver")
        .trips()
        .len();
    let passenger_trips_before = dispatcher
        .repository()
        .passenger(PassengerId(3))
        .expect("passenger")
        .trips()
        .len();

    let trip = dispatcher.request_trip(Some(3)).expect("trip").clone();

    assert_eq!(trip.id().0, 3);
    assert_eq!(trip.driver(), DriverId(2));
    assert_eq!(trip.passenger(), PassengerId(3));
    assert_eq!(trip.start_time(), request_time());
    assert!(trip.is_in_progress());
    assert_eq!(trip.cost(), None);
    assert_eq!(trip.rating(), None);
    assert_eq!(trip.duration(), None);

    let repository = dispatcher.repository();
    assert_eq!(repository.trips().len(), trips_before + 1);
    assert_eq!(repository.trips().last(), Some(&trip));

    let driver = repository.driver(DriverId(2)).expect("driver");
    assert_eq!(driver.status(), DriverStatus::Unavailable);
    assert_eq!(driver.trips().len(), driver_trips_before + 1);
    assert_eq!(driver.trips().last(), Some(&trip.id()));

    let passenger = repository.passenger(PassengerId(3)).expect("passenger");
    assert_eq!(passenger.trips().len(), passenger_trips_before + 1);
    assert_eq!(passenger.trips().last(), Some(&trip.id()));
}

#[test]
fn consecutive_requests_use_different_drivers() {
    let mut dispatcher = two_driver_ledger().dispatcher();
    let first = dispatcher.request_trip(Some(1)).expect("first").driver();
    let second = dispatcher.request_trip(Some(3)).expect("second").driver();
    assert_eq!(first, DriverId(2));
    assert_eq!(second, DriverId(1));

    let err = dispatcher.request_trip(Some(1)).unwrap_err();
    assert_eq!(err, RideShareError::NoDriversAvailable);
    assert_eq!(dispatcher.trips().len(), 4);
}

#[test]
fn request_with_bad_id_fails_without_mutation() {
    for bad in [Some(0), Some(-4), None] {
        let mut dispatcher = two_driver_ledger().dispatcher();
        let err = dispatcher.request_trip(bad).unwrap_err();
        assert_eq!(
            err,
            RideShareError::InvalidArgument(InvalidArgument::BadId(bad))
        );
        assert_eq!(dispatcher.trips().len(), 2);
        assert!(dispatcher.drivers().iter().all(|d| d.is_available()));
    }
}

#[test]
fn request_for_unknown_passenger_fails_without_mutation() {
    let mut dispatcher = two_driver_ledger().dispatcher();
    let err = dispatcher.request_trip(Some(99)).unwrap_err();
    assert_eq!(
        err,
        RideShareError::InvalidArgument(InvalidArgument::PassengerNotFound(99))
    );
    assert_eq!(dispatcher.trips().len(), 2);
    assert!(dispatcher.drivers().iter().all(|d| d.is_available()));
}

#[test]
fn request_with_all_drivers_unavailable_leaves_passenger_untouched() {
    let mut dispatcher = LedgerBuilder::new()
        .unavailable_driver(1)
        .unavailable_driver(2)
        .passenger(3)
        .completed(1, 3, 0, 60)
        .completed(2, 3, 0, 90)
        .dispatcher();

    let err = dispatcher.request_trip(Some(3)).unwrap_err();
    assert_eq!(err, RideShareError::NoDriversAvailable);
    assert_eq!(
        dispatcher
            .repository()
            .passenger(PassengerId(3))
            .expect("passenger")
            .trips()
            .len(),
        2
    );
    assert_eq!(dispatcher.trips().len(), 2);
}

#[test]
fn drivers_without_trips_are_never_assigned() {
    let mut dispatcher = LedgerBuilder::new()
        .available_driver(1)
        .available_driver(2)
        .passenger(1)
        .dispatcher();

    assert_eq!(
        dispatcher.assign_driver().unwrap_err(),
        RideShareError::NoDriversAvailable
    );
    assert_eq!(
        dispatcher.request_trip(Some(1)).unwrap_err(),
        RideShareError::NoDriversAvailable
    );
    assert!(dispatcher.trips().is_empty());
}

#[test]
fn new_trip_id_skips_ids_already_loaded() {
    // Two loaded trips with ids 1 and 2, then a request: count + 1 = 3 is free.
    let mut dispatcher = two_driver_ledger().dispatcher();
    assert_eq!(dispatcher.request_trip(Some(1)).expect("trip").id().0, 3);

    // Loaded ids 2 and 3 make count + 1 = 3 collide; the next id is 4.
    let mut records = two_driver_ledger().records();
    records.trips[0].id = Some(3);
    records.trips[1].id = Some(2);
    let repository = rideshare_core::Repository::load(&records).expect("load");
    let mut dispatcher = rideshare_core::TripDispatcher::with_clock(
        repository,
        DispatchConfig::default(),
        rideshare_core::clock::ManualClock::new(request_time()),
    );
    assert_eq!(dispatcher.request_trip(Some(1)).expect("trip").id().0, 4);
}

#[test]
fn first_available_policy_ignores_idle_time() {
    let config = DispatchConfig::default().with_policy(AssignmentPolicyKind::FirstAvailable);
    let dispatcher = two_driver_ledger().dispatcher_with(config);
    assert_eq!(dispatcher.assign_driver().expect("driver").id(), DriverId(1));
}

#[test]
fn drivers_mid_trip_are_skipped_by_every_policy() {
    let ledger = LedgerBuilder::new()
        .available_driver(1)
        .available_driver(2)
        .passenger(1)
        .in_progress(1, 1, 500)
        .completed(2, 1, 0, 900);

    for policy in [
        AssignmentPolicyKind::LongestIdle,
        AssignmentPolicyKind::FirstAvailable,
    ] {
        let mut dispatcher = ledger.dispatcher_with(DispatchConfig::default().with_policy(policy));
        assert_eq!(dispatcher.assign_driver().expect("driver").id(), DriverId(2));
        assert_eq!(dispatcher.request_trip(Some(1)).expect("trip").driver(), DriverId(2));
        assert_eq!(
            dispatcher.request_trip(Some(1)).unwrap_err(),
            RideShareError::NoDriversAvailable
        );
    }
}

#[test]
fn dispatcher_lookups_follow_id_rule() {
    let dispatcher = two_driver_ledger().dispatcher();
    assert_eq!(
        dispatcher.find_driver(Some(2)).expect("lookup").map(|d| d.id()),
        Some(DriverId(2))
    );
    assert!(dispatcher.find_passenger(Some(7)).expect("lookup").is_none());
    assert_eq!(
        dispatcher.find_passenger(Some(-1)).unwrap_err(),
        RideShareError::InvalidArgument(InvalidArgument::BadId(Some(-1)))
    );
}
