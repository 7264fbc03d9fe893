pub mod clock;
pub mod dispatch;
pub mod earnings;
pub mod entities;
pub mod error;
pub mod records;
pub mod repository;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use dispatch::{DispatchConfig, TripDispatcher};
pub use error::{InvalidArgument, RideShareError, ValidationError};
pub use repository::Repository;
