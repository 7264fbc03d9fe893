//! Error taxonomy for the ledger: construction failures, bad caller input and
//! an empty candidate pool.

use thiserror::Error;

/// Trip field named by a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripField {
    Rating,
    EndTime,
}

impl std::fmt::Display for TripField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripField::Rating => f.write_str("rating"),
            TripField::EndTime => f.write_str("end time"),
        }
    }
}

/// A trip failed one of its construction invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field} {value}")]
pub struct ValidationError {
    pub field: TripField,
    pub value: String,
}

impl ValidationError {
    pub fn new(field: TripField, value: impl ToString) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// Caller-recoverable input problems: bad identifiers, unresolvable
/// participants and malformed record text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("ID cannot be blank or less than one (got {0:?})")]
    BadId(Option<i64>),
    #[error("passenger ID {0} not valid")]
    PassengerNotFound(u64),
    #[error("driver ID {0} not valid")]
    DriverNotFound(u64),
    #[error("duplicate {kind} ID {id}")]
    DuplicateId { kind: &'static str, id: u64 },
    #[error("malformed {field}: {value:?}")]
    Malformed { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RideShareError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    #[error("there are no drivers available")]
    NoDriversAvailable,
}

pub type Result<T, E = RideShareError> = std::result::Result<T, E>;

/// Failure while building a repository from a [`crate::records::RecordLoader`].
#[derive(Debug, Error)]
pub enum LoadError<E>
where
    E: std::error::Error + 'static,
{
    #[error("record source failed: {0}")]
    Source(#[source] E),
    #[error(transparent)]
    Build(#[from] RideShareError),
}

/// Rejects absent, zero and negative identifiers.
pub fn check_id(raw: Option<i64>) -> Result<u64, InvalidArgument> {
    match raw {
        Some(id) if id > 0 => Ok(id as u64),
        other => Err(InvalidArgument::BadId(other)),
    }
}
