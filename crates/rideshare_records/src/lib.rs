//! CSV-backed record source for the ride-share ledger.
//!
//! Reads `drivers.csv`, `passengers.csv` and `trips.csv` from a data
//! directory and hands the decoded rows to `rideshare_core`.

pub mod config;
pub mod csv_source;
pub mod error;

pub use config::DataSourceConfig;
pub use csv_source::CsvRecords;
pub use error::RecordsError;
