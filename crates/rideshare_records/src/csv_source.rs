use std::path::{Path, PathBuf};

use rideshare_core::records::{DriverRecord, PassengerRecord, RecordLoader, TripRecord};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::DataSourceConfig;
use crate::error::RecordsError;

/// Reads records from three header-first CSV files.
///
/// Columns are matched by header name. Driver files may call the vehicle code
/// `vin` and passenger files may call the phone `phone_num`.
#[derive(Debug, Clone)]
pub struct CsvRecords {
    drivers: PathBuf,
    passengers: PathBuf,
    trips: PathBuf,
}

impl CsvRecords {
    pub fn new(config: &DataSourceConfig) -> Self {
        Self {
            drivers: config.drivers_path(),
            passengers: config.passengers_path(),
            trips: config.trips_path(),
        }
    }

    /// Standard file names inside `data_dir`.
    pub fn from_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(&DataSourceConfig::default().with_data_dir(data_dir))
    }
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, RecordsError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| RecordsError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let records = reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| RecordsError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), rows = records.len(), "read csv records");
    Ok(records)
}

impl RecordLoader for CsvRecords {
    type Error = RecordsError;

    fn load_drivers(&self) -> Result<Vec<DriverRecord>, Self::Error> {
        read_records(&self.drivers)
    }

    fn load_passengers(&self) -> Result<Vec<PassengerRecord>, Self::Error> {
        read_records(&self.passengers)
    }

    fn load_trips(&self) -> Result<Vec<TripRecord>, Self::Error> {
        read_records(&self.trips)
    }
}
