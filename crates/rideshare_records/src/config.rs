use std::fs;
use std::path::{Path, PathBuf};

use rideshare_core::dispatch::DispatchConfig;
use serde::Deserialize;

use crate::error::RecordsError;

/// Default data directory, relative to the working directory.
const DEFAULT_DATA_DIR: &str = "support";

/// Where the three record files live and how the dispatcher is set up.
///
/// Every field has a default, so a config file only needs the keys it changes:
///
/// ```json
/// { "data_dir": "fixtures", "dispatch": { "policy": "first-available" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DataSourceConfig {
    pub data_dir: PathBuf,
    pub drivers_file: String,
    pub passengers_file: String,
    pub trips_file: String,
    pub dispatch: DispatchConfig,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            drivers_file: "drivers.csv".to_string(),
            passengers_file: "passengers.csv".to_string(),
            trips_file: "trips.csv".to_string(),
            dispatch: DispatchConfig::default(),
        }
    }
}

impl DataSourceConfig {
    /// Reads a JSON config file; missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RecordsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| RecordsError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| RecordsError::ConfigFormat {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_dispatch(mut self, dispatch: DispatchConfig) -> Self {
        self.dispatch = dispatch;
        self
    }

    pub fn drivers_path(&self) -> PathBuf {
        self.data_dir.join(&self.drivers_file)
    }

    pub fn passengers_path(&self) -> PathBuf {
        self.data_dir.join(&self.passengers_file)
    }

    pub fn trips_path(&self) -> PathBuf {
        self.data_dir.join(&self.trips_file)
    }
}
