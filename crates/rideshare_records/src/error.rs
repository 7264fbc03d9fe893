use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("bad record in {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to read config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    ConfigFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
