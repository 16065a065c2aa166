//! Error types for aq-io.

use aq_spatial::SpatialError;
use thiserror::Error;

/// Errors that can occur when loading inputs or writing flight records.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("input parse error: {0}")]
    Parse(String),

    #[error("zone {name:?} rejected: {source}")]
    Zone {
        name:   String,
        source: SpatialError,
    },
}

/// Alias for `Result<T, IoError>`.
pub type IoResult<T> = Result<T, IoError>;
