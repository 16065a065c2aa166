//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The error type for `aq-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("reading {0} is outside the classified range [0, 256)")]
    ReadingOutOfRange(f64),

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
}

/// Shorthand result type for `aq-core`.
pub type CoreResult<T> = Result<T, CoreError>;
