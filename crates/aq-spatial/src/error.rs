//! Spatial-subsystem error type.

use thiserror::Error;

use aq_core::CoreError;

/// Errors produced by `aq-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("exclusion zone ring has {vertices} distinct vertices; at least 3 are required")]
    DegenerateZone { vertices: usize },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
