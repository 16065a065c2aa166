use aq_core::{CoreError, TargetId};
use aq_nav::NavError;
use aq_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("plan configuration error: {0}")]
    Core(#[from] CoreError),

    #[error("exclusion zone rejected: {0}")]
    Spatial(#[from] SpatialError),

    #[error("target at position {index} carries id {got}; ids must match list positions")]
    TargetIdMismatch {
        index: usize,
        got:   TargetId,
    },

    #[error("target {0} has a non-finite location")]
    NonFiniteTarget(TargetId),

    #[error("tour builder returned an order of {got} entries that is not a permutation of {expected} targets")]
    InvalidTour {
        expected: usize,
        got:      usize,
    },

    #[error("navigation failed: {0}")]
    Nav(#[from] NavError),
}

pub type PlanResult<T> = Result<T, PlanError>;
