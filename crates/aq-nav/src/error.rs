use aq_core::{CoreError, Point};
use thiserror::Error;

use crate::FlightLog;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("navigator configuration error: {0}")]
    Config(#[from] CoreError),

    /// Every candidate move from `at` was disqualified.  `log` holds the
    /// moves taken before the navigator got stuck.
    #[error("no feasible move at step {step} from {at} ({} moves recorded)", log.len())]
    NoFeasibleMove {
        step: u32,
        at:   Point,
        log:  FlightLog,
    },
}

pub type NavResult<T> = Result<T, NavError>;
