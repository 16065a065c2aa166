//! Plain data row type written by flight-record backends.

use aq_core::Target;
use aq_nav::Move;

/// One move of the flight record:
/// `step, from_x, from_y, heading, to_x, to_y, label`.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRecordRow {
    pub step:            u32,
    pub from_x:          f64,
    pub from_y:          f64,
    /// Heading in whole degrees, counter-clockwise from east.
    pub heading_degrees: u32,
    pub to_x:            f64,
    pub to_y:            f64,
    /// Label of the target reached by this move; written as `null` when
    /// nothing was reached.
    pub label:           Option<String>,
}

impl FlightRecordRow {
    pub fn from_move(mv: &Move, arrived: Option<&Target>) -> Self {
        Self {
            step:            mv.step_index,
            from_x:          mv.from.x,
            from_y:          mv.from.y,
            heading_degrees: mv.heading.degrees(),
            to_x:            mv.to.x,
            to_y:            mv.to.y,
            label:           arrived.map(|t| t.label.clone()),
        }
    }
}
