//! Recorded moves and the terminal outcome of a navigation run.

use aq_core::{Point, Segment, TargetId};
use aq_spatial::HeadingCode;

use crate::{NavError, NavResult};

// ── Move ──────────────────────────────────────────────────────────────────────

/// One recorded step of the agent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// 1-based position of this move in the flight log.
    pub step_index:     u32,
    pub from:           Point,
    pub to:             Point,
    pub heading:        HeadingCode,
    /// The target reached by this move, if any.  Never set for the move that
    /// closes the loop.
    pub arrived_target: Option<TargetId>,
}

impl Move {
    #[inline]
    pub fn segment(&self) -> Segment {
        Segment::new(self.from, self.to)
    }
}

// ── FlightLog ─────────────────────────────────────────────────────────────────

/// The ordered moves of one run.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlightLog {
    moves: Vec<Move>,
}

impl FlightLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { moves: Vec::with_capacity(capacity) }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        debug_assert_eq!(mv.step_index as usize, self.moves.len() + 1);
        self.moves.push(mv);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }

    /// Arrival events as `(step_index, target)`, in the order they happened.
    pub fn arrivals(&self) -> impl Iterator<Item = (u32, TargetId)> + '_ {
        self.moves
            .iter()
            .filter_map(|m| m.arrived_target.map(|t| (m.step_index, t)))
    }

    /// Sum of all move lengths.
    pub fn total_length(&self) -> f64 {
        self.moves.iter().map(|m| m.from.distance(m.to)).sum()
    }

    /// Where the agent ended up, or `None` if it never moved.
    pub fn end(&self) -> Option<Point> {
        self.moves.last().map(|m| m.to)
    }
}

impl<'a> IntoIterator for &'a FlightLog {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

// ── NavStatus / NavOutcome ────────────────────────────────────────────────────

/// How a navigation run ended.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavStatus {
    /// All targets were reached.  `closed` is `true` when the run also
    /// returned to the start point.
    Done { closed: bool },
    /// The move budget ran out first.  Not an error: the partial log is valid.
    BudgetExceeded,
    /// Every candidate at step `step` was disqualified.
    NoFeasibleMove { step: u32, at: Point },
}

impl NavStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, NavStatus::Done { .. })
    }
}

/// The full result of [`Navigator::navigate`][crate::Navigator::navigate].
#[derive(Clone, Debug, PartialEq)]
pub struct NavOutcome {
    pub log:       FlightLog,
    pub status:    NavStatus,
    /// Real targets still queued when the run ended, in tour order.
    pub unvisited: Vec<TargetId>,
}

impl NavOutcome {
    /// Turn an infeasible run into [`NavError::NoFeasibleMove`], carrying the
    /// partial log.  `Done` and `BudgetExceeded` pass through unchanged.
    pub fn into_result(self) -> NavResult<NavOutcome> {
        match self.status {
            NavStatus::NoFeasibleMove { step, at } => {
                Err(NavError::NoFeasibleMove { step, at, log: self.log })
            }
            _ => Ok(self),
        }
    }
}
