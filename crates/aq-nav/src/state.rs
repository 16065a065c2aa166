//! Per-run navigator state.

use std::collections::VecDeque;

use aq_core::geo::{PointKey, SegmentKey};
use aq_core::{Point, Segment, TargetId};

use crate::NavStatus;

#[cfg(feature = "fx-hash")]
type VisitedSet<K> = rustc_hash::FxHashSet<K>;
#[cfg(not(feature = "fx-hash"))]
type VisitedSet<K> = std::collections::HashSet<K>;

// ── NavPhase ──────────────────────────────────────────────────────────────────

/// Where the navigator is in its run.
///
/// ```text
///  Cruising ──arrival──▶ Arrived ──▶ Cruising | Closing
///  Closing  ──closure──▶ Done { closed: true }
///  last arrival (open route) ──▶ Done { closed: false }
///  any non-terminal ──budget spent──▶ BudgetExceeded
///  any non-terminal ──no candidate left──▶ NoFeasibleMove
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavPhase {
    /// Heading for a real target.
    Cruising,
    /// The last move reached a target; the next goal is picked on the next step.
    Arrived,
    /// Only the synthetic return-to-start goal is left.
    Closing,
    Done { closed: bool },
    BudgetExceeded,
    NoFeasibleMove,
}

impl NavPhase {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            NavPhase::Done { .. } | NavPhase::BudgetExceeded | NavPhase::NoFeasibleMove
        )
    }
}

// ── Waypoint ──────────────────────────────────────────────────────────────────

/// A queued goal: a real target, or the start point when `target` is `None`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Waypoint {
    pub target:   Option<TargetId>,
    pub location: Point,
}

impl Waypoint {
    pub fn target(id: TargetId, location: Point) -> Self {
        Self { target: Some(id), location }
    }

    /// The synthetic goal that closes the loop at `start`.
    pub fn closing(start: Point) -> Self {
        Self { target: None, location: start }
    }

    #[inline]
    pub fn is_closing(&self) -> bool {
        self.target.is_none()
    }
}

// ── NavigatorState ────────────────────────────────────────────────────────────

/// Mutable state of one navigation run.  Created by
/// [`Navigator::begin`][crate::Navigator::begin] and advanced by
/// [`Navigator::step`][crate::Navigator::step].
#[derive(Clone, Debug)]
pub struct NavigatorState {
    pub(crate) position:          Point,
    pub(crate) remaining:         VecDeque<Waypoint>,
    pub(crate) visited_segments:  VisitedSet<SegmentKey>,
    pub(crate) visited_endpoints: VisitedSet<PointKey>,
    pub(crate) move_count:        u32,
    pub(crate) phase:             NavPhase,
}

impl NavigatorState {
    /// State at `start` with `goals` queued in visiting order.
    ///
    /// The start point counts as an occupied position from the outset.
    pub fn new(start: Point, goals: impl IntoIterator<Item = Waypoint>) -> Self {
        let remaining: VecDeque<Waypoint> = goals.into_iter().collect();
        let mut visited_endpoints = VisitedSet::default();
        visited_endpoints.insert(start.key());

        let phase = match remaining.front() {
            None                         => NavPhase::Done { closed: false },
            Some(w) if w.is_closing()    => NavPhase::Closing,
            Some(_)                      => NavPhase::Cruising,
        };

        Self {
            position: start,
            remaining,
            visited_segments: VisitedSet::default(),
            visited_endpoints,
            move_count: 0,
            phase,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// The goal the next move will head for.
    pub fn current_goal(&self) -> Option<&Waypoint> {
        self.remaining.front()
    }

    pub fn remaining(&self) -> impl Iterator<Item = &Waypoint> + '_ {
        self.remaining.iter()
    }

    /// Real targets still queued, in visiting order.
    pub fn unvisited(&self) -> Vec<TargetId> {
        self.remaining.iter().filter_map(|w| w.target).collect()
    }

    /// `true` if the agent has ever stood at `p`, up to
    /// [`POSITION_RESOLUTION`][aq_core::geo::POSITION_RESOLUTION].  Rounding
    /// drift does not make an old position new again.
    pub fn has_occupied(&self, p: Point) -> bool {
        p.key()
            .neighbourhood()
            .any(|k| self.visited_endpoints.contains(&k))
    }

    /// `true` if `segment` (in either direction) has already been flown.
    pub fn has_traversed(&self, segment: Segment) -> bool {
        self.visited_segments.contains(&segment.key())
    }

    /// Terminal status, or `None` while the run can still move.
    pub fn status(&self) -> Option<NavStatus> {
        match self.phase {
            NavPhase::Done { closed }   => Some(NavStatus::Done { closed }),
            NavPhase::BudgetExceeded    => Some(NavStatus::BudgetExceeded),
            NavPhase::NoFeasibleMove    => Some(NavStatus::NoFeasibleMove {
                step: self.move_count + 1,
                at:   self.position,
            }),
            _ => None,
        }
    }

    /// Status of a run that stops here.  A phase that could still move
    /// reports [`NavStatus::BudgetExceeded`]: the run was cut short before
    /// finishing its goals.
    pub fn terminal_status(&self) -> NavStatus {
        self.status().unwrap_or(NavStatus::BudgetExceeded)
    }

    pub(crate) fn record(&mut self, segment: Segment) {
        self.visited_segments.insert(segment.key());
        self.visited_endpoints.insert(segment.to.key());
        self.position = segment.to;
        self.move_count += 1;
    }
}
