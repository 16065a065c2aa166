//! The step-by-step navigator.

use log::{debug, trace, warn};

use aq_core::{NavConfig, Point, Segment, Target, TieBreaker};
use aq_spatial::{HeadingCode, ZoneIndex, candidate_headings};

use crate::{FlightLog, Move, NavOutcome, NavPhase, NavResult, NavigatorState, Waypoint};

/// Converts an ordered target list into quantized moves.
///
/// Holds the exclusion-zone index (borrowed, so several runs can share one
/// index) and the tie-breaker of the current planning run.
///
/// # Example
///
/// ```rust,ignore
/// let zones = ZoneIndex::new(&zone_list);
/// let mut nav = Navigator::seeded(NavConfig::with_seed(5678), &zones)?;
/// let outcome = nav.navigate(start, tour.ordered(&targets));
/// ```
pub struct Navigator<'z> {
    config: NavConfig,
    zones:  &'z ZoneIndex,
    tie:    TieBreaker,
}

impl<'z> Navigator<'z> {
    /// Create a navigator around an existing tie-breaker, typically the one
    /// the tour constructor already drew from.
    pub fn new(config: NavConfig, zones: &'z ZoneIndex, tie: TieBreaker) -> NavResult<Self> {
        config.validate()?;
        Ok(Self { config, zones, tie })
    }

    /// Create a navigator with a fresh tie-breaker from `config.seed` and
    /// `config.tie_break`.
    pub fn seeded(config: NavConfig, zones: &'z ZoneIndex) -> NavResult<Self> {
        let tie = TieBreaker::new(config.seed, config.tie_break);
        Self::new(config, zones, tie)
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn tie_breaker(&self) -> &TieBreaker {
        &self.tie
    }

    // ── Whole-run API ─────────────────────────────────────────────────────

    /// Fly the agent through `ordered` and, unless `return_to_start` is off,
    /// back to `start`.
    pub fn navigate<'t, I>(&mut self, start: Point, ordered: I) -> NavOutcome
    where
        I: IntoIterator<Item = &'t Target>,
    {
        self.navigate_with(start, ordered, |_| {})
    }

    /// Like [`navigate`][Self::navigate], calling `on_move` after every
    /// recorded move.
    pub fn navigate_with<'t, I, F>(&mut self, start: Point, ordered: I, mut on_move: F) -> NavOutcome
    where
        I: IntoIterator<Item = &'t Target>,
        F: FnMut(&Move),
    {
        let mut state = self.begin(start, ordered);
        let mut log = FlightLog::with_capacity(self.config.move_budget as usize);

        debug!(
            "navigating {} goal(s) from {start}, budget {} moves",
            state.remaining.len(),
            self.config.move_budget
        );

        while let Some(mv) = self.step(&mut state) {
            on_move(&mv);
            log.push(mv);
        }

        NavOutcome { log, status: state.terminal_status(), unvisited: state.unvisited() }
    }

    // ── Step API ──────────────────────────────────────────────────────────

    /// Initial state for a run over `ordered`, with the closing goal appended
    /// when the configuration asks for a closed loop.
    pub fn begin<'t, I>(&self, start: Point, ordered: I) -> NavigatorState
    where
        I: IntoIterator<Item = &'t Target>,
    {
        let goals = ordered.into_iter().map(|t| Waypoint::target(t.id, t.location));
        if self.config.return_to_start {
            NavigatorState::new(start, goals.chain(std::iter::once(Waypoint::closing(start))))
        } else {
            NavigatorState::new(start, goals)
        }
    }

    /// Take one move.  Returns `None`, without moving, once `state` is in a
    /// terminal phase; a step that finds no feasible candidate sets
    /// [`NavPhase::NoFeasibleMove`] and also returns `None`.
    pub fn step(&mut self, state: &mut NavigatorState) -> Option<Move> {
        if state.phase.is_terminal() {
            return None;
        }
        if state.move_count >= self.config.move_budget {
            warn!("move budget of {} spent before the loop closed", self.config.move_budget);
            state.phase = NavPhase::BudgetExceeded;
            return None;
        }
        let Some(goal) = state.remaining.front().copied() else {
            state.phase = NavPhase::Done { closed: false };
            return None;
        };
        state.phase = if goal.is_closing() { NavPhase::Closing } else { NavPhase::Cruising };

        // ── Score every candidate; disqualified ones score +∞ ─────────────
        let from = state.position;
        let seen: &NavigatorState = state;
        let scored: Vec<(HeadingCode, Point, f64)> = candidate_headings(
            from,
            self.config.step_length,
            self.config.heading_step_degrees,
        )
        .map(|(heading, to)| {
            let segment = Segment::new(from, to);
            let score = if self.disqualified(seen, segment) {
                f64::INFINITY
            } else {
                to.distance(goal.location)
            };
            (heading, to, score)
        })
        .collect();

        let best = scored.iter().map(|c| c.2).fold(f64::INFINITY, f64::min);
        if !best.is_finite() {
            warn!(
                "no feasible move at step {} from {from}: all {} candidates disqualified",
                state.move_count + 1,
                scored.len()
            );
            state.phase = NavPhase::NoFeasibleMove;
            return None;
        }

        let tied: Vec<usize> = scored
            .iter()
            .enumerate()
            .filter(|(_, c)| c.2 == best)
            .map(|(i, _)| i)
            .collect();
        let Some(chosen) = self.tie.pick(&tied) else {
            state.phase = NavPhase::NoFeasibleMove;
            return None;
        };
        let (heading, to, dist) = scored[chosen];

        // ── Record the move ───────────────────────────────────────────────
        state.record(Segment::new(from, to));
        let mut mv = Move {
            step_index:     state.move_count,
            from,
            to,
            heading,
            arrived_target: None,
        };
        trace!("step {}: {from} -> {to} heading {heading}, {dist:.7} from goal", mv.step_index);

        // ── Closure / arrival ─────────────────────────────────────────────
        if goal.is_closing() {
            if dist < self.config.closure_threshold {
                state.remaining.pop_front();
                state.phase = NavPhase::Done { closed: true };
                debug!("loop closed after {} moves", state.move_count);
            }
        } else if dist < self.config.arrival_threshold {
            state.remaining.pop_front();
            mv.arrived_target = goal.target;
            state.phase = if state.remaining.is_empty() {
                NavPhase::Done { closed: false }
            } else {
                NavPhase::Arrived
            };
            debug!("step {}: reached target {:?}", mv.step_index, goal.target);
        }

        if !state.phase.is_terminal() && state.move_count >= self.config.move_budget {
            warn!(
                "move budget of {} spent with {} goal(s) left",
                self.config.move_budget,
                state.remaining.len()
            );
            state.phase = NavPhase::BudgetExceeded;
        }

        Some(mv)
    }

    /// A candidate is out if it repeats a flown segment, lands on a position
    /// already occupied, or touches an exclusion-zone boundary.
    fn disqualified(&self, state: &NavigatorState, segment: Segment) -> bool {
        state.has_traversed(segment)
            || state.has_occupied(segment.to)
            || self.zones.blocks(segment)
    }
}
