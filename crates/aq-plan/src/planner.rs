//! The `Planner` and its run.

use log::{debug, info, warn};

use aq_core::{Marker, NavConfig, Point, Target, TargetId, TieBreaker};
use aq_nav::{FlightLog, NavOutcome, NavStatus, Navigator};
use aq_spatial::{DistanceMatrix, ExclusionZone, ZoneIndex};
use aq_tour::{Tour, TourBuilder, tour_length};

use crate::{PlanError, PlanObserver, PlanResult};

// ── Results ───────────────────────────────────────────────────────────────────

/// Headline figures of one run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanSummary {
    pub status:      NavStatus,
    /// Closed-loop length of the tour as straight legs.
    pub tour_length: f64,
    /// Length actually flown.
    pub path_length: f64,
    pub moves:       usize,
    pub arrivals:    usize,
    /// Targets never reached, in tour order.
    pub unvisited:   Vec<TargetId>,
}

/// Everything a successful (or budget-limited) run produces.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanOutcome {
    pub tour:    Tour,
    pub log:     FlightLog,
    pub summary: PlanSummary,
}

// ── Planner ───────────────────────────────────────────────────────────────────

/// A validated planning problem, ready to run.
///
/// Runs are pure: the tie-breaker is re-created from the seed each time, so
/// calling [`run`][Self::run] twice yields identical outcomes.
///
/// Create via [`PlanBuilder`][crate::PlanBuilder].
pub struct Planner<B: TourBuilder> {
    pub(crate) config:  NavConfig,
    pub(crate) start:   Point,
    pub(crate) targets: Vec<Target>,
    pub(crate) zones:   Vec<ExclusionZone>,
    pub(crate) index:   ZoneIndex,
    pub(crate) matrix:  DistanceMatrix,
    pub(crate) tour:    B,
}

impl<B: TourBuilder> Planner<B> {
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn zones(&self) -> &[ExclusionZone] {
        &self.zones
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Order the targets, then fly the tour.
    ///
    /// One tie-breaker serves both stages.  Observer hooks fire for the tour,
    /// every move and arrival, and the finish (also when the run ends in
    /// [`NavStatus::NoFeasibleMove`], which is then returned as
    /// [`PlanError::Nav`] carrying the partial flight log).
    pub fn run<O: PlanObserver>(&self, observer: &mut O) -> PlanResult<PlanOutcome> {
        let n = self.targets.len();
        let mut tie = TieBreaker::new(self.config.seed, self.config.tie_break);

        // ── Tour ──────────────────────────────────────────────────────────
        let tour = self.tour.construct(self.start, &self.targets, &self.matrix, &mut tie);
        if !tour.is_permutation(n) {
            return Err(PlanError::InvalidTour { expected: n, got: tour.len() });
        }
        let straight = tour_length(tour.as_slice(), self.start, &self.targets, &self.matrix);
        debug!("tour over {n} targets, straight-leg length {straight:.6}");
        observer.on_tour(&tour, &self.targets);

        // ── Navigation ────────────────────────────────────────────────────
        let targets = self.targets.as_slice();
        let mut nav = Navigator::new(self.config.clone(), &self.index, tie)?;
        let outcome = nav.navigate_with(self.start, tour.ordered(targets), |mv| {
            let arrived = mv.arrived_target.map(|id| &targets[id.index()]);
            observer.on_move(mv, arrived);
            if let Some(target) = arrived {
                observer.on_arrival(mv.step_index, target);
            }
        });

        let summary = PlanSummary {
            status:      outcome.status,
            tour_length: straight,
            path_length: outcome.log.total_length(),
            moves:       outcome.log.len(),
            arrivals:    outcome.log.arrivals().count(),
            unvisited:   outcome.unvisited.clone(),
        };
        match summary.status {
            NavStatus::Done { .. } => info!(
                "run finished: {} moves, {}/{n} targets, path {:.6}",
                summary.moves, summary.arrivals, summary.path_length
            ),
            _ => warn!(
                "run ended early ({:?}): {} moves, {} target(s) unvisited",
                summary.status,
                summary.moves,
                summary.unvisited.len()
            ),
        }
        observer.on_finish(&summary);

        let NavOutcome { log, .. } = outcome.into_result()?;
        Ok(PlanOutcome { tour, log, summary })
    }

    /// Map marker per target, indexed by `TargetId`: classified from the
    /// sensor data for targets reached by `outcome`, grey otherwise.
    pub fn markers(&self, outcome: &PlanOutcome) -> PlanResult<Vec<Marker>> {
        let mut visited = vec![false; self.targets.len()];
        for (_, id) in outcome.log.arrivals() {
            visited[id.index()] = true;
        }
        self.targets
            .iter()
            .zip(visited)
            .map(|(t, seen)| if seen { t.marker() } else { Ok(Marker::UNVISITED) })
            .collect::<Result<Vec<_>, _>>()
            .map_err(PlanError::from)
    }
}
