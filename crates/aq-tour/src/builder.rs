//! Tour construction trait and the built-in strategies.
//!
//! | Strategy       | Cost                   | Notes                              |
//! |----------------|------------------------|------------------------------------|
//! | [`GreedyTour`] | O(N²)                  | nearest neighbour from the start   |
//! | [`TwoOptTour`] | O(N² × sweeps)         | greedy, then 2-opt refinement      |

use log::debug;

use aq_core::{Point, Target, TieBreaker};
use aq_spatial::DistanceMatrix;

use crate::two_opt::{DEFAULT_MAX_SWEEPS, refine_two_opt};
use crate::{Tour, tour_length};

// ── TourBuilder trait ─────────────────────────────────────────────────────────

/// Pluggable target-ordering heuristic.
///
/// Implementations must be deterministic given the same inputs and the same
/// tie-breaker state, and must return a permutation of `[0, targets.len())`.
pub trait TourBuilder: Send + Sync {
    /// Order `targets` for a loop that starts and ends at `start`.
    ///
    /// `matrix` must have been built from `targets`.  Ties between equally
    /// near candidates are settled by `tie`.
    fn construct(
        &self,
        start:   Point,
        targets: &[Target],
        matrix:  &DistanceMatrix,
        tie:     &mut TieBreaker,
    ) -> Tour;
}

/// Order `targets` with `builder`, settling ties with the reference
/// re-seeded tie-breaker for `seed`.
pub fn construct_tour<B: TourBuilder + ?Sized>(
    builder: &B,
    start:   Point,
    targets: &[Target],
    matrix:  &DistanceMatrix,
    seed:    u64,
) -> Tour {
    builder.construct(start, targets, matrix, &mut TieBreaker::reseeded(seed))
}

// ── GreedyTour ────────────────────────────────────────────────────────────────

/// Greedy nearest-neighbour construction.
///
/// Begins with the target nearest to `start`, then repeatedly moves to the
/// nearest unvisited target.  Every step collects all indices at the minimum
/// distance and lets the tie-breaker choose.  Visited targets are tracked with
/// an explicit flag, so a genuine zero distance between two coincident targets
/// still counts as "nearest".
#[derive(Copy, Clone, Debug, Default)]
pub struct GreedyTour;

impl TourBuilder for GreedyTour {
    fn construct(
        &self,
        start:   Point,
        targets: &[Target],
        matrix:  &DistanceMatrix,
        tie:     &mut TieBreaker,
    ) -> Tour {
        let n = targets.len();
        if n == 0 {
            debug!("empty target set: tour is empty");
            return Tour::default();
        }
        debug_assert_eq!(matrix.len(), n, "distance matrix built from other targets");

        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);

        let from_start: Vec<f64> = targets.iter().map(|t| start.distance(t.location)).collect();
        let mut current = nearest_unvisited(&from_start, &visited, tie);

        while let Some(next) = current {
            visited[next] = true;
            order.push(next);
            current = nearest_unvisited(matrix.row(next), &visited, tie);
        }

        Tour::new(order)
    }
}

/// Index of the smallest entry of `dists` among unvisited slots; all indices
/// tied at the minimum go to the tie-breaker.  `None` once all are visited.
fn nearest_unvisited(dists: &[f64], visited: &[bool], tie: &mut TieBreaker) -> Option<usize> {
    let min = dists
        .iter()
        .zip(visited)
        .filter(|(_, v)| !**v)
        .map(|(d, _)| *d)
        .fold(f64::INFINITY, f64::min);

    let tied: Vec<usize> = dists
        .iter()
        .zip(visited)
        .enumerate()
        .filter(|(_, (d, v))| !**v && **d == min)
        .map(|(i, _)| i)
        .collect();

    tie.pick(&tied)
}

// ── TwoOptTour ────────────────────────────────────────────────────────────────

/// Greedy construction followed by 2-opt refinement of the closed loop.
#[derive(Copy, Clone, Debug)]
pub struct TwoOptTour {
    /// Full-sweep cap for the refinement.
    pub max_sweeps: u32,
}

impl Default for TwoOptTour {
    fn default() -> Self {
        Self { max_sweeps: DEFAULT_MAX_SWEEPS }
    }
}

impl TourBuilder for TwoOptTour {
    fn construct(
        &self,
        start:   Point,
        targets: &[Target],
        matrix:  &DistanceMatrix,
        tie:     &mut TieBreaker,
    ) -> Tour {
        let mut tour = GreedyTour.construct(start, targets, matrix, tie);
        let greedy_len = tour_length(tour.as_slice(), start, targets, matrix);
        refine_two_opt(&mut tour, start, targets, matrix, self.max_sweeps);
        debug!(
            "2-opt shortened loop from {greedy_len:.6} to {:.6}",
            tour_length(tour.as_slice(), start, targets, matrix)
        );
        tour
    }
}

// ── TourStrategy ──────────────────────────────────────────────────────────────

/// Configuration-friendly selector over the built-in strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TourStrategy {
    /// Nearest neighbour only.
    Greedy,
    /// Nearest neighbour refined by 2-opt.
    #[default]
    TwoOpt,
}

impl TourStrategy {
    pub fn name(self) -> &'static str {
        match self {
            TourStrategy::Greedy => "greedy",
            TourStrategy::TwoOpt => "two-opt",
        }
    }

    /// Parse a strategy name as accepted on command lines and in configs.
    pub fn from_name(name: &str) -> Option<TourStrategy> {
        match name.to_lowercase().as_str() {
            "greedy" | "nn" | "nearest" | "nearest-neighbor" => Some(TourStrategy::Greedy),
            "two-opt" | "two_opt" | "2opt" | "2-opt" => Some(TourStrategy::TwoOpt),
            _ => None,
        }
    }
}

impl TourBuilder for TourStrategy {
    fn construct(
        &self,
        start:   Point,
        targets: &[Target],
        matrix:  &DistanceMatrix,
        tie:     &mut TieBreaker,
    ) -> Tour {
        match self {
            TourStrategy::Greedy => GreedyTour.construct(start, targets, matrix, tie),
            TourStrategy::TwoOpt => TwoOptTour::default().construct(start, targets, matrix, tie),
        }
    }
}
