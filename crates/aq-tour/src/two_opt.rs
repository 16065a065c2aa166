//! 2-opt local refinement of a closed tour.
//!
//! The tour is treated as a loop through the external start point: reversing
//! the run `[i, k]` replaces the legs `prev(i) → i` and `k → next(k)` with
//! `prev(i) → k` and `i → next(k)`, where `prev(0)` and `next(n - 1)` are the
//! start point.  A reversal is accepted only when it shortens the loop by more
//! than [`IMPROVEMENT_EPS`], so rounding noise cannot make two reversals undo
//! each other forever.

use log::debug;

use aq_core::{Point, Target};
use aq_spatial::DistanceMatrix;

use crate::Tour;

/// Full-sweep cap.  Only bounds the worst case; real target sets converge in
/// a handful of sweeps.
pub const DEFAULT_MAX_SWEEPS: u32 = 800;

/// Smallest length reduction that counts as an improvement.
pub const IMPROVEMENT_EPS: f64 = 1e-12;

/// Refine `tour` in place until a full sweep finds no improving reversal or
/// `max_sweeps` sweeps have run.  Returns the number of sweeps performed.
///
/// Never increases the closed-loop length of the tour.
pub fn refine_two_opt(
    tour:       &mut Tour,
    start:      Point,
    targets:    &[Target],
    matrix:     &DistanceMatrix,
    max_sweeps: u32,
) -> u32 {
    let mut route = std::mem::take(tour).into_inner();
    let n = route.len();

    // Distance between two tour slots, where `None` stands for the start point.
    let leg = |a: Option<usize>, b: Option<usize>| -> f64 {
        match (a, b) {
            (Some(a), Some(b)) => matrix.get(a, b),
            (Some(t), None) | (None, Some(t)) => targets[t].location.distance(start),
            (None, None) => 0.0,
        }
    };

    let mut sweeps = 0;
    while sweeps < max_sweeps {
        sweeps += 1;
        let mut improved = false;

        for i in 0..n {
            for k in (i + 1)..n {
                let prev = if i == 0 { None } else { Some(route[i - 1]) };
                let next = route.get(k + 1).copied();
                let (first, last) = (Some(route[i]), Some(route[k]));

                let before = leg(prev, first) + leg(last, next);
                let after = leg(prev, last) + leg(first, next);
                if after < before - IMPROVEMENT_EPS {
                    route[i..=k].reverse();
                    improved = true;
                }
            }
        }

        if !improved {
            break;
        }
    }

    debug!("2-opt over {n} targets finished after {sweeps} sweep(s)");
    *tour = Tour::new(route);
    sweeps
}
