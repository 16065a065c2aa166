//! Unit tests for aq-nav.

use std::collections::HashSet;

use aq_core::{NavConfig, Point, Target, TargetId, TieBreakMode};
use aq_spatial::{ExclusionZone, ZoneIndex};

use crate::{NavOutcome, NavStatus, Navigator};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn targets(points: &[(f64, f64)]) -> Vec<Target> {
    points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| Target::new(TargetId(i as u32), format!("t{i}"), Point::new(x, y)))
        .collect()
}

/// Three targets 10 steps out from the origin: east, north, west.
fn scaled_triangle() -> Vec<Target> {
    targets(&[(0.003, 0.0), (0.0, 0.003), (-0.003, 0.0)])
}

/// Axis-aligned square zone centred on `(cx, cy)`.
fn square(cx: f64, cy: f64, half: f64) -> ExclusionZone {
    ExclusionZone::new(vec![
        Point::new(cx - half, cy - half),
        Point::new(cx + half, cy - half),
        Point::new(cx + half, cy + half),
        Point::new(cx - half, cy + half),
    ])
    .unwrap()
}

fn run(config: NavConfig, zones: &ZoneIndex, targets: &[Target]) -> NavOutcome {
    let mut nav = Navigator::seeded(config, zones).unwrap();
    nav.navigate(Point::ORIGIN, targets)
}

fn arrival_ids(outcome: &NavOutcome) -> Vec<TargetId> {
    outcome.log.arrivals().map(|(_, t)| t).collect()
}

// ── NavigatorState ────────────────────────────────────────────────────────────

#[cfg(test)]
mod state {
    use aq_core::{Point, TargetId};

    use crate::{NavPhase, NavStatus, NavigatorState, Waypoint};

    #[test]
    fn start_counts_as_occupied() {
        let s = NavigatorState::new(
            Point::ORIGIN,
            [Waypoint::target(TargetId(0), Point::new(1.0, 0.0)), Waypoint::closing(Point::ORIGIN)],
        );
        assert!(s.has_occupied(Point::ORIGIN));
        assert!(s.has_occupied(Point::new(-0.0, 0.0)));
        assert_eq!(s.phase(), NavPhase::Cruising);
        assert_eq!(s.move_count(), 0);
        assert_eq!(s.current_goal().and_then(|w| w.target), Some(TargetId(0)));
        assert_eq!(s.unvisited(), [TargetId(0)]);
        assert_eq!(s.status(), None);
    }

    #[test]
    fn drifted_return_counts_as_occupied() {
        let p = Point::new(0.0013928362829059616, 7.018666706430656e-5);
        let s = NavigatorState::new(p, [Waypoint::closing(p)]);
        assert!(s.has_occupied(Point::new(p.x, 7.018666706430659e-5)));

        // Round trip around a one-step square lands within rounding of p.
        let q = p.offset(0.0003, 0.0).offset(0.0003, 90.0).offset(0.0003, 180.0).offset(0.0003, 270.0);
        assert!(q.distance(p) < 1e-15);
        assert!(s.has_occupied(q));
    }

    #[test]
    fn occupancy_spans_cell_borders() {
        let s = NavigatorState::new(Point::new(1.4999999999e-9, 0.0), [Waypoint::closing(Point::ORIGIN)]);
        assert!(s.has_occupied(Point::new(1.5000000001e-9, 0.0)));
        assert!(!s.has_occupied(Point::new(0.0003, 0.0)));
    }

    #[test]
    fn only_closing_goal_starts_in_closing() {
        let s = NavigatorState::new(Point::ORIGIN, [Waypoint::closing(Point::ORIGIN)]);
        assert_eq!(s.phase(), NavPhase::Closing);
        assert!(s.unvisited().is_empty());
    }

    #[test]
    fn no_goals_is_already_done() {
        let s = NavigatorState::new(Point::ORIGIN, Vec::<Waypoint>::new());
        assert_eq!(s.phase(), NavPhase::Done { closed: false });
        assert_eq!(s.status(), Some(NavStatus::Done { closed: false }));
    }

    #[test]
    fn terminal_phases() {
        assert!(NavPhase::Done { closed: true }.is_terminal());
        assert!(NavPhase::BudgetExceeded.is_terminal());
        assert!(NavPhase::NoFeasibleMove.is_terminal());
        assert!(!NavPhase::Cruising.is_terminal());
        assert!(!NavPhase::Arrived.is_terminal());
        assert!(!NavPhase::Closing.is_terminal());
    }
}

// ── Closed-loop runs ──────────────────────────────────────────────────────────

#[cfg(test)]
mod closed_loop {
    use super::*;

    #[test]
    fn first_move_heads_straight_for_the_first_target() {
        let outcome = run(NavConfig::default(), &ZoneIndex::empty(), &scaled_triangle());
        let first = outcome.log.moves()[0];
        assert_eq!(first.step_index, 1);
        assert_eq!(first.heading.degrees(), 0);
        assert_eq!(first.from, Point::ORIGIN);
        assert_eq!(first.to, Point::new(0.0003, 0.0));
    }

    #[test]
    fn scaled_triangle_closes_within_default_budget() {
        let config = NavConfig::default();
        let outcome = run(config.clone(), &ZoneIndex::empty(), &scaled_triangle());

        assert_eq!(outcome.status, NavStatus::Done { closed: true });
        assert_eq!(arrival_ids(&outcome), [TargetId(0), TargetId(1), TargetId(2)]);
        assert!(outcome.unvisited.is_empty());
        assert!(outcome.log.len() <= config.move_budget as usize);

        let last = outcome.log.moves().last().unwrap();
        assert_eq!(last.arrived_target, None);
        assert!(last.to.distance(Point::ORIGIN) < config.closure_threshold);
    }

    #[test]
    fn unit_triangle_closes_with_raised_budget() {
        let config = NavConfig { move_budget: 20_000, ..NavConfig::default() };
        let t = targets(&[(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)]);
        let outcome = run(config.clone(), &ZoneIndex::empty(), &t);

        assert_eq!(outcome.status, NavStatus::Done { closed: true });
        assert_eq!(arrival_ids(&outcome), [TargetId(0), TargetId(1), TargetId(2)]);
        assert!(outcome.log.end().unwrap().distance(Point::ORIGIN) < config.closure_threshold);
    }

    #[test]
    fn arrival_moves_end_near_their_target() {
        let config = NavConfig::default();
        let t = scaled_triangle();
        let outcome = run(config.clone(), &ZoneIndex::empty(), &t);
        for m in &outcome.log {
            if let Some(id) = m.arrived_target {
                assert!(m.to.distance(t[id.index()].location) < config.arrival_threshold);
            }
        }
    }

    #[test]
    fn every_move_has_fixed_length_and_quantized_heading() {
        let config = NavConfig::default();
        let outcome = run(config.clone(), &ZoneIndex::empty(), &scaled_triangle());
        for m in &outcome.log {
            assert!((m.segment().length() - config.step_length).abs() < 1e-12);
            assert_eq!(m.heading.degrees() % 10, 0);
            assert!(m.heading.degrees() <= 350);
        }
    }

    #[test]
    fn positions_and_segments_never_repeat() {
        let outcome = run(NavConfig::default(), &ZoneIndex::empty(), &scaled_triangle());
        let mut positions = HashSet::from([Point::ORIGIN.key()]);
        let mut segments = HashSet::new();
        for m in &outcome.log {
            assert!(positions.insert(m.to.key()), "step {} revisits {}", m.step_index, m.to);
            assert!(segments.insert(m.segment().key()), "step {} repeats a segment", m.step_index);
        }
    }

    #[test]
    fn empty_target_set_closes_immediately() {
        let outcome = run(NavConfig::default(), &ZoneIndex::empty(), &[]);
        assert_eq!(outcome.status, NavStatus::Done { closed: true });
        assert!((1..=2).contains(&outcome.log.len()), "{} moves", outcome.log.len());
        assert_eq!(outcome.log.arrivals().count(), 0);
    }

    #[test]
    fn one_decision_per_move() {
        let zones = ZoneIndex::empty();
        let mut nav = Navigator::seeded(NavConfig::default(), &zones).unwrap();
        let outcome = nav.navigate(Point::ORIGIN, &scaled_triangle());
        assert_eq!(nav.tie_breaker().decisions(), outcome.log.len() as u64);
    }
}

// ── Open route ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod open_route {
    use super::*;

    #[test]
    fn stops_at_last_target() {
        let config = NavConfig { return_to_start: false, ..NavConfig::default() };
        let outcome = run(config, &ZoneIndex::empty(), &scaled_triangle());
        assert_eq!(outcome.status, NavStatus::Done { closed: false });
        assert_eq!(
            outcome.log.moves().last().and_then(|m| m.arrived_target),
            Some(TargetId(2))
        );
    }

    #[test]
    fn nothing_to_do_records_nothing() {
        let config = NavConfig { return_to_start: false, ..NavConfig::default() };
        let outcome = run(config, &ZoneIndex::empty(), &[]);
        assert_eq!(outcome.status, NavStatus::Done { closed: false });
        assert!(outcome.log.is_empty());
    }
}

// ── Step API and phases ───────────────────────────────────────────────────────

#[cfg(test)]
mod phases {
    use super::*;
    use crate::NavPhase;

    #[test]
    fn arrival_then_cruising_then_closing() {
        let zones = ZoneIndex::empty();
        let mut nav = Navigator::seeded(NavConfig::default(), &zones).unwrap();
        let t = scaled_triangle();
        let mut state = nav.begin(Point::ORIGIN, &t);

        let mut phases = Vec::new();
        while let Some(mv) = nav.step(&mut state) {
            if mv.arrived_target.is_some() {
                assert_eq!(state.phase(), NavPhase::Arrived);
            }
            phases.push(state.phase());
        }

        assert_eq!(state.phase(), NavPhase::Done { closed: true });
        assert_eq!(phases.first(), Some(&NavPhase::Cruising));
        assert!(phases.contains(&NavPhase::Closing));
        // Closing only ever follows the final arrival.
        let first_closing = phases.iter().position(|p| *p == NavPhase::Closing).unwrap();
        let arrivals_before = phases[..first_closing]
            .iter()
            .filter(|p| **p == NavPhase::Arrived)
            .count();
        assert_eq!(arrivals_before, 3);
    }

    #[test]
    fn step_after_terminal_is_a_no_op() {
        let zones = ZoneIndex::empty();
        let mut nav = Navigator::seeded(NavConfig::default(), &zones).unwrap();
        let t = scaled_triangle();
        let mut state = nav.begin(Point::ORIGIN, &t);
        while nav.step(&mut state).is_some() {}
        let moves = state.move_count();
        assert!(nav.step(&mut state).is_none());
        assert_eq!(state.move_count(), moves);
    }

    #[test]
    fn terminal_status_of_a_finished_run_matches_navigate() {
        let zones = ZoneIndex::empty();
        let t = scaled_triangle();
        let mut nav = Navigator::seeded(NavConfig::default(), &zones).unwrap();
        let mut state = nav.begin(Point::ORIGIN, &t);
        while nav.step(&mut state).is_some() {}

        let whole = run(NavConfig::default(), &zones, &t);
        assert_eq!(state.status(), Some(whole.status));
        assert_eq!(state.terminal_status(), whole.status);
    }

    #[test]
    fn run_stopped_midway_reports_budget_exceeded() {
        let zones = ZoneIndex::empty();
        let t = scaled_triangle();
        let mut nav = Navigator::seeded(NavConfig::default(), &zones).unwrap();
        let mut state = nav.begin(Point::ORIGIN, &t);
        for _ in 0..3 {
            nav.step(&mut state).unwrap();
        }
        assert_eq!(state.status(), None);
        assert_eq!(state.terminal_status(), NavStatus::BudgetExceeded);
    }
}

// ── Budget ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod budget {
    use super::*;

    #[test]
    fn budget_of_one_stops_after_one_move() {
        let config = NavConfig { move_budget: 1, ..NavConfig::default() };
        let outcome = run(config, &ZoneIndex::empty(), &scaled_triangle());
        assert_eq!(outcome.status, NavStatus::BudgetExceeded);
        assert_eq!(outcome.log.len(), 1);
        assert_eq!(outcome.unvisited, [TargetId(0), TargetId(1), TargetId(2)]);
    }

    #[test]
    fn zero_budget_records_nothing() {
        let config = NavConfig { move_budget: 0, ..NavConfig::default() };
        let outcome = run(config, &ZoneIndex::empty(), &scaled_triangle());
        assert_eq!(outcome.status, NavStatus::BudgetExceeded);
        assert!(outcome.log.is_empty());
    }

    #[test]
    fn budget_exceeded_is_not_an_error() {
        let config = NavConfig { move_budget: 5, ..NavConfig::default() };
        let outcome = run(config, &ZoneIndex::empty(), &scaled_triangle());
        let outcome = outcome.into_result().unwrap();
        assert_eq!(outcome.log.len(), 5);
    }
}

// ── Exclusion zones ───────────────────────────────────────────────────────────

#[cfg(test)]
mod zones {
    use super::*;
    use crate::NavError;

    #[test]
    fn boxed_in_start_has_no_feasible_move() {
        let zones = ZoneIndex::new(&[square(0.0, 0.0, 0.0001)]);
        let outcome = run(NavConfig::default(), &zones, &scaled_triangle());
        assert_eq!(
            outcome.status,
            NavStatus::NoFeasibleMove { step: 1, at: Point::ORIGIN }
        );
        assert!(outcome.log.is_empty());

        match outcome.into_result() {
            Err(NavError::NoFeasibleMove { step, log, .. }) => {
                assert_eq!(step, 1);
                assert!(log.is_empty());
            }
            other => panic!("expected NoFeasibleMove, got {other:?}"),
        }
    }

    #[test]
    fn enclosed_target_spends_the_budget() {
        let zone = square(0.003, 0.0, 0.0003);
        let zones = ZoneIndex::new(std::slice::from_ref(&zone));
        let outcome = run(NavConfig::default(), &zones, &scaled_triangle());

        assert_eq!(outcome.status, NavStatus::BudgetExceeded);
        assert_eq!(outcome.log.len(), 150);
        assert!(arrival_ids(&outcome).is_empty());
        assert_eq!(outcome.unvisited, [TargetId(0), TargetId(1), TargetId(2)]);
        for m in &outcome.log {
            assert!(!zone.blocks(m.segment()), "step {} touches the zone", m.step_index);
        }
    }

    #[test]
    fn loop_closes_around_a_wall_in_the_way() {
        let wall = ExclusionZone::new(vec![
            Point::new(0.0015, -0.0002),
            Point::new(0.0017, -0.0002),
            Point::new(0.0017, 0.0002),
            Point::new(0.0015, 0.0002),
        ])
        .unwrap();
        let t = scaled_triangle();

        // Without the wall the first leg runs straight through it.
        let open = run(NavConfig::default(), &ZoneIndex::empty(), &t);
        assert!(open.log.iter().any(|m| wall.blocks(m.segment())));

        let zones = ZoneIndex::new(std::slice::from_ref(&wall));
        let outcome = run(NavConfig::default(), &zones, &t);
        assert_eq!(outcome.status, NavStatus::Done { closed: true });
        assert_eq!(arrival_ids(&outcome), [TargetId(0), TargetId(1), TargetId(2)]);
        assert!(outcome.unvisited.is_empty());
        for m in &outcome.log {
            assert!(!wall.blocks(m.segment()), "step {} touches the wall", m.step_index);
        }
    }

    #[test]
    fn tall_wall_never_revisits_a_position() {
        let wall = ExclusionZone::new(vec![
            Point::new(0.0014, -0.0006),
            Point::new(0.0016, -0.0006),
            Point::new(0.0016, 0.0006),
            Point::new(0.0014, 0.0006),
        ])
        .unwrap();
        let zones = ZoneIndex::new(std::slice::from_ref(&wall));
        let outcome = run(NavConfig::default(), &zones, &scaled_triangle());

        assert_eq!(outcome.status, NavStatus::BudgetExceeded);
        let mut seen = vec![Point::ORIGIN];
        for m in &outcome.log {
            assert!(!wall.blocks(m.segment()), "step {} touches the wall", m.step_index);
            assert!(
                seen.iter().all(|p| p.distance(m.to) > 1e-9),
                "step {} returns to {}",
                m.step_index,
                m.to
            );
            seen.push(m.to);
        }
    }
}

// ── Determinism and configuration ─────────────────────────────────────────────

#[cfg(test)]
mod determinism {
    use super::*;
    use crate::NavError;

    #[test]
    fn identical_inputs_identical_logs() {
        let zones = ZoneIndex::new(&[square(0.0015, 0.0015, 0.0004)]);
        for seed in [0, 1, 5678] {
            let a = run(NavConfig::with_seed(seed), &zones, &scaled_triangle());
            let b = run(NavConfig::with_seed(seed), &zones, &scaled_triangle());
            assert_eq!(a, b, "seed {seed}");
        }
    }

    #[test]
    fn stream_mode_is_deterministic_too() {
        let config = NavConfig { tie_break: TieBreakMode::Stream, ..NavConfig::with_seed(9) };
        let a = run(config.clone(), &ZoneIndex::empty(), &scaled_triangle());
        let b = run(config, &ZoneIndex::empty(), &scaled_triangle());
        assert_eq!(a.log, b.log);
    }

    #[test]
    fn coarser_heading_quantum_is_respected() {
        let config = NavConfig { heading_step_degrees: 20, ..NavConfig::default() };
        let outcome = run(config, &ZoneIndex::empty(), &scaled_triangle());
        assert!(!outcome.log.is_empty());
        assert!(outcome.log.iter().all(|m| m.heading.degrees() % 20 == 0));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let zones = ZoneIndex::empty();
        let config = NavConfig { step_length: 0.0, ..NavConfig::default() };
        assert!(matches!(Navigator::seeded(config, &zones), Err(NavError::Config(_))));
    }
}
