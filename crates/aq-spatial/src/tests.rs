//! Unit tests for aq-spatial.
//!
//! All fixtures are hand-built so the tests need no input files.

#[cfg(test)]
mod helpers {
    use aq_core::Point;
    use crate::ExclusionZone;

    /// Axis-aligned square zone with lower-left corner `(x, y)`.
    pub fn square(x: f64, y: f64, size: f64) -> ExclusionZone {
        ExclusionZone::new(vec![
            Point::new(x, y),
            Point::new(x + size, y),
            Point::new(x + size, y + size),
            Point::new(x, y + size),
            Point::new(x, y),
        ])
        .unwrap()
    }
}

// ── Heading kernel ────────────────────────────────────────────────────────────

#[cfg(test)]
mod kernel {
    use aq_core::Point;
    use crate::{HeadingCode, candidate_headings, candidate_moves};

    #[test]
    fn reference_kernel_yields_36_candidates() {
        let moves = candidate_moves(Point::ORIGIN, 0.0003, 10);
        assert_eq!(moves.len(), 36);
        for p in &moves {
            assert!((p.distance(Point::ORIGIN) - 0.0003).abs() < 1e-15);
        }
    }

    #[test]
    fn candidates_are_ordered_by_heading() {
        let codes: Vec<u8> = candidate_headings(Point::ORIGIN, 1.0, 10).map(|(h, _)| h.0).collect();
        assert_eq!(codes, (0..36).collect::<Vec<u8>>());

        let coarse: Vec<u32> = candidate_headings(Point::ORIGIN, 1.0, 90).map(|(h, _)| h.degrees()).collect();
        assert_eq!(coarse, [0, 90, 180, 270]);
    }

    #[test]
    fn cardinal_endpoints() {
        let from = Point::new(2.0, 3.0);
        let m = candidate_moves(from, 1.0, 90);
        assert!((m[0].x - 3.0).abs() < 1e-12 && (m[0].y - 3.0).abs() < 1e-12); // east
        assert!((m[1].x - 2.0).abs() < 1e-12 && (m[1].y - 4.0).abs() < 1e-12); // north
        assert!((m[2].x - 1.0).abs() < 1e-12 && (m[2].y - 3.0).abs() < 1e-12); // west
        assert!((m[3].x - 2.0).abs() < 1e-12 && (m[3].y - 2.0).abs() < 1e-12); // south
    }

    #[test]
    fn invalid_quantum_yields_nothing() {
        assert!(candidate_moves(Point::ORIGIN, 1.0, 0).is_empty());
        assert!(candidate_moves(Point::ORIGIN, 1.0, 15).is_empty());
    }

    #[test]
    fn heading_code_degrees() {
        assert_eq!(HeadingCode::from_degrees(350), Some(HeadingCode(35)));
        assert_eq!(HeadingCode::from_degrees(360), None);
        assert_eq!(HeadingCode::from_degrees(15), None);
        assert_eq!(HeadingCode(9).degrees(), 90);
        assert_eq!(HeadingCode(27).to_string(), "270°");
    }
}

// ── Segment intersection ──────────────────────────────────────────────────────

#[cfg(test)]
mod intersect {
    use aq_core::Point;
    use crate::segments_intersect;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn proper_crossing() {
        assert!(segments_intersect(p(0.0, 0.0), p(2.0, 2.0), p(0.0, 2.0), p(2.0, 0.0)));
    }

    #[test]
    fn disjoint() {
        assert!(!segments_intersect(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)));
        // Lines cross, segments do not.
        assert!(!segments_intersect(p(0.0, 0.0), p(1.0, 1.0), p(3.0, 0.0), p(2.0, 1.0)));
    }

    #[test]
    fn shared_endpoint_counts() {
        assert!(segments_intersect(p(0.0, 0.0), p(1.0, 0.0), p(1.0, 0.0), p(1.0, 5.0)));
    }

    #[test]
    fn endpoint_touching_interior_counts() {
        assert!(segments_intersect(p(0.0, 0.0), p(1.0, 0.0), p(0.5, 0.0), p(0.5, 3.0)));
    }

    #[test]
    fn collinear_overlap_counts_but_gap_does_not() {
        assert!(segments_intersect(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(3.0, 0.0)));
        assert!(!segments_intersect(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0)));
    }

    #[test]
    fn zero_length_segments_never_intersect() {
        let a = p(0.5, 0.0);
        assert!(!segments_intersect(a, a, a, a));
        assert!(!segments_intersect(a, a, p(0.0, 0.0), p(1.0, 0.0)));
        assert!(!segments_intersect(p(0.0, 0.0), p(1.0, 0.0), a, a));
    }

    #[test]
    fn symmetric() {
        let (a1, a2, b1, b2) = (p(0.0, 0.0), p(3.0, 1.0), p(1.0, -1.0), p(2.0, 2.0));
        assert_eq!(segments_intersect(a1, a2, b1, b2), segments_intersect(b1, b2, a1, a2));
    }
}

// ── Exclusion zones ───────────────────────────────────────────────────────────

#[cfg(test)]
mod zones {
    use aq_core::{Point, Segment, ZoneId};
    use crate::{ExclusionZone, SpatialError, ZoneIndex, polygon_boundary_blocks};

    #[test]
    fn open_ring_is_closed() {
        let z = ExclusionZone::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ])
        .unwrap();
        assert_eq!(z.ring().len(), 4);
        assert_eq!(z.ring()[0], z.ring()[3]);
        assert_eq!(z.edges().count(), 3);
    }

    #[test]
    fn degenerate_ring_rejected() {
        let two = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 0.0)];
        assert!(matches!(
            ExclusionZone::new(two),
            Err(SpatialError::DegenerateZone { vertices: 2 })
        ));
        assert!(ExclusionZone::new(vec![]).is_err());
    }

    #[test]
    fn non_finite_ring_rejected() {
        let ring = vec![Point::new(0.0, 0.0), Point::new(f64::NAN, 0.0), Point::new(0.0, 1.0)];
        assert!(matches!(ExclusionZone::new(ring), Err(SpatialError::Core(_))));
    }

    #[test]
    fn crossing_move_is_blocked() {
        let zones = [super::helpers::square(1.0, 1.0, 1.0)];
        let through = Segment::new(Point::new(0.5, 1.5), Point::new(1.5, 1.5));
        let clear = Segment::new(Point::new(0.0, 0.0), Point::new(0.5, 0.5));
        assert!(polygon_boundary_blocks(through, &zones));
        assert!(!polygon_boundary_blocks(clear, &zones));
    }

    #[test]
    fn move_fully_inside_is_not_blocked_by_boundary_test() {
        // Boundary semantics: only edge contact blocks.
        let zones = [super::helpers::square(0.0, 0.0, 10.0)];
        let inside = Segment::new(Point::new(4.0, 4.0), Point::new(5.0, 5.0));
        assert!(!polygon_boundary_blocks(inside, &zones));
    }

    #[test]
    fn index_agrees_with_linear_scan() {
        let zones = vec![
            super::helpers::square(0.0, 0.0, 1.0),
            super::helpers::square(3.0, 0.0, 1.0),
            super::helpers::square(0.0, 3.0, 2.0),
        ];
        let index = ZoneIndex::new(&zones);
        assert_eq!(index.zone_count(), 3);
        assert_eq!(index.edge_count(), 12);

        // Sweep a grid of short probes in all directions.
        for ix in -2..12 {
            for iy in -2..12 {
                let from = Point::new(ix as f64 * 0.45, iy as f64 * 0.45);
                for deg in (0..360).step_by(30) {
                    let seg = Segment::new(from, from.offset(0.6, deg as f64));
                    assert_eq!(
                        index.blocks(seg),
                        polygon_boundary_blocks(seg, &zones),
                        "disagreement for {seg:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn blocking_zone_identifies_zone() {
        let zones = vec![super::helpers::square(0.0, 0.0, 1.0), super::helpers::square(3.0, 0.0, 1.0)];
        let index = ZoneIndex::new(&zones);
        let seg = Segment::new(Point::new(2.5, 0.5), Point::new(3.5, 0.5));
        assert_eq!(index.blocking_zone(seg), Some(ZoneId(1)));
        assert!(!ZoneIndex::empty().blocks(seg));
    }
}

// ── Distance matrix ───────────────────────────────────────────────────────────

#[cfg(test)]
mod matrix {
    use aq_core::{Point, Target, TargetId};
    use crate::DistanceMatrix;

    fn targets(points: &[(f64, f64)]) -> Vec<Target> {
        points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Target::new(TargetId(i as u32), format!("t{i}"), Point::new(x, y)))
            .collect()
    }

    #[test]
    fn symmetric_with_zero_diagonal() {
        let t = targets(&[(0.0, 0.0), (3.0, 4.0), (-1.0, 2.5), (7.0, -3.0), (3.0, 4.0)]);
        let m = DistanceMatrix::build(&t);
        assert_eq!(m.len(), 5);
        for i in 0..5 {
            assert_eq!(m.get(i, i), 0.0);
            for j in 0..5 {
                assert_eq!(m.get(i, j), m.get(j, i));
                assert_eq!(m.get(i, j), t[i].location.distance(t[j].location));
            }
        }
        assert!((m.get(0, 1) - 5.0).abs() < 1e-12);
        // Coincident targets are a genuine zero, not a diagonal.
        assert_eq!(m.get(1, 4), 0.0);
    }

    #[test]
    fn row_slice() {
        let m = DistanceMatrix::build(&targets(&[(0.0, 0.0), (1.0, 0.0), (0.0, 2.0)]));
        assert_eq!(m.row(0), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn empty() {
        let m = DistanceMatrix::build(&[]);
        assert!(m.is_empty());
    }
}
