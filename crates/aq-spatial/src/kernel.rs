//! Quantized-heading move generation and segment intersection.
//!
//! # Heading convention
//!
//! Headings are measured counter-clockwise from east: 0° = east, 90° = north,
//! 180° = west, 270° = south.  A [`HeadingCode`] is `degrees / 10`, so the
//! reference 10° quantum yields codes `0..=35`.

use std::fmt;

use aq_core::{Point, Segment};

// ── HeadingCode ───────────────────────────────────────────────────────────────

/// A quantized heading, stored as `degrees / 10`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeadingCode(pub u8);

impl HeadingCode {
    /// Heading for `degrees`, which must be a multiple of 10 below 360.
    #[inline]
    pub fn from_degrees(degrees: u32) -> Option<HeadingCode> {
        (degrees < 360 && degrees % 10 == 0).then(|| HeadingCode((degrees / 10) as u8))
    }

    #[inline]
    pub fn degrees(self) -> u32 {
        self.0 as u32 * 10
    }
}

impl fmt::Display for HeadingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

// ── Candidate moves ───────────────────────────────────────────────────────────

/// Every reachable endpoint from `from`, paired with its heading, in
/// increasing heading order: `0, step, …, 360 − step`.
///
/// `heading_step_degrees` must be a positive multiple of 10 dividing 360
/// (checked by `NavConfig::validate`); other values produce no candidates.
pub fn candidate_headings(
    from:                 Point,
    step_length:          f64,
    heading_step_degrees: u32,
) -> impl Iterator<Item = (HeadingCode, Point)> {
    let valid = heading_step_degrees > 0 && heading_step_degrees % 10 == 0;
    let step = if valid { heading_step_degrees as usize } else { 360 };
    (0..360u32)
        .step_by(step)
        .filter(move |_| valid)
        .map(move |deg| (HeadingCode((deg / 10) as u8), from.offset(step_length, deg as f64)))
}

/// The candidate endpoints alone, ordered by increasing heading.
///
/// With the reference `step_length = 0.0003` and a 10° quantum this yields
/// 36 points.
pub fn candidate_moves(from: Point, step_length: f64, heading_step_degrees: u32) -> Vec<Point> {
    candidate_headings(from, step_length, heading_step_degrees)
        .map(|(_, p)| p)
        .collect()
}

// ── Segment intersection ──────────────────────────────────────────────────────

/// Twice the signed area of `a, b, c`; positive when counter-clockwise.
#[inline]
fn orient(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// `p` is collinear with `a→b`; is it inside the bounding box of the segment?
#[inline]
fn within_box(a: Point, b: Point, p: Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Closed-segment intersection test.
///
/// Proper crossings, an endpoint touching the other segment, and collinear
/// overlap all count as intersecting.  Zero-length segments never intersect
/// anything, including themselves.
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    if Segment::new(a1, a2).is_degenerate() || Segment::new(b1, b2).is_degenerate() {
        return false;
    }

    let d1 = orient(b1, b2, a1);
    let d2 = orient(b1, b2, a2);
    let d3 = orient(a1, a2, b1);
    let d4 = orient(a1, a2, b2);

    let straddles = |p: f64, q: f64| (p > 0.0 && q < 0.0) || (p < 0.0 && q > 0.0);
    if straddles(d1, d2) && straddles(d3, d4) {
        return true;
    }

    (d1 == 0.0 && within_box(b1, b2, a1))
        || (d2 == 0.0 && within_box(b1, b2, a2))
        || (d3 == 0.0 && within_box(a1, a2, b1))
        || (d4 == 0.0 && within_box(a1, a2, b2))
}
