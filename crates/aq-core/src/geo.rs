//! Plane coordinate type and flat-world distance.
//!
//! The agent's world is treated as a flat plane: `x` is the east axis
//! (longitude in the original survey data) and `y` the north axis.  All
//! distances are plain Euclidean distances in plane units.

use std::fmt;

/// Side of the grid cell a [`PointKey`] snaps to, in plane units.  Far
/// below any step length and far above the rounding drift of repeated
/// [`Point::offset`] calls.
pub const POSITION_RESOLUTION: f64 = 1e-9;

/// A plane coordinate.  Immutable value type with no identity beyond its
/// coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// The point `length` units away along `degrees` (0 = east, 90 = north).
    #[inline]
    pub fn offset(self, length: f64, degrees: f64) -> Point {
        let rad = degrees.to_radians();
        Point::new(self.x + length * rad.cos(), self.y + length * rad.sin())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Hashable key: the [`POSITION_RESOLUTION`] grid cell holding this
    /// point.  Points a few ulps apart (the same spot reached along different
    /// move sequences) share a key unless they straddle a cell border; see
    /// [`PointKey::neighbourhood`].
    #[inline]
    pub fn key(self) -> PointKey {
        fn cell(v: f64) -> i64 {
            (v / POSITION_RESOLUTION).round() as i64
        }
        PointKey(cell(self.x), cell(self.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Euclidean distance between two points.  Pure and total.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Grid-cell identity of a [`Point`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey(i64, i64);

impl PointKey {
    /// This cell and its eight neighbours.  Looking all nine up finds a
    /// stored point within one cell of the query even across a border.
    pub fn neighbourhood(self) -> impl Iterator<Item = PointKey> {
        let PointKey(x, y) = self;
        (-1..=1).flat_map(move |dx| (-1..=1).map(move |dy| PointKey(x + dx, y + dy)))
    }
}

// ── Segment ───────────────────────────────────────────────────────────────────

/// A straight segment between two points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    #[inline]
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.from.distance(self.to)
    }

    /// `true` when both endpoints coincide exactly.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.from == self.to
    }

    /// Direction-independent identity: `a→b` and `b→a` share a key.
    pub fn key(self) -> SegmentKey {
        let (a, b) = (self.from.key(), self.to.key());
        if a <= b { SegmentKey(a, b) } else { SegmentKey(b, a) }
    }
}

/// Hashable, direction-independent identity of a [`Segment`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SegmentKey(PointKey, PointKey);
