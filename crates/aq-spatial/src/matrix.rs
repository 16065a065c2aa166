//! Pairwise plane distances over the target set.
//!
//! Stored flat and row-major: entry `(i, j)` lives at `data[i * n + j]`, so
//! a row scan during tour construction is one contiguous slice.  O(N²) time
//! and space, which is fine for the tens of targets of a survey day.

use aq_core::{Point, Target};

/// Symmetric distance matrix with a zero diagonal.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// `matrix[i][j] = distance(targets[i].location, targets[j].location)`.
    pub fn build(targets: &[Target]) -> Self {
        let points: Vec<Point> = targets.iter().map(|t| t.location).collect();
        Self::from_points(&points)
    }

    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance(points[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { n, data }
    }

    /// Number of targets (rows).
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between targets `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index ({i}, {j}) out of bounds for {}", self.n);
        self.data[i * self.n + j]
    }

    /// All distances from target `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}
