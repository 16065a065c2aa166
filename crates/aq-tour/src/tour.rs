//! The `Tour` permutation and its closed-loop length.

use aq_core::{Point, Target, TargetId};
use aq_spatial::DistanceMatrix;

/// Visiting order over the targets: a permutation of `[0, N)` where each
/// entry is a position in the original target list.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Wrap an order without checking it.  Use [`Tour::is_permutation`] when
    /// the order comes from outside this crate.
    pub fn new(order: Vec<usize>) -> Self {
        Self { order }
    }

    /// Input order `0, 1, …, n - 1`.
    pub fn identity(n: usize) -> Self {
        Self { order: (0..n).collect() }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.order
    }

    pub fn ids(&self) -> impl Iterator<Item = TargetId> + '_ {
        self.order.iter().map(|&i| TargetId(i as u32))
    }

    /// `true` if every index in `[0, n)` appears exactly once.
    pub fn is_permutation(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &i in &self.order {
            if i >= n || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }

    /// The targets in visiting order.
    pub fn ordered<'a>(&'a self, targets: &'a [Target]) -> impl Iterator<Item = &'a Target> + 'a {
        self.order.iter().map(move |&i| &targets[i])
    }
}

/// Closed-loop length: `start → first`, the inter-target legs, and
/// `last → start`.  Zero for an empty tour.
pub fn tour_length(tour: &[usize], start: Point, targets: &[Target], matrix: &DistanceMatrix) -> f64 {
    let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
        return 0.0;
    };
    let inner: f64 = tour.windows(2).map(|w| matrix.get(w[0], w[1])).sum();
    start.distance(targets[first].location) + inner + targets[last].location.distance(start)
}
