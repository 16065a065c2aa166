//! Polygonal exclusion zones and the edge index used to test moves.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) holds the bounding box of every zone edge.  A move
//! is tested only against the edges whose boxes touch the move's own box, so
//! each per-step check stays cheap however many buildings are loaded.  The
//! plain [`polygon_boundary_blocks`] scan gives the same answers and is kept
//! for callers that test a handful of segments.

use rstar::{AABB, RTree, RTreeObject};

use aq_core::{CoreError, Point, Segment, ZoneId};

use crate::kernel::segments_intersect;
use crate::{SpatialError, SpatialResult};

// ── ExclusionZone ─────────────────────────────────────────────────────────────

/// A closed polygon boundary (first vertex == last vertex).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExclusionZone {
    ring: Vec<Point>,
}

impl ExclusionZone {
    /// Validate and close `ring`.
    ///
    /// An open ring is closed by repeating its first vertex.
    ///
    /// # Errors
    ///
    /// - [`SpatialError::DegenerateZone`] if fewer than 3 distinct vertices
    ///   remain once the closing vertex is ignored.
    /// - `CoreError::NonFinite` if any coordinate is NaN or infinite.
    pub fn new(mut ring: Vec<Point>) -> SpatialResult<Self> {
        if ring.iter().any(|p| !p.is_finite()) {
            return Err(CoreError::NonFinite("exclusion zone ring").into());
        }

        let mut keys: Vec<_> = ring.iter().map(|p| p.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        if keys.len() < 3 {
            return Err(SpatialError::DegenerateZone { vertices: keys.len() });
        }

        if ring.first().map(|p| p.key()) != ring.last().map(|p| p.key()) {
            ring.push(ring[0]);
        }
        Ok(Self { ring })
    }

    /// The closed ring, first vertex repeated at the end.
    pub fn ring(&self) -> &[Point] {
        &self.ring
    }

    /// Boundary edges in ring order.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        self.ring.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    /// `true` if `segment` touches or crosses this zone's boundary.
    pub fn blocks(&self, segment: Segment) -> bool {
        self.edges()
            .any(|e| segments_intersect(segment.from, segment.to, e.from, e.to))
    }
}

/// `true` iff `segment` intersects any edge of any zone ring.
pub fn polygon_boundary_blocks(segment: Segment, zones: &[ExclusionZone]) -> bool {
    zones.iter().any(|z| z.blocks(segment))
}

// ── R-tree edge entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree: one boundary edge and the zone it belongs to.
#[derive(Clone)]
struct EdgeEntry {
    edge: Segment,
    zone: ZoneId,
}

#[inline]
fn envelope_of(s: Segment) -> AABB<[f64; 2]> {
    AABB::from_corners([s.from.x, s.from.y], [s.to.x, s.to.y])
}

impl RTreeObject for EdgeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        envelope_of(self.edge)
    }
}

// ── ZoneIndex ─────────────────────────────────────────────────────────────────

/// Bulk-loaded R-tree over every edge of every exclusion zone.
pub struct ZoneIndex {
    tree: RTree<EdgeEntry>,
    zone_count: usize,
}

impl ZoneIndex {
    /// Index every non-degenerate edge of `zones`.
    ///
    /// Time complexity: O(E log E) for E edges.
    pub fn new(zones: &[ExclusionZone]) -> Self {
        let entries: Vec<EdgeEntry> = zones
            .iter()
            .enumerate()
            .flat_map(|(i, z)| {
                z.edges()
                    .filter(|e| !e.is_degenerate())
                    .map(move |edge| EdgeEntry { edge, zone: ZoneId(i as u32) })
            })
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
            zone_count: zones.len(),
        }
    }

    /// An index with no zones; nothing is ever blocked.
    pub fn empty() -> Self {
        Self::new(&[])
    }

    pub fn zone_count(&self) -> usize {
        self.zone_count
    }

    pub fn edge_count(&self) -> usize {
        self.tree.size()
    }

    /// A zone whose boundary `segment` touches, if any.  When several zones
    /// are hit the choice among them is unspecified.
    pub fn blocking_zone(&self, segment: Segment) -> Option<ZoneId> {
        self.tree
            .locate_in_envelope_intersecting(&envelope_of(segment))
            .find(|e| segments_intersect(segment.from, segment.to, e.edge.from, e.edge.to))
            .map(|e| e.zone)
    }

    /// Same answer as [`polygon_boundary_blocks`] over the indexed zones.
    #[inline]
    pub fn blocks(&self, segment: Segment) -> bool {
        self.blocking_zone(segment).is_some()
    }
}
