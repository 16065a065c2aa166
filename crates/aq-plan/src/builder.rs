//! Fluent builder for constructing a [`Planner`].

use aq_core::{CoreError, NavConfig, Point, Target};
use aq_spatial::{DistanceMatrix, ExclusionZone, ZoneIndex};
use aq_tour::TourBuilder;

use crate::{PlanError, PlanResult, Planner};

/// Fluent builder for [`Planner<B>`].
///
/// # Required inputs
///
/// - [`NavConfig`]: seed, step length, budget, thresholds, …
/// - `start`: where the loop begins and ends
/// - `targets`: the survey targets; `targets[i].id` must be `TargetId(i)`
/// - `B: TourBuilder`: the ordering heuristic (e.g. [`aq_tour::TourStrategy`])
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default       |
/// |----------------------|---------------|
/// | `.zones(v)`          | No zones      |
/// | `.zone_rings(v)`     | No zones      |
///
/// # Example
///
/// ```rust,ignore
/// let planner = PlanBuilder::new(config, start, targets, TourStrategy::TwoOpt)
///     .zones(zones)
///     .build()?;
/// let outcome = planner.run(&mut NoopObserver)?;
/// ```
pub struct PlanBuilder<B: TourBuilder> {
    config:  NavConfig,
    start:   Point,
    targets: Vec<Target>,
    zones:   Vec<ExclusionZone>,
    rings:   Vec<Vec<Point>>,
    tour:    B,
}

impl<B: TourBuilder> PlanBuilder<B> {
    /// Create a builder with all required inputs.
    pub fn new(config: NavConfig, start: Point, targets: Vec<Target>, tour: B) -> Self {
        Self {
            config,
            start,
            targets,
            zones: Vec::new(),
            rings: Vec::new(),
            tour,
        }
    }

    /// Supply already-validated exclusion zones.
    pub fn zones(mut self, zones: Vec<ExclusionZone>) -> Self {
        self.zones.extend(zones);
        self
    }

    /// Supply raw zone rings; they are validated by [`build`][Self::build].
    /// Zone ids follow `.zones(..)` entries, then rings, in call order.
    pub fn zone_rings(mut self, rings: Vec<Vec<Point>>) -> Self {
        self.rings.extend(rings);
        self
    }

    /// Validate inputs, build the distance matrix and zone index, and return
    /// a ready-to-run [`Planner`].
    pub fn build(self) -> PlanResult<Planner<B>> {
        // ── Validate ──────────────────────────────────────────────────────
        self.config.validate()?;
        if !self.start.is_finite() {
            return Err(CoreError::NonFinite("start point").into());
        }
        for (index, t) in self.targets.iter().enumerate() {
            if t.id.index() != index {
                return Err(PlanError::TargetIdMismatch { index, got: t.id });
            }
            if !t.location.is_finite() {
                return Err(PlanError::NonFiniteTarget(t.id));
            }
        }

        let mut zones = self.zones;
        for ring in self.rings {
            zones.push(ExclusionZone::new(ring)?);
        }

        // ── Derived structures ────────────────────────────────────────────
        let matrix = DistanceMatrix::build(&self.targets);
        let index = ZoneIndex::new(&zones);

        Ok(Planner {
            config:  self.config,
            start:   self.start,
            targets: self.targets,
            zones,
            index,
            matrix,
            tour:    self.tour,
        })
    }
}
