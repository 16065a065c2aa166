//! Planning-run configuration.
//!
//! Typically built with `NavConfig::default()` and a few field overrides, or
//! loaded from a JSON file by the application crate (feature `serde`).

use crate::{CoreError, CoreResult, TieBreakMode};

/// Length of one move in plane units.
pub const STEP_LENGTH: f64 = 0.0003;
/// Heading quantum in degrees.
pub const HEADING_STEP_DEGREES: u32 = 10;
/// Maximum number of moves per run.
pub const MOVE_BUDGET: u32 = 150;
/// Proximity that counts as having reached a target.
pub const ARRIVAL_THRESHOLD: f64 = 0.0002;
/// Proximity to the start that counts as closing the loop.
pub const CLOSURE_THRESHOLD: f64 = 0.0003;

/// Parameters of one planning run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Master seed for every tie-break decision of the run.
    pub seed: u64,

    /// Distance covered by every move.  Default: 0.0003.
    pub step_length: f64,

    /// Heading quantum in degrees.  Must be a positive multiple of 10 that
    /// divides 360.  Default: 10 (36 candidate moves).
    pub heading_step_degrees: u32,

    /// Hard cap on recorded moves.  Default: 150.
    pub move_budget: u32,

    /// A target is reached when the chosen move ends closer than this.
    pub arrival_threshold: f64,

    /// The loop is closed when the chosen move ends closer than this to the
    /// start point.
    pub closure_threshold: f64,

    pub tie_break: TieBreakMode,

    /// Append the start point as a final synthetic target.  When `false` the
    /// run ends as soon as the last real target is reached.
    pub return_to_start: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            seed:                 0,
            step_length:          STEP_LENGTH,
            heading_step_degrees: HEADING_STEP_DEGREES,
            move_budget:          MOVE_BUDGET,
            arrival_threshold:    ARRIVAL_THRESHOLD,
            closure_threshold:    CLOSURE_THRESHOLD,
            tie_break:            TieBreakMode::Reseeded,
            return_to_start:      true,
        }
    }
}

impl NavConfig {
    /// Default configuration with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, ..Self::default() }
    }

    /// Number of candidate moves generated per step.
    #[inline]
    pub fn heading_count(&self) -> usize {
        (360 / self.heading_step_degrees.max(1)) as usize
    }

    /// Reject values the navigator cannot work with.
    pub fn validate(&self) -> CoreResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;

        if !positive(self.step_length) {
            return Err(CoreError::Config(format!(
                "step_length must be positive and finite, got {}",
                self.step_length
            )));
        }
        let h = self.heading_step_degrees;
        if h == 0 || h % 10 != 0 || 360 % h != 0 {
            return Err(CoreError::Config(format!(
                "heading_step_degrees must be a multiple of 10 dividing 360, got {h}"
            )));
        }
        if !positive(self.arrival_threshold) || !positive(self.closure_threshold) {
            return Err(CoreError::Config(format!(
                "thresholds must be positive and finite, got arrival {} / closure {}",
                self.arrival_threshold, self.closure_threshold
            )));
        }
        Ok(())
    }
}
