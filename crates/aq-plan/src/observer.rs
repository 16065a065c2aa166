//! Planning-run observer trait for progress reporting and data collection.

use aq_core::Target;
use aq_nav::Move;
use aq_tour::Tour;

use crate::PlanSummary;

/// Callbacks invoked by [`Planner::run`][crate::Planner::run] at key points
/// of a run.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: arrival printer
///
/// ```rust,ignore
/// struct ArrivalPrinter;
///
/// impl PlanObserver for ArrivalPrinter {
///     fn on_arrival(&mut self, step: u32, target: &Target) {
///         println!("step {step}: reached {}", target.label);
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called once the visiting order is fixed, before the first move.
    fn on_tour(&mut self, _tour: &Tour, _targets: &[Target]) {}

    /// Called after every recorded move.  `arrived` is the target reached by
    /// this move, if any.
    fn on_move(&mut self, _mv: &Move, _arrived: Option<&Target>) {}

    /// Called after `on_move` for a move that reached a target.
    fn on_arrival(&mut self, _step: u32, _target: &Target) {}

    /// Called once when the run has ended, whatever the outcome.
    fn on_finish(&mut self, _summary: &PlanSummary) {}
}

/// A [`PlanObserver`] that does nothing.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}
