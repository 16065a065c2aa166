//! `aq-plan`: one planning run from raw inputs to flight log.
//!
//! # Run outline
//!
//! ```text
//! PlanBuilder::build:
//!   validate config, start, target ids and coordinates, zone rings
//!   build DistanceMatrix and ZoneIndex
//!
//! Planner::run:
//!   ① Tour     : TourBuilder::construct with a fresh TieBreaker
//!   ② Navigate : Navigator over the ordered targets, sharing that TieBreaker
//!   ③ Summarise: status, lengths, arrivals, unvisited targets
//! ```
//!
//! Observers ([`PlanObserver`]) see the tour, every move and arrival, and the
//! summary, so output writers need no knowledge of the planner internals.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use aq_core::{NavConfig, Point};
//! use aq_plan::{NoopObserver, PlanBuilder};
//! use aq_tour::TourStrategy;
//!
//! let planner = PlanBuilder::new(NavConfig::with_seed(5678), start, targets, TourStrategy::TwoOpt)
//!     .zones(zones)
//!     .build()?;
//! let outcome = planner.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod planner;


pub use builder::PlanBuilder;
pub use error::{PlanError, PlanResult};
pub use observer::{NoopObserver, PlanObserver};
pub use planner::{PlanOutcome, PlanSummary, Planner};
