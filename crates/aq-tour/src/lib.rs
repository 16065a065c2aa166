//! `aq-tour`: visiting order over the survey targets.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`tour`]     | `Tour` permutation, closed-loop `tour_length`              |
//! | [`builder`]  | `TourBuilder` trait, `GreedyTour`, `TwoOptTour`, `TourStrategy`, `construct_tour` |
//! | [`two_opt`]  | `refine_two_opt` local search                              |
//!
//! # Pluggability
//!
//! `aq-plan` orders targets through the [`TourBuilder`] trait, so callers can
//! swap in their own heuristic (or a fixed order) without touching the
//! navigator.  Both built-in strategies are heuristics; neither promises the
//! optimal tour.

pub mod builder;
pub mod tour;
pub mod two_opt;


pub use builder::{GreedyTour, TourBuilder, TourStrategy, TwoOptTour, construct_tour};
pub use tour::{Tour, tour_length};
pub use two_opt::{DEFAULT_MAX_SWEEPS, refine_two_opt};
