//! `aq-core`: foundational types for the `aq` closed-loop route planner.
//!
//! This crate is a dependency of every other `aq-*` crate.  It intentionally
//! has no `aq-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `TargetId`, `ZoneId`                                      |
//! | [`geo`]     | `Point`, `Segment`, plane `distance`                      |
//! | [`rng`]     | `TieBreaker`, `TieBreakMode`, `pick`                      |
//! | [`target`]  | `Target` record                                           |
//! | [`marker`]  | `Marker` classification from reading + battery           |
//! | [`config`]  | `NavConfig` and the reference constants                   |
//! | [`error`]   | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to public value types.      |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod marker;
pub mod rng;
pub mod target;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::NavConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{Point, Segment, distance};
pub use ids::{TargetId, ZoneId};
pub use marker::Marker;
pub use rng::{TieBreakMode, TieBreaker, pick};
pub use target::Target;
