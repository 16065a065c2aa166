//! `aq-spatial`: plane geometry kernel, exclusion zones, and distances.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`kernel`] | `HeadingCode`, `candidate_moves`, `segments_intersect`       |
//! | [`zone`]   | `ExclusionZone`, `polygon_boundary_blocks`, `ZoneIndex`      |
//! | [`matrix`] | `DistanceMatrix`                                             |
//! | [`error`]  | `SpatialError`, `SpatialResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod error;
pub mod kernel;
pub mod matrix;
pub mod zone;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use kernel::{HeadingCode, candidate_headings, candidate_moves, segments_intersect};
pub use matrix::DistanceMatrix;
pub use zone::{ExclusionZone, ZoneIndex, polygon_boundary_blocks};
