//! `aq-nav`: turns an ordered target list into a feasible sequence of
//! quantized moves.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`navigator`] | `Navigator`: candidate scoring, arrival and closure        |
//! | [`state`]     | `NavigatorState`, `NavPhase`, `Waypoint`                   |
//! | [`flight`]    | `Move`, `FlightLog`, `NavStatus`, `NavOutcome`             |
//! | [`error`]     | `NavError`, `NavResult<T>`                                 |
//!
//! # Step rule
//!
//! ```text
//! each step:
//!   ① goal     : front of the queue (the start point once only it is left)
//!   ② generate : one candidate per heading 0, q, …, 360 − q
//!   ③ score    : endpoint distance to the goal; +∞ if the move repeats a
//!                flown segment, lands on an occupied position, or touches
//!                an exclusion zone
//!   ④ choose   : minimum score, ties settled by the tie-breaker
//!   ⑤ record   : append to the flight log, advance the position
//!   ⑥ check    : closure (goal is start, < closure_threshold) or
//!                arrival (< arrival_threshold, dequeue the goal)
//! ```
//!
//! The run ends in `Done`, `BudgetExceeded` (move budget spent), or
//! `NoFeasibleMove` (all candidates disqualified).  A blocked candidate is
//! never chosen.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                    |
//! |-----------|-----------------------------------------------------------|
//! | `serde`   | Derives `Serialize`/`Deserialize` on `Move`, `FlightLog`, `NavStatus`. |
//! | `fx-hash` | Uses FxHash for the visited sets.                         |

pub mod error;
pub mod flight;
pub mod navigator;
pub mod state;

#[cfg(test)]
mod tests;

pub use error::{NavError, NavResult};
pub use flight::{FlightLog, Move, NavOutcome, NavStatus};
pub use navigator::Navigator;
pub use state::{NavPhase, NavigatorState, Waypoint};
