//! The `FlightWriter` trait implemented by flight-record backends.

use crate::{FlightRecordRow, IoResult};

/// Sink for flight-record rows.
///
/// Errors surfacing while a planner is running are stored by
/// [`FlightOutputObserver`][crate::FlightOutputObserver] and retrieved with
/// its `take_error`.
pub trait FlightWriter {
    /// Write one move.
    fn write_row(&mut self, row: &FlightRecordRow) -> IoResult<()>;

    /// Flush the underlying sink.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> IoResult<()>;
}
