//! `FlightOutputObserver<W>`: bridges `PlanObserver` to a `FlightWriter`.

use aq_core::Target;
use aq_nav::Move;
use aq_plan::{PlanObserver, PlanSummary};

use crate::row::FlightRecordRow;
use crate::writer::FlightWriter;
use crate::IoError;

/// A [`PlanObserver`] that writes one flight-record row per move to any
/// [`FlightWriter`] backend.
///
/// Errors from the writer are stored internally because `PlanObserver`
/// methods have no return value.  After `planner.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct FlightOutputObserver<W: FlightWriter> {
    writer:     W,
    rows:       usize,
    last_error: Option<IoError>,
}

impl<W: FlightWriter> FlightOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `planner.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<IoError> {
        self.last_error.take()
    }

    /// Rows written successfully so far.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Unwrap the inner writer (e.g. to inspect the output after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::IoResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: FlightWriter> PlanObserver for FlightOutputObserver<W> {
    fn on_move(&mut self, mv: &Move, arrived: Option<&Target>) {
        let result = self.writer.write_row(&FlightRecordRow::from_move(mv, arrived));
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);
    }

    fn on_finish(&mut self, _summary: &PlanSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
