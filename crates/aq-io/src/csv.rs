//! CSV flight-record backend.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::writer::FlightWriter;
use crate::{FlightRecordRow, IoError, IoResult};

/// Column names written by [`CsvFlightWriter::new`].
pub const HEADER: [&str; 7] = ["step", "from_x", "from_y", "heading", "to_x", "to_y", "label"];

/// Writes one CSV row per move to any `io::Write`.
pub struct CsvFlightWriter<W: Write> {
    rows:     Writer<W>,
    finished: bool,
}

impl<W: Write> CsvFlightWriter<W> {
    /// Wrap `inner` and write the [`HEADER`] row.
    pub fn new(inner: W) -> IoResult<Self> {
        let mut w = Self::headerless(inner);
        w.rows.write_record(HEADER)?;
        Ok(w)
    }

    /// Wrap `inner` without a header: the bare flight-record text format.
    pub fn headerless(inner: W) -> Self {
        Self {
            rows:     WriterBuilder::new().has_headers(false).from_writer(inner),
            finished: false,
        }
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> IoResult<W> {
        self.rows
            .into_inner()
            .map_err(|e| IoError::Io(e.into_error()))
    }
}

impl CsvFlightWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn from_path(path: &Path) -> IoResult<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> FlightWriter for CsvFlightWriter<W> {
    fn write_row(&mut self, row: &FlightRecordRow) -> IoResult<()> {
        self.rows.write_record(&[
            row.step.to_string(),
            row.from_x.to_string(),
            row.from_y.to_string(),
            row.heading_degrees.to_string(),
            row.to_x.to_string(),
            row.to_y.to_string(),
            row.label.clone().unwrap_or_else(|| "null".to_owned()),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> IoResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
