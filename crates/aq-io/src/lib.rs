//! `aq-io`: thin CSV adapters around the planner.
//!
//! | Direction | Item                                 | Format                                   |
//! |-----------|--------------------------------------|------------------------------------------|
//! | in        | [`load_targets_csv`] / `_reader`     | `label,x,y,battery,reading`              |
//! | in        | [`load_zones_csv`] / `_reader`       | `zone,x,y`, one row per ring vertex      |
//! | out       | [`CsvFlightWriter`]                  | `step,from_x,from_y,heading,to_x,to_y,label` |
//!
//! Writers implement [`FlightWriter`] and are driven by
//! [`FlightOutputObserver`], which implements `aq_plan::PlanObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use aq_io::{CsvFlightWriter, FlightOutputObserver, load_targets_csv};
//!
//! let targets = load_targets_csv(Path::new("targets.csv"))?;
//! let writer = CsvFlightWriter::from_path(Path::new("flightpath.csv"))?;
//! let mut obs = FlightOutputObserver::new(writer);
//! planner.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod loader;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvFlightWriter;
pub use error::{IoError, IoResult};
pub use loader::{load_targets_csv, load_targets_reader, load_zones_csv, load_zones_reader};
pub use observer::FlightOutputObserver;
pub use row::FlightRecordRow;
pub use writer::FlightWriter;
