//! CSV loaders for survey targets and exclusion zones.
//!
//! # Target CSV
//!
//! One row per target, in input order; the row position becomes the
//! target's `TargetId`.
//!
//! ```csv
//! label,x,y,battery,reading
//! slips.mass.baking,-3.1882,55.9447,51.2,170.6
//! gets.sweat.pencil,-3.1875,55.9451,8.0,null
//! ```
//!
//! `battery` and `reading` accept a number, `null`, `NaN`, or an empty field;
//! the last three all mean "invalid".
//!
//! # Zone CSV
//!
//! One row per ring vertex.  Rows are grouped by `zone` in order of first
//! appearance; vertex order within a zone is row order.  Rings may be given
//! open or closed.
//!
//! ```csv
//! zone,x,y
//! library,-3.1893,55.9428
//! library,-3.1887,55.9428
//! library,-3.1887,55.9433
//! ```

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use aq_core::{Point, Target, TargetId};
use aq_spatial::ExclusionZone;

use crate::{IoError, IoResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TargetRecord {
    label:   String,
    x:       f64,
    y:       f64,
    battery: Option<String>,
    reading: Option<String>,
}

#[derive(Deserialize)]
struct ZoneRecord {
    zone: String,
    x:    f64,
    y:    f64,
}

// ── Targets ───────────────────────────────────────────────────────────────────

/// Load targets from a CSV file.
pub fn load_targets_csv(path: &Path) -> IoResult<Vec<Target>> {
    let file = std::fs::File::open(path)?;
    load_targets_reader(file)
}

/// Like [`load_targets_csv`] but accepts any `Read` source.
pub fn load_targets_reader<R: Read>(reader: R) -> IoResult<Vec<Target>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut targets = Vec::new();

    for (i, result) in csv_reader.deserialize::<TargetRecord>().enumerate() {
        let row = result.map_err(|e| IoError::Parse(e.to_string()))?;
        let id = TargetId::try_from(i)
            .map_err(|_| IoError::Parse(format!("too many targets ({i})")))?;
        let target = Target::new(id, row.label, Point::new(row.x, row.y))
            .with_battery(parse_measurement(row.battery.as_deref(), "battery", i)?)
            .with_reading(parse_measurement(row.reading.as_deref(), "reading", i)?);
        targets.push(target);
    }

    debug!("loaded {} targets", targets.len());
    Ok(targets)
}

// ── Zones ─────────────────────────────────────────────────────────────────────

/// Load and validate exclusion zones from a CSV file.
pub fn load_zones_csv(path: &Path) -> IoResult<Vec<ExclusionZone>> {
    let file = std::fs::File::open(path)?;
    load_zones_reader(file)
}

/// Like [`load_zones_csv`] but accepts any `Read` source.
pub fn load_zones_reader<R: Read>(reader: R) -> IoResult<Vec<ExclusionZone>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut order: Vec<(String, Vec<Point>)> = Vec::new();
    let mut slot: HashMap<String, usize> = HashMap::new();

    for result in csv_reader.deserialize::<ZoneRecord>() {
        let row = result.map_err(|e| IoError::Parse(e.to_string()))?;
        let i = *slot.entry(row.zone.clone()).or_insert_with(|| {
            order.push((row.zone.clone(), Vec::new()));
            order.len() - 1
        });
        order[i].1.push(Point::new(row.x, row.y));
    }

    let zones = order
        .into_iter()
        .map(|(name, ring)| {
            ExclusionZone::new(ring).map_err(|source| IoError::Zone { name, source })
        })
        .collect::<IoResult<Vec<_>>>()?;

    debug!("loaded {} exclusion zones", zones.len());
    Ok(zones)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_measurement(field: Option<&str>, what: &str, row: usize) -> IoResult<Option<f64>> {
    match field.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("null") || s.eq_ignore_ascii_case("nan") => Ok(None),
        Some(s) => s.parse::<f64>().map(Some).map_err(|_| {
            IoError::Parse(format!(
                "target row {row}: invalid {what} {s:?}: expected a number, \"null\", or \"NaN\""
            ))
        }),
    }
}
