//! The `Target` record: a location the agent must visit.

use crate::{Marker, Point, TargetId};

/// A survey target.
///
/// Created once from the decoded upstream records and never mutated.
/// `battery` and `reading` use `None` as the invalid marker; a `NaN` passed to
/// the builders is stored as `None`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    /// Position in the original, unordered input list.
    pub id: TargetId,
    /// Opaque external handle (an address, a sensor name, …).
    pub label: String,
    pub location: Point,
    /// Battery level in percent.
    pub battery: Option<f64>,
    /// Sensor reading.
    pub reading: Option<f64>,
}

impl Target {
    pub fn new(id: TargetId, label: impl Into<String>, location: Point) -> Self {
        Self {
            id,
            label: label.into(),
            location,
            battery: None,
            reading: None,
        }
    }

    pub fn with_battery(mut self, battery: Option<f64>) -> Self {
        self.battery = battery.filter(|v| !v.is_nan());
        self
    }

    pub fn with_reading(mut self, reading: Option<f64>) -> Self {
        self.reading = reading.filter(|v| !v.is_nan());
        self
    }

    /// Map marker for a visited target.  See [`Marker::classify`].
    pub fn marker(&self) -> crate::CoreResult<Marker> {
        Marker::classify(self.reading, self.battery)
    }
}
