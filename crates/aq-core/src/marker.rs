//! Map marker classification for visited targets.
//!
//! A visited target is drawn with a colour and symbol derived from its sensor
//! reading, unless the reading is invalid or the battery is too low to trust
//! it.  Readings are split into eight 32-wide bands over `[0, 256)`:
//!
//! | Reading     | Colour    | Symbol       |
//! |-------------|-----------|--------------|
//! | `[0, 32)`   | `#00ff00` | `lighthouse` |
//! | `[32, 64)`  | `#40ff00` | `lighthouse` |
//! | `[64, 96)`  | `#80ff00` | `lighthouse` |
//! | `[96, 128)` | `#c0ff00` | `lighthouse` |
//! | `[128, 160)`| `#ffc000` | `danger`     |
//! | `[160, 192)`| `#ff8000` | `danger`     |
//! | `[192, 224)`| `#ff4000` | `danger`     |
//! | `[224, 256)`| `#ff0000` | `danger`     |
//!
//! Unreliable readings get `#000000` / `cross`; targets never reached get
//! `#aaaaaa` with no symbol.

use crate::{CoreError, CoreResult};

/// Battery level (percent) at or below which a reading is not trusted.
pub const LOW_BATTERY_PERCENT: f64 = 10.0;

const BAND_WIDTH: f64 = 32.0;
const BAND_COLOURS: [&str; 8] = [
    "#00ff00", "#40ff00", "#80ff00", "#c0ff00",
    "#ffc000", "#ff8000", "#ff4000", "#ff0000",
];

/// Colour + symbol pair used to draw a target on a map.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Marker {
    pub colour: &'static str,
    /// `None` for unvisited targets.
    pub symbol: Option<&'static str>,
}

impl Marker {
    pub const UNVISITED: Marker = Marker { colour: "#aaaaaa", symbol: None };
    pub const UNRELIABLE: Marker = Marker { colour: "#000000", symbol: Some("cross") };

    /// Classify a visited target.
    ///
    /// # Errors
    ///
    /// [`CoreError::ReadingOutOfRange`] if a trusted reading falls outside
    /// `[0, 256)`.
    pub fn classify(reading: Option<f64>, battery: Option<f64>) -> CoreResult<Marker> {
        let trusted = battery.is_some_and(|b| b > LOW_BATTERY_PERCENT);
        let reading = match reading {
            Some(r) if trusted && !r.is_nan() => r,
            _ => return Ok(Marker::UNRELIABLE),
        };
        if !(0.0..BAND_WIDTH * BAND_COLOURS.len() as f64).contains(&reading) {
            return Err(CoreError::ReadingOutOfRange(reading));
        }
        let band = (reading / BAND_WIDTH) as usize;
        Ok(Marker {
            colour: BAND_COLOURS[band],
            symbol: Some(if band < 4 { "lighthouse" } else { "danger" }),
        })
    }
}
