//! edinburgh: smallest end-to-end run of the aq route planner.
//!
//! Plans a closed survey loop over 12 sensor targets around a synthetic
//! campus, avoiding two building footprints, and writes the flight record as
//! CSV.
//!
//! ```text
//! edinburgh [CONFIG.json] [STRATEGY] [OUT.csv]
//! ```
//!
//! `CONFIG.json` is a (partial) `NavConfig`; missing fields take their
//! defaults.  `STRATEGY` is `greedy` or `two-opt`.  Without `OUT.csv` the
//! flight record goes to stdout.  Set `RUST_LOG=debug` for planner logs.

use std::fs::File;
use std::io::{Cursor, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use log::info;

use aq_core::{NavConfig, Point};
use aq_io::{CsvFlightWriter, FlightOutputObserver, load_targets_reader, load_zones_reader};
use aq_nav::NavError;
use aq_plan::{PlanBuilder, PlanError};
use aq_tour::TourStrategy;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:  u64   = 5678;
const START: Point = Point::new(-3.1878, 55.9444);

// ── Embedded inputs ───────────────────────────────────────────────────────────

// label,x,y,battery,reading
// Rows 3 and 9 carry unusable readings; row 6 has a flat battery.
const TARGETS_CSV: &str = "\
label,x,y,battery,reading\n\
slips.mass.baking,-3.1882,55.9447,51.2,170.6\n\
gets.sweat.pencil,-3.1875,55.9451,88.0,35.1\n\
draw.dogs.riches,-3.1869,55.9440,64.9,220.4\n\
verse.rope.keen,-3.1861,55.9437,71.3,null\n\
blink.harp.tone,-3.1889,55.9439,40.0,12.7\n\
lakes.flat.spin,-3.1893,55.9452,97.5,101.0\n\
cable.moon.drift,-3.1866,55.9455,4.1,250.0\n\
crisp.oven.latch,-3.1884,55.9458,59.0,140.2\n\
hatch.fern.gulp,-3.1858,55.9447,33.3,190.9\n\
twirl.bead.quota,-3.1874,55.9434,82.6,NaN\n\
plank.wave.sigh,-3.1896,55.9444,76.8,60.0\n\
mint.glow.rally,-3.1871,55.9459,12.5,0.4\n\
";

// zone,x,y (rings given open; the loader closes them)
const ZONES_CSV: &str = "\
zone,x,y\n\
library,-3.1880,55.9452\n\
library,-3.1877,55.9452\n\
library,-3.1877,55.9455\n\
library,-3.1880,55.9455\n\
informatics,-3.1867,55.9443\n\
informatics,-3.1863,55.9443\n\
informatics,-3.1863,55.9446\n\
informatics,-3.1867,55.9446\n\
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match args.first().map(String::as_str) {
        Some(path) if path != "-" => load_config(Path::new(path))?,
        _ => NavConfig::with_seed(SEED),
    };
    let strategy = match args.get(1) {
        Some(name) => TourStrategy::from_name(name)
            .with_context(|| format!("unknown tour strategy {name:?}"))?,
        None => TourStrategy::default(),
    };

    eprintln!("=== edinburgh: aq route planner ===");
    eprintln!(
        "Seed: {}  |  Strategy: {}  |  Budget: {} moves",
        config.seed,
        strategy.name(),
        config.move_budget
    );
    eprintln!();

    // 1. Inputs.
    let targets = load_targets_reader(Cursor::new(TARGETS_CSV))?;
    let zones = load_zones_reader(Cursor::new(ZONES_CSV))?;
    eprintln!("Loaded {} targets, {} exclusion zones", targets.len(), zones.len());

    // 2. Planner.
    let planner = PlanBuilder::new(config, START, targets, strategy)
        .zones(zones)
        .build()?;

    // 3. Output.
    let sink: Box<dyn Write> = match args.get(2) {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {path}"))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut observer = FlightOutputObserver::new(CsvFlightWriter::new(sink)?);

    // 4. Run.
    let t0 = Instant::now();
    let result = planner.run(&mut observer);
    let elapsed = t0.elapsed();
    if let Some(e) = observer.take_error() {
        bail!("flight record output failed: {e}");
    }
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(PlanError::Nav(NavError::NoFeasibleMove { step, at, log })) => {
            bail!(
                "boxed in at step {step} ({}, {}) after {} moves",
                at.x,
                at.y,
                log.len()
            );
        }
        Err(e) => return Err(e.into()),
    };
    info!("planned in {:.2} ms", elapsed.as_secs_f64() * 1e3);

    // 5. Report.
    eprintln!();
    eprintln!("Tour: {:?}", outcome.tour.as_slice());
    eprintln!("{}", serde_json::to_string_pretty(&outcome.summary)?);

    let markers = planner.markers(&outcome)?;
    for (target, marker) in planner.targets().iter().zip(&markers) {
        eprintln!(
            "  {:<20} {}  {}",
            target.label,
            marker.colour,
            marker.symbol.unwrap_or("-")
        );
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<NavConfig> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config: NavConfig = serde_json::from_reader(file)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}
