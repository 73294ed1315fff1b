//! Sampler board pin simulator.
//!
//! Runs the boot pin initializer against a simulated AVR port and prints the
//! resulting pin report as JSON.
//!
//! ```text
//! samplerboard [attiny841|atmega328p] [--trace]
//! ```
//!
//! Without a variant argument the build's active variant is used. `RUST_LOG`
//! overrides the log level.

use anyhow::{Context, Result, bail};
use log::{LevelFilter, info, warn};

use samplerboard::adapters::sim::SimPort;
use samplerboard::diagnostics;
use samplerboard::drivers::hw_init;
use samplerboard::pins::{self, Variant};

fn main() -> Result<()> {
    let mut variant = pins::ACTIVE_VARIANT;
    let mut level = LevelFilter::Info;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--trace" => level = LevelFilter::Debug,
            name => match Variant::from_name(name) {
                Some(v) => variant = v,
                None => bail!("unknown board variant {name:?} (expected attiny841 or atmega328p)"),
            },
        }
    }

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
        .context("installing logger")?;
    info!("samplerboard sim v{}", env!("CARGO_PKG_VERSION"));

    let map = variant.pin_map();
    let mut port = SimPort::new(map.pin_count());
    hw_init::init_pins(&mut port, map);

    let report = diagnostics::pin_report(&port, map);
    for pin in report.misconfigured() {
        warn!("pin {} not in boot state: {:?}", pin.pin, pin.config);
    }

    let json = serde_json::to_string_pretty(&report).context("serialising pin report")?;
    println!("{json}");
    Ok(())
}
