//! Lunar occultation frame-count map
//!
//! Computes how many frames a 450 Hz camera records while the Moon's limb
//! crosses a star, for stellar radii of 0.1 to 30 solar radii and distances
//! of 1 to 100 pc, and writes the heatmap to `the-answer.pdf` in the current
//! directory. Takes no arguments; `RUST_LOG` adjusts logging (default `info`).

use occultation::FeasibilityConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    occultation::run(&FeasibilityConfig::default())?;

    Ok(())
}
