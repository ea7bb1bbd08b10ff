//! End-to-end feasibility run: report lunar figures, evaluate the grid,
//! write the figure.

use std::path::PathBuf;

use shared::units::{AngleExt, AngularVelocityExt};
use shared::viz::{save_pdf, VizError};
use thiserror::Error;

use crate::angular::{angular_diameter, angular_speed_of_the_moon};
use crate::config::FeasibilityConfig;
use crate::constants::{lunar_distance, lunar_radius};
use crate::grid::ParameterGrid;

#[derive(Error, Debug)]
pub enum StudyError {
    #[error("Failed to render frame-count map: {0}")]
    Render(#[from] VizError),
}

/// Figures produced by one run
#[derive(Debug, Clone)]
pub struct StudyReport {
    pub moon_speed_arcsec_per_s: f64,
    pub moon_diameter_arcsec: f64,
    /// Fewest frames anywhere on the grid
    pub min_frames: f64,
    /// Most frames anywhere on the grid
    pub max_frames: f64,
    pub output_path: PathBuf,
}

/// Log the lunar reference figures, compute the frame-count map and save it.
///
/// Any rendering or I/O failure is returned unchanged; nothing is retried and
/// no partial figure is kept.
pub fn run(config: &FeasibilityConfig) -> Result<StudyReport, StudyError> {
    let moon_speed = angular_speed_of_the_moon().as_arcseconds_per_second();
    let moon_diameter = angular_diameter(lunar_radius(), lunar_distance()).as_arcseconds();
    log::info!("The moon moves at {:.2} arcsec / s", moon_speed);
    log::info!(
        "The apparent diameter of the moon is {:.2} arcsec",
        moon_diameter
    );

    let grid = ParameterGrid::new(config.radius_range, config.distance_range, config.samples);
    let frames = grid.frame_counts(config.frame_rate_hz);

    let min_frames = frames.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_frames = frames.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    log::debug!(
        "{}x{} grid: {:.4} to {:.2} frames at {} Hz",
        grid.dim().0,
        grid.dim().1,
        min_frames,
        max_frames,
        config.frame_rate_hz
    );

    save_pdf(frames.view(), &config.heatmap(), &config.output_path)?;

    Ok(StudyReport {
        moon_speed_arcsec_per_s: moon_speed,
        moon_diameter_arcsec: moon_diameter,
        min_frames,
        max_frames,
        output_path: config.output_path.clone(),
    })
}
