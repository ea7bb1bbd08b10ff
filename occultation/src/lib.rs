//! Can a 450 Hz camera resolve the partial phase of a lunar occultation?
//!
//! When the Moon occults a star, the star does not vanish instantly: the
//! lunar limb needs a finite time to cross the stellar disk. Measuring the
//! start and end of that partial phase would give the star's angular size,
//! and with a known distance its radius. This crate estimates how many
//! frames a fast camera captures during the partial phase over a grid of
//! stellar radii and distances, and renders the answer as a heatmap.

pub mod angular;
pub mod config;
pub mod constants;
pub mod driver;
pub mod grid;

// Re-exports for easier access
pub use angular::{angular_diameter, angular_speed_of_the_moon, occultation_duration};
pub use config::FeasibilityConfig;
pub use driver::{run, StudyError, StudyReport};
pub use grid::ParameterGrid;
