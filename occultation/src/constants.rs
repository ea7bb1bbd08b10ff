//! Physical and survey constants for the lunar occultation study.
//!
//! Raw magnitudes are kept as `f64` constants with the unit in the name;
//! the accessor functions wrap them in typed quantities.

use shared::units::{Length, LengthExt, Time, TimeExt};

/// Sidereal orbital period of the Moon in days
pub const LUNAR_PERIOD_DAYS: f64 = 27.3;

/// Mean radius of the Moon in kilometers
pub const LUNAR_RADIUS_KM: f64 = 1737.4;

/// Mean Earth-Moon distance in kilometers
pub const LUNAR_DISTANCE_KM: f64 = 384_472.0;

/// Smallest stellar radius on the grid, in solar radii
pub const RADII_MIN: f64 = 0.1;

/// Largest stellar radius on the grid, in solar radii
pub const RADII_MAX: f64 = 30.0;

/// Nearest stellar distance on the grid, in parsecs
pub const DISTANCE_MIN: f64 = 1.0;

/// Farthest stellar distance on the grid, in parsecs
pub const DISTANCE_MAX: f64 = 100.0;

/// Samples along each grid axis
pub const GRID_SAMPLES: usize = 100;

/// Camera sampling rate in Hz
pub const CAMERA_FRAME_RATE_HZ: f64 = 450.0;

/// Upper end of the color scale, in frames
pub const FRAME_SCALE_MAX: f64 = 10.0;

/// Figure written by the study
pub const OUTPUT_FILENAME: &str = "the-answer.pdf";

pub fn lunar_period() -> Time {
    Time::from_days(LUNAR_PERIOD_DAYS)
}

pub fn lunar_radius() -> Length {
    Length::from_kilometers(LUNAR_RADIUS_KM)
}

pub fn lunar_distance() -> Length {
    Length::from_kilometers(LUNAR_DISTANCE_KM)
}
