//! Radius/distance parameter grid and the frame-count map computed over it.
//!
//! The grid uses image ("xy") indexing: rows run along the distance axis and
//! columns along the radius axis, so `frames[[row, col]]` belongs to
//! `distances[row]` and `radii[col]`. Row 0 is the nearest distance, which a
//! lower-left origin puts at the bottom of the plot.

use ndarray::{Array1, Array2, Zip};
use shared::units::{Length, LengthExt, TimeExt};

use crate::angular::occultation_duration;

/// Stellar radius and distance axes with their Cartesian product.
#[derive(Debug, Clone)]
pub struct ParameterGrid {
    /// Stellar radii in solar radii, ascending
    pub radii: Array1<f64>,
    /// Stellar distances in parsecs, ascending
    pub distances: Array1<f64>,
    /// Radius of every cell, shape `(distances.len(), radii.len())`
    pub radius_grid: Array2<f64>,
    /// Distance of every cell, shape `(distances.len(), radii.len())`
    pub distance_grid: Array2<f64>,
}

impl ParameterGrid {
    /// Build a grid of `samples` linearly spaced points per axis.
    ///
    /// Both ranges are inclusive of their endpoints.
    pub fn new(radius_range: (f64, f64), distance_range: (f64, f64), samples: usize) -> Self {
        let radii = Array1::linspace(radius_range.0, radius_range.1, samples);
        let distances = Array1::linspace(distance_range.0, distance_range.1, samples);
        let (radius_grid, distance_grid) = meshgrid(&radii, &distances);
        Self {
            radii,
            distances,
            radius_grid,
            distance_grid,
        }
    }

    /// Grid shape as `(rows, cols)`
    pub fn dim(&self) -> (usize, usize) {
        self.radius_grid.dim()
    }

    /// Occultation duration in seconds for every cell.
    pub fn durations(&self) -> Array2<f64> {
        Zip::from(&self.radius_grid)
            .and(&self.distance_grid)
            .map_collect(|&radius, &distance| {
                occultation_duration(
                    Length::from_solar_radii(radius),
                    Length::from_parsecs(distance),
                )
                .as_seconds()
            })
    }

    /// Frames captured during the occultation at `frame_rate_hz`, per cell.
    pub fn frame_counts(&self, frame_rate_hz: f64) -> Array2<f64> {
        self.durations() * frame_rate_hz
    }
}

/// Coordinate matrices from two coordinate vectors, "xy" indexed.
///
/// Returns `(xx, yy)` of shape `(y.len(), x.len())` with
/// `xx[[i, j]] == x[j]` and `yy[[i, j]] == y[i]`.
pub fn meshgrid(x: &Array1<f64>, y: &Array1<f64>) -> (Array2<f64>, Array2<f64>) {
    let shape = (y.len(), x.len());
    let xx = Array2::from_shape_fn(shape, |(_, j)| x[j]);
    let yy = Array2::from_shape_fn(shape, |(i, _)| y[i]);
    (xx, yy)
}
