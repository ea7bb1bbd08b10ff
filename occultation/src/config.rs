//! Study configuration.
//!
//! The binary always runs with [`FeasibilityConfig::default`]; other values
//! exist so that library users and tests can rerun the study with a
//! different output location or grid.

use std::path::PathBuf;

use shared::viz::{Colormap, HeatmapConfig};

use crate::constants::{
    CAMERA_FRAME_RATE_HZ, DISTANCE_MAX, DISTANCE_MIN, FRAME_SCALE_MAX, GRID_SAMPLES,
    OUTPUT_FILENAME, RADII_MAX, RADII_MIN,
};

/// Parameters of one feasibility run
#[derive(Debug, Clone)]
pub struct FeasibilityConfig {
    /// Stellar radius range in solar radii
    pub radius_range: (f64, f64),
    /// Stellar distance range in parsecs
    pub distance_range: (f64, f64),
    /// Samples per grid axis
    pub samples: usize,
    /// Camera sampling rate in Hz
    pub frame_rate_hz: f64,
    /// Frame counts mapped to the ends of the colormap
    pub frame_scale: (f64, f64),
    /// Where the figure is written
    pub output_path: PathBuf,
}

impl Default for FeasibilityConfig {
    fn default() -> Self {
        Self {
            radius_range: (RADII_MIN, RADII_MAX),
            distance_range: (DISTANCE_MIN, DISTANCE_MAX),
            samples: GRID_SAMPLES,
            frame_rate_hz: CAMERA_FRAME_RATE_HZ,
            frame_scale: (0.0, FRAME_SCALE_MAX),
            output_path: PathBuf::from(OUTPUT_FILENAME),
        }
    }
}

impl FeasibilityConfig {
    /// Figure layout for the frame-count map
    pub fn heatmap(&self) -> HeatmapConfig {
        HeatmapConfig {
            title: vec![
                format!(
                    "# Frames obtained by a {} Hz camera during",
                    self.frame_rate_hz
                ),
                "the partial occultation of a star by the moon".to_string(),
            ],
            x_label: "Stellar radius [sol rad]".to_string(),
            y_label: "Distance to the star [pc]".to_string(),
            colorbar_label: "# Frames".to_string(),
            x_range: self.radius_range,
            y_range: self.distance_range,
            value_range: self.frame_scale,
            colormap: Colormap::OceanReversed,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_study() {
        let config = FeasibilityConfig::default();
        assert_eq!(config.radius_range, (0.1, 30.0));
        assert_eq!(config.distance_range, (1.0, 100.0));
        assert_eq!(config.samples, 100);
        assert_eq!(config.frame_rate_hz, 450.0);
        assert_eq!(config.frame_scale, (0.0, 10.0));
        assert_eq!(config.output_path, PathBuf::from("the-answer.pdf"));
    }

    #[test]
    fn test_heatmap_layout() {
        let heatmap = FeasibilityConfig::default().heatmap();
        assert_eq!(
            heatmap.title,
            vec![
                "# Frames obtained by a 450 Hz camera during".to_string(),
                "the partial occultation of a star by the moon".to_string(),
            ]
        );
        assert_eq!(heatmap.colorbar_label, "# Frames");
        assert_eq!(heatmap.x_range, (0.1, 30.0));
        assert_eq!(heatmap.y_range, (1.0, 100.0));
        assert_eq!(heatmap.value_range, (0.0, 10.0));
        assert_eq!(heatmap.colormap, Colormap::OceanReversed);
    }
}
