//! Visualization toolkit for occultation feasibility maps.

use thiserror::Error;

/// Error types for visualization operations.
///
/// Covers malformed chart inputs as well as failures in each stage of the
/// SVG to PDF pipeline.
#[derive(Debug, Error)]
pub enum VizError {
    /// Chart drawing error reported by the plotting backend.
    #[error("Plotting error: {0}")]
    Plot(String),

    /// The rendered SVG document could not be parsed.
    #[error("SVG parse error: {0}")]
    Svg(#[from] usvg::Error),

    /// The SVG tree could not be converted into a PDF document.
    #[error("PDF conversion error: {0}")]
    Pdf(String),

    /// Writing the output file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No data to render.
    #[error("Cannot render an empty data array")]
    EmptyData,

    /// An axis or color range whose lower bound is not below its upper bound.
    #[error("Invalid {axis} range [{min}, {max}]")]
    InvalidRange {
        axis: &'static str,
        min: f64,
        max: f64,
    },
}

/// Standard Result type for all visualization operations.
pub type Result<T> = std::result::Result<T, VizError>;

pub mod colormap;
pub mod heatmap;

pub use colormap::Colormap;
pub use heatmap::{render_svg, save_pdf, svg_to_pdf, HeatmapConfig};
