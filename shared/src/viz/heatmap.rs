//! Color-mapped raster plots with a color bar.
//!
//! The renderer draws a 2-D array the way an image display would: row 0 at
//! the bottom of the plot, every cell a flat rectangle (no interpolation
//! between neighbours), colors clamped to a fixed value range. Output is
//! produced as SVG by `plotters` and converted to PDF through `usvg` and
//! `svg2pdf`.

use std::path::Path;
use std::sync::Arc;

use ndarray::ArrayView2;
use plotters::coord::Shift;
use plotters::prelude::*;
use svg2pdf::{ConversionOptions, PageOptions};
use usvg::{fontdb, Options, Tree};

use super::{Colormap, Result, VizError};

/// Number of color steps drawn in the color bar
const COLORBAR_STEPS: usize = 256;

/// Heatmap plot configuration
#[derive(Debug, Clone)]
pub struct HeatmapConfig {
    /// Title lines, drawn top to bottom above the plot
    pub title: Vec<String>,
    /// Horizontal axis description
    pub x_label: String,
    /// Vertical axis description
    pub y_label: String,
    /// Color bar axis description
    pub colorbar_label: String,
    /// Data coordinates spanned by the columns (left edge, right edge)
    pub x_range: (f64, f64),
    /// Data coordinates spanned by the rows (bottom edge, top edge)
    pub y_range: (f64, f64),
    /// Values mapped to the two ends of the colormap
    pub value_range: (f64, f64),
    pub colormap: Colormap,
    /// Plot width in pixels
    pub width: u32,
    /// Plot height in pixels
    pub height: u32,
    /// Width reserved on the right for the color bar, in pixels
    pub colorbar_width: u32,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            title: Vec::new(),
            x_label: String::new(),
            y_label: String::new(),
            colorbar_label: String::new(),
            x_range: (0.0, 1.0),
            y_range: (0.0, 1.0),
            value_range: (0.0, 1.0),
            colormap: Colormap::default(),
            width: 1200,
            height: 900,
            colorbar_width: 180,
        }
    }
}

impl HeatmapConfig {
    fn validate(&self) -> Result<()> {
        for (axis, (min, max)) in [
            ("x", self.x_range),
            ("y", self.y_range),
            ("value", self.value_range),
        ] {
            if min.is_nan() || max.is_nan() || min >= max {
                return Err(VizError::InvalidRange { axis, min, max });
            }
        }
        Ok(())
    }
}

fn plot_err<E: std::fmt::Display>(e: E) -> VizError {
    VizError::Plot(e.to_string())
}

/// Render `data` as a color-mapped raster into an SVG document.
///
/// Rows of `data` run along the vertical axis (row 0 at `y_range.0`),
/// columns along the horizontal axis (column 0 at `x_range.0`).
pub fn render_svg(data: ArrayView2<f64>, config: &HeatmapConfig) -> Result<String> {
    if data.is_empty() {
        return Err(VizError::EmptyData);
    }
    config.validate()?;

    let (rows, cols) = data.dim();
    let (x0, x1) = config.x_range;
    let (y0, y1) = config.y_range;
    let (vmin, vmax) = config.value_range;
    let dx = (x1 - x0) / cols as f64;
    let dy = (y1 - y0) / rows as f64;

    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (config.width, config.height)).into_drawing_area();
        root.fill(&WHITE).map_err(plot_err)?;

        let mut area = root.margin(10, 10, 10, 10);
        for line in &config.title {
            area = area
                .titled(line, ("sans-serif", 28).into_font().color(&BLACK))
                .map_err(plot_err)?;
        }

        let plot_width = config.width.saturating_sub(config.colorbar_width) as i32;
        let (plot_area, bar_area) = area.split_horizontally(plot_width);

        let mut chart = ChartBuilder::on(&plot_area)
            .margin(15)
            .x_label_area_size(70)
            .y_label_area_size(90)
            .build_cartesian_2d(x0..x1, y0..y1)
            .map_err(plot_err)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(config.x_label.as_str())
            .y_desc(config.y_label.as_str())
            .axis_desc_style(("sans-serif", 24))
            .label_style(("sans-serif", 18))
            .draw()
            .map_err(plot_err)?;

        chart
            .draw_series(data.indexed_iter().map(|((row, col), &value)| {
                let left = x0 + col as f64 * dx;
                let bottom = y0 + row as f64 * dy;
                let color = config.colormap.color_in_range(value, vmin, vmax);
                Rectangle::new([(left, bottom), (left + dx, bottom + dy)], color.filled())
            }))
            .map_err(plot_err)?;

        draw_colorbar(&bar_area, config)?;

        root.present().map_err(plot_err)?;
    }

    Ok(svg)
}

fn draw_colorbar(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    config: &HeatmapConfig,
) -> Result<()> {
    let (vmin, vmax) = config.value_range;
    let step = (vmax - vmin) / COLORBAR_STEPS as f64;

    let mut bar = ChartBuilder::on(area)
        .margin_top(15)
        .margin_bottom(85)
        .margin_right(15)
        .y_label_area_size(90)
        .build_cartesian_2d(0.0..1.0, vmin..vmax)
        .map_err(plot_err)?;

    bar.configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_desc(config.colorbar_label.as_str())
        .axis_desc_style(("sans-serif", 24))
        .label_style(("sans-serif", 18))
        .draw()
        .map_err(plot_err)?;

    bar.draw_series((0..COLORBAR_STEPS).map(|i| {
        let low = vmin + i as f64 * step;
        let color = config.colormap.color_in_range(low + 0.5 * step, vmin, vmax);
        Rectangle::new([(0.0, low), (1.0, low + step)], color.filled())
    }))
    .map_err(plot_err)?;

    Ok(())
}

fn system_fonts() -> fontdb::Database {
    let mut fontdb = fontdb::Database::new();
    fontdb.load_system_fonts();
    if fontdb.is_empty() {
        log::warn!("No system fonts found, text will be missing from the PDF");
    }
    fontdb
}

/// Convert an SVG document into a single-page PDF.
///
/// System fonts are loaded so that text elements keep their glyphs; when no
/// fonts are installed the text is dropped with a warning and the graphics
/// still convert.
pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>> {
    let options = Options {
        fontdb: Arc::new(system_fonts()),
        ..Default::default()
    };

    let tree = Tree::from_str(svg, &options)?;

    svg2pdf::to_pdf(&tree, ConversionOptions::default(), PageOptions::default())
        .map_err(|e| VizError::Pdf(format!("{e:?}")))
}

/// Render `data` and write it to `path` as a PDF, replacing any existing file.
pub fn save_pdf(data: ArrayView2<f64>, config: &HeatmapConfig, path: &Path) -> Result<()> {
    let svg = render_svg(data, config)?;
    let pdf = svg_to_pdf(&svg)?;
    std::fs::write(path, &pdf)?;
    log::debug!("Wrote {} byte heatmap to {}", pdf.len(), path.display());
    Ok(())
}
