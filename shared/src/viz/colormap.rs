//! Colormaps for scalar field rendering.
//!
//! The `ocean` map follows the gnuplot formula set that matplotlib uses for
//! its colormap of the same name: red = `x / 0.32 - 0.78125`,
//! green = `|(3x - 1) / 2|`, blue = `x`, each clipped to [0, 1].

use plotters::style::RGBColor;

/// Colormaps available to the heatmap renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    /// Dark green through blue to white.
    Ocean,
    /// `Ocean` reversed: white at the low end, dark green at the high end.
    #[default]
    OceanReversed,
}

impl Colormap {
    /// Map a normalized value to an RGB color.
    ///
    /// `t` is clamped to [0, 1]; NaN maps to the low end.
    pub fn color(&self, t: f64) -> RGBColor {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let (r, g, b) = match self {
            Colormap::Ocean => ocean(t),
            Colormap::OceanReversed => ocean(1.0 - t),
        };
        RGBColor(to_byte(r), to_byte(g), to_byte(b))
    }

    /// Map a raw value onto the colormap given the `[vmin, vmax]` color limits.
    pub fn color_in_range(&self, value: f64, vmin: f64, vmax: f64) -> RGBColor {
        let span = vmax - vmin;
        if span <= 0.0 {
            return self.color(0.0);
        }
        self.color((value - vmin) / span)
    }
}

fn ocean(x: f64) -> (f64, f64, f64) {
    let r = (x / 0.32 - 0.78125).clamp(0.0, 1.0);
    let g = ((3.0 * x - 1.0) / 2.0).abs().clamp(0.0, 1.0);
    let b = x.clamp(0.0, 1.0);
    (r, g, b)
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round() as u8
}
