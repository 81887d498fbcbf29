/// Represents a color in PDF documents.
///
/// Supports RGB, Grayscale, and CMYK color spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// RGB color (red, green, blue) with values from 0.0 to 1.0
    Rgb(f64, f64, f64),
    /// Grayscale color with value from 0.0 (black) to 1.0 (white)
    Gray(f64),
    /// CMYK color (cyan, magenta, yellow, key/black) with values from 0.0 to 1.0
    Cmyk(f64, f64, f64, f64),
}

impl Color {
    /// Creates an RGB color with values clamped to 0.0-1.0.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color::Rgb(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Creates an RGB color from 0-255 channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Creates a grayscale color with value clamped to 0.0-1.0.
    pub fn gray(value: f64) -> Self {
        Color::Gray(value.clamp(0.0, 1.0))
    }

    /// Creates a CMYK color with values clamped to 0.0-1.0.
    pub fn cmyk(c: f64, m: f64, y: f64, k: f64) -> Self {
        Color::Cmyk(
            c.clamp(0.0, 1.0),
            m.clamp(0.0, 1.0),
            y.clamp(0.0, 1.0),
            k.clamp(0.0, 1.0),
        )
    }

    pub fn black() -> Self {
        Color::Gray(0.0)
    }

    pub fn white() -> Self {
        Color::Gray(1.0)
    }

    /// Channel values and the stroking operator for this color space.
    pub(crate) fn stroke_operands(&self) -> (Vec<f64>, &'static str) {
        match *self {
            Color::Rgb(r, g, b) => (vec![r, g, b], "RG"),
            Color::Gray(g) => (vec![g], "G"),
            Color::Cmyk(c, m, y, k) => (vec![c, m, y, k], "K"),
        }
    }

    /// Channel values and the non-stroking operator.
    pub(crate) fn fill_operands(&self) -> (Vec<f64>, &'static str) {
        match *self {
            Color::Rgb(r, g, b) => (vec![r, g, b], "rg"),
            Color::Gray(g) => (vec![g], "g"),
            Color::Cmyk(c, m, y, k) => (vec![c, m, y, k], "k"),
        }
    }
}
