//! Page content streams
//!
//! [`ContentStream`] writes operators in native PDF space (origin at the
//! bottom-left, y up), one operator per line. Every number is rendered
//! with three decimals.

mod color;
mod path;

pub use color::Color;
pub use path::{DashOptions, DrawOptions, LineCap, LineJoin, WindingRule};

use crate::objects::{escape_literal, format_real, hex_string};

/// Circle approximation constant for cubic Bézier arcs, 4(√2−1)/3.
pub const KAPPA: f64 = 0.552_284_749_831;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentStream {
    operations: String,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    fn op(&mut self, operands: &[f64], operator: &str) -> &mut Self {
        for value in operands {
            self.operations.push_str(&format_real(*value));
            self.operations.push(' ');
        }
        self.operations.push_str(operator);
        self.operations.push('\n');
        self
    }

    /// Append a raw line.
    pub fn raw(&mut self, line: &str) -> &mut Self {
        self.operations.push_str(line);
        self.operations.push('\n');
        self
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.op(&[x, y], "m")
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.op(&[x, y], "l")
    }

    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> &mut Self {
        self.op(&[x1, y1, x2, y2, x3, y3], "c")
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.op(&[x, y, width, height], "re")
    }

    /// Closed ellipse path built from four Bézier arcs.
    pub fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) -> &mut Self {
        let (kx, ky) = (KAPPA * rx, KAPPA * ry);
        self.move_to(cx + rx, cy);
        self.curve_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry);
        self.curve_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy);
        self.curve_to(cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry);
        self.curve_to(cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy);
        self.close_path()
    }

    pub fn close_path(&mut self) -> &mut Self {
        self.raw("h")
    }

    pub fn stroke(&mut self) -> &mut Self {
        self.raw("S")
    }

    pub fn fill(&mut self, rule: WindingRule) -> &mut Self {
        self.paint(DrawOptions::fill(), rule)
    }

    pub fn fill_stroke(&mut self, rule: WindingRule) -> &mut Self {
        self.paint(DrawOptions::fill_and_stroke(), rule)
    }

    pub fn paint(&mut self, options: DrawOptions, rule: WindingRule) -> &mut Self {
        self.raw(options.paint_operator(rule))
    }

    /// Intersect the clip with the current path and end it.
    pub fn clip(&mut self, rule: WindingRule) -> &mut Self {
        match rule {
            WindingRule::NonZero => self.raw("W n"),
            WindingRule::EvenOdd => self.raw("W* n"),
        }
    }

    pub fn save_state(&mut self) -> &mut Self {
        self.raw("q")
    }

    pub fn restore_state(&mut self) -> &mut Self {
        self.raw("Q")
    }

    pub fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> &mut Self {
        self.op(&[a, b, c, d, e, f], "cm")
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.op(&[width], "w")
    }

    pub fn set_line_cap(&mut self, cap: LineCap) -> &mut Self {
        self.raw(&format!("{} J", cap as u8))
    }

    pub fn set_line_join(&mut self, join: LineJoin) -> &mut Self {
        self.raw(&format!("{} j", join as u8))
    }

    pub fn set_dash(&mut self, length: f64, space: f64, phase: f64) -> &mut Self {
        let line = format!(
            "[{} {}] {} d",
            format_real(length),
            format_real(space),
            format_real(phase)
        );
        self.raw(&line)
    }

    pub fn clear_dash(&mut self) -> &mut Self {
        self.raw("[] 0 d")
    }

    pub fn set_stroke_color(&mut self, color: Color) -> &mut Self {
        let (values, operator) = color.stroke_operands();
        self.op(&values, operator)
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        let (values, operator) = color.fill_operands();
        self.op(&values, operator)
    }

    pub fn begin_text(&mut self) -> &mut Self {
        self.raw("BT")
    }

    pub fn end_text(&mut self) -> &mut Self {
        self.raw("ET")
    }

    /// `/{resource} size Tf`
    pub fn set_font(&mut self, resource: &str, size: f64) -> &mut Self {
        let line = format!("/{resource} {} Tf", format_real(size));
        self.raw(&line)
    }

    pub fn set_character_spacing(&mut self, spacing: f64) -> &mut Self {
        self.op(&[spacing], "Tc")
    }

    pub fn move_text(&mut self, x: f64, y: f64) -> &mut Self {
        self.op(&[x, y], "Td")
    }

    pub fn set_text_matrix(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> &mut Self {
        self.op(&[a, b, c, d, e, f], "Tm")
    }

    /// Show single-byte text as an escaped literal string.
    pub fn show_literal(&mut self, bytes: &[u8]) -> &mut Self {
        let line = format!("({}) Tj", escape_literal(bytes));
        self.raw(&line)
    }

    /// Show two-byte codes as a hex string.
    pub fn show_hex(&mut self, codes: &[u16]) -> &mut Self {
        let line = format!("<{}> Tj", hex_string(codes));
        self.raw(&line)
    }

    pub fn operations(&self) -> &str {
        &self.operations
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.operations.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
