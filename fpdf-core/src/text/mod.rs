//! Text drawing options, WinAnsi encoding and standard font widths

pub mod encoding;
pub mod metrics;

pub use encoding::{win_ansi_char, EncodedText, WinAnsiEncoding};

/// Horizontal alignment inside [`TextOptions::width`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
}

/// How the font size reaches the content stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSizeMethod {
    /// `/Fi size Tf` followed by `x y Td`
    #[default]
    SetFont,
    /// `/Fi 1 Tf` followed by `size 0 0 size x y Tm`
    TextMatrix,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextOptions {
    /// Box width used for alignment. Without it, alignment is ignored.
    pub width: Option<f64>,
    pub align: TextAlign,
    pub character_spacing: Option<f64>,
    pub font_size_method: FontSizeMethod,
}

impl TextOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_character_spacing(mut self, spacing: f64) -> Self {
        self.character_spacing = Some(spacing);
        self
    }

    pub fn with_font_size_method(mut self, method: FontSizeMethod) -> Self {
        self.font_size_method = method;
        self
    }

    /// Horizontal offset of a run `text_width` wide inside the box.
    pub fn align_offset(&self, text_width: f64) -> f64 {
        match (self.width, self.align) {
            (Some(width), TextAlign::Right) => width - text_width,
            (Some(width), TextAlign::Center) => (width - text_width) / 2.0,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TextOptions::default();
        assert_eq!(options.width, None);
        assert_eq!(options.align, TextAlign::Left);
        assert_eq!(options.font_size_method, FontSizeMethod::SetFont);
        assert_eq!(options.align_offset(50.0), 0.0);
    }

    #[test]
    fn test_align_offset() {
        let right = TextOptions::new().with_width(200.0).with_align(TextAlign::Right);
        assert_eq!(right.align_offset(50.0), 150.0);

        let center = TextOptions::new().with_width(200.0).with_align(TextAlign::Center);
        assert_eq!(center.align_offset(50.0), 75.0);

        // Alignment without a box is a no-op
        let unboxed = TextOptions::new().with_align(TextAlign::Right);
        assert_eq!(unboxed.align_offset(50.0), 0.0);
    }
}
