//! Font model and embedding
//!
//! A [`Font`] is either one of the standard PDF core fonts (never embedded,
//! metrics bundled with the crate) or a TrueType font whose file is
//! embedded as a composite Type0/CIDFontType2 font.

pub mod embedder;
pub mod font_descriptor;
pub mod font_ref;
pub mod glyph_source;
pub mod metrics;
pub mod standard;

pub use font_descriptor::FontFlags;
pub use font_ref::FontRef;
pub use glyph_source::{GlyphSource, GlyphTable};
pub use metrics::{CharWidthMap, FontData, FontMetrics, GlyphMetrics};
pub use standard::{font_key, StandardFontCache};

use crate::error::{PdfError, Result};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKind {
    Standard,
    TrueType,
}

/// A core font. The viewer supplies the glyphs; we only need the widths.
#[derive(Debug, Clone)]
pub struct StandardFont {
    name: String,
    metrics: FontMetrics,
    widths: CharWidthMap,
}

impl StandardFont {
    /// `name` must be one of the standard PDF font names, e.g. `Helvetica`.
    pub fn new(name: impl Into<String>, metrics: FontMetrics, widths: CharWidthMap) -> Self {
        Self {
            name: name.into(),
            metrics,
            widths,
        }
    }
}

/// An embeddable TrueType font.
#[derive(Debug, Clone)]
pub struct TrueTypeFont {
    name: String,
    metrics: FontMetrics,
    widths: CharWidthMap,
    source: Arc<dyn GlyphSource>,
}

impl TrueTypeFont {
    /// `name` is the PostScript name written as the `/BaseFont`.
    pub fn new(
        name: impl Into<String>,
        metrics: FontMetrics,
        source: impl GlyphSource + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            metrics,
            widths: CharWidthMap::new(),
            source: Arc::new(source),
        }
    }

    /// Build from provider data: metrics plus the glyph width list.
    pub fn from_font_data(
        name: impl Into<String>,
        data: &FontData,
        source: impl GlyphSource + 'static,
    ) -> Self {
        Self::new(name, data.font_metrics.clone(), source).with_widths(CharWidthMap::from(data))
    }

    /// Widths to use for measuring instead of the glyph source advances.
    pub fn with_widths(mut self, widths: CharWidthMap) -> Self {
        self.widths = widths;
        self
    }

    pub fn source(&self) -> &dyn GlyphSource {
        self.source.as_ref()
    }
}

#[derive(Debug, Clone)]
pub enum Font {
    Standard(StandardFont),
    TrueType(TrueTypeFont),
}

impl Font {
    pub fn kind(&self) -> FontKind {
        match self {
            Font::Standard(_) => FontKind::Standard,
            Font::TrueType(_) => FontKind::TrueType,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Font::Standard(font) => &font.name,
            Font::TrueType(font) => &font.name,
        }
    }

    pub fn metrics(&self) -> &FontMetrics {
        match self {
            Font::Standard(font) => &font.metrics,
            Font::TrueType(font) => &font.metrics,
        }
    }

    pub fn is_embedded(&self) -> bool {
        self.kind() == FontKind::TrueType
    }

    /// Glyph-space width of `ch`.
    ///
    /// Looks in the width map first, then (for TrueType) at the glyph
    /// source, then falls back to the declared missing width or 0.
    pub fn char_width(&self, ch: char) -> f64 {
        let (widths, source) = match self {
            Font::Standard(font) => (&font.widths, None),
            Font::TrueType(font) => (&font.widths, Some(font.source.as_ref())),
        };
        widths
            .get(ch)
            .or_else(|| source.and_then(|s| s.scaled_glyph_advance_width(ch as u32)))
            .or(self.metrics().missing_width)
            .unwrap_or(0.0)
    }

    /// Width of `text` at `font_size`, in points.
    pub fn text_width(&self, text: &str, font_size: f64) -> f64 {
        let total: f64 = text.chars().map(|ch| self.char_width(ch)).sum();
        total * font_size / 1000.0
    }

    pub fn glyph_source(&self) -> Option<&dyn GlyphSource> {
        match self {
            Font::Standard(_) => None,
            Font::TrueType(font) => Some(font.source.as_ref()),
        }
    }

    /// The embeddable font file.
    pub fn font_data(&self) -> Result<&[u8]> {
        self.glyph_source()
            .and_then(|source| source.font_data())
            .ok_or_else(|| PdfError::MissingFontBuffer(self.name().to_string()))
    }

    pub fn glyph_index(&self, code: u32) -> Result<u16> {
        self.glyph_source()
            .map(|source| source.char_code_to_glyph_index(code))
            .ok_or_else(|| PdfError::MissingGlyphData(self.name().to_string()))
    }
}

impl From<StandardFont> for Font {
    fn from(font: StandardFont) -> Self {
        Font::Standard(font)
    }
}

impl From<TrueTypeFont> for Font {
    fn from(font: TrueTypeFont) -> Self {
        Font::TrueType(font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_truetype() -> Font {
        let mut table = GlyphTable::new(2048).with_font_data(vec![0, 1, 0, 0, 9, 9]);
        table.add_glyph('H' as u32, 43, 2048);
        table.add_glyph('i' as u32, 76, 1024);
        let metrics = FontMetrics {
            missing_width: Some(600.0),
            ..FontMetrics::new(765.0, -240.0)
        };
        TrueTypeFont::new("OpenSans-Regular", metrics, table).into()
    }

    #[test]
    fn test_kind_and_name() {
        let font = test_truetype();
        assert_eq!(font.kind(), FontKind::TrueType);
        assert_eq!(font.name(), "OpenSans-Regular");
        assert!(font.is_embedded());
    }

    #[test]
    fn test_truetype_widths_from_source() {
        let font = test_truetype();
        assert_eq!(font.char_width('H'), 1000.0);
        assert_eq!(font.char_width('i'), 500.0);
        // Not in the source, falls back to the missing width
        assert_eq!(font.char_width('Z'), 600.0);
        assert_eq!(font.text_width("Hi", 10.0), 15.0);
    }

    #[test]
    fn test_width_map_takes_precedence() {
        let font = match test_truetype() {
            Font::TrueType(tt) => Font::from(tt.with_widths([('H', 700.0)].into_iter().collect())),
            other => other,
        };
        assert_eq!(font.char_width('H'), 700.0);
        assert_eq!(font.char_width('i'), 500.0);
    }

    #[test]
    fn test_standard_font_has_no_file() {
        let font: Font = StandardFont::new(
            "Helvetica",
            FontMetrics::new(718.0, -207.0),
            CharWidthMap::new(),
        )
        .into();

        assert!(matches!(font.font_data(), Err(PdfError::MissingFontBuffer(_))));
        assert!(matches!(font.glyph_index(72), Err(PdfError::MissingGlyphData(_))));
        assert_eq!(font.char_width('x'), 0.0);
    }

    #[test]
    fn test_truetype_without_buffer() {
        let font: Font =
            TrueTypeFont::new("Bare", FontMetrics::new(800.0, -200.0), GlyphTable::new(1000))
                .into();
        let err = font.font_data().unwrap_err();
        assert_eq!(err.to_string(), "Font 'Bare' must have a font buffer to be embedded");
        assert_eq!(font.glyph_index(65).unwrap(), 0);
    }
}
