//! Font-wide metrics and per-character widths

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Metrics for a whole font, in glyph space (1/1000 of the font size).
///
/// Only `ascender` and `descender` are required; the optional fields are
/// written into the font descriptor when present and skipped otherwise.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FontMetrics {
    pub ascender: f64,
    pub descender: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cap_height: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub italic_angle: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, rename = "fontBBox"))]
    pub font_bbox: Option<[f64; 4]>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub missing_width: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stem_v: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub units_per_em: Option<u16>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub line_height: Option<f64>,
}

impl FontMetrics {
    pub fn new(ascender: f64, descender: f64) -> Self {
        Self {
            ascender,
            descender,
            ..Default::default()
        }
    }

    /// Ascender in user space at `font_size`.
    pub fn scaled_ascender(&self, font_size: f64) -> f64 {
        self.ascender * font_size / 1000.0
    }

    /// Height of one line of text at `font_size`. Falls back to
    /// ascender minus descender when the font declares no line height.
    pub fn text_height(&self, font_size: f64) -> f64 {
        let height = self
            .line_height
            .unwrap_or(self.ascender - self.descender);
        height * font_size / 1000.0
    }
}

/// Width of one glyph as delivered by a metrics provider (an AFM file or
/// a parsed TrueType font).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GlyphMetrics {
    pub char_code: u32,
    pub width: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
}

/// Everything a metrics provider hands to the core for one font.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FontData {
    pub font_metrics: FontMetrics,
    pub glyph_metrics: Vec<GlyphMetrics>,
}

/// Unicode character to glyph-space width.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CharWidthMap {
    widths: HashMap<char, f64>,
}

impl CharWidthMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from glyph metrics whose char codes are Unicode code points.
    /// Codes that are not valid scalar values are skipped.
    pub fn from_glyphs(glyphs: &[GlyphMetrics]) -> Self {
        glyphs
            .iter()
            .filter_map(|g| char::from_u32(g.char_code).map(|ch| (ch, g.width)))
            .collect()
    }

    pub fn insert(&mut self, ch: char, width: f64) {
        self.widths.insert(ch, width);
    }

    pub fn get(&self, ch: char) -> Option<f64> {
        self.widths.get(&ch).copied()
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

impl FromIterator<(char, f64)> for CharWidthMap {
    fn from_iter<T: IntoIterator<Item = (char, f64)>>(iter: T) -> Self {
        Self {
            widths: iter.into_iter().collect(),
        }
    }
}

impl From<&FontData> for CharWidthMap {
    fn from(data: &FontData) -> Self {
        Self::from_glyphs(&data.glyph_metrics)
    }
}
