//! Glyph lookups for embeddable TrueType fonts

use std::collections::HashMap;
use std::fmt;

/// Access to the parsed tables of a TrueType font.
///
/// Font file parsing lives outside this crate; a parser implements this
/// trait and the embedder uses it to build the width array, the
/// CIDToGIDMap and the `/FontFile2` stream.
pub trait GlyphSource: fmt::Debug + Send + Sync {
    fn units_per_em(&self) -> u16;

    /// Factor from font units to glyph space.
    fn scale(&self) -> f64 {
        1000.0 / self.units_per_em().max(1) as f64
    }

    /// Glyph index for a character code, 0 (.notdef) when unmapped.
    fn char_code_to_glyph_index(&self, code: u32) -> u16;

    /// Advance width in font units, `None` when the code has no glyph.
    fn glyph_advance_width(&self, code: u32) -> Option<u16>;

    /// Advance width in glyph space.
    fn scaled_glyph_advance_width(&self, code: u32) -> Option<f64> {
        self.glyph_advance_width(code)
            .map(|advance| advance as f64 * self.scale())
    }

    /// The raw font file, if the source still holds it.
    fn font_data(&self) -> Option<&[u8]>;
}

/// A [`GlyphSource`] backed by plain tables, filled in by whatever parsed
/// the font file.
#[derive(Clone, Default)]
pub struct GlyphTable {
    units_per_em: u16,
    glyphs: HashMap<u32, (u16, u16)>,
    data: Option<Vec<u8>>,
}

impl GlyphTable {
    pub fn new(units_per_em: u16) -> Self {
        Self {
            units_per_em,
            glyphs: HashMap::new(),
            data: None,
        }
    }

    /// Attach the embeddable font file.
    pub fn with_font_data(mut self, data: Vec<u8>) -> Self {
        self.data = Some(data);
        self
    }

    /// Map `code` to `glyph_index` with an advance in font units.
    pub fn add_glyph(&mut self, code: u32, glyph_index: u16, advance_width: u16) {
        self.glyphs.insert(code, (glyph_index, advance_width));
    }
}

impl fmt::Debug for GlyphTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlyphTable")
            .field("units_per_em", &self.units_per_em)
            .field("glyphs", &self.glyphs.len())
            .field("data_len", &self.data.as_ref().map(Vec::len))
            .finish()
    }
}

impl GlyphSource for GlyphTable {
    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn char_code_to_glyph_index(&self, code: u32) -> u16 {
        self.glyphs.get(&code).map(|&(gid, _)| gid).unwrap_or(0)
    }

    fn glyph_advance_width(&self, code: u32) -> Option<u16> {
        self.glyphs.get(&code).map(|&(_, advance)| advance)
    }

    fn font_data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }
}
