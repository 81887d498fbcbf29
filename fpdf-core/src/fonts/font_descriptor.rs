//! Font descriptor dictionaries for embedded fonts

use super::FontMetrics;
use crate::objects::{Dictionary, Object, ObjectId};
use bitflags::bitflags;

bitflags! {
    /// Font descriptor flags as defined in PDF specification
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FontFlags: u32 {
        /// All glyphs have the same width
        const FIXED_PITCH = 1 << 0;
        /// Glyphs have serifs
        const SERIF = 1 << 1;
        /// Font contains glyphs outside Adobe standard Latin set
        const SYMBOLIC = 1 << 2;
        /// Font is a script font
        const SCRIPT = 1 << 3;
        /// Font uses Adobe standard Latin character set
        const NONSYMBOLIC = 1 << 5;
        /// Font is italic
        const ITALIC = 1 << 6;
        const ALL_CAP = 1 << 16;
        const SMALL_CAP = 1 << 17;
        const FORCE_BOLD = 1 << 18;
    }
}

/// Whole numbers are written as integers, everything else as a real.
fn metric(value: f64) -> Object {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Object::Integer(value as i64)
    } else {
        Object::Real(value)
    }
}

/// Build the `/FontDescriptor` dictionary for `font_name`.
///
/// Ascent and Descent are always written. CapHeight, Flags, FontBBox,
/// ItalicAngle, MissingWidth and StemV are written only when the metrics
/// carry them.
pub fn descriptor_dict(
    font_name: &str,
    metrics: &FontMetrics,
    font_file: Option<ObjectId>,
) -> Dictionary {
    let mut dict = Dictionary::typed("FontDescriptor");
    dict.set("FontName", Object::name(font_name));
    dict.set("Ascent", metric(metrics.ascender));
    dict.set("Descent", metric(metrics.descender));
    dict.set_opt("CapHeight", metrics.cap_height.map(metric));
    dict.set_opt(
        "Flags",
        metrics.flags.map(|flags| Object::Integer(flags as i64)),
    );
    dict.set_opt(
        "FontBBox",
        metrics
            .font_bbox
            .map(|bbox| Object::Array(bbox.iter().copied().map(metric).collect())),
    );
    dict.set_opt("ItalicAngle", metrics.italic_angle.map(metric));
    dict.set_opt("MissingWidth", metrics.missing_width.map(metric));
    dict.set_opt("StemV", metrics.stem_v.map(metric));
    dict.set_opt("FontFile2", font_file);
    dict
}
