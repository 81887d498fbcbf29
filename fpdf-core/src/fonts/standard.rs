//! The standard (core) PDF fonts and the per-document cache that loads them

use super::{CharWidthMap, Font, FontFlags, FontMetrics, StandardFont};
use crate::text::metrics::{
    table_entries, WidthTable, COURIER_WIDTHS, HELVETICA_BOLD_WIDTHS, HELVETICA_WIDTHS,
    TIMES_BOLD_ITALIC_WIDTHS, TIMES_BOLD_WIDTHS, TIMES_ITALIC_WIDTHS, TIMES_ROMAN_WIDTHS,
};
use crate::text::WinAnsiEncoding;
use std::cell::OnceCell;

/// Normalized lookup key for a family and style.
///
/// The family is lowercased with all spaces removed; the style is
/// uppercased, and `IB` is written as `BI`.
///
/// ```
/// use fpdf::fonts::font_key;
///
/// assert_eq!(font_key("Times New Roman", "i"), "timesnewromanI");
/// assert_eq!(font_key("Helvetica", "ib"), "helveticaBI");
/// ```
pub fn font_key(family: &str, style: &str) -> String {
    let family: String = family
        .chars()
        .filter(|ch| *ch != ' ')
        .flat_map(char::to_lowercase)
        .collect();
    let style = match style.to_uppercase().as_str() {
        "IB" => "BI".to_string(),
        other => other.to_string(),
    };
    format!("{family}{style}")
}

struct StandardFontSpec {
    key: &'static str,
    name: &'static str,
    widths: &'static WidthTable,
    default_width: u16,
    cap_height: f64,
    italic_angle: f64,
    bbox: [f64; 4],
    stem_v: f64,
    flags: FontFlags,
}

const HELVETICA: FontFlags = FontFlags::NONSYMBOLIC;
const COURIER: FontFlags = FontFlags::NONSYMBOLIC.union(FontFlags::FIXED_PITCH);
const TIMES: FontFlags = FontFlags::NONSYMBOLIC.union(FontFlags::SERIF);

// Helvetica and Courier obliques share the upright widths.
static STANDARD_FONTS: [StandardFontSpec; 12] = [
    StandardFontSpec {
        key: "helvetica",
        name: "Helvetica",
        widths: &HELVETICA_WIDTHS,
        default_width: 556,
        cap_height: 718.0,
        italic_angle: 0.0,
        bbox: [-166.0, -225.0, 1000.0, 931.0],
        stem_v: 88.0,
        flags: HELVETICA,
    },
    StandardFontSpec {
        key: "helveticaB",
        name: "Helvetica-Bold",
        widths: &HELVETICA_BOLD_WIDTHS,
        default_width: 611,
        cap_height: 718.0,
        italic_angle: 0.0,
        bbox: [-170.0, -228.0, 1003.0, 962.0],
        stem_v: 140.0,
        flags: HELVETICA,
    },
    StandardFontSpec {
        key: "helveticaI",
        name: "Helvetica-Oblique",
        widths: &HELVETICA_WIDTHS,
        default_width: 556,
        cap_height: 718.0,
        italic_angle: -12.0,
        bbox: [-170.0, -225.0, 1116.0, 931.0],
        stem_v: 88.0,
        flags: HELVETICA.union(FontFlags::ITALIC),
    },
    StandardFontSpec {
        key: "helveticaBI",
        name: "Helvetica-BoldOblique",
        widths: &HELVETICA_BOLD_WIDTHS,
        default_width: 611,
        cap_height: 718.0,
        italic_angle: -12.0,
        bbox: [-174.0, -228.0, 1114.0, 962.0],
        stem_v: 140.0,
        flags: HELVETICA.union(FontFlags::ITALIC),
    },
    StandardFontSpec {
        key: "courier",
        name: "Courier",
        widths: &COURIER_WIDTHS,
        default_width: 600,
        cap_height: 562.0,
        italic_angle: 0.0,
        bbox: [-23.0, -250.0, 715.0, 805.0],
        stem_v: 51.0,
        flags: COURIER,
    },
    StandardFontSpec {
        key: "courierB",
        name: "Courier-Bold",
        widths: &COURIER_WIDTHS,
        default_width: 600,
        cap_height: 562.0,
        italic_angle: 0.0,
        bbox: [-113.0, -250.0, 749.0, 801.0],
        stem_v: 106.0,
        flags: COURIER,
    },
    StandardFontSpec {
        key: "courierI",
        name: "Courier-Oblique",
        widths: &COURIER_WIDTHS,
        default_width: 600,
        cap_height: 562.0,
        italic_angle: -12.0,
        bbox: [-27.0, -250.0, 849.0, 805.0],
        stem_v: 51.0,
        flags: COURIER.union(FontFlags::ITALIC),
    },
    StandardFontSpec {
        key: "courierBI",
        name: "Courier-BoldOblique",
        widths: &COURIER_WIDTHS,
        default_width: 600,
        cap_height: 562.0,
        italic_angle: -12.0,
        bbox: [-57.0, -250.0, 869.0, 801.0],
        stem_v: 106.0,
        flags: COURIER.union(FontFlags::ITALIC),
    },
    StandardFontSpec {
        key: "times",
        name: "Times-Roman",
        widths: &TIMES_ROMAN_WIDTHS,
        default_width: 500,
        cap_height: 662.0,
        italic_angle: 0.0,
        bbox: [-168.0, -218.0, 1000.0, 898.0],
        stem_v: 84.0,
        flags: TIMES,
    },
    StandardFontSpec {
        key: "timesB",
        name: "Times-Bold",
        widths: &TIMES_BOLD_WIDTHS,
        default_width: 500,
        cap_height: 676.0,
        italic_angle: 0.0,
        bbox: [-168.0, -218.0, 1000.0, 935.0],
        stem_v: 139.0,
        flags: TIMES,
    },
    StandardFontSpec {
        key: "timesI",
        name: "Times-Italic",
        widths: &TIMES_ITALIC_WIDTHS,
        default_width: 500,
        cap_height: 653.0,
        italic_angle: -15.5,
        bbox: [-169.0, -217.0, 1010.0, 883.0],
        stem_v: 76.0,
        flags: TIMES.union(FontFlags::ITALIC),
    },
    StandardFontSpec {
        key: "timesBI",
        name: "Times-BoldItalic",
        widths: &TIMES_BOLD_ITALIC_WIDTHS,
        default_width: 500,
        cap_height: 669.0,
        italic_angle: -15.0,
        bbox: [-200.0, -218.0, 996.0, 921.0],
        stem_v: 121.0,
        flags: TIMES.union(FontFlags::ITALIC),
    },
];

impl StandardFontSpec {
    fn ascender_descender(&self) -> (f64, f64) {
        match self.key.as_bytes().first() {
            Some(b'c') => (629.0, -157.0),
            Some(b't') => (683.0, -217.0),
            _ => (718.0, -207.0),
        }
    }

    fn build(&self) -> StandardFont {
        let (ascender, descender) = self.ascender_descender();
        let metrics = FontMetrics {
            cap_height: Some(self.cap_height),
            italic_angle: Some(self.italic_angle),
            font_bbox: Some(self.bbox),
            flags: Some(self.flags.bits()),
            missing_width: Some(self.default_width as f64),
            stem_v: Some(self.stem_v),
            units_per_em: Some(1000),
            ..FontMetrics::new(ascender, descender)
        };
        let widths: CharWidthMap = table_entries(self.widths)
            .map(|(ch, width)| (ch, width as f64))
            .collect();
        StandardFont::new(self.name, metrics, widths)
    }
}

/// Loads standard fonts on first use and keeps them for the lifetime of
/// one document. Also owns the WinAnsi table used to encode their text.
#[derive(Debug, Default)]
pub struct StandardFontCache {
    encoding: OnceCell<WinAnsiEncoding>,
    fonts: [OnceCell<StandardFont>; 12],
}

impl StandardFontCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` (see [`font_key`]) names a standard font.
    pub fn is_standard(key: &str) -> bool {
        STANDARD_FONTS.iter().any(|spec| spec.key == key)
    }

    /// Standard PDF names of every font this cache can load.
    pub fn names() -> impl Iterator<Item = &'static str> {
        STANDARD_FONTS.iter().map(|spec| spec.name)
    }

    pub fn load(&self, key: &str) -> Option<Font> {
        let index = STANDARD_FONTS.iter().position(|spec| spec.key == key)?;
        let font = self.fonts[index].get_or_init(|| STANDARD_FONTS[index].build());
        Some(Font::Standard(font.clone()))
    }

    pub fn encoding(&self) -> &WinAnsiEncoding {
        self.encoding.get_or_init(WinAnsiEncoding::new)
    }

    /// Number of fonts built so far.
    pub fn loaded_count(&self) -> usize {
        self.fonts.iter().filter(|cell| cell.get().is_some()).count()
    }
}
