//! Helpers for inspecting generated PDF bytes in integration tests

#![allow(dead_code)]

use fpdf::fonts::{FontMetrics, GlyphTable};
use fpdf::{Document, TrueTypeFont};
use std::collections::BTreeMap;

pub fn as_text(pdf: &[u8]) -> String {
    String::from_utf8_lossy(pdf).into_owned()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .rposition(|window| window == needle)
}

/// Object number to byte offset, read from the xref table that
/// `startxref` points at.
pub fn xref_offsets(pdf: &[u8]) -> BTreeMap<u32, usize> {
    let startxref = rfind(pdf, b"startxref\n").expect("startxref");
    let tail = as_text(&pdf[startxref + 10..]);
    let xref_offset: usize = tail.lines().next().unwrap().trim().parse().unwrap();

    let table = as_text(&pdf[xref_offset..]);
    let mut lines = table.lines();
    assert_eq!(lines.next(), Some("xref"));
    let header: Vec<usize> = lines
        .next()
        .unwrap()
        .split(' ')
        .map(|n| n.parse().unwrap())
        .collect();
    assert_eq!(header[0], 0);
    assert_eq!(lines.next(), Some("0000000000 65535 f "));

    let mut offsets = BTreeMap::new();
    for number in 1..header[1] {
        let line = lines.next().unwrap();
        assert_eq!(line.len(), 19, "xref line {line:?}");
        assert!(line.ends_with(" 00000 n "));
        offsets.insert(number as u32, line[..10].parse().unwrap());
    }
    offsets
}

/// Bytes of object `number`, from its `N 0 obj` line up to `endobj`.
pub fn object_bytes(pdf: &[u8], number: u32) -> &[u8] {
    let offset = xref_offsets(pdf)[&number];
    let body = &pdf[offset..];
    let header = format!("{number} 0 obj\n");
    assert!(body.starts_with(header.as_bytes()), "object {number} header");
    let endobj = find(body, b"\nendobj\n").unwrap();
    let end = match find(body, b"\nstream\n").filter(|stream| *stream < endobj) {
        Some(stream) => {
            let length = stream_length(&body[..stream]);
            stream + 8 + length + b"\nendstream\nendobj\n".len()
        }
        None => endobj + 8,
    };
    &body[..end]
}

pub fn object_text(pdf: &[u8], number: u32) -> String {
    as_text(object_bytes(pdf, number))
}

fn stream_length(dict: &[u8]) -> usize {
    let text = as_text(dict);
    let start = text.find("/Length ").unwrap() + 8;
    text[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .unwrap()
}

/// Raw (possibly compressed) data of stream object `number`.
pub fn stream_data(pdf: &[u8], number: u32) -> Vec<u8> {
    let object = object_bytes(pdf, number);
    let start = find(object, b"\nstream\n").unwrap();
    let length = stream_length(&object[..start]);
    object[start + 8..start + 8 + length].to_vec()
}

/// First `N 0 R` that follows `/key ` in `text`.
pub fn reference_after(text: &str, key: &str) -> u32 {
    let pattern = format!("/{key} ");
    let start = text.find(&pattern).unwrap() + pattern.len();
    text[start..]
        .trim_start_matches('[')
        .split(' ')
        .next()
        .unwrap()
        .parse()
        .unwrap()
}

/// Every `N 0 R` in the file outside stream data.
pub fn all_references(pdf: &[u8]) -> Vec<u32> {
    let mut refs = Vec::new();
    for number in xref_offsets(pdf).keys() {
        let object = object_bytes(pdf, *number);
        let dict_end = find(object, b"\nstream\n").unwrap_or(object.len());
        let text = as_text(&object[..dict_end]);
        let tokens: Vec<&str> = text.split(|c: char| c.is_whitespace() || "[]<>".contains(c)).collect();
        for window in tokens.windows(3) {
            if window[1] == "0" && window[2] == "R" {
                if let Ok(n) = window[0].parse() {
                    refs.push(n);
                }
            }
        }
    }
    refs
}

/// Numbers of the objects whose dictionary contains `needle`.
pub fn objects_containing(pdf: &[u8], needle: &str) -> Vec<u32> {
    xref_offsets(pdf)
        .keys()
        .copied()
        .filter(|n| {
            let object = object_bytes(pdf, *n);
            let dict_end = find(object, b"\nstream\n").unwrap_or(object.len());
            as_text(&object[..dict_end]).contains(needle)
        })
        .collect()
}

/// Fake font file bytes; the writer treats the file as opaque.
pub fn test_font_file() -> Vec<u8> {
    let mut data = vec![0x00, 0x01, 0x00, 0x00, 0x00, 0x04];
    data.extend((0..250u32).map(|i| (i * 7 % 251) as u8));
    data
}

/// A TrueType font covering ASCII with upem 2048.
pub fn test_truetype_font() -> TrueTypeFont {
    let mut table = GlyphTable::new(2048).with_font_data(test_font_file());
    for code in 0x20..0x7Fu32 {
        table.add_glyph(code, (code - 29) as u16, 1229);
    }
    table.add_glyph('H' as u32, 43, 1479);
    table.add_glyph('i' as u32, 76, 532);
    let metrics = FontMetrics {
        cap_height: Some(1462.0 * 1000.0 / 2048.0),
        italic_angle: Some(0.0),
        font_bbox: Some([-550.0, -271.0, 1204.0, 1048.0]),
        flags: Some(32),
        missing_width: Some(600.0),
        stem_v: Some(80.0),
        units_per_em: Some(2048),
        ..FontMetrics::new(1069.0, -293.0)
    };
    TrueTypeFont::new("OpenSans-Regular", metrics, table)
}

pub fn pinned_document() -> Document {
    use chrono::TimeZone;
    let mut doc = Document::new();
    doc.set_creation_date(chrono::Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
    doc
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
