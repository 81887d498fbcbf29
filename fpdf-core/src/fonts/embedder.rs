//! Font dictionaries and embedded font objects
//!
//! Standard fonts become a single `/Type1` dictionary. TrueType fonts are
//! embedded as a composite font: a `/Type0` font with `/Identity-H`
//! encoding, a `/CIDFontType2` descendant whose `/W` array and
//! CIDToGIDMap cover only the codes drawn with the font, an identity
//! ToUnicode CMap, a CIDSystemInfo dictionary and a font descriptor that
//! points at the deflated `/FontFile2` stream.

use super::font_descriptor::descriptor_dict;
use super::{Font, FontKind, FontRef};
use crate::error::{PdfError, Result};
use crate::objects::{Dictionary, Object, ObjectId, Stream};
use tracing::debug;

/// Size in bytes of a CIDToGIDMap: one big-endian u16 per 16-bit code.
pub const CID_TO_GID_MAP_LEN: usize = 65536 * 2;

const TO_UNICODE_CMAP: &str = "/CIDInit /ProcSet findresource begin
12 dict begin
begincmap
/CIDSystemInfo
<</Registry (Adobe)
/Ordering (UCS)
/Supplement 0
>> def
/CMapName /Adobe-Identity-UCS def
/CMapType 2 def
1 begincodespacerange
<0000> <FFFF>
endcodespacerange
1 beginbfrange
<0000> <FFFF> <0000>
endbfrange
endcmap
CMapName currentdict /CMap defineresource pop
end
end";

/// Object numbers of the six objects that make up one composite font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeFontIds {
    pub type0: ObjectId,
    pub descendant: ObjectId,
    pub cid_to_gid_map: ObjectId,
    pub to_unicode: ObjectId,
    pub system_info: ObjectId,
    pub descriptor: ObjectId,
}

impl CompositeFontIds {
    /// Reserve the numbers in emission order.
    pub fn reserve(mut next: impl FnMut() -> ObjectId) -> Self {
        Self {
            type0: next(),
            descendant: next(),
            cid_to_gid_map: next(),
            to_unicode: next(),
            system_info: next(),
            descriptor: next(),
        }
    }
}

/// Six uppercase letters prefixed to an embedded font's name.
///
/// Derived from the PostScript name and resource index (FNV-1a), so the
/// same document always produces the same tag.
pub fn subset_tag(postscript_name: &str, index: usize) -> String {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in postscript_name
        .bytes()
        .chain((index as u64).to_be_bytes())
    {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    (0..6)
        .map(|_| {
            let letter = char::from(b'A' + (hash % 26) as u8);
            hash /= 26;
            letter
        })
        .collect()
}

pub fn standard_font_dict(font: &Font) -> Dictionary {
    let mut dict = Dictionary::typed("Font");
    dict.set("Subtype", Object::name("Type1"));
    dict.set("BaseFont", Object::name(font.name()));
    dict.set("Encoding", Object::name("WinAnsiEncoding"));
    dict
}

/// `/W` entries `code [width]` for every used code, widths in glyph space.
pub fn width_array<'a>(font: &Font, codes: impl IntoIterator<Item = &'a u16>) -> Object {
    let mut entries = Vec::new();
    for &code in codes {
        let width = font
            .glyph_source()
            .and_then(|source| source.scaled_glyph_advance_width(code as u32))
            .unwrap_or_else(|| char::from_u32(code as u32).map_or(0.0, |ch| font.char_width(ch)));
        entries.push(Object::Integer(code as i64));
        entries.push(Object::Array(vec![Object::Real(width)]));
    }
    Object::Array(entries)
}

/// Uncompressed CIDToGIDMap with glyph indices at the used codes and 0
/// (.notdef) everywhere else.
pub fn cid_to_gid_map<'a>(
    font: &Font,
    codes: impl IntoIterator<Item = &'a u16>,
) -> Result<Vec<u8>> {
    let mut map = vec![0u8; CID_TO_GID_MAP_LEN];
    for &code in codes {
        let glyph = font.glyph_index(code as u32)?;
        let offset = code as usize * 2;
        map[offset..offset + 2].copy_from_slice(&glyph.to_be_bytes());
    }
    Ok(map)
}

pub fn to_unicode_cmap() -> Stream {
    Stream::new(TO_UNICODE_CMAP.as_bytes().to_vec())
}

/// The `/FontFile2` stream: the deflated font file with `/Length1` set to
/// its uncompressed size.
pub fn font_file_stream(font_ref: &mut FontRef) -> Result<Stream> {
    let (data, original_length) = font_ref.compressed_file()?;
    let mut stream = Stream::new(data.to_vec());
    stream.set_filter("FlateDecode");
    stream.set("Length1", original_length);
    debug!(
        "Font file for {}: {} bytes, {} compressed",
        font_ref.font().name(),
        original_length,
        stream.len()
    );
    Ok(stream)
}

/// Objects for one font, numbered with `next`. The font file stream of a
/// TrueType font must already have been written.
pub fn font_objects(
    font_ref: &mut FontRef,
    next: impl FnMut() -> ObjectId,
) -> Result<Vec<(ObjectId, Object)>> {
    match font_ref.font().kind() {
        FontKind::Standard => {
            let mut next = next;
            let id = next();
            font_ref.set_object_id(id);
            Ok(vec![(id, standard_font_dict(font_ref.font()).into())])
        }
        FontKind::TrueType => {
            let ids = CompositeFontIds::reserve(next);
            font_ref.set_object_id(ids.type0);
            composite_font_objects(font_ref, &ids)
        }
    }
}

pub fn composite_font_objects(
    font_ref: &FontRef,
    ids: &CompositeFontIds,
) -> Result<Vec<(ObjectId, Object)>> {
    let font = font_ref.font();
    let font_file = font_ref.file_object_id().ok_or_else(|| {
        PdfError::InvalidStructure(format!("font file for '{}' was not written", font.name()))
    })?;
    let base_font = format!("{}+{}", subset_tag(font.name(), font_ref.index()), font.name());
    let codes = font_ref.used_codes();

    let mut type0 = Dictionary::typed("Font");
    type0.set("Subtype", Object::name("Type0"));
    type0.set("BaseFont", Object::name(base_font.as_str()));
    type0.set("Encoding", Object::name("Identity-H"));
    type0.set("DescendantFonts", vec![Object::Reference(ids.descendant)]);
    type0.set("ToUnicode", ids.to_unicode);

    let mut descendant = Dictionary::typed("Font");
    descendant.set("Subtype", Object::name("CIDFontType2"));
    descendant.set("BaseFont", Object::name(base_font.as_str()));
    descendant.set("CIDSystemInfo", ids.system_info);
    descendant.set("FontDescriptor", ids.descriptor);
    descendant.set_opt("DW", font.metrics().missing_width);
    descendant.set("W", width_array(font, codes));
    descendant.set("CIDToGIDMap", ids.cid_to_gid_map);

    let cid_to_gid = Stream::deflated(&cid_to_gid_map(font, codes)?)?;

    let mut system_info = Dictionary::new();
    system_info.set("Registry", Object::String("Adobe".into()));
    system_info.set("Ordering", Object::String("UCS".into()));
    system_info.set("Supplement", 0);

    let descriptor = descriptor_dict(&base_font, font.metrics(), Some(font_file));

    debug!(
        "Composite font {} ({}): {} codes in use",
        base_font,
        font_ref.resource_name(),
        codes.len()
    );

    Ok(vec![
        (ids.type0, type0.into()),
        (ids.descendant, descendant.into()),
        (ids.cid_to_gid_map, cid_to_gid.into()),
        (ids.to_unicode, to_unicode_cmap().into()),
        (ids.system_info, system_info.into()),
        (ids.descriptor, descriptor.into()),
    ])
}
