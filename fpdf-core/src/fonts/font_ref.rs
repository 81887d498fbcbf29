//! A font registered with a document

use super::Font;
use crate::compression;
use crate::error::Result;
use crate::objects::ObjectId;
use std::collections::BTreeSet;

/// A font as used by one document: its resource index, the character
/// codes drawn with it, and the object numbers assigned while writing.
#[derive(Debug, Clone)]
pub struct FontRef {
    index: usize,
    font: Font,
    object_id: Option<ObjectId>,
    file_object_id: Option<ObjectId>,
    compressed_file: Option<Vec<u8>>,
    original_length: usize,
    used_codes: BTreeSet<u16>,
}

impl FontRef {
    /// `index` is 1-based and names the `/F{index}` resource.
    pub fn new(index: usize, font: Font) -> Self {
        Self {
            index,
            font,
            object_id: None,
            file_object_id: None,
            compressed_file: None,
            original_length: 0,
            used_codes: BTreeSet::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn resource_name(&self) -> String {
        format!("F{}", self.index)
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Remember every BMP code point of `text`. Code points beyond the
    /// BMP are drawn as CID 0 and need no entry.
    pub fn record_text(&mut self, text: &str) {
        self.used_codes
            .extend(text.chars().filter_map(|ch| u16::try_from(ch as u32).ok()));
    }

    pub fn used_codes(&self) -> &BTreeSet<u16> {
        &self.used_codes
    }

    pub fn object_id(&self) -> Option<ObjectId> {
        self.object_id
    }

    pub fn set_object_id(&mut self, id: ObjectId) {
        self.object_id = Some(id);
    }

    pub fn file_object_id(&self) -> Option<ObjectId> {
        self.file_object_id
    }

    pub fn set_file_object_id(&mut self, id: ObjectId) {
        self.file_object_id = Some(id);
    }

    /// The deflated font file and its uncompressed length, compressed on
    /// first call.
    pub fn compressed_file(&mut self) -> Result<(&[u8], usize)> {
        if self.compressed_file.is_none() {
            let data = self.font.font_data()?;
            self.original_length = data.len();
            self.compressed_file = Some(compression::compress(data)?);
        }
        let data = self.compressed_file.as_deref().unwrap_or_default();
        Ok((data, self.original_length))
    }
}
