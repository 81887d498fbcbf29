use super::xref::ObjectAllocator;
use crate::document::Document;
use crate::error::Result;
use crate::fonts::{embedder, FontKind};
use crate::objects::{
    escape_literal, escape_name, format_real, Dictionary, Object, ObjectId, Stream,
};
use chrono::{DateTime, Utc};
use std::io::Write;
use tracing::{debug, trace};

/// Object 1, the page tree root.
pub const PAGES_ROOT_ID: ObjectId = ObjectId::new(1);
/// Object 2, the resource dictionary shared by every page.
pub const RESOURCES_ID: ObjectId = ObjectId::new(2);

const PROC_SET: [&str; 5] = ["PDF", "Text", "ImageB", "ImageC", "ImageI"];

/// Serializes a [`Document`] as a PDF 1.3 file with a classic xref table.
///
/// Object numbers are reserved before anything that refers to them is
/// written, and every reservation is checked off as the object lands, so
/// the xref table is complete by construction.
pub struct PdfWriter<W: Write> {
    writer: W,
    current_position: u64,
    allocator: ObjectAllocator,
}

impl<W: Write> PdfWriter<W> {
    pub fn new_with_writer(writer: W) -> Self {
        Self {
            writer,
            current_position: 0,
            allocator: ObjectAllocator::new(),
        }
    }

    pub fn write_document(&mut self, document: &mut Document) -> Result<()> {
        self.write_header()?;

        self.write_pages(document)?;
        self.write_page_tree(document)?;
        let font_ids = self.write_fonts(document)?;
        self.write_resources(&font_ids)?;
        let info_id = self.write_info(document)?;
        let catalog_id = self.write_catalog()?;

        let xref_position = self.current_position;
        self.write_xref()?;
        self.write_trailer(catalog_id, info_id, xref_position)?;

        self.writer.flush()?;
        debug!(
            "Wrote {} pages, {} fonts, {} objects, {} bytes",
            document.pages.len(),
            font_ids.len(),
            self.allocator.object_count(),
            self.current_position
        );
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn current_position(&self) -> u64 {
        self.current_position
    }

    fn write_header(&mut self) -> Result<()> {
        self.write_bytes(b"%PDF-1.3\n")?;
        // Binary comment to ensure file is treated as binary
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])?;
        Ok(())
    }

    /// Each page dictionary followed by its content stream.
    fn write_pages(&mut self, document: &mut Document) -> Result<()> {
        let compress = document.options.compress_pages;
        let first_size = document
            .pages
            .first()
            .map(|page| (page.width(), page.height()));

        for page in document.pages.iter_mut() {
            let page_id = self.allocator.reserve();
            let content_id = self.allocator.reserve();
            page.set_object_id(page_id);

            let mut dict = Dictionary::typed("Page");
            dict.set("Parent", PAGES_ROOT_ID);
            if first_size != Some((page.width(), page.height())) {
                dict.set("MediaBox", media_box(page.width(), page.height()));
            }
            dict.set("Resources", RESOURCES_ID);
            dict.set("Contents", content_id);
            self.write_object(page_id, &dict.into())?;

            let content = page.content().as_bytes();
            let stream = if compress {
                Stream::deflated(content)?
            } else {
                Stream::new(content.to_vec())
            };
            self.write_object(content_id, &stream.into())?;
        }
        Ok(())
    }

    fn write_page_tree(&mut self, document: &Document) -> Result<()> {
        let kids: Vec<Object> = document
            .pages
            .iter()
            .filter_map(|page| page.object_id())
            .map(Object::Reference)
            .collect();
        let (width, height) = document
            .pages
            .first()
            .map(|page| (page.width(), page.height()))
            .unwrap_or_else(|| document.options.page_size.dimensions());

        let mut dict = Dictionary::typed("Pages");
        dict.set("Kids", kids);
        dict.set("Count", document.pages.len());
        dict.set("MediaBox", media_box(width, height));
        self.write_object(PAGES_ROOT_ID, &dict.into())
    }

    /// Font files first, then each font's dictionaries. Returns the
    /// resource name and object of every font.
    fn write_fonts(&mut self, document: &mut Document) -> Result<Vec<(String, ObjectId)>> {
        for font_ref in document.fonts.values_mut() {
            if font_ref.font().kind() != FontKind::TrueType {
                continue;
            }
            let file_id = self.allocator.reserve();
            let stream = embedder::font_file_stream(font_ref)?;
            self.write_object(file_id, &stream.into())?;
            font_ref.set_file_object_id(file_id);
        }

        let mut font_ids = Vec::with_capacity(document.fonts.len());
        for font_ref in document.fonts.values_mut() {
            let allocator = &mut self.allocator;
            let objects = embedder::font_objects(font_ref, || allocator.reserve())?;
            for (id, object) in &objects {
                self.write_object(*id, object)?;
            }
            if let Some(id) = font_ref.object_id() {
                font_ids.push((font_ref.resource_name(), id));
            }
        }
        Ok(font_ids)
    }

    fn write_resources(&mut self, font_ids: &[(String, ObjectId)]) -> Result<()> {
        let fonts: Dictionary = font_ids
            .iter()
            .map(|(name, id)| (name.clone(), Object::Reference(*id)))
            .collect();

        let mut dict = Dictionary::new();
        dict.set(
            "ProcSet",
            PROC_SET.iter().map(|&name| Object::name(name)).collect::<Vec<_>>(),
        );
        dict.set("Font", fonts);
        dict.set("XObject", Dictionary::new());
        self.write_object(RESOURCES_ID, &dict.into())
    }

    fn write_info(&mut self, document: &Document) -> Result<ObjectId> {
        let info_id = self.allocator.reserve();
        let metadata = &document.metadata;

        let mut dict = Dictionary::new();
        dict.set_opt("Title", metadata.title.clone().map(Object::String));
        dict.set_opt("Author", metadata.author.clone().map(Object::String));
        dict.set_opt("Subject", metadata.subject.clone().map(Object::String));
        dict.set_opt("Keywords", metadata.keywords.clone().map(Object::String));
        dict.set_opt("Creator", metadata.creator.clone().map(Object::String));
        dict.set("Producer", Object::String(metadata.producer.clone()));
        dict.set_opt(
            "CreationDate",
            metadata
                .creation_date
                .map(|date| Object::String(format_pdf_date(date))),
        );

        self.write_object(info_id, &dict.into())?;
        Ok(info_id)
    }

    fn write_catalog(&mut self) -> Result<ObjectId> {
        let catalog_id = self.allocator.reserve();
        let mut catalog = Dictionary::typed("Catalog");
        catalog.set("Pages", PAGES_ROOT_ID);
        self.write_object(catalog_id, &catalog.into())?;
        Ok(catalog_id)
    }

    pub fn write_object(&mut self, id: ObjectId, object: &Object) -> Result<()> {
        self.allocator.record(id, self.current_position)?;
        trace!("Object {} at offset {}", id.number(), self.current_position);

        let header = format!("{} {} obj\n", id.number(), id.generation());
        self.write_bytes(header.as_bytes())?;
        self.write_object_value(object)?;
        self.write_bytes(b"\nendobj\n")?;
        Ok(())
    }

    fn write_object_value(&mut self, object: &Object) -> Result<()> {
        match object {
            Object::Null => self.write_bytes(b"null")?,
            Object::Boolean(b) => self.write_bytes(if *b { b"true" } else { b"false" })?,
            Object::Integer(i) => self.write_bytes(i.to_string().as_bytes())?,
            Object::Real(f) => self.write_bytes(format_real(*f).as_bytes())?,
            Object::String(s) => self.write_text_string(s)?,
            Object::Name(n) => self.write_name(n)?,
            Object::Array(arr) => {
                self.write_bytes(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        self.write_bytes(b" ")?;
                    }
                    self.write_object_value(obj)?;
                }
                self.write_bytes(b"]")?;
            }
            Object::Dictionary(dict) => self.write_dictionary(dict)?,
            Object::Stream(stream) => {
                self.write_dictionary(stream.dictionary())?;
                self.write_bytes(b"\nstream\n")?;
                self.write_bytes(stream.data())?;
                self.write_bytes(b"\nendstream")?;
            }
            Object::Reference(id) => self.write_bytes(id.to_string().as_bytes())?,
        }
        Ok(())
    }

    fn write_name(&mut self, name: &str) -> Result<()> {
        self.write_bytes(b"/")?;
        self.write_bytes(escape_name(name).as_bytes())
    }

    fn write_dictionary(&mut self, dict: &Dictionary) -> Result<()> {
        self.write_bytes(b"<<")?;
        for (i, (key, value)) in dict.entries().enumerate() {
            if i > 0 {
                self.write_bytes(b" ")?;
            }
            self.write_name(key)?;
            self.write_bytes(b" ")?;
            self.write_object_value(value)?;
        }
        self.write_bytes(b">>")
    }

    /// ASCII text as an escaped literal, anything else as UTF-16BE with a
    /// byte order mark.
    fn write_text_string(&mut self, text: &str) -> Result<()> {
        if text.is_ascii() {
            let literal = format!("({})", escape_literal(text.as_bytes()));
            return self.write_bytes(literal.as_bytes());
        }
        let mut hex = String::from("<FEFF");
        for unit in text.encode_utf16() {
            hex.push_str(&format!("{unit:04X}"));
        }
        hex.push('>');
        self.write_bytes(hex.as_bytes())
    }

    fn write_xref(&mut self) -> Result<()> {
        self.allocator.ensure_complete()?;
        let entries = self.allocator.sorted_entries();

        let header = format!("xref\n0 {}\n", entries.len() + 1);
        self.write_bytes(header.as_bytes())?;
        self.write_bytes(b"0000000000 65535 f \n")?;
        for entry in entries {
            let line = format!("{:010} 00000 n \n", entry.offset);
            self.write_bytes(line.as_bytes())?;
        }
        Ok(())
    }

    fn write_trailer(
        &mut self,
        catalog_id: ObjectId,
        info_id: ObjectId,
        xref_position: u64,
    ) -> Result<()> {
        let mut trailer = Dictionary::new();
        trailer.set("Size", self.allocator.object_count() + 1);
        trailer.set("Root", catalog_id);
        trailer.set("Info", info_id);

        self.write_bytes(b"trailer\n")?;
        self.write_dictionary(&trailer)?;
        self.write_bytes(b"\nstartxref\n")?;
        self.write_bytes(xref_position.to_string().as_bytes())?;
        self.write_bytes(b"\n%%EOF\n")?;
        Ok(())
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.current_position += data.len() as u64;
        Ok(())
    }
}

fn media_box(width: f64, height: f64) -> Object {
    Object::Array(vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Real(width),
        Object::Real(height),
    ])
}

/// Format a DateTime as a PDF date string (D:YYYYMMDDHHmmSSOHH'mm)
pub fn format_pdf_date(date: DateTime<Utc>) -> String {
    let formatted = date.format("D:%Y%m%d%H%M%S");
    // For UTC, the offset is always +00'00
    format!("{formatted}+00'00")
}
