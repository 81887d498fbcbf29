use crate::error::{PdfError, Result};
use crate::fonts::{font_key, Font, FontKind, FontMetrics, FontRef, StandardFontCache};
use crate::graphics::{
    Color, ContentStream, DashOptions, DrawOptions, LineCap, LineJoin, WindingRule, KAPPA,
};
use crate::page::{Page, PageSize};
use crate::pen::{Pen, DEFAULT_LINE_WIDTH};
use crate::text::{FontSizeMethod, TextOptions};
use crate::writer::PdfWriter;
use chrono::{DateTime, Local, Utc};
use indexmap::IndexMap;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Settings fixed when the document is created.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentOptions {
    /// Size used by [`Document::add_page`] when no size is named
    pub page_size: PageSize,
    /// Pen width applied at the start of every page
    pub line_width: f64,
    /// Font size used until one is chosen
    pub font_size: f64,
    /// Written as `/Producer` in the document information dictionary
    pub producer: String,
    /// Deflate page content streams. Font files are always deflated.
    pub compress_pages: bool,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::Letter,
            line_width: DEFAULT_LINE_WIDTH,
            font_size: 10.0,
            producer: format!("fpdf v{}", env!("CARGO_PKG_VERSION")),
            compress_pages: false,
        }
    }
}

impl DocumentOptions {
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = producer.into();
        self
    }

    pub fn with_compress_pages(mut self, compress: bool) -> Self {
        self.compress_pages = compress;
        self
    }
}

/// Metadata for a PDF document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMetadata {
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document keywords
    pub keywords: Option<String>,
    /// Software that created the original document
    pub creator: Option<String>,
    /// Software that produced the PDF
    pub producer: String,
    /// Date and time the document was created
    pub creation_date: Option<DateTime<Utc>>,
}

impl DocumentMetadata {
    fn new(producer: String) -> Self {
        Self {
            title: None,
            author: None,
            subject: None,
            keywords: None,
            creator: None,
            producer,
            creation_date: Some(Utc::now()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState {
    /// Pages and content can still be added
    Open,
    /// Serialized; the output buffer is final
    Closed,
}

/// A PDF document built one drawing call at a time.
///
/// Coordinates passed to the drawing API are in points with the origin at
/// the top-left corner of the current page and y growing downwards.
///
/// # Example
///
/// ```rust
/// use fpdf::{Document, TextOptions};
///
/// let mut doc = Document::new();
/// doc.add_page(None)?;
/// doc.set_font("Helvetica", "", Some(14.0))?;
/// doc.text(100.0, 100.0, "Hi", TextOptions::default())?;
///
/// let bytes = doc.final_buffer()?;
/// assert!(bytes.starts_with(b"%PDF-1.3"));
/// # Ok::<(), fpdf::PdfError>(())
/// ```
#[derive(Debug)]
pub struct Document {
    pub(crate) options: DocumentOptions,
    pub(crate) metadata: DocumentMetadata,
    pub(crate) pages: Vec<Page>,
    pub(crate) fonts: IndexMap<String, FontRef>,
    standard_fonts: StandardFontCache,
    pen: Pen,
    state: DocumentState,
    output: Vec<u8>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a new empty PDF document.
    pub fn new() -> Self {
        Self::with_options(DocumentOptions::default())
    }

    pub fn with_options(options: DocumentOptions) -> Self {
        Self {
            metadata: DocumentMetadata::new(options.producer.clone()),
            pen: Pen::new(options.line_width, options.font_size),
            options,
            pages: Vec::new(),
            fonts: IndexMap::new(),
            standard_fonts: StandardFontCache::new(),
            state: DocumentState::Open,
            output: Vec::new(),
        }
    }

    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    pub fn state(&self) -> DocumentState {
        self.state
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Registered fonts in resource order.
    pub fn fonts(&self) -> impl Iterator<Item = &FontRef> {
        self.fonts.values()
    }

    fn ensure_open(&self) -> Result<()> {
        match self.state {
            DocumentState::Open => Ok(()),
            DocumentState::Closed => Err(PdfError::DocumentClosed),
        }
    }

    /// Content stream of the current page.
    fn content(&mut self) -> Result<&mut ContentStream> {
        self.ensure_open()?;
        self.pages
            .last_mut()
            .map(Page::content_mut)
            .ok_or(PdfError::NoPage)
    }

    fn current_page(&self) -> Result<&Page> {
        self.pages.last().ok_or(PdfError::NoPage)
    }

    /// Native point for a top-left-origin point on the current page.
    fn to_native(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        Ok((x, self.current_page()?.to_native_y(y)))
    }

    // Page lifecycle

    /// Start a new page, sized by name (`a3`, `a4`, `a5`, `letter`,
    /// `legal`) or by the document default.
    pub fn add_page(&mut self, size: Option<&str>) -> Result<()> {
        let size = match size {
            Some(name) => name.parse()?,
            None => self.options.page_size,
        };
        self.add_page_with_size(size)
    }

    pub fn add_page_with_size(&mut self, size: PageSize) -> Result<()> {
        let (width, height) = size.dimensions();
        self.add_page_with_dimensions(width, height)
    }

    /// Start a new page of any size, in points.
    pub fn add_page_with_dimensions(&mut self, width: f64, height: f64) -> Result<()> {
        self.ensure_open()?;
        let mut page = Page::new(width, height);
        page.content_mut()
            .set_line_cap(LineCap::Square)
            .set_line_width(self.pen.line_width);
        self.pages.push(page);
        self.pen.font.invalidate();
        debug!("Added page {} ({}x{})", self.pages.len(), width, height);
        Ok(())
    }

    /// Serialize the document. Adds an empty page when there is none.
    /// Calling it again has no effect.
    pub fn close(&mut self) -> Result<()> {
        if self.state == DocumentState::Closed {
            return Ok(());
        }
        if self.pages.is_empty() {
            self.add_page(None)?;
        }

        let mut writer = PdfWriter::new_with_writer(Vec::new());
        writer.write_document(self)?;
        self.output = writer.into_inner();
        self.state = DocumentState::Closed;
        Ok(())
    }

    /// Close the document and return the file bytes.
    pub fn final_buffer(&mut self) -> Result<&[u8]> {
        self.close()?;
        Ok(&self.output)
    }

    /// Close the document and write it to `path`.
    pub fn output(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.close()?;
        std::fs::write(path, &self.output)?;
        Ok(())
    }

    /// Close the document and write it to `writer`.
    pub fn write_to<W: Write>(&mut self, mut writer: W) -> Result<()> {
        self.close()?;
        writer.write_all(&self.output)?;
        writer.flush()?;
        Ok(())
    }

    // Fonts

    fn register_font(&mut self, key: String, font: Font) {
        let index = self.fonts.len() + 1;
        debug!("Registered font {} as F{} ({})", font.name(), index, key);
        self.fonts.insert(key, FontRef::new(index, font));
    }

    /// Register one of the standard fonts. Returns its font key.
    pub fn add_standard_font(&mut self, family: &str, style: &str) -> Result<String> {
        self.ensure_open()?;
        let key = font_key(family, style);
        if !self.fonts.contains_key(&key) {
            let font = self
                .standard_fonts
                .load(&key)
                .ok_or_else(|| PdfError::UnloadedFont(key.clone()))?;
            self.register_font(key.clone(), font);
        }
        Ok(key)
    }

    /// Register a font under `family`/`style`. An already registered key
    /// keeps its first font. Returns the font key.
    pub fn add_custom_font(
        &mut self,
        family: &str,
        style: &str,
        font: impl Into<Font>,
    ) -> Result<String> {
        self.ensure_open()?;
        let key = font_key(family, style);
        if !self.fonts.contains_key(&key) {
            self.register_font(key.clone(), font.into());
        }
        Ok(key)
    }

    /// Choose the font for subsequent text. Standard fonts are registered
    /// on first use; anything else must have been added with
    /// [`add_custom_font`](Self::add_custom_font). The `Tf` operator is
    /// written lazily by the next [`text`](Self::text) call.
    pub fn set_font(&mut self, family: &str, style: &str, size: Option<f64>) -> Result<()> {
        self.ensure_open()?;
        let key = font_key(family, style);
        if !self.fonts.contains_key(&key) {
            if StandardFontCache::is_standard(&key) {
                self.add_standard_font(family, style)?;
            } else {
                return Err(PdfError::UnloadedFont(key));
            }
        }
        let size = size.unwrap_or_else(|| self.pen.font.size());
        self.pen.font.select(key, size);
        Ok(())
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.pen.font.set_size(size);
    }

    pub fn font_size(&self) -> f64 {
        self.pen.font.size()
    }

    fn current_font(&self, action: &'static str) -> Result<&FontRef> {
        let key = self
            .pen
            .font
            .selected()
            .ok_or(PdfError::NoFontSelected(action))?;
        self.fonts
            .get(key)
            .ok_or_else(|| PdfError::UnloadedFont(key.to_string()))
    }

    pub fn current_font_metrics(&self) -> Result<&FontMetrics> {
        Ok(self.current_font("reading font metrics")?.font().metrics())
    }

    /// Width of `text` in the current font and size.
    pub fn get_text_width(&self, text: &str) -> Result<f64> {
        let font_ref = self.current_font("measuring text")?;
        Ok(font_ref.font().text_width(text, self.pen.font.size()))
    }

    /// Line height of the current font at the current size.
    pub fn get_text_height(&self) -> Result<f64> {
        let font_ref = self.current_font("measuring text")?;
        Ok(font_ref.font().metrics().text_height(self.pen.font.size()))
    }

    /// Draw `content` with its top-left corner at `(x, y)`.
    pub fn text(&mut self, x: f64, y: f64, content: &str, options: TextOptions) -> Result<()> {
        self.ensure_open()?;
        let key = self
            .pen
            .font
            .selected()
            .ok_or(PdfError::NoFontSelected("drawing text"))?
            .to_string();
        let top = self.current_page()?.to_native_y(y);
        let size = self.pen.font.size();
        let font_ref = self
            .fonts
            .get_mut(&key)
            .ok_or_else(|| PdfError::UnloadedFont(key.clone()))?;

        let font = font_ref.font();
        let native_x = x + options.align_offset(font.text_width(content, size));
        let native_y = top - font.metrics().scaled_ascender(size);

        let tf_size = match options.font_size_method {
            FontSizeMethod::SetFont => size,
            FontSizeMethod::TextMatrix => 1.0,
        };
        let pending = self.pen.font.pending(tf_size);
        let resource = font_ref.resource_name();

        let kind = font.kind();
        let mut literal = Vec::new();
        let mut codes = Vec::new();
        match kind {
            FontKind::Standard => {
                let encoded = self.standard_fonts.encoding().encode(content);
                for ch in &encoded.unmapped {
                    warn!("{:?} cannot be drawn in {}, replaced by '?'", ch, font.name());
                }
                literal = encoded.bytes;
            }
            FontKind::TrueType => {
                codes = content
                    .chars()
                    .map(|ch| u16::try_from(ch as u32).unwrap_or(0))
                    .collect();
                font_ref.record_text(content);
            }
        }

        let stream = self
            .pages
            .last_mut()
            .map(Page::content_mut)
            .ok_or(PdfError::NoPage)?;
        stream.begin_text();
        if let Some(selection) = pending {
            stream.set_font(&resource, selection.size);
            self.pen.font.mark_emitted(selection);
        }
        if let Some(spacing) = options.character_spacing {
            stream.set_character_spacing(spacing);
        }
        match options.font_size_method {
            FontSizeMethod::SetFont => stream.move_text(native_x, native_y),
            FontSizeMethod::TextMatrix => {
                stream.set_text_matrix(size, 0.0, 0.0, size, native_x, native_y)
            }
        };
        match kind {
            FontKind::Standard => stream.show_literal(&literal),
            FontKind::TrueType => stream.show_hex(&codes),
        };
        if options.character_spacing.is_some() {
            stream.set_character_spacing(0.0);
        }
        stream.end_text();
        Ok(())
    }

    // Colors

    /// Stroke color from 0-255 channels.
    pub fn stroke_color(&mut self, red: u8, green: u8, blue: u8) -> Result<()> {
        self.set_stroke_color(Color::from_rgb8(red, green, blue))
    }

    /// Fill color from 0-255 channels.
    pub fn fill_color(&mut self, red: u8, green: u8, blue: u8) -> Result<()> {
        self.set_fill_color(Color::from_rgb8(red, green, blue))
    }

    pub fn set_stroke_color(&mut self, color: Color) -> Result<()> {
        self.content()?.set_stroke_color(color);
        Ok(())
    }

    pub fn set_fill_color(&mut self, color: Color) -> Result<()> {
        self.content()?.set_fill_color(color);
        Ok(())
    }

    // Paths

    /// Rectangle path with its top-left corner at `(x, y)`.
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
        let (nx, ny) = self.to_native(x, y)?;
        self.content()?.rect(nx, ny, width, -height);
        Ok(())
    }

    /// Rectangle painted right away.
    pub fn draw_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        options: DrawOptions,
    ) -> Result<()> {
        self.rect(x, y, width, height)?;
        self.content()?.paint(options, WindingRule::NonZero);
        Ok(())
    }

    /// Rectangle path with corners rounded to `radius`, clamped to half the
    /// shorter side.
    pub fn rounded_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: f64,
    ) -> Result<()> {
        let r = radius.min(width / 2.0).min(height / 2.0).max(0.0);
        let k = r * (1.0 - KAPPA);
        let (right, bottom) = (x + width, y + height);

        self.move_to(x + r, y)?;
        self.line_to(right - r, y)?;
        self.bezier_curve_to(right - k, y, right, y + k, right, y + r)?;
        self.line_to(right, bottom - r)?;
        self.bezier_curve_to(right, bottom - k, right - k, bottom, right - r, bottom)?;
        self.line_to(x + r, bottom)?;
        self.bezier_curve_to(x + k, bottom, x, bottom - k, x, bottom - r)?;
        self.line_to(x, y + r)?;
        self.bezier_curve_to(x, y + k, x + k, y, x + r, y)?;
        self.close_path()
    }

    pub fn circle(&mut self, x: f64, y: f64, radius: f64) -> Result<()> {
        self.ellipse(x, y, radius, radius)
    }

    pub fn ellipse(&mut self, x: f64, y: f64, radius_x: f64, radius_y: f64) -> Result<()> {
        let (nx, ny) = self.to_native(x, y)?;
        self.content()?.ellipse(nx, ny, radius_x, radius_y);
        Ok(())
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> Result<()> {
        let (nx, ny) = self.to_native(x, y)?;
        self.content()?.move_to(nx, ny);
        Ok(())
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> Result<()> {
        let (nx, ny) = self.to_native(x, y)?;
        self.content()?.line_to(nx, ny);
        Ok(())
    }

    pub fn bezier_curve_to(
        &mut self,
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    ) -> Result<()> {
        let (c1x, c1y) = self.to_native(cp1x, cp1y)?;
        let (c2x, c2y) = self.to_native(cp2x, cp2y)?;
        let (nx, ny) = self.to_native(x, y)?;
        self.content()?.curve_to(c1x, c1y, c2x, c2y, nx, ny);
        Ok(())
    }

    pub fn close_path(&mut self) -> Result<()> {
        self.content()?.close_path();
        Ok(())
    }

    /// Intersect the clipping region with the current path.
    pub fn clip(&mut self, rule: WindingRule) -> Result<()> {
        self.content()?.clip(rule);
        Ok(())
    }

    pub fn fill(&mut self, rule: WindingRule) -> Result<()> {
        self.content()?.fill(rule);
        Ok(())
    }

    pub fn stroke(&mut self) -> Result<()> {
        self.content()?.stroke();
        Ok(())
    }

    pub fn fill_and_stroke(&mut self, rule: WindingRule) -> Result<()> {
        self.content()?.fill_stroke(rule);
        Ok(())
    }

    // Graphics state

    /// Concatenate a native-space matrix to the current transformation.
    pub fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Result<()> {
        self.content()?.transform(a, b, c, d, e, f);
        Ok(())
    }

    /// Scale about `origin` (top-left of the page when `None`).
    pub fn scale(&mut self, sx: f64, sy: f64, origin: Option<(f64, f64)>) -> Result<()> {
        let (ox, oy) = origin.unwrap_or((0.0, 0.0));
        let (nx, ny) = self.to_native(ox, oy)?;
        self.transform(sx, 0.0, 0.0, sy, nx * (1.0 - sx), ny * (1.0 - sy))
    }

    /// Rotate by `degrees`, clockwise as seen on the page, about `origin`
    /// (top-left of the page when `None`).
    pub fn rotate(&mut self, degrees: f64, origin: Option<(f64, f64)>) -> Result<()> {
        let (ox, oy) = origin.unwrap_or((0.0, 0.0));
        let (nx, ny) = self.to_native(ox, oy)?;
        let radians = -degrees.to_radians();
        let (sin, cos) = radians.sin_cos();
        let e = nx - (cos * nx - sin * ny);
        let f = ny - (sin * nx + cos * ny);
        self.transform(cos, sin, -sin, cos, e, f)
    }

    /// Move the origin by `(dx, dy)`, with `dy` growing downwards.
    pub fn translate(&mut self, dx: f64, dy: f64) -> Result<()> {
        self.transform(1.0, 0.0, 0.0, 1.0, dx, -dy)
    }

    /// Set the pen width. Also applies to pages added later.
    pub fn line_width(&mut self, width: f64) -> Result<()> {
        self.ensure_open()?;
        self.pen.line_width = width;
        if let Some(page) = self.pages.last_mut() {
            page.content_mut().set_line_width(width);
        }
        Ok(())
    }

    pub fn line_cap(&mut self, cap: LineCap) -> Result<()> {
        self.content()?.set_line_cap(cap);
        Ok(())
    }

    pub fn line_join(&mut self, join: LineJoin) -> Result<()> {
        self.content()?.set_line_join(join);
        Ok(())
    }

    pub fn dash(&mut self, length: f64, options: DashOptions) -> Result<()> {
        let space = options.space.unwrap_or(length);
        self.content()?.set_dash(length, space, options.phase);
        Ok(())
    }

    pub fn undash(&mut self) -> Result<()> {
        self.content()?.clear_dash();
        Ok(())
    }

    pub fn save(&mut self) -> Result<()> {
        self.content()?.save_state();
        Ok(())
    }

    /// Restore the graphics state. The font selection is part of that
    /// state, so the next text call selects its font again.
    pub fn restore(&mut self) -> Result<()> {
        self.content()?.restore_state();
        self.pen.font.invalidate();
        Ok(())
    }

    // Metadata

    /// Sets the document title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.metadata.title = Some(title.into());
    }

    /// Sets the document author.
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.metadata.author = Some(author.into());
    }

    /// Sets the document subject.
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.metadata.subject = Some(subject.into());
    }

    /// Sets the document keywords.
    pub fn set_keywords(&mut self, keywords: impl Into<String>) {
        self.metadata.keywords = Some(keywords.into());
    }

    /// Sets the document creator (software that created the original document).
    pub fn set_creator(&mut self, creator: impl Into<String>) {
        self.metadata.creator = Some(creator.into());
    }

    /// Sets the document creation date. A fixed date makes the output
    /// byte-for-byte reproducible.
    pub fn set_creation_date(&mut self, date: DateTime<Utc>) {
        self.metadata.creation_date = Some(date);
    }

    /// Sets the document creation date using local time.
    pub fn set_creation_date_local(&mut self, date: DateTime<Local>) {
        self.metadata.creation_date = Some(date.with_timezone(&Utc));
    }

    /// Leave `/CreationDate` out of the information dictionary.
    pub fn clear_creation_date(&mut self) {
        self.metadata.creation_date = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{GlyphTable, TrueTypeFont};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn page_ops(doc: &Document) -> &str {
        doc.pages().last().unwrap().content().operations()
    }

    fn doc_with_page() -> Document {
        let mut doc = Document::new();
        doc.add_page(None).unwrap();
        doc
    }

    #[test]
    fn test_new_document() {
        let doc = Document::new();
        assert_eq!(doc.state(), DocumentState::Open);
        assert_eq!(doc.page_count(), 0);
        assert_eq!(doc.options().line_width, 0.567);
        assert!(doc.metadata().producer.starts_with("fpdf v"));
        assert!(doc.metadata().creation_date.is_some());
    }

    #[test]
    fn test_add_page_sets_line_cap_and_width() {
        let doc = doc_with_page();
        assert_eq!(doc.pages()[0].width(), 612.0);
        assert_eq!(page_ops(&doc), "2 J\n0.567 w\n");
    }

    #[test]
    fn test_add_page_unknown_size() {
        let mut doc = Document::new();
        let err = doc.add_page(Some("tabloid")).unwrap_err();
        assert!(matches!(err, PdfError::UnknownPageSize(ref name) if name == "tabloid"));
        assert_eq!(doc.page_count(), 0);
    }

    #[test]
    fn test_drawing_without_page() {
        let mut doc = Document::new();
        assert!(matches!(doc.rect(0.0, 0.0, 1.0, 1.0), Err(PdfError::NoPage)));
        assert!(matches!(doc.save(), Err(PdfError::NoPage)));
    }

    #[test]
    fn test_rect_negates_height() {
        let mut doc = doc_with_page();
        doc.draw_rect(100.0, 100.0, 200.0, 200.0, DrawOptions::fill_and_stroke())
            .unwrap();
        assert_eq!(
            page_ops(&doc),
            "2 J\n0.567 w\n100.000 692.000 200.000 -200.000 re\nB\n"
        );
    }

    #[test]
    fn test_draw_rect_defaults_to_stroke() {
        let mut doc = doc_with_page();
        doc.draw_rect(0.0, 0.0, 10.0, 10.0, DrawOptions::default()).unwrap();
        assert!(page_ops(&doc).ends_with("re\nS\n"));
    }

    #[test]
    fn test_y_zero_is_page_top() {
        let mut doc = doc_with_page();
        doc.move_to(0.0, 0.0).unwrap();
        doc.line_to(612.0, 792.0).unwrap();
        assert!(page_ops(&doc).contains("0.000 792.000 m\n612.000 0.000 l\n"));
    }

    #[test]
    fn test_text_position_includes_ascender() {
        let mut doc = doc_with_page();
        doc.set_font("Helvetica", "", Some(14.0)).unwrap();
        doc.text(100.0, 100.0, "Hi", TextOptions::default()).unwrap();
        assert_eq!(
            page_ops(&doc),
            "2 J\n0.567 w\nBT\n/F1 14.000 Tf\n100.000 681.948 Td\n(Hi) Tj\nET\n"
        );
    }

    #[test]
    fn test_font_emitted_once() {
        let mut doc = doc_with_page();
        doc.set_font("Helvetica", "", Some(12.0)).unwrap();
        doc.set_font("Helvetica", "", Some(12.0)).unwrap();
        doc.text(10.0, 10.0, "one", TextOptions::default()).unwrap();
        doc.text(10.0, 30.0, "two", TextOptions::default()).unwrap();
        assert_eq!(page_ops(&doc).matches(" Tf").count(), 1);
    }

    #[test]
    fn test_font_reemitted_on_new_page_and_restore() {
        let mut doc = doc_with_page();
        doc.set_font("Courier", "", Some(12.0)).unwrap();
        doc.text(10.0, 10.0, "a", TextOptions::default()).unwrap();
        doc.save().unwrap();
        doc.restore().unwrap();
        doc.text(10.0, 30.0, "b", TextOptions::default()).unwrap();
        assert_eq!(page_ops(&doc).matches("/F1 12.000 Tf").count(), 2);

        doc.add_page(Some("a4")).unwrap();
        doc.text(10.0, 10.0, "c", TextOptions::default()).unwrap();
        assert_eq!(page_ops(&doc).matches(" Tf").count(), 1);
    }

    #[test]
    fn test_text_without_font() {
        let mut doc = doc_with_page();
        let err = doc.text(0.0, 0.0, "x", TextOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "A font and size must be set before drawing text");
        assert!(matches!(doc.get_text_width("x"), Err(PdfError::NoFontSelected(_))));
    }

    #[test]
    fn test_unloaded_font() {
        let mut doc = doc_with_page();
        let err = doc.set_font("Open Sans", "", None).unwrap_err();
        assert!(matches!(err, PdfError::UnloadedFont(ref key) if key == "opensans"));
    }

    #[test]
    fn test_text_width_and_height() {
        let mut doc = doc_with_page();
        doc.set_font("helvetica", "", Some(10.0)).unwrap();
        assert!((doc.get_text_width("Hi").unwrap() - 9.44).abs() < 1e-9);
        assert!((doc.get_text_height().unwrap() - 9.25).abs() < 1e-9);
        assert_eq!(doc.current_font_metrics().unwrap().ascender, 718.0);

        doc.set_font_size(20.0);
        assert!((doc.get_text_width("Hi").unwrap() - 18.88).abs() < 1e-9);
    }

    #[test]
    fn test_text_alignment() {
        let mut doc = doc_with_page();
        doc.set_font("Courier", "", Some(10.0)).unwrap();
        let options = TextOptions::new()
            .with_width(100.0)
            .with_align(crate::text::TextAlign::Right);
        doc.text(0.0, 0.0, "abcd", options).unwrap();
        // four 6pt glyphs right-aligned in a 100pt box
        assert!(page_ops(&doc).contains("76.000 785.710 Td"));
    }

    #[test]
    fn test_character_spacing_and_text_matrix() {
        let mut doc = doc_with_page();
        doc.set_font("Times", "", Some(12.0)).unwrap();
        let options = TextOptions::new()
            .with_character_spacing(2.0)
            .with_font_size_method(FontSizeMethod::TextMatrix);
        doc.text(10.0, 0.0, "x", options).unwrap();
        assert_eq!(
            page_ops(&doc),
            "2 J\n0.567 w\nBT\n/F1 1.000 Tf\n2.000 Tc\n\
             12.000 0.000 0.000 12.000 10.000 783.804 Tm\n(x) Tj\n0.000 Tc\nET\n"
        );
    }

    #[test]
    fn test_unencodable_text_is_replaced() {
        let mut doc = doc_with_page();
        doc.set_font("Helvetica", "", None).unwrap();
        doc.text(0.0, 0.0, "a→b", TextOptions::default()).unwrap();
        assert!(page_ops(&doc).contains("(a?b) Tj"));
    }

    #[test]
    fn test_truetype_text_is_hex() {
        let mut table = GlyphTable::new(1000).with_font_data(vec![0; 16]);
        table.add_glyph('H' as u32, 43, 700);
        table.add_glyph('i' as u32, 76, 300);
        let font = TrueTypeFont::new("Test-Regular", FontMetrics::new(800.0, -200.0), table);

        let mut doc = doc_with_page();
        doc.add_custom_font("Test", "", font).unwrap();
        doc.set_font("Test", "", Some(10.0)).unwrap();
        doc.text(0.0, 0.0, "Hi", TextOptions::default()).unwrap();

        assert!(page_ops(&doc).contains("<0048 0069> Tj"));
        let used: Vec<_> = doc.fonts().next().unwrap().used_codes().iter().copied().collect();
        assert_eq!(used, vec![0x48, 0x69]);
        assert_eq!(doc.get_text_width("Hi").unwrap(), 10.0);
    }

    #[test]
    fn test_font_indices() {
        let mut doc = Document::new();
        assert_eq!(doc.add_standard_font("Helvetica", "").unwrap(), "helvetica");
        assert_eq!(doc.add_standard_font("Helvetica", "ib").unwrap(), "helveticaBI");
        assert_eq!(doc.add_standard_font("helvetica", "").unwrap(), "helvetica");
        let names: Vec<_> = doc.fonts().map(FontRef::resource_name).collect();
        assert_eq!(names, ["F1", "F2"]);
        assert!(doc.add_standard_font("Comic Sans", "").is_err());
    }

    #[test]
    fn test_colors_and_state() {
        let mut doc = doc_with_page();
        doc.stroke_color(255, 0, 0).unwrap();
        doc.fill_color(0, 0, 255).unwrap();
        doc.line_cap(LineCap::Round).unwrap();
        doc.line_join(LineJoin::Round).unwrap();
        doc.dash(3.0, DashOptions::default()).unwrap();
        doc.undash().unwrap();
        doc.line_width(2.0).unwrap();
        assert_eq!(
            page_ops(&doc),
            "2 J\n0.567 w\n1.000 0.000 0.000 RG\n0.000 0.000 1.000 rg\n1 J\n1 j\n\
             [3.000 3.000] 0.000 d\n[] 0 d\n2.000 w\n"
        );

        doc.add_page(None).unwrap();
        assert_eq!(page_ops(&doc), "2.000 w\n");
    }

    #[test]
    fn test_transforms() {
        let mut doc = doc_with_page();
        doc.translate(10.0, 20.0).unwrap();
        doc.scale(2.0, 2.0, Some((100.0, 100.0))).unwrap();
        doc.rotate(90.0, None).unwrap();
        let ops = page_ops(&doc);
        assert!(ops.contains("1.000 0.000 0.000 1.000 10.000 -20.000 cm\n"));
        assert!(ops.contains("2.000 0.000 0.000 2.000 -100.000 -692.000 cm\n"));
        // 90° clockwise about the top-left corner (0, 792)
        assert!(ops.contains("0.000 -1.000 1.000 0.000 -792.000 792.000 cm\n"));
    }

    #[test]
    fn test_rounded_rect_path() {
        let mut doc = doc_with_page();
        doc.rounded_rect(0.0, 0.0, 100.0, 50.0, 10.0).unwrap();
        let ops = page_ops(&doc);
        assert!(ops.contains("10.000 792.000 m\n90.000 792.000 l\n"));
        assert_eq!(ops.matches(" c\n").count(), 4);
        assert!(ops.ends_with("h\n"));
    }

    #[test]
    fn test_clip_and_paint() {
        let mut doc = doc_with_page();
        doc.circle(50.0, 50.0, 10.0).unwrap();
        doc.clip(WindingRule::EvenOdd).unwrap();
        doc.rect(0.0, 0.0, 5.0, 5.0).unwrap();
        doc.fill(WindingRule::NonZero).unwrap();
        doc.rect(0.0, 0.0, 5.0, 5.0).unwrap();
        doc.fill_and_stroke(WindingRule::EvenOdd).unwrap();
        doc.rect(0.0, 0.0, 5.0, 5.0).unwrap();
        doc.stroke().unwrap();
        let ops = page_ops(&doc);
        assert!(ops.contains("60.000 742.000 m\n"));
        assert!(ops.contains("W* n\n"));
        assert!(ops.contains("re\nf\n"));
        assert!(ops.contains("re\nB*\n"));
        assert!(ops.ends_with("re\nS\n"));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut doc = Document::new();
        doc.set_creation_date(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let first = doc.final_buffer().unwrap().to_vec();
        assert_eq!(doc.state(), DocumentState::Closed);
        assert_eq!(doc.page_count(), 1);

        doc.close().unwrap();
        assert_eq!(doc.final_buffer().unwrap(), first.as_slice());
    }

    #[test]
    fn test_closed_document_rejects_drawing() {
        let mut doc = doc_with_page();
        doc.close().unwrap();
        assert!(matches!(doc.add_page(None), Err(PdfError::DocumentClosed)));
        assert!(matches!(doc.rect(0.0, 0.0, 1.0, 1.0), Err(PdfError::DocumentClosed)));
        assert!(matches!(
            doc.text(0.0, 0.0, "x", TextOptions::default()),
            Err(PdfError::DocumentClosed)
        ));
    }

    #[test]
    fn test_custom_options() {
        let options = DocumentOptions::default()
            .with_page_size(PageSize::A4)
            .with_line_width(1.0)
            .with_producer("test suite");
        let mut doc = Document::with_options(options);
        doc.add_page(None).unwrap();
        assert_eq!(doc.pages()[0].width(), 595.28);
        assert_eq!(page_ops(&doc), "1.000 w\n");
        assert_eq!(doc.metadata().producer, "test suite");
    }

    #[test]
    fn test_metadata_setters() {
        let mut doc = Document::new();
        doc.set_title("Title");
        doc.set_author("Author");
        doc.set_subject("Subject");
        doc.set_keywords("a, b");
        doc.set_creator("Creator");
        doc.clear_creation_date();
        let metadata = doc.metadata();
        assert_eq!(metadata.title.as_deref(), Some("Title"));
        assert_eq!(metadata.author.as_deref(), Some("Author"));
        assert_eq!(metadata.subject.as_deref(), Some("Subject"));
        assert_eq!(metadata.keywords.as_deref(), Some("a, b"));
        assert_eq!(metadata.creator.as_deref(), Some("Creator"));
        assert!(metadata.creation_date.is_none());
    }
}
