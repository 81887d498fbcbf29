use crate::error::PdfError;
use crate::graphics::ContentStream;
use crate::objects::ObjectId;
use std::fmt;
use std::str::FromStr;

/// Standard page sizes, in points (1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    A3,
    A4,
    A5,
    #[default]
    Letter,
    Legal,
}

impl PageSize {
    /// `(width, height)` in points.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PageSize::A3 => (841.89, 1190.55),
            PageSize::A4 => (595.28, 841.89),
            PageSize::A5 => (420.94, 595.28),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PageSize::A3 => "a3",
            PageSize::A4 => "a4",
            PageSize::A5 => "a5",
            PageSize::Letter => "letter",
            PageSize::Legal => "legal",
        }
    }
}

impl FromStr for PageSize {
    type Err = PdfError;

    /// Page size names are matched ignoring case: `a3`, `a4`, `a5`,
    /// `letter`, `legal`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a3" => Ok(PageSize::A3),
            "a4" => Ok(PageSize::A4),
            "a5" => Ok(PageSize::A5),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(PdfError::UnknownPageSize(s.to_string())),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single page: its size and the content drawn on it so far.
///
/// The object number is assigned when the document is written.
#[derive(Debug, Clone)]
pub struct Page {
    width: f64,
    height: f64,
    content: ContentStream,
    object_id: Option<ObjectId>,
}

impl Page {
    /// Creates a new page with the specified width and height in points.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            content: ContentStream::new(),
            object_id: None,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Native y for a y measured down from the top edge.
    pub fn to_native_y(&self, y: f64) -> f64 {
        self.height - y
    }

    pub fn content(&self) -> &ContentStream {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut ContentStream {
        &mut self.content
    }

    pub fn object_id(&self) -> Option<ObjectId> {
        self.object_id
    }

    pub(crate) fn set_object_id(&mut self, id: ObjectId) {
        self.object_id = Some(id);
    }
}
