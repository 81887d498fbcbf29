use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown page size: '{0}'")]
    UnknownPageSize(String),

    #[error("Unloaded font: '{0}'. Custom fonts must be added before they can be selected")]
    UnloadedFont(String),

    #[error("A font and size must be set before {0}")]
    NoFontSelected(&'static str),

    #[error("No page has been added to the document")]
    NoPage,

    #[error("Font '{0}' must have a font buffer to be embedded")]
    MissingFontBuffer(String),

    #[error("Font '{0}' has no glyph data")]
    MissingGlyphData(String),

    #[error("The document is closed")]
    DocumentClosed,

    #[error("Object {0} 0 R was reserved but never written")]
    DanglingReference(u32),

    #[error("Compression error: {0}")]
    CompressionError(String),

    #[error("Invalid PDF structure: {0}")]
    InvalidStructure(String),
}

pub type Result<T> = std::result::Result<T, PdfError>;
