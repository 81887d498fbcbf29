//! # fpdf
//!
//! A small PDF generator: draw text and vector graphics page by page with a
//! top-left origin, and serialize the whole document as a PDF 1.3 file.
//!
//! ## Features
//!
//! - **Drawing API**: rectangles, rounded rectangles, circles, Bézier paths,
//!   clipping, transforms, dash patterns and colors
//! - **Standard fonts**: Helvetica, Courier and Times in all four styles,
//!   measured with bundled metrics and encoded as WinAnsi
//! - **TrueType embedding**: composite Type0/CIDFontType2 fonts with
//!   Identity-H encoding, a per-font width array and CIDToGIDMap covering
//!   only the characters drawn, and a deflated `/FontFile2`
//! - **Deterministic output**: the same calls (and a pinned creation date)
//!   always produce the same bytes
//!
//! ## Quick Start
//!
//! ```rust
//! use fpdf::{Document, DrawOptions, Result, TextOptions};
//!
//! # fn main() -> Result<()> {
//! let mut doc = Document::new();
//! doc.set_title("My PDF");
//! doc.add_page(Some("a4"))?;
//!
//! doc.set_font("Helvetica", "B", Some(24.0))?;
//! doc.text(50.0, 50.0, "Hello, PDF!", TextOptions::default())?;
//!
//! doc.fill_color(0, 128, 255)?;
//! doc.draw_rect(50.0, 100.0, 200.0, 100.0, DrawOptions::fill_and_stroke())?;
//!
//! let bytes = doc.final_buffer()?;
//! assert!(bytes.ends_with(b"%%EOF\n"));
//! # Ok(())
//! # }
//! ```
//!
//! Font file parsing is left to the caller: a TrueType font is handed over
//! as [`fonts::FontMetrics`] plus a [`fonts::GlyphSource`] that knows the
//! glyph indices, advance widths and the raw font file.

pub mod compression;
pub mod document;
pub mod error;
pub mod fonts;
pub mod graphics;
pub mod objects;
pub mod page;
pub mod pen;
pub mod text;
pub mod writer;

pub use document::{Document, DocumentMetadata, DocumentOptions, DocumentState};
pub use error::{PdfError, Result};
pub use fonts::{Font, FontMetrics, GlyphSource, GlyphTable, StandardFont, TrueTypeFont};
pub use graphics::{Color, DashOptions, DrawOptions, LineCap, LineJoin, WindingRule};
pub use page::{Page, PageSize};
pub use text::{FontSizeMethod, TextAlign, TextOptions};
