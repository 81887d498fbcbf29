//! PDF writing functionality

mod pdf_writer;
mod xref;

pub use pdf_writer::{format_pdf_date, PdfWriter, PAGES_ROOT_ID, RESOURCES_ID};
pub use xref::{ObjectAllocator, XrefEntry};
