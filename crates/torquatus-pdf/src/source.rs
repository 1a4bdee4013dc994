//! The boundary to the PDF decoding backend.
//!
//! Parsing and rasterizing PDF files is left to a backend (pdfium, poppler,
//! mupdf bindings and so on). The viewer only needs two things from it: a way
//! to open a file, and an open document that can report its page count and
//! render a page to a bitmap.
//!
//! An open document holds backend resources; they are released when the
//! boxed [`PdfSource`] is dropped.

use std::path::Path;

use image::RgbaImage;

use crate::error::PdfResult;

/// An open PDF document.
pub trait PdfSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Rasterize a page.
    ///
    /// `scale` is a zoom factor where `1.0` renders at the document's native
    /// size. `index` is always below [`page_count`](Self::page_count) when
    /// called by the viewer.
    fn render_page(&mut self, index: usize, scale: f32) -> PdfResult<RgbaImage>;
}

/// Opens PDF files.
pub trait PdfLoader {
    /// Open the document at `path`.
    fn open(&self, path: &Path) -> PdfResult<Box<dyn PdfSource>>;
}

impl<F> PdfLoader for F
where
    F: Fn(&Path) -> PdfResult<Box<dyn PdfSource>>,
{
    fn open(&self, path: &Path) -> PdfResult<Box<dyn PdfSource>> {
        self(path)
    }
}
