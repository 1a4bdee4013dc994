//! Page-by-page PDF viewer state.
//!
//! [`PdfViewer`] holds at most one open document, the current page, the zoom
//! level and the last rendered bitmap. Opening a document always releases the
//! previous one first, and every failed load leaves the viewer closed.

use std::fmt;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use torquatus_core::logging::targets;
use torquatus_core::{PerfSpan, Signal};

use crate::error::PdfResult;
use crate::source::{PdfLoader, PdfSource};
use crate::zoom::Zoom;

/// Label shown when no document is open.
pub const NO_PAGE_LABEL: &str = "Página -/-";

/// Viewer for one PDF document at a time.
pub struct PdfViewer {
    loader: Box<dyn PdfLoader>,
    source: Option<Box<dyn PdfSource>>,
    path: Option<PathBuf>,
    page_count: usize,
    current_page: usize,
    zoom: Zoom,
    rendered: Option<RgbaImage>,
    /// Emitted with the zero-based page index after a page is rendered.
    pub page_changed: Signal<usize>,
}

impl fmt::Debug for PdfViewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PdfViewer")
            .field("path", &self.path)
            .field("page_count", &self.page_count)
            .field("current_page", &self.current_page)
            .field("zoom", &self.zoom)
            .field("rendered", &self.rendered.as_ref().map(|img| img.dimensions()))
            .finish_non_exhaustive()
    }
}

impl PdfViewer {
    /// Create a closed viewer that opens documents through `loader`.
    pub fn new(loader: impl PdfLoader + 'static) -> Self {
        Self::with_loader(Box::new(loader))
    }

    /// Create a closed viewer from a boxed loader.
    pub fn with_loader(loader: Box<dyn PdfLoader>) -> Self {
        Self {
            loader,
            source: None,
            path: None,
            page_count: 0,
            current_page: 0,
            zoom: Zoom::default(),
            rendered: None,
            page_changed: Signal::new(),
        }
    }

    /// Open a document and show its first page.
    ///
    /// Any open document is closed before the new one is opened. If opening
    /// or rendering the first page fails the error is returned and the viewer
    /// is left closed.
    #[tracing::instrument(skip(self), target = "torquatus_pdf::viewer", level = "debug")]
    pub fn load(&mut self, path: &Path) -> PdfResult<()> {
        self.close();

        let source = self.loader.open(path)?;
        self.page_count = source.page_count();
        self.source = Some(source);
        self.path = Some(path.to_path_buf());
        self.current_page = 0;

        tracing::info!(
            target: targets::PDF_VIEWER,
            path = %path.display(),
            pages = self.page_count,
            "opened PDF"
        );

        if self.page_count > 0 {
            if let Err(err) = self.render(0) {
                self.close();
                return Err(err);
            }
        }
        Ok(())
    }

    /// Release the open document, if any.
    pub fn close(&mut self) {
        if self.source.take().is_some() {
            tracing::debug!(target: targets::PDF_VIEWER, path = ?self.path, "closed PDF");
        }
        self.path = None;
        self.page_count = 0;
        self.current_page = 0;
        self.rendered = None;
    }

    /// Show page `index` (zero-based).
    ///
    /// Indices outside `0..page_count` are ignored and return `Ok(false)`, as
    /// does any call while closed. If rendering fails the current page and
    /// bitmap are kept.
    pub fn go_to_page(&mut self, index: i64) -> PdfResult<bool> {
        let Ok(index) = usize::try_from(index) else {
            return Ok(false);
        };
        if self.source.is_none() || index >= self.page_count {
            return Ok(false);
        }
        self.render(index)?;
        Ok(true)
    }

    /// Show the following page.
    pub fn next_page(&mut self) -> PdfResult<bool> {
        self.go_to_page(self.current_page as i64 + 1)
    }

    /// Show the preceding page.
    pub fn previous_page(&mut self) -> PdfResult<bool> {
        self.go_to_page(self.current_page as i64 - 1)
    }

    /// Change the zoom level, re-rendering the current page if open.
    pub fn set_zoom(&mut self, zoom: Zoom) -> PdfResult<()> {
        self.zoom = zoom;
        tracing::debug!(target: targets::PDF_VIEWER, %zoom, "zoom changed");
        if self.source.is_some() && self.page_count > 0 {
            self.render(self.current_page)?;
        }
        Ok(())
    }

    fn render(&mut self, index: usize) -> PdfResult<()> {
        let Some(source) = self.source.as_mut() else {
            return Ok(());
        };

        let _perf = PerfSpan::new("render_pdf_page");
        let image = source.render_page(index, self.zoom.factor())?;
        tracing::trace!(
            target: targets::PDF_VIEWER,
            page = index,
            width = image.width(),
            height = image.height(),
            "rendered page"
        );

        self.current_page = index;
        self.rendered = Some(image);
        self.page_changed.emit(index);
        Ok(())
    }

    /// Whether a document is open.
    pub fn is_open(&self) -> bool {
        self.source.is_some()
    }

    /// Path of the open document.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of pages, zero when closed.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Zero-based index of the page shown.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The current zoom level.
    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    /// The bitmap of the page shown.
    pub fn rendered_page(&self) -> Option<&RgbaImage> {
        self.rendered.as_ref()
    }

    /// Page indicator text, e.g. `Página 2/10`.
    pub fn page_label(&self) -> String {
        if self.source.is_some() && self.page_count > 0 {
            format!("Página {}/{}", self.current_page + 1, self.page_count)
        } else {
            NO_PAGE_LABEL.to_string()
        }
    }
}

impl Drop for PdfViewer {
    fn drop(&mut self) {
        self.close();
    }
}
