//! PDF viewing and export for Torquatus.
//!
//! - **Viewer**: one document at a time, page navigation and zoom ([`PdfViewer`])
//! - **Backend boundary**: decoding is delegated through [`PdfLoader`] and [`PdfSource`]
//! - **Export**: plain text to PDF 1.4 ([`TextPdfExporter`])
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use image::RgbaImage;
//! use torquatus_pdf::{PdfResult, PdfSource, PdfViewer, Zoom};
//!
//! struct OnePage;
//!
//! impl PdfSource for OnePage {
//!     fn page_count(&self) -> usize {
//!         1
//!     }
//!
//!     fn render_page(&mut self, _index: usize, scale: f32) -> PdfResult<RgbaImage> {
//!         Ok(RgbaImage::new((612.0 * scale) as u32, (792.0 * scale) as u32))
//!     }
//! }
//!
//! let mut viewer = PdfViewer::new(|_: &Path| -> PdfResult<Box<dyn PdfSource>> {
//!     Ok(Box::new(OnePage))
//! });
//! viewer.load(Path::new("paper.pdf"))?;
//! viewer.set_zoom("50%".parse()?)?;
//! assert_eq!(viewer.page_label(), "Página 1/1");
//! assert_eq!(viewer.zoom(), Zoom::Percent50);
//! # Ok::<(), torquatus_pdf::PdfError>(())
//! ```

pub mod export;
pub mod source;
pub mod viewer;
pub mod zoom;

mod error;

pub use error::{PdfError, PdfResult};
pub use export::{PdfExporter, TextPdfExporter};
pub use source::{PdfLoader, PdfSource};
pub use viewer::{PdfViewer, NO_PAGE_LABEL};
pub use zoom::Zoom;
