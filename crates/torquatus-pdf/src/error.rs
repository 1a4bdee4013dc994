//! Error types for the PDF crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while viewing or exporting PDFs.
#[derive(Error, Debug)]
pub enum PdfError {
    /// The document could not be opened.
    #[error("failed to load '{}': {message}", path.display())]
    Load {
        /// The file that failed to open.
        path: PathBuf,
        /// Message from the PDF backend.
        message: String,
    },

    /// A page could not be rasterized.
    #[error("failed to render page {}: {message}", page + 1)]
    Render {
        /// Zero-based page index.
        page: usize,
        /// Message from the PDF backend.
        message: String,
    },

    /// A zoom label outside the supported levels.
    #[error("unsupported zoom level: '{0}'")]
    InvalidZoom(String),

    /// The exporter could not produce a document.
    #[error("export failed: {0}")]
    Export(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PdfError {
    /// Create a load error.
    pub fn load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Load {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a render error.
    pub fn render(page: usize, message: impl Into<String>) -> Self {
        Self::Render {
            page,
            message: message.into(),
        }
    }
}

/// Result type for PDF operations.
pub type PdfResult<T> = Result<T, PdfError>;
