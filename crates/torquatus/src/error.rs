//! Error type for workbench commands.

use thiserror::Error;
use torquatus_pdf::PdfError;
use torquatus_text::StyleError;

use crate::file::FileError;

/// Errors raised while executing a [`Command`](crate::Command).
#[derive(Error, Debug)]
pub enum WorkbenchError {
    /// A note file could not be read.
    #[error("could not open note: {0}")]
    Open(#[source] FileError),

    /// A note file could not be written.
    #[error("could not save note: {0}")]
    Save(#[source] FileError),

    /// Opening or rendering a PDF failed.
    #[error(transparent)]
    Pdf(PdfError),

    /// Exporting the note failed.
    #[error(transparent)]
    Export(PdfError),

    /// A formatting command got a value outside the offered choices.
    #[error(transparent)]
    Style(#[from] StyleError),
}

/// Result type for workbench commands.
pub type WorkbenchResult<T> = Result<T, WorkbenchError>;
