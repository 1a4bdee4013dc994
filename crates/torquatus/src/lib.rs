//! Torquatus: a note editor with a PDF viewer beside it.
//!
//! This crate ties the workspace together:
//!
//! - **Notes**: [`NoteEditor`] wraps the rich text engine from `torquatus-text`
//!   with a selection and the file the note belongs to
//! - **Files**: plain text note reading and writing ([`file`])
//! - **Coordinator**: [`Workbench`] executes menu and toolbar [`Command`]s and
//!   reports failures as [`Notification`]s
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use torquatus::prelude::*;
//!
//! let mut workbench = Workbench::new(|path: &Path| -> PdfResult<Box<dyn PdfSource>> {
//!     Err(PdfError::load(path, "no PDF backend"))
//! });
//! workbench.process_deferred();
//!
//! workbench.execute(Command::TypeText("Hello World".into()));
//! workbench.execute(Command::Select(SelectionRange::new(0, 5)));
//! workbench.execute(Command::ToggleFormat(ToggleFormat::Bold));
//! assert!(workbench.notes().toolbar_state().bold);
//!
//! let outcome = workbench.execute(Command::Save);
//! assert_eq!(outcome, CommandOutcome::NeedsSavePath);
//! ```

pub mod file;
pub mod notes;
pub mod notification;
pub mod workbench;

mod error;

pub use error::{WorkbenchError, WorkbenchResult};
pub use file::{FileError, FileErrorKind, FileResult};
pub use notes::NoteEditor;
pub use notification::{Notification, NotificationKind};
pub use workbench::{Command, CommandOutcome, Workbench};

pub use torquatus_core as core;
pub use torquatus_pdf as pdf;
pub use torquatus_text as text;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::notes::NoteEditor;
    pub use crate::notification::{Notification, NotificationKind};
    pub use crate::workbench::{Command, CommandOutcome, Workbench};
    pub use crate::{WorkbenchError, WorkbenchResult};

    pub use torquatus_core::{Signal, TaskQueue};
    pub use torquatus_pdf::{
        PdfError, PdfExporter, PdfLoader, PdfResult, PdfSource, PdfViewer, TextPdfExporter, Zoom,
    };
    pub use torquatus_text::prelude::*;
}
