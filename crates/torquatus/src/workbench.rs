//! Application coordinator.
//!
//! The [`Workbench`] owns the note editor and the PDF viewer and executes the
//! commands bound to menus and toolbar buttons. File choosers and dialogs
//! belong to the host: commands carry the chosen path, and anything the user
//! should see comes back as a [`Notification`].

use std::fmt;
use std::path::{Path, PathBuf};

use torquatus_core::logging::targets;
use torquatus_core::{Signal, TaskId, TaskQueue};
use torquatus_pdf::{PdfExporter, PdfLoader, PdfViewer, TextPdfExporter, Zoom};
use torquatus_text::{Alignment, EditorSettings, SelectionRange, Theme, ToggleFormat};

use crate::error::{WorkbenchError, WorkbenchResult};
use crate::file;
use crate::notes::NoteEditor;
use crate::notification::Notification;

/// A user command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Start an empty, untitled note.
    NewDocument,
    /// Open a note file.
    OpenText(PathBuf),
    /// Save to the current file, or ask for a path if there is none.
    Save,
    /// Save to a new path and remember it.
    SaveAs(PathBuf),
    /// Open a PDF in the viewer.
    OpenPdf(PathBuf),
    /// Close the PDF in the viewer.
    ClosePdf,
    /// Export the note text as a PDF.
    ExportPdf(PathBuf),
    /// Show the about box.
    ShowAbout,
    /// Switch between light and dark.
    ToggleTheme,
    /// Move the note selection.
    Select(SelectionRange),
    /// Type text over the selection.
    TypeText(String),
    /// Toggle bold, italic or underline on the selection.
    ToggleFormat(ToggleFormat),
    /// Highlight the selection by menu label.
    Highlight(String),
    /// Align the paragraph at the selection.
    Align(Alignment),
    /// Change the font family.
    FontFamily(String),
    /// Change the font size in points.
    FontSize(u32),
    /// Show a PDF page (zero-based).
    GoToPage(i64),
    /// Show the following PDF page.
    NextPage,
    /// Show the preceding PDF page.
    PreviousPage,
    /// Change the PDF zoom.
    SetZoom(Zoom),
}

/// What the host should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Nothing further.
    Done,
    /// Ask the user where to save the note, then send [`Command::SaveAs`].
    NeedsSavePath,
    /// Show a message.
    Notify(Notification),
}

/// Owner of the note editor and the PDF viewer.
pub struct Workbench {
    notes: NoteEditor,
    viewer: PdfViewer,
    exporter: Box<dyn PdfExporter>,
    tasks: TaskQueue<Workbench>,
    pending_theme: Option<TaskId>,
    last_notification: Option<Notification>,
    /// Emitted for every notification, including errors.
    pub notified: Signal<Notification>,
}

impl fmt::Debug for Workbench {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workbench")
            .field("notes", &self.notes)
            .field("viewer", &self.viewer)
            .field("tasks", &self.tasks)
            .field("last_notification", &self.last_notification)
            .finish_non_exhaustive()
    }
}

impl Workbench {
    /// Create a workbench with default editor settings.
    pub fn new(loader: impl PdfLoader + 'static) -> Self {
        Self::with_settings(EditorSettings::default(), loader)
    }

    /// Create a workbench with custom editor settings.
    pub fn with_settings(settings: EditorSettings, loader: impl PdfLoader + 'static) -> Self {
        let mut workbench = Self {
            notes: NoteEditor::new(settings),
            viewer: PdfViewer::new(loader),
            exporter: Box::new(TextPdfExporter::new()),
            tasks: TaskQueue::new(),
            pending_theme: None,
            last_notification: None,
            notified: Signal::new(),
        };
        workbench.schedule_theme();
        workbench
    }

    /// Builder method to replace the PDF exporter.
    pub fn with_exporter(mut self, exporter: impl PdfExporter + 'static) -> Self {
        self.exporter = Box::new(exporter);
        self
    }

    /// The note editor.
    pub fn notes(&self) -> &NoteEditor {
        &self.notes
    }

    /// Mutable access to the note editor.
    pub fn notes_mut(&mut self) -> &mut NoteEditor {
        &mut self.notes
    }

    /// The PDF viewer.
    pub fn viewer(&self) -> &PdfViewer {
        &self.viewer
    }

    /// The current theme.
    pub fn theme(&self) -> Theme {
        self.notes.editor().theme()
    }

    /// The most recent notification.
    pub fn last_notification(&self) -> Option<&Notification> {
        self.last_notification.as_ref()
    }

    /// Check whether deferred work is waiting for [`Self::process_deferred`].
    pub fn has_deferred(&self) -> bool {
        self.tasks.has_pending()
    }

    /// Run a command.
    ///
    /// Failures are logged, reported through [`Self::notified`], and returned
    /// as [`CommandOutcome::Notify`]. A failed command leaves the previous
    /// state in place.
    #[tracing::instrument(skip(self), target = "torquatus::workbench", level = "debug")]
    pub fn execute(&mut self, command: Command) -> CommandOutcome {
        match self.try_execute(command) {
            Ok(CommandOutcome::Notify(notification)) => {
                self.notify(notification.clone());
                CommandOutcome::Notify(notification)
            }
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(target: targets::WORKBENCH, error = %err, "command failed");
                let notification = Notification::from_error(&err);
                self.notify(notification.clone());
                CommandOutcome::Notify(notification)
            }
        }
    }

    /// Run a command, returning failures as errors.
    pub fn try_execute(&mut self, command: Command) -> WorkbenchResult<CommandOutcome> {
        match command {
            Command::NewDocument => {
                self.notes.new_document();
                self.schedule_theme();
            }
            Command::OpenText(path) => self.open_text(&path)?,
            Command::Save => match self.notes.current_file().map(Path::to_path_buf) {
                Some(path) => self.save_to(&path)?,
                None => return Ok(CommandOutcome::NeedsSavePath),
            },
            Command::SaveAs(path) => {
                self.save_to(&path)?;
                self.notes.set_current_file(path);
            }
            Command::OpenPdf(path) => self.viewer.load(&path).map_err(WorkbenchError::Pdf)?,
            Command::ClosePdf => self.viewer.close(),
            Command::ExportPdf(path) => return self.export_pdf(&path),
            Command::ShowAbout => return Ok(CommandOutcome::Notify(Notification::about())),
            Command::ToggleTheme => {
                let theme = self.notes.editor_mut().toggle_theme();
                tracing::info!(target: targets::WORKBENCH, dark = theme.is_dark(), "theme toggled");
            }
            Command::Select(selection) => self.notes.select(selection),
            Command::TypeText(text) => self.notes.type_text(&text),
            Command::ToggleFormat(format) => {
                self.notes.toggle_format(format);
            }
            Command::Highlight(color) => self.notes.set_highlight(&color)?,
            Command::Align(alignment) => {
                self.notes.align(alignment);
            }
            Command::FontFamily(family) => self.notes.set_font_family(&family)?,
            Command::FontSize(points) => self.notes.set_font_size(points)?,
            Command::GoToPage(page) => {
                self.viewer.go_to_page(page).map_err(WorkbenchError::Pdf)?;
            }
            Command::NextPage => {
                self.viewer.next_page().map_err(WorkbenchError::Pdf)?;
            }
            Command::PreviousPage => {
                self.viewer.previous_page().map_err(WorkbenchError::Pdf)?;
            }
            Command::SetZoom(zoom) => self.viewer.set_zoom(zoom).map_err(WorkbenchError::Pdf)?,
        }
        Ok(CommandOutcome::Done)
    }

    /// Run the work deferred by earlier commands.
    ///
    /// Call once per update cycle, after the view has caught up with the
    /// latest content. Work posted while this runs waits for the next call.
    /// Returns the number of tasks run.
    pub fn process_deferred(&mut self) -> usize {
        let ready = self.tasks.take_ready();
        let count = ready.len();
        for task in ready {
            tracing::debug!(target: targets::WORKBENCH, task = task.label(), "running deferred work");
            task.run(self);
        }
        count
    }

    fn open_text(&mut self, path: &Path) -> WorkbenchResult<()> {
        let text = file::read_note(path).map_err(WorkbenchError::Open)?;
        self.notes.load(&text, path);
        self.schedule_theme();
        tracing::info!(target: targets::WORKBENCH, path = %path.display(), "opened note");
        Ok(())
    }

    fn save_to(&mut self, path: &Path) -> WorkbenchResult<()> {
        file::write_note(path, &self.notes.text()).map_err(WorkbenchError::Save)?;
        tracing::info!(target: targets::WORKBENCH, path = %path.display(), "saved note");
        Ok(())
    }

    fn export_pdf(&mut self, path: &Path) -> WorkbenchResult<CommandOutcome> {
        let text = self.notes.text();
        self.exporter.export(&text, path).map_err(WorkbenchError::Export)?;
        Ok(CommandOutcome::Notify(Notification::exported(text.chars().count())))
    }

    /// Reapply the theme once the new content is in place.
    ///
    /// A reapplication still waiting from an earlier command is replaced.
    fn schedule_theme(&mut self) {
        if let Some(id) = self.pending_theme.take() {
            if self.tasks.cancel(id) {
                tracing::trace!(target: targets::WORKBENCH, id = id.as_u64(), "replaced pending theme task");
            }
        }
        let id = self.tasks.post("reapply_theme", |workbench: &mut Workbench| {
            workbench.pending_theme = None;
            workbench.notes.editor_mut().reapply_theme();
        });
        self.pending_theme = Some(id);
    }

    fn notify(&mut self, notification: Notification) {
        self.notified.emit(notification.clone());
        self.last_notification = Some(notification);
    }
}
