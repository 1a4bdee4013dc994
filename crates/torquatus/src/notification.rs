//! User-facing messages produced by the workbench.

use torquatus_pdf::PdfError;

use crate::error::WorkbenchError;

/// Title of the about box.
pub const ABOUT_TITLE: &str = "Sobre";
/// Application name, shown as the about box header.
pub const APP_NAME: &str = "Bradypus Torquatus Pdf";
/// Body of the about box.
pub const ABOUT_TEXT: &str = "Programa desenvolvido para matéria de Atividades Extensionista III, \
    Por Otavio Alves Coelho Farnochia, no curso de Bacharel em engenharia de Software, \
    na Instituição Uninter, como finalidade de dar apoio e integrar a comunidade da escolar \
    Dr. Jose Fornari e a Universidade.";

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Informational message.
    Info,
    /// An operation failed.
    Error,
}

/// A message for the user, shown by the host as a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity.
    pub kind: NotificationKind,
    /// Dialog title.
    pub title: String,
    /// Optional header line above the message.
    pub header: Option<String>,
    /// Message body.
    pub message: String,
}

impl Notification {
    /// Create an informational notification.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            header: None,
            message: message.into(),
        }
    }

    /// Create an error notification.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            header: None,
            message: message.into(),
        }
    }

    /// Builder method to set the header line.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// The about box.
    pub fn about() -> Self {
        Self::info(ABOUT_TITLE, ABOUT_TEXT).with_header(APP_NAME)
    }

    /// Report for a completed export.
    pub fn exported(chars: usize) -> Self {
        Self::info("Exportar para PDF", format!("Texto exportado para PDF: {chars} caracteres."))
    }

    /// Turn a failed command into the message shown to the user.
    pub fn from_error(err: &WorkbenchError) -> Self {
        match err {
            WorkbenchError::Open(_) => {
                Self::error("Erro ao abrir arquivo", "Não foi possível ler o arquivo.")
            }
            WorkbenchError::Save(_) => {
                Self::error("Erro ao salvar arquivo", "Não foi possível salvar o arquivo.")
            }
            WorkbenchError::Pdf(PdfError::Render { .. }) => {
                Self::error("Erro ao renderizar PDF", err.to_string())
            }
            WorkbenchError::Pdf(_) => Self::error("Erro ao carregar PDF", err.to_string()),
            WorkbenchError::Export(_) => Self::error("Erro ao exportar PDF", err.to_string()),
            WorkbenchError::Style(_) => Self::error("Formatação inválida", err.to_string()),
        }
    }

    /// Check whether this is an error notification.
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about() {
        let about = Notification::about();
        assert_eq!(about.kind, NotificationKind::Info);
        assert_eq!(about.title, "Sobre");
        assert_eq!(about.header.as_deref(), Some("Bradypus Torquatus Pdf"));
        assert!(about.message.contains("Uninter"));
    }

    #[test]
    fn test_pdf_error_titles() {
        let load = WorkbenchError::Pdf(PdfError::load("a.pdf", "bad header"));
        let render = WorkbenchError::Pdf(PdfError::render(2, "bad stream"));
        let export = WorkbenchError::Export(PdfError::Export("disk full".into()));

        assert_eq!(Notification::from_error(&load).title, "Erro ao carregar PDF");
        assert!(Notification::from_error(&load).message.contains("bad header"));
        assert_eq!(Notification::from_error(&render).title, "Erro ao renderizar PDF");
        assert_eq!(Notification::from_error(&export).title, "Erro ao exportar PDF");
        assert!(Notification::from_error(&export).is_error());
    }
}
