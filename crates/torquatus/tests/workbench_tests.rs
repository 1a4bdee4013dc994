//! Integration tests for command dispatch in the workbench.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use image::RgbaImage;
use parking_lot::Mutex;
use torquatus::prelude::*;
use torquatus::text::property;
use torquatus::NotificationKind;

struct TwoPages;

impl PdfSource for TwoPages {
    fn page_count(&self) -> usize {
        2
    }

    fn render_page(&mut self, _index: usize, scale: f32) -> PdfResult<RgbaImage> {
        Ok(RgbaImage::new((100.0 * scale) as u32, (100.0 * scale) as u32))
    }
}

fn open_pdf(path: &Path) -> PdfResult<Box<dyn PdfSource>> {
    if path.extension().is_some_and(|ext| ext == "pdf") {
        Ok(Box::new(TwoPages))
    } else {
        Err(PdfError::load(path, "not a PDF file"))
    }
}

fn workbench() -> Workbench {
    let mut workbench = Workbench::new(open_pdf);
    workbench.process_deferred();
    workbench
}

fn paragraph_backgrounds(workbench: &Workbench) -> Vec<Option<String>> {
    workbench
        .notes()
        .editor()
        .document()
        .paragraph_styles()
        .iter()
        .map(|s| s.get(property::BACKGROUND).map(str::to_string))
        .collect()
}

#[test]
fn test_open_text_defers_theme() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");
    fs::write(&path, "first\nsecond").unwrap();

    let mut workbench = workbench();
    let outcome = workbench.execute(Command::OpenText(path.clone()));

    assert_eq!(outcome, CommandOutcome::Done);
    assert_eq!(workbench.notes().text(), "first\nsecond\n");
    assert_eq!(workbench.notes().current_file(), Some(path.as_path()));
    assert!(workbench.has_deferred());
    assert_eq!(paragraph_backgrounds(&workbench), vec![None, None, None]);

    assert_eq!(workbench.process_deferred(), 1);

    let dark = Some("#1e1e1e".to_string());
    assert_eq!(paragraph_backgrounds(&workbench), vec![dark.clone(), dark.clone(), dark]);
    assert!(!workbench.has_deferred());
}

#[test]
fn test_failed_open_keeps_text_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    let mut workbench = workbench();
    workbench.execute(Command::TypeText("keep me".into()));

    let outcome = workbench.execute(Command::OpenText(dir.path().join("missing.txt")));

    let CommandOutcome::Notify(notification) = outcome else {
        panic!("expected a notification");
    };
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.title, "Erro ao abrir arquivo");
    assert_eq!(workbench.notes().text(), "keep me");
    assert!(workbench.notes().current_file().is_none());
    assert!(!workbench.has_deferred());
    assert_eq!(workbench.last_notification(), Some(&notification));
}

#[test]
fn test_save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.txt");
    let mut workbench = workbench();
    workbench.execute(Command::TypeText("line one\nline two".into()));

    assert_eq!(workbench.execute(Command::Save), CommandOutcome::NeedsSavePath);
    assert_eq!(workbench.execute(Command::SaveAs(path.clone())), CommandOutcome::Done);
    assert_eq!(fs::read_to_string(&path).unwrap(), "line one\nline two");

    workbench.execute(Command::TypeText("!".into()));
    assert_eq!(workbench.execute(Command::Save), CommandOutcome::Done);
    assert_eq!(fs::read_to_string(&path).unwrap(), "line one\nline two!");

    let mut reopened = self::workbench();
    reopened.execute(Command::OpenText(path));
    assert_eq!(reopened.notes().text(), "line one\nline two!\n");
}

#[test]
fn test_failed_save_as_keeps_current_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut workbench = workbench();
    workbench.execute(Command::TypeText("text".into()));

    let outcome = workbench.execute(Command::SaveAs(dir.path().join("no_such_dir").join("a.txt")));

    assert!(matches!(outcome, CommandOutcome::Notify(ref n) if n.title == "Erro ao salvar arquivo"));
    assert!(workbench.notes().current_file().is_none());
}

#[test]
fn test_new_document() {
    let mut workbench = workbench();
    workbench.execute(Command::TypeText("draft".into()));
    workbench.notes_mut().set_current_file("draft.txt");

    workbench.execute(Command::NewDocument);

    assert!(workbench.notes().text().is_empty());
    assert!(workbench.notes().current_file().is_none());
    assert_eq!(workbench.process_deferred(), 1);
}

#[test]
fn test_repeated_new_document_reapplies_theme_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");
    fs::write(&path, "text").unwrap();

    let mut workbench = workbench();
    workbench.execute(Command::NewDocument);
    workbench.execute(Command::NewDocument);
    workbench.execute(Command::OpenText(path));

    assert_eq!(workbench.process_deferred(), 1);
    let dark = Some("#1e1e1e".to_string());
    assert_eq!(paragraph_backgrounds(&workbench), vec![dark.clone(), dark]);

    workbench.execute(Command::NewDocument);
    assert_eq!(workbench.process_deferred(), 1);
}

#[test]
fn test_typing_and_document_commands_refresh_toolbar() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");
    fs::write(&path, "loaded").unwrap();

    let mut workbench = workbench();
    let states = Arc::new(Mutex::new(Vec::new()));
    let states_clone = states.clone();
    workbench
        .notes()
        .editor()
        .style_changed
        .connect(move |state: &ToolbarState| states_clone.lock().push(state.controls_enabled));

    workbench.execute(Command::Select(SelectionRange::cursor(0)));
    workbench.execute(Command::TypeText("abc".into()));
    assert_eq!(*states.lock(), vec![false, true]);
    assert!(workbench.notes().toolbar_state().controls_enabled);

    workbench.execute(Command::NewDocument);
    workbench.execute(Command::OpenText(path));
    assert_eq!(*states.lock(), vec![false, true, false, true]);
}

#[test]
fn test_pdf_commands() {
    let mut workbench = workbench();

    workbench.execute(Command::OpenPdf("paper.pdf".into()));
    assert_eq!(workbench.viewer().page_label(), "Página 1/2");

    workbench.execute(Command::NextPage);
    workbench.execute(Command::NextPage);
    assert_eq!(workbench.viewer().page_label(), "Página 2/2");

    workbench.execute(Command::GoToPage(-3));
    assert_eq!(workbench.viewer().current_page(), 1);

    workbench.execute(Command::SetZoom(Zoom::Percent150));
    assert_eq!(workbench.viewer().rendered_page().map(|i| i.width()), Some(150));

    workbench.execute(Command::ClosePdf);
    assert!(!workbench.viewer().is_open());
}

#[test]
fn test_failed_pdf_load_reports() {
    let mut workbench = workbench();
    workbench.execute(Command::OpenPdf("paper.pdf".into()));

    let outcome = workbench.execute(Command::OpenPdf("notes.txt".into()));

    let CommandOutcome::Notify(notification) = outcome else {
        panic!("expected a notification");
    };
    assert_eq!(notification.title, "Erro ao carregar PDF");
    assert!(notification.message.contains("not a PDF file"));
    assert!(!workbench.viewer().is_open());
}

#[test]
fn test_export_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.pdf");
    let mut workbench = workbench();
    workbench.execute(Command::TypeText("Olá mundo".into()));

    let outcome = workbench.execute(Command::ExportPdf(path.clone()));

    let CommandOutcome::Notify(notification) = outcome else {
        panic!("expected a notification");
    };
    assert_eq!(notification.kind, NotificationKind::Info);
    assert!(notification.message.contains("9 caracteres"));
    assert!(fs::read(&path).unwrap().starts_with(b"%PDF-1.4"));
}

#[test]
fn test_export_failure_reports() {
    let dir = tempfile::tempdir().unwrap();
    let mut workbench = workbench();

    let outcome = workbench.execute(Command::ExportPdf(dir.path().join("missing").join("x.pdf")));

    assert!(matches!(outcome, CommandOutcome::Notify(ref n) if n.title == "Erro ao exportar PDF"));
}

#[test]
fn test_about_and_notified_signal() {
    let mut workbench = workbench();
    let titles = Arc::new(Mutex::new(Vec::new()));
    let titles_clone = titles.clone();
    workbench.notified.connect(move |n: &Notification| titles_clone.lock().push(n.title.clone()));

    workbench.execute(Command::ShowAbout);
    workbench.execute(Command::Highlight("Roxo".into()));

    assert_eq!(*titles.lock(), vec!["Sobre".to_string(), "Formatação inválida".to_string()]);
    assert_eq!(
        workbench.last_notification().and_then(|n| n.header.clone()),
        None
    );
}

#[test]
fn test_formatting_commands() {
    let mut workbench = workbench();
    workbench.execute(Command::TypeText("Hello World".into()));
    workbench.execute(Command::Select(SelectionRange::new(0, 5)));

    workbench.execute(Command::ToggleFormat(ToggleFormat::Italic));
    workbench.execute(Command::Highlight("Laranja".into()));
    workbench.execute(Command::FontFamily("Verdana".into()));
    workbench.execute(Command::FontSize(16));
    workbench.execute(Command::Align(Alignment::Right));

    let state = workbench.notes().toolbar_state();
    assert!(state.italic);
    assert_eq!(state.alignment, Alignment::Right);
    assert_eq!(state.font_family.as_deref(), Some("Verdana"));
    assert_eq!(state.font_size, Some(16));

    let style = workbench.notes().editor().query_effective_style(0).unwrap();
    assert_eq!(style.get(property::HIGHLIGHT), Some("#FFA07A"));
}

#[test]
fn test_toggle_theme_is_immediate() {
    let mut workbench = workbench();
    workbench.execute(Command::TypeText("a\nb".into()));

    workbench.execute(Command::ToggleTheme);

    assert_eq!(workbench.theme(), Theme::Light);
    let white = Some("white".to_string());
    assert_eq!(paragraph_backgrounds(&workbench), vec![white.clone(), white]);
    assert!(!workbench.has_deferred());
}
