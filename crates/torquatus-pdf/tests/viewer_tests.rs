//! Integration tests for the PDF viewer against a fake backend.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use image::RgbaImage;
use parking_lot::Mutex;
use torquatus_pdf::{PdfError, PdfLoader, PdfResult, PdfSource, PdfViewer, Zoom, NO_PAGE_LABEL};

/// Tracks how many documents are open at once and the order of events.
#[derive(Default)]
struct Backend {
    open_handles: AtomicUsize,
    events: Mutex<Vec<String>>,
}

struct FakeDocument {
    name: String,
    pages: usize,
    fail_on_page: Option<usize>,
    backend: Arc<Backend>,
}

impl PdfSource for FakeDocument {
    fn page_count(&self) -> usize {
        self.pages
    }

    fn render_page(&mut self, index: usize, scale: f32) -> PdfResult<RgbaImage> {
        if self.fail_on_page == Some(index) {
            return Err(PdfError::render(index, "corrupt page stream"));
        }
        self.backend.events.lock().push(format!("render {} {index}", self.name));
        Ok(RgbaImage::new((200.0 * scale) as u32, (300.0 * scale) as u32))
    }
}

impl Drop for FakeDocument {
    fn drop(&mut self) {
        self.backend.open_handles.fetch_sub(1, Ordering::SeqCst);
        self.backend.events.lock().push(format!("close {}", self.name));
    }
}

struct FakeLoader {
    backend: Arc<Backend>,
}

impl PdfLoader for FakeLoader {
    fn open(&self, path: &Path) -> PdfResult<Box<dyn PdfSource>> {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        if name == "missing" {
            return Err(PdfError::load(path, "file not found"));
        }

        let (pages, fail_on_page) = match name.as_str() {
            "broken" => (2, Some(0)),
            "bad_second" => (2, Some(1)),
            "big" => (10, None),
            _ => (3, None),
        };

        let open = self.backend.open_handles.fetch_add(1, Ordering::SeqCst) + 1;
        self.backend.events.lock().push(format!("open {name} ({open} open)"));
        Ok(Box::new(FakeDocument {
            name,
            pages,
            fail_on_page,
            backend: self.backend.clone(),
        }))
    }
}

fn setup() -> (PdfViewer, Arc<Backend>) {
    let backend = Arc::new(Backend::default());
    let viewer = PdfViewer::new(FakeLoader {
        backend: backend.clone(),
    });
    (viewer, backend)
}

#[test]
fn test_previous_document_released_before_next_opens() {
    let (mut viewer, backend) = setup();

    viewer.load(Path::new("a.pdf")).unwrap();
    viewer.load(Path::new("b.pdf")).unwrap();

    let events = backend.events.lock().clone();
    assert_eq!(
        events,
        vec!["open a (1 open)", "render a 0", "close a", "open b (1 open)", "render b 0"]
    );
    assert_eq!(backend.open_handles.load(Ordering::SeqCst), 1);
}

#[test]
fn test_out_of_bounds_navigation_is_noop() {
    let (mut viewer, _backend) = setup();
    viewer.load(Path::new("three.pdf")).unwrap();

    assert!(!viewer.go_to_page(5).unwrap());
    assert_eq!(viewer.current_page(), 0);
    assert!(!viewer.go_to_page(-1).unwrap());
    assert_eq!(viewer.current_page(), 0);
    assert!(!viewer.previous_page().unwrap());

    assert!(viewer.go_to_page(2).unwrap());
    assert_eq!(viewer.page_label(), "Página 3/3");
    assert!(!viewer.next_page().unwrap());
    assert_eq!(viewer.current_page(), 2);
}

#[test]
fn test_sequential_navigation() {
    let (mut viewer, _backend) = setup();
    viewer.load(Path::new("big.pdf")).unwrap();

    for expected in 1..10 {
        assert!(viewer.next_page().unwrap());
        assert_eq!(viewer.current_page(), expected);
    }
    assert!(viewer.previous_page().unwrap());
    assert_eq!(viewer.page_label(), "Página 9/10");
}

#[test]
fn test_failed_load_closes_previous_and_stays_closed() {
    let (mut viewer, backend) = setup();
    viewer.load(Path::new("a.pdf")).unwrap();

    let err = viewer.load(Path::new("missing.pdf")).unwrap_err();

    assert!(matches!(err, PdfError::Load { ref path, .. } if path == &PathBuf::from("missing.pdf")));
    assert!(!viewer.is_open());
    assert_eq!(viewer.page_label(), NO_PAGE_LABEL);
    assert_eq!(backend.open_handles.load(Ordering::SeqCst), 0);
}

#[test]
fn test_render_failure_during_load_releases_document() {
    let (mut viewer, backend) = setup();

    let err = viewer.load(Path::new("broken.pdf")).unwrap_err();

    assert!(matches!(err, PdfError::Render { page: 0, .. }));
    assert!(!viewer.is_open());
    assert_eq!(backend.open_handles.load(Ordering::SeqCst), 0);
}

#[test]
fn test_render_failure_during_navigation_keeps_page() {
    let (mut viewer, _backend) = setup();
    viewer.load(Path::new("bad_second.pdf")).unwrap();

    assert!(viewer.next_page().is_err());

    assert!(viewer.is_open());
    assert_eq!(viewer.current_page(), 0);
    assert!(viewer.rendered_page().is_some());
}

#[test]
fn test_page_changed_signal() {
    let (mut viewer, _backend) = setup();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    viewer.page_changed.connect(move |page| seen_clone.lock().push(*page));

    viewer.load(Path::new("three.pdf")).unwrap();
    viewer.next_page().unwrap();
    viewer.go_to_page(7).unwrap();
    viewer.set_zoom(Zoom::Percent150).unwrap();

    assert_eq!(*seen.lock(), vec![0, 1, 1]);
    assert_eq!(viewer.rendered_page().map(|i| i.dimensions()), Some((300, 450)));
}

#[test]
fn test_drop_releases_document() {
    let (mut viewer, backend) = setup();
    viewer.load(Path::new("a.pdf")).unwrap();
    drop(viewer);
    assert_eq!(backend.open_handles.load(Ordering::SeqCst), 0);
}
