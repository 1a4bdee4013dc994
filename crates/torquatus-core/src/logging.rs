//! Logging facilities for Torquatus.
//!
//! Torquatus uses the `tracing` crate for instrumentation. Nothing in the
//! library installs a subscriber; the host application does that:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("torquatus=debug,torquatus_text=info")
//!     .init();
//! ```
//!
//! Every subsystem logs under its own target so it can be filtered
//! independently. The names are collected in [`targets`].

/// Target names for log filtering.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "torquatus_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "torquatus_core::signal";
    /// Deferred task queue target.
    pub const TASK: &str = "torquatus_core::task";
    /// Performance spans.
    pub const PERF: &str = "torquatus::perf";
    /// Styled document and range editor.
    pub const EDITOR: &str = "torquatus_text::editor";
    /// Inline style declaration parsing.
    pub const STYLE_PARSE: &str = "torquatus_text::css";
    /// PDF viewer.
    pub const PDF_VIEWER: &str = "torquatus_pdf::viewer";
    /// PDF export.
    pub const PDF_EXPORT: &str = "torquatus_pdf::export";
    /// Command dispatch in the application coordinator.
    pub const WORKBENCH: &str = "torquatus::workbench";
    /// Note file reading and writing.
    pub const FILE: &str = "torquatus::file";
}

/// Guard that records the duration of an operation as a tracing span.
///
/// The span is entered on creation and exited when the guard is dropped.
///
/// ```
/// use torquatus_core::logging::PerfSpan;
///
/// {
///     let _span = PerfSpan::new("render_page");
///     // ... work ...
/// }
/// ```
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "torquatus::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}
