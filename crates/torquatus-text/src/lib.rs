//! Rich text styling for the Torquatus note editor.
//!
//! The document is a sequence of characters, each carrying its own
//! [`StyleMap`], split into paragraphs that carry a second map for alignment
//! and theme colours. [`StyledRangeEditor`] applies formatting over
//! selections:
//!
//! - **Properties**: set a property on a range ([`StyledRangeEditor::apply_property`])
//! - **Toggles**: bold, italic and underline with an asymmetric toggle
//! - **Highlights**: named highlighter colours ([`HighlightColor`])
//! - **Paragraphs**: per-paragraph alignment ([`Alignment`])
//! - **Themes**: light and dark document colours ([`Theme`])
//!
//! # Example
//!
//! ```
//! use torquatus_text::prelude::*;
//!
//! let mut editor = StyledRangeEditor::default();
//! editor.insert_text(0, "Hello World");
//!
//! let hello = SelectionRange::new(0, 5);
//! editor.toggle_format(hello, ToggleFormat::Bold);
//! editor.set_highlight(hello, "Amarelo")?;
//!
//! let style = editor.query_effective_style(0).unwrap();
//! assert_eq!(style.get("font-weight"), Some("bold"));
//! # Ok::<(), torquatus_text::StyleError>(())
//! ```

pub mod css;
pub mod document;
pub mod editor;
pub mod highlight;
pub mod property;
pub mod selection;
pub mod settings;
pub mod style_map;
pub mod theme;
pub mod toolbar;

mod error;

pub use css::parse_inline_style;
pub use document::{StyledDocument, StyledUnit};
pub use editor::{StyledRangeEditor, ToggleAction};
pub use error::{StyleError, StyleResult};
pub use highlight::HighlightColor;
pub use property::{Alignment, ToggleFormat};
pub use selection::SelectionRange;
pub use settings::EditorSettings;
pub use style_map::StyleMap;
pub use theme::Theme;
pub use toolbar::ToolbarState;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::document::StyledDocument;
    pub use crate::editor::{StyledRangeEditor, ToggleAction};
    pub use crate::highlight::HighlightColor;
    pub use crate::property::{Alignment, ToggleFormat};
    pub use crate::selection::SelectionRange;
    pub use crate::settings::EditorSettings;
    pub use crate::style_map::StyleMap;
    pub use crate::theme::Theme;
    pub use crate::toolbar::ToolbarState;
}
