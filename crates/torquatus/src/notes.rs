//! The note editor: formatting engine plus selection and file state.

use std::path::{Path, PathBuf};

use torquatus_text::{
    Alignment, EditorSettings, SelectionRange, StyleResult, StyledRangeEditor, ToggleAction,
    ToggleFormat, ToolbarState,
};

/// Editor state for the note pane.
///
/// Formatting commands act on the current selection, the way the toolbar
/// buttons do.
#[derive(Debug)]
pub struct NoteEditor {
    editor: StyledRangeEditor,
    selection: SelectionRange,
    current_file: Option<PathBuf>,
}

impl Default for NoteEditor {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl NoteEditor {
    /// Create an empty, untitled note.
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            editor: StyledRangeEditor::new(settings),
            selection: SelectionRange::default(),
            current_file: None,
        }
    }

    /// The formatting engine.
    pub fn editor(&self) -> &StyledRangeEditor {
        &self.editor
    }

    /// Mutable access to the formatting engine.
    pub fn editor_mut(&mut self) -> &mut StyledRangeEditor {
        &mut self.editor
    }

    /// The note text.
    pub fn text(&self) -> String {
        self.editor.text()
    }

    /// The current selection.
    pub fn selection(&self) -> SelectionRange {
        self.selection
    }

    /// File the note was opened from or last saved to.
    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    /// Remember the file the note belongs to.
    pub fn set_current_file(&mut self, path: impl Into<PathBuf>) {
        self.current_file = Some(path.into());
    }

    /// Move the selection, clamped to the text, and refresh the toolbar.
    pub fn select(&mut self, selection: SelectionRange) {
        self.selection = selection.clamp(self.editor.len());
        self.refresh_toolbar();
    }

    /// Type text over the selection, leaving the cursor after it.
    pub fn type_text(&mut self, text: &str) {
        let start = self.selection.start;
        if !self.selection.is_empty() {
            self.editor.delete(self.selection);
        }
        self.editor.insert_text(start, text);
        self.selection = SelectionRange::cursor(start + text.chars().count());
        self.refresh_toolbar();
    }

    /// Toggle bold, italic or underline on the selection.
    pub fn toggle_format(&mut self, format: ToggleFormat) -> Option<ToggleAction> {
        self.editor.toggle_format(self.selection, format)
    }

    /// Highlight the selection with a named colour.
    pub fn set_highlight(&mut self, color_name: &str) -> StyleResult<()> {
        self.editor.set_highlight(self.selection, color_name)
    }

    /// Align the paragraph at the start of the selection.
    pub fn align(&mut self, alignment: Alignment) -> bool {
        self.editor.set_paragraph_alignment(self.selection.start, alignment)
    }

    /// Change the font family of the selection and of new text.
    pub fn set_font_family(&mut self, family: &str) -> StyleResult<()> {
        self.editor.apply_font_family(self.selection, family)
    }

    /// Change the font size of the selection and of new text.
    pub fn set_font_size(&mut self, points: u32) -> StyleResult<()> {
        self.editor.apply_font_size(self.selection, points)
    }

    /// Toolbar state for the current selection.
    pub fn toolbar_state(&self) -> ToolbarState {
        self.editor.toolbar_state(self.selection)
    }

    /// Emit the toolbar state after the cursor or the content moved.
    fn refresh_toolbar(&self) {
        self.editor.style_changed.emit(self.toolbar_state());
    }

    /// Discard the content and forget the file.
    pub fn new_document(&mut self) {
        self.editor.clear();
        self.selection = SelectionRange::default();
        self.current_file = None;
        self.refresh_toolbar();
    }

    /// Replace the content with text read from `path`.
    pub fn load(&mut self, text: &str, path: impl Into<PathBuf>) {
        self.editor.set_text(text);
        self.selection = SelectionRange::default();
        self.current_file = Some(path.into());
        self.refresh_toolbar();
    }
}
