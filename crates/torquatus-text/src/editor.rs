//! Range-based formatting on top of [`StyledDocument`].
//!
//! [`StyledRangeEditor`] is what the toolbar and the format menu talk to. It
//! applies, toggles and queries style properties over selections, owns the
//! default style used for new text, and applies the light/dark theme.
//!
//! Theme colours live in a base style and in the paragraph styles. They are
//! never written into character styles, so switching the theme cannot leave
//! stale colours behind on text typed earlier.
//!
//! Positions and ranges are clamped to the document; nothing here fails on
//! an out-of-range index. The only errors are values outside a closed set
//! (highlight names, fonts, sizes).

use torquatus_core::logging::targets;
use torquatus_core::Signal;

use crate::document::StyledDocument;
use crate::error::{StyleError, StyleResult};
use crate::highlight::HighlightColor;
use crate::property::{self, Alignment, ToggleFormat};
use crate::selection::SelectionRange;
use crate::settings::EditorSettings;
use crate::style_map::StyleMap;
use crate::theme::Theme;
use crate::toolbar::ToolbarState;

/// What a toggle did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// The property was written to every selected character.
    Added,
    /// The property was stripped from every selected character.
    Removed,
}

/// Formatting engine for the note editor.
#[derive(Debug)]
pub struct StyledRangeEditor {
    document: StyledDocument,
    default_style: StyleMap,
    base_style: StyleMap,
    theme: Theme,
    settings: EditorSettings,
    /// Emitted after every formatting change with the toolbar state at the
    /// start of the affected selection.
    pub style_changed: Signal<ToolbarState>,
}

impl Default for StyledRangeEditor {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl StyledRangeEditor {
    /// Create an empty editor.
    ///
    /// The default style starts with the configured font family and size; the
    /// base style gets the colours of the configured theme.
    pub fn new(settings: EditorSettings) -> Self {
        let default_style = StyleMap::new()
            .with(property::FONT_FAMILY, property::quote_family(settings.default_font_family()))
            .with(property::FONT_SIZE, property::format_points(settings.default_font_size()));
        let mut editor = Self {
            document: StyledDocument::new(),
            default_style,
            base_style: StyleMap::new(),
            theme: Theme::from_dark_mode(settings.dark_mode()),
            settings,
            style_changed: Signal::new(),
        };
        editor.set_document_theme(editor.theme.is_dark());
        editor
    }

    /// The underlying document.
    pub fn document(&self) -> &StyledDocument {
        &self.document
    }

    /// The style applied to newly typed text.
    pub fn default_style(&self) -> &StyleMap {
        &self.default_style
    }

    /// Document-wide display properties set by the theme.
    pub fn base_style(&self) -> &StyleMap {
        &self.base_style
    }

    /// The current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The editor configuration.
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// The plain text content.
    pub fn text(&self) -> String {
        self.document.text()
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.document.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    // =========================================================================
    // Character formatting
    // =========================================================================

    /// Set `name: value` on every character of `range`.
    ///
    /// Other properties of each character are left alone. With an empty range
    /// only the default style changes, so the value applies to text typed
    /// afterwards and no existing character is touched.
    #[tracing::instrument(skip(self, value), target = "torquatus_text::editor", level = "debug")]
    pub fn apply_property(&mut self, range: SelectionRange, name: &str, value: &str) {
        if range.is_empty() {
            self.default_style.set(name, value);
        } else {
            for style in self.document.styles_mut(range.as_range()) {
                style.set(name, value);
            }
        }
        self.notify_style_changed(range);
    }

    /// Toggle `name` over `range`.
    ///
    /// If any selected character has the property (with any value) it is
    /// removed from all of them; otherwise `on_value` is written to all of
    /// them. One bold letter in a selection therefore makes the toggle strip
    /// bold from the whole selection.
    ///
    /// Returns `None` for an empty range, which is a no-op.
    pub fn toggle_property(
        &mut self,
        range: SelectionRange,
        name: &str,
        on_value: &str,
    ) -> Option<ToggleAction> {
        let range = range.clamp(self.document.len());
        if range.is_empty() {
            return None;
        }

        let any_present = self.document.styles(range.as_range()).any(|s| s.contains(name));
        let action = if any_present {
            ToggleAction::Removed
        } else {
            ToggleAction::Added
        };

        for style in self.document.styles_mut(range.as_range()) {
            match action {
                ToggleAction::Removed => {
                    style.remove(name);
                }
                ToggleAction::Added => {
                    style.set(name, on_value);
                }
            }
        }

        tracing::debug!(target: targets::EDITOR, name, ?action, start = range.start, end = range.end, "toggled property");
        self.notify_style_changed(range);
        Some(action)
    }

    /// Toggle one of the toolbar formats (bold, italic, underline).
    pub fn toggle_format(&mut self, range: SelectionRange, format: ToggleFormat) -> Option<ToggleAction> {
        self.toggle_property(range, format.property(), format.on_value())
    }

    /// Apply a highlight by menu label.
    ///
    /// Fails with [`StyleError::InvalidArgument`] for an unknown label, even
    /// when the range is empty.
    pub fn set_highlight(&mut self, range: SelectionRange, color_name: &str) -> StyleResult<()> {
        let color: HighlightColor = color_name.parse()?;
        self.set_highlight_color(range, color);
        Ok(())
    }

    /// Apply a highlight colour, or clear it with [`HighlightColor::Remove`].
    ///
    /// No-op on an empty range.
    pub fn set_highlight_color(&mut self, range: SelectionRange, color: HighlightColor) {
        let range = range.clamp(self.document.len());
        if range.is_empty() {
            return;
        }

        for style in self.document.styles_mut(range.as_range()) {
            match color.hex() {
                Some(hex) => {
                    style.set(property::HIGHLIGHT, hex);
                }
                None => {
                    style.remove(property::HIGHLIGHT);
                }
            }
        }
        tracing::debug!(target: targets::EDITOR, %color, start = range.start, end = range.end, "applied highlight");
        self.notify_style_changed(range);
    }

    /// Set the font family of the selection and of text typed afterwards.
    pub fn apply_font_family(&mut self, range: SelectionRange, family: &str) -> StyleResult<()> {
        if !self.settings.is_allowed_font(family) {
            return Err(StyleError::invalid_argument("font family", family));
        }
        let value = property::quote_family(family);
        self.apply_property(range, property::FONT_FAMILY, &value);
        self.default_style.set(property::FONT_FAMILY, value);
        Ok(())
    }

    /// Set the point size of the selection and of text typed afterwards.
    pub fn apply_font_size(&mut self, range: SelectionRange, points: u32) -> StyleResult<()> {
        if !self.settings.is_allowed_size(points) {
            return Err(StyleError::invalid_argument("font size", points.to_string()));
        }
        let value = property::format_points(points);
        self.apply_property(range, property::FONT_SIZE, &value);
        self.default_style.set(property::FONT_SIZE, value);
        Ok(())
    }

    // =========================================================================
    // Paragraph formatting
    // =========================================================================

    /// Align the paragraph containing `position`.
    ///
    /// Returns `false` without changing anything when the document is empty
    /// or `position` lies past the end.
    pub fn set_paragraph_alignment(&mut self, position: usize, alignment: Alignment) -> bool {
        if self.document.is_empty() || position > self.document.len() {
            tracing::trace!(target: targets::EDITOR, position, "alignment ignored: position out of bounds");
            return false;
        }

        let para = self.document.paragraph_at(position);
        let Some(style) = self.document.paragraph_style_mut(para) else {
            return false;
        };
        style.set(property::TEXT_ALIGNMENT, alignment.as_str());

        tracing::debug!(target: targets::EDITOR, para, %alignment, "aligned paragraph");
        self.notify_style_changed(SelectionRange::cursor(position));
        true
    }

    /// Alignment of the paragraph containing `position`.
    pub fn paragraph_alignment(&self, position: usize) -> Alignment {
        let para = self.document.paragraph_at(position);
        self.document
            .paragraph_style(para)
            .and_then(|s| s.get(property::TEXT_ALIGNMENT))
            .and_then(|a| a.parse().ok())
            .unwrap_or_default()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Style of the character at `position`, clamped to the last character.
    ///
    /// Returns `None` for an empty document.
    pub fn query_effective_style(&self, position: usize) -> Option<&StyleMap> {
        let last = self.document.len().checked_sub(1)?;
        self.document.style_at(position.min(last))
    }

    /// Toolbar state for a selection.
    ///
    /// Toggle buttons reflect the character at the selection start and are
    /// released when the start is at or past the end of the document.
    pub fn toolbar_state(&self, selection: SelectionRange) -> ToolbarState {
        let len = self.document.len();
        let style = if selection.start < len {
            self.query_effective_style(selection.start)
        } else {
            None
        };
        ToolbarState::from_styles(
            style,
            &self.default_style,
            self.paragraph_alignment(selection.start),
            len > 0,
        )
    }

    fn notify_style_changed(&self, range: SelectionRange) {
        self.style_changed.emit(self.toolbar_state(range));
    }

    // =========================================================================
    // Theme
    // =========================================================================

    /// Apply the light or dark theme.
    ///
    /// Writes the background and foreground colours into the base style and
    /// into every paragraph style. Font, weight, highlight and alignment
    /// properties are never touched. Applying the same theme twice leaves the
    /// document unchanged.
    pub fn set_document_theme(&mut self, dark: bool) {
        self.theme = Theme::from_dark_mode(dark);
        let (background, foreground) = (self.theme.background(), self.theme.foreground());

        self.base_style.set(property::BACKGROUND, background);
        self.base_style.set(property::FOREGROUND, foreground);
        for style in self.document.paragraph_styles_mut() {
            style.set(property::BACKGROUND, background);
            style.set(property::FOREGROUND, foreground);
        }

        tracing::debug!(
            target: targets::EDITOR,
            dark,
            paragraphs = self.document.paragraph_count(),
            "applied document theme"
        );
    }

    /// Switch between light and dark.
    pub fn toggle_theme(&mut self) -> Theme {
        self.set_document_theme(!self.theme.is_dark());
        self.theme
    }

    /// Re-apply the current theme, e.g. after paragraphs were created.
    pub fn reapply_theme(&mut self) {
        self.set_document_theme(self.theme.is_dark());
    }

    // =========================================================================
    // Text editing
    // =========================================================================

    /// Insert typed text at `position`.
    ///
    /// The new characters take the character formatting of the character
    /// before them (when it is on the same line), overlaid with the default
    /// style, so a font picked with an empty selection wins over the
    /// surrounding font while bold or a highlight carries on.
    pub fn insert_text(&mut self, position: usize, text: &str) {
        let position = position.min(self.document.len());
        let mut style = position
            .checked_sub(1)
            .and_then(|prev| self.document.unit(prev))
            .filter(|unit| !unit.is_line_break())
            .map(|unit| unit.style.clone())
            .unwrap_or_default();
        style.merge(&self.default_style);
        self.document.insert(position, text, &style);
    }

    /// Insert text with an explicit style.
    pub fn insert_styled(&mut self, position: usize, text: &str, style: &StyleMap) {
        self.document.insert(position, text, style);
    }

    /// Delete a range of characters, returning the removed text.
    pub fn delete(&mut self, range: SelectionRange) -> String {
        self.document.delete(range.as_range())
    }

    /// Replace the content with plain text in the default style.
    ///
    /// Paragraph styles are reset; call [`Self::reapply_theme`] once the new
    /// content is in place.
    pub fn set_text(&mut self, text: &str) {
        self.document.set_text(text, &self.default_style);
    }

    /// Remove all content. The default style and theme are kept.
    pub fn clear(&mut self) {
        self.document.clear();
    }
}
