//! Toolbar state derived from the document.
//!
//! The editor never touches widgets. After every formatting change it computes
//! a [`ToolbarState`] and emits it through
//! [`StyledRangeEditor::style_changed`](crate::StyledRangeEditor::style_changed);
//! whatever renders the toolbar subscribes and mirrors the values.

use crate::property::{self, Alignment, ToggleFormat};
use crate::style_map::StyleMap;

/// Pressed/selected state of every formatting control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolbarState {
    /// Bold button pressed.
    pub bold: bool,
    /// Italic button pressed.
    pub italic: bool,
    /// Underline button pressed.
    pub underline: bool,
    /// Selected alignment button.
    pub alignment: Alignment,
    /// Font family shown in the font combo box, unquoted.
    pub font_family: Option<String>,
    /// Point size shown in the size combo box.
    pub font_size: Option<u32>,
    /// Whether formatting controls accept input. False for an empty document.
    pub controls_enabled: bool,
}

impl ToolbarState {
    /// Build the state for a cursor.
    ///
    /// `style` is the character style under the cursor (`None` when there is
    /// no character there); `fallback` supplies the font combo values when
    /// the character does not set them.
    pub fn from_styles(
        style: Option<&StyleMap>,
        fallback: &StyleMap,
        alignment: Alignment,
        controls_enabled: bool,
    ) -> Self {
        let pressed = |format: ToggleFormat| {
            style.is_some_and(|s| s.has_value(format.property(), format.on_value()))
        };
        let lookup = |name: &str| {
            style
                .and_then(|s| s.get(name))
                .or_else(|| fallback.get(name))
        };

        Self {
            bold: pressed(ToggleFormat::Bold),
            italic: pressed(ToggleFormat::Italic),
            underline: pressed(ToggleFormat::Underline),
            alignment,
            font_family: lookup(property::FONT_FAMILY)
                .map(|f| property::unquote_family(f).to_string()),
            font_size: lookup(property::FONT_SIZE).and_then(property::parse_points),
            controls_enabled,
        }
    }

    /// Check whether a toggle button is pressed.
    pub fn is_pressed(&self, format: ToggleFormat) -> bool {
        match format {
            ToggleFormat::Bold => self.bold,
            ToggleFormat::Italic => self.italic,
            ToggleFormat::Underline => self.underline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> StyleMap {
        StyleMap::new()
            .with(property::FONT_FAMILY, "'Times New Roman'")
            .with(property::FONT_SIZE, "12pt")
    }

    #[test]
    fn test_pressed_requires_on_value() {
        let style = StyleMap::new()
            .with(property::FONT_WEIGHT, "bold")
            .with(property::FONT_STYLE, "normal")
            .with(property::UNDERLINE, "true");

        let state = ToolbarState::from_styles(Some(&style), &defaults(), Alignment::Left, true);

        assert!(state.bold);
        assert!(!state.italic);
        assert!(state.underline);
        assert!(state.is_pressed(ToggleFormat::Underline));
    }

    #[test]
    fn test_font_values_fall_back_to_default_style() {
        let style = StyleMap::new().with(property::FONT_FAMILY, "'Arial'");

        let state = ToolbarState::from_styles(Some(&style), &defaults(), Alignment::Center, true);

        assert_eq!(state.font_family.as_deref(), Some("Arial"));
        assert_eq!(state.font_size, Some(12));
        assert_eq!(state.alignment, Alignment::Center);
    }

    #[test]
    fn test_no_character_releases_toggles() {
        let state = ToolbarState::from_styles(None, &defaults(), Alignment::Left, false);

        assert!(!state.bold && !state.italic && !state.underline);
        assert!(!state.controls_enabled);
        assert_eq!(state.font_family.as_deref(), Some("Times New Roman"));
    }
}
