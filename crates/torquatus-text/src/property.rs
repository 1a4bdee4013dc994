//! Well-known style property names and their typed values.

use std::fmt;
use std::str::FromStr;

use crate::error::{StyleError, StyleResult};

/// Font family, stored quoted (`'Arial'`).
pub const FONT_FAMILY: &str = "font-family";
/// Font size, stored with a unit (`12pt`).
pub const FONT_SIZE: &str = "font-size";
/// Font weight; `bold` when on.
pub const FONT_WEIGHT: &str = "font-weight";
/// Font style; `italic` when on.
pub const FONT_STYLE: &str = "font-style";
/// Underline; `true` when on.
pub const UNDERLINE: &str = "underline";
/// Highlight colour behind the glyphs, as `#RRGGBB`.
pub const HIGHLIGHT: &str = "background-highlight-color";
/// Paragraph alignment. Only meaningful on paragraph styles.
pub const TEXT_ALIGNMENT: &str = "paragraph-text-alignment";
/// Display-only background colour pushed by the theme.
pub const BACKGROUND: &str = "background-color";
/// Display-only text colour pushed by the theme.
pub const FOREGROUND: &str = "foreground-color";

/// Character formats toggled by the toolbar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleFormat {
    /// `font-weight: bold`
    Bold,
    /// `font-style: italic`
    Italic,
    /// `underline: true`
    Underline,
}

impl ToggleFormat {
    /// The property this format toggles.
    pub fn property(self) -> &'static str {
        match self {
            Self::Bold => FONT_WEIGHT,
            Self::Italic => FONT_STYLE,
            Self::Underline => UNDERLINE,
        }
    }

    /// The value written when the format is switched on.
    pub fn on_value(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "true",
        }
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// Flush left.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
    /// Justified.
    Justify,
}

impl Alignment {
    /// All alignments in toolbar order.
    pub const ALL: [Alignment; 4] = [Self::Left, Self::Center, Self::Right, Self::Justify];

    /// The property value for this alignment.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = StyleError;

    fn from_str(s: &str) -> StyleResult<Self> {
        match s.trim() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            "justify" => Ok(Self::Justify),
            other => Err(StyleError::invalid_argument("alignment", other)),
        }
    }
}

/// Quote a font family name for storage.
pub fn quote_family(family: &str) -> String {
    format!("'{family}'")
}

/// Strip the quotes added by [`quote_family`] (single or double).
pub fn unquote_family(value: &str) -> &str {
    let value = value.trim();
    value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .or_else(|| value.strip_prefix('"').and_then(|v| v.strip_suffix('"')))
        .unwrap_or(value)
}

/// Format a point size for storage.
pub fn format_points(points: u32) -> String {
    format!("{points}pt")
}

/// Parse a stored size such as `12pt` back into points.
pub fn parse_points(value: &str) -> Option<u32> {
    value.trim().trim_end_matches("pt").trim().parse().ok()
}
