//! Highlighter ("marca texto") colours.

use std::fmt;
use std::str::FromStr;

use crate::error::{StyleError, StyleResult};

/// One entry of the highlight menu.
///
/// The menu labels are the user-facing names; [`HighlightColor::Remove`]
/// clears the highlight instead of painting one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightColor {
    /// "Amarelo", `#FFFF00`.
    Yellow,
    /// "Verde", `#90EE90`.
    Green,
    /// "Azul", `#ADD8E6`.
    Blue,
    /// "Rosa", `#FFB6C1`.
    Pink,
    /// "Laranja", `#FFA07A`.
    Orange,
    /// "Remover", clears the highlight.
    Remove,
}

impl HighlightColor {
    /// All entries in menu order.
    pub const ALL: [HighlightColor; 6] = [
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Pink,
        Self::Orange,
        Self::Remove,
    ];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Yellow => "Amarelo",
            Self::Green => "Verde",
            Self::Blue => "Azul",
            Self::Pink => "Rosa",
            Self::Orange => "Laranja",
            Self::Remove => "Remover",
        }
    }

    /// Hex value written to the highlight property, `None` for [`Self::Remove`].
    pub fn hex(self) -> Option<&'static str> {
        match self {
            Self::Yellow => Some("#FFFF00"),
            Self::Green => Some("#90EE90"),
            Self::Blue => Some("#ADD8E6"),
            Self::Pink => Some("#FFB6C1"),
            Self::Orange => Some("#FFA07A"),
            Self::Remove => None,
        }
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HighlightColor {
    type Err = StyleError;

    /// Parse a menu label. Labels are matched exactly.
    fn from_str(s: &str) -> StyleResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| StyleError::invalid_argument("highlight color", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_parse() {
        for color in HighlightColor::ALL {
            assert_eq!(color.label().parse::<HighlightColor>(), Ok(color));
        }
    }

    #[test]
    fn test_hex_values() {
        assert_eq!(HighlightColor::Yellow.hex(), Some("#FFFF00"));
        assert_eq!(HighlightColor::Green.hex(), Some("#90EE90"));
        assert_eq!(HighlightColor::Blue.hex(), Some("#ADD8E6"));
        assert_eq!(HighlightColor::Pink.hex(), Some("#FFB6C1"));
        assert_eq!(HighlightColor::Orange.hex(), Some("#FFA07A"));
        assert_eq!(HighlightColor::Remove.hex(), None);
    }

    #[test]
    fn test_unknown_name_is_invalid_argument() {
        let err = "Roxo".parse::<HighlightColor>().unwrap_err();
        assert!(matches!(err, StyleError::InvalidArgument { .. }));
        assert!("amarelo".parse::<HighlightColor>().is_err());
    }
}
