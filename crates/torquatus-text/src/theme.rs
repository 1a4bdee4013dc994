//! Light and dark display themes for the note area.

/// The editor's colour theme. Binary: there are no intermediate states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Light text on a near-black background.
    #[default]
    Dark,
    /// Black text on white.
    Light,
}

impl Theme {
    /// Pick the theme for a dark-mode flag.
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Check if this is the dark theme.
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Background colour of the text area.
    pub fn background(self) -> &'static str {
        match self {
            Self::Dark => "#1e1e1e",
            Self::Light => "white",
        }
    }

    /// Text colour.
    pub fn foreground(self) -> &'static str {
        match self {
            Self::Dark => "white",
            Self::Light => "black",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors() {
        assert_eq!(Theme::Dark.background(), "#1e1e1e");
        assert_eq!(Theme::Dark.foreground(), "white");
        assert_eq!(Theme::Light.background(), "white");
        assert_eq!(Theme::Light.foreground(), "black");
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert!(Theme::from_dark_mode(true).is_dark());
        assert!(!Theme::from_dark_mode(false).is_dark());
    }
}
