//! Editor configuration.

/// Fonts offered by the font menu and combo box.
pub const DEFAULT_FONTS: [&str; 5] = ["Times New Roman", "Arial", "Helvetica", "Verdana", "Calibri"];

/// Point sizes offered by the size menu and combo box.
pub const DEFAULT_FONT_SIZES: [u32; 7] = [10, 11, 12, 14, 16, 18, 20];

/// Configuration for a [`StyledRangeEditor`](crate::StyledRangeEditor).
///
/// Settings are built in code; nothing is read from or written to disk.
///
/// ```
/// use torquatus_text::EditorSettings;
///
/// let settings = EditorSettings::new()
///     .with_default_font_family("Arial")
///     .with_default_font_size(14)
///     .with_dark_mode(false);
/// assert!(settings.is_allowed_font("Verdana"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSettings {
    fonts: Vec<String>,
    font_sizes: Vec<u32>,
    default_font_family: String,
    default_font_size: u32,
    dark_mode: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            fonts: DEFAULT_FONTS.iter().map(|f| f.to_string()).collect(),
            font_sizes: DEFAULT_FONT_SIZES.to_vec(),
            default_font_family: DEFAULT_FONTS[0].to_string(),
            default_font_size: 12,
            dark_mode: true,
        }
    }
}

impl EditorSettings {
    /// Create the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to replace the font list.
    pub fn with_fonts<I, S>(mut self, fonts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fonts = fonts.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to replace the size list.
    pub fn with_font_sizes(mut self, sizes: impl IntoIterator<Item = u32>) -> Self {
        self.font_sizes = sizes.into_iter().collect();
        self
    }

    /// Builder method to set the family used for new text.
    pub fn with_default_font_family(mut self, family: impl Into<String>) -> Self {
        self.default_font_family = family.into();
        self
    }

    /// Builder method to set the size used for new text.
    pub fn with_default_font_size(mut self, points: u32) -> Self {
        self.default_font_size = points;
        self
    }

    /// Builder method to choose the initial theme.
    pub fn with_dark_mode(mut self, dark: bool) -> Self {
        self.dark_mode = dark;
        self
    }

    /// Fonts offered to the user.
    pub fn fonts(&self) -> &[String] {
        &self.fonts
    }

    /// Point sizes offered to the user.
    pub fn font_sizes(&self) -> &[u32] {
        &self.font_sizes
    }

    /// Family used for new text.
    pub fn default_font_family(&self) -> &str {
        &self.default_font_family
    }

    /// Size used for new text.
    pub fn default_font_size(&self) -> u32 {
        self.default_font_size
    }

    /// Whether the editor starts in dark mode.
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Check a family against the font list.
    pub fn is_allowed_font(&self, family: &str) -> bool {
        self.fonts.iter().any(|f| f == family)
    }

    /// Check a size against the size list.
    pub fn is_allowed_size(&self, points: u32) -> bool {
        self.font_sizes.contains(&points)
    }
}
