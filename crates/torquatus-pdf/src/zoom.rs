//! Zoom levels offered by the viewer.

use std::fmt;
use std::str::FromStr;

use crate::error::PdfError;

/// A supported zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Zoom {
    /// 50%.
    Percent50,
    /// 75%.
    Percent75,
    /// 100%, the initial level.
    #[default]
    Percent100,
    /// 125%.
    Percent125,
    /// 150%.
    Percent150,
    /// 200%.
    Percent200,
}

impl Zoom {
    /// All levels, smallest first.
    pub const ALL: [Zoom; 6] = [
        Self::Percent50,
        Self::Percent75,
        Self::Percent100,
        Self::Percent125,
        Self::Percent150,
        Self::Percent200,
    ];

    /// The level as a percentage.
    pub fn percent(self) -> u32 {
        match self {
            Self::Percent50 => 50,
            Self::Percent75 => 75,
            Self::Percent100 => 100,
            Self::Percent125 => 125,
            Self::Percent150 => 150,
            Self::Percent200 => 200,
        }
    }

    /// The level as a scale factor (`1.0` at 100%).
    pub fn factor(self) -> f32 {
        self.percent() as f32 / 100.0
    }

    /// Look up a level by percentage.
    pub fn from_percent(percent: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|z| z.percent() == percent)
    }

    /// Next larger level, if any.
    pub fn zoom_in(self) -> Option<Self> {
        Self::ALL.into_iter().find(|z| *z > self)
    }

    /// Next smaller level, if any.
    pub fn zoom_out(self) -> Option<Self> {
        Self::ALL.into_iter().rev().find(|z| *z < self)
    }
}

impl fmt::Display for Zoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

impl FromStr for Zoom {
    type Err = PdfError;

    /// Parse a combo box label such as `"125%"`. The `%` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
        digits
            .parse()
            .ok()
            .and_then(Self::from_percent)
            .ok_or_else(|| PdfError::InvalidZoom(s.to_string()))
    }
}
