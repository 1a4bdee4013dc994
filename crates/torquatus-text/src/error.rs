//! Error types for the styling layer.

/// Result type alias for style operations.
pub type StyleResult<T> = std::result::Result<T, StyleError>;

/// Errors raised by formatting operations.
///
/// Out-of-range positions are never errors; they are clamped or ignored.
/// Only values outside a closed set (colour names, alignments, fonts) fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// A value outside the accepted set was supplied.
    #[error("invalid {argument}: '{value}'")]
    InvalidArgument {
        /// What kind of value was expected.
        argument: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl StyleError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(argument: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = StyleError::invalid_argument("highlight color", "Roxo");
        assert_eq!(err.to_string(), "invalid highlight color: 'Roxo'");
    }
}
