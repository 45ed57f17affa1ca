//! Error types for complex number construction and parsing

use thiserror::Error;

/// Error type for `ComplexValue` operations
///
/// Two classes of failure exist: `InvalidArgument` for constructor misuse
/// and the `FormatError`-prefixed variants for parse failures. Arithmetic
/// never produces an error; division by the zero complex number follows
/// IEEE semantics and propagates infinities and NaNs instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComplexError {
    /// Constructor invoked with the wrong coordinate form
    #[error("ArgumentError: {0}")]
    InvalidArgument(String),

    /// Input did not split into exactly two numeric components
    #[error("FormatError: expected format 'a + bi', found {count} component(s) in '{input}'")]
    InvalidComponentCount { input: String, count: usize },

    /// A component of the input is not a valid floating-point literal
    #[error("FormatError: invalid numeric component '{literal}'")]
    InvalidComponent { literal: String },
}

impl ComplexError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ComplexError::InvalidArgument(message.into())
    }

    /// Create a component count error
    pub fn component_count(input: impl Into<String>, count: usize) -> Self {
        ComplexError::InvalidComponentCount {
            input: input.into(),
            count,
        }
    }

    /// Create an invalid component error
    pub fn invalid_component(literal: impl Into<String>) -> Self {
        ComplexError::InvalidComponent {
            literal: literal.into(),
        }
    }

    /// Check whether this error came from parsing rather than construction
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            ComplexError::InvalidComponentCount { .. } | ComplexError::InvalidComponent { .. }
        )
    }
}

/// Result type alias for complex number operations
pub type ComplexResult<T> = Result<T, ComplexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ComplexError::invalid_argument("only polar construction accepts this form");
        assert_eq!(
            format!("{}", err),
            "ArgumentError: only polar construction accepts this form"
        );

        let err = ComplexError::component_count("3i", 1);
        assert_eq!(
            format!("{}", err),
            "FormatError: expected format 'a + bi', found 1 component(s) in '3i'"
        );

        let err = ComplexError::invalid_component("abc");
        assert_eq!(format!("{}", err), "FormatError: invalid numeric component 'abc'");
    }

    #[test]
    fn test_is_format_error() {
        assert!(ComplexError::component_count("", 0).is_format_error());
        assert!(ComplexError::invalid_component("x").is_format_error());
        assert!(!ComplexError::invalid_argument("bad form").is_format_error());
    }
}
