//! Highlighting error types.

use thiserror::Error;

/// Malformed highlight options.
///
/// Raised before any tree mutation: an operation failing validation leaves
/// the tree untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error, miette::Diagnostic)]
pub enum ValidationError {
    /// The options are not valid JSON.
    #[error("Invalid JSON: {0}")]
    #[diagnostic(code(wordwarn::options::json))]
    Json(String),

    /// The options do not match the schema (missing field, wrong type).
    #[error("Options validation failed: {message} at {path}")]
    #[diagnostic(
        code(wordwarn::options::schema),
        help(
            "minLength is required; lengths are non-negative integers, \
             isInclusive and reset are booleans, colors are strings"
        )
    )]
    Schema {
        /// Validator message.
        message: String,
        /// JSON pointer to the offending value.
        path: String,
    },

    /// `maxLength` is below `minLength`.
    #[error("maxLength ({max}) must not be less than minLength ({min})")]
    #[diagnostic(code(wordwarn::options::range))]
    InvertedRange {
        /// Configured lower bound.
        min: usize,
        /// Configured upper bound.
        max: usize,
    },

    /// The options passed the schema but could not be decoded.
    #[error("Invalid options: {0}")]
    #[diagnostic(code(wordwarn::options::invalid))]
    Invalid(String),
}

impl ValidationError {
    /// Creates a schema error.
    pub fn schema(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
            path: path.into(),
        }
    }
}

/// Errors that can occur while highlighting.
#[derive(Debug, Error)]
pub enum HighlightError {
    /// Options validation error.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The tree did not have the expected shape.
    #[error("Structural error: {0}")]
    Structural(#[from] wordwarn_dom::DomError),

    /// Pattern construction error.
    #[error("Text error: {0}")]
    Text(#[from] wordwarn_text::TextError),

    /// Configuration file error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HighlightError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::InvertedRange { min: 8, max: 5 }.to_string(),
            "maxLength (5) must not be less than minLength (8)"
        );
        assert_eq!(
            ValidationError::schema("\"8\" is not of type \"integer\"", "/minLength").to_string(),
            "Options validation failed: \"8\" is not of type \"integer\" at /minLength"
        );
    }

    #[test]
    fn test_highlight_error_wraps_validation_transparently() {
        let err = HighlightError::from(ValidationError::Json("EOF".to_string()));
        assert_eq!(err.to_string(), "Invalid JSON: EOF");
    }
}
