//! Parse error types.

use thiserror::Error;
use wordwarn_dom::DomError;

/// Errors that can occur during parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Building the document tree failed.
    #[error("Failed to build document tree: {0}")]
    Tree(#[from] DomError),
}
