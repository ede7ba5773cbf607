//! Structural error types.

use thiserror::Error;

/// Errors raised when a tree mutation finds the tree in an unexpected shape.
///
/// These are per-node failures: callers log them and move on to the next
/// node instead of aborting the whole pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The node handle does not address a node in this tree.
    #[error("Node not found: {0}")]
    NotFound(String),

    /// The node has no parent, so it cannot be replaced in place.
    #[error("Node {0} has no parent")]
    Detached(String),

    /// The node is not listed among its recorded parent's children.
    #[error("Node {node} is not a child of {parent}")]
    NotAChild {
        /// The node being replaced.
        node: String,
        /// Its recorded parent.
        parent: String,
    },

    /// Inserting the node would make a node its own ancestor.
    #[error("Cannot insert {0}: it would become its own ancestor")]
    Hierarchy(String),

    /// The host DOM rejected the operation.
    #[error("Host DOM error: {0}")]
    Host(String),
}

impl DomError {
    /// Creates a not-found error.
    pub fn not_found(node: impl std::fmt::Display) -> Self {
        Self::NotFound(node.to_string())
    }

    /// Creates a detached-node error.
    pub fn detached(node: impl std::fmt::Display) -> Self {
        Self::Detached(node.to_string())
    }

    /// Creates a host error.
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host(message.into())
    }
}
