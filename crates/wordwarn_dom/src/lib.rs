//! # wordwarn_dom
//!
//! Document tree definitions for wordwarn.
//!
//! This crate provides the tree the highlighting engine mutates, plus the
//! [`DomTree`] capability trait that lets the same engine drive any host tree
//! (the in-memory [`Document`] here, or a browser DOM through bindings).
//!
//! ## Architecture
//!
//! - Nodes live in a single arena owned by [`Document`] and are addressed by [`NodeId`]
//! - Every node records its parent and an ordered child list
//! - Replaced nodes are detached, never freed, so stale ids stay valid to query
//! - Traversal is iterative, so deeply nested pages cannot overflow the stack
//!
//! ## Example
//!
//! ```rust
//! use wordwarn_dom::Document;
//!
//! let mut doc = Document::new();
//! let body = doc.create_element("body");
//! let text = doc.create_text("Hello world");
//! doc.append_child(doc.root(), body).unwrap();
//! doc.append_child(body, text).unwrap();
//!
//! assert_eq!(doc.text_content(doc.root()), "Hello world");
//! ```

mod document;
mod error;
mod node;
mod traits;
pub mod visitor;

pub use document::Document;
pub use error::DomError;
pub use node::{ElementData, Node, NodeData, NodeId, NodeKind};
pub use traits::{DomTree, MarkerSpec};

pub use visitor::{VisitResult, Visitor};
