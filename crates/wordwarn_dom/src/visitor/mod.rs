//! Visitor pattern for document traversal.
//!
//! # Overview
//!
//! - [`Visitor`] - Read-only traversal trait
//! - [`walk_node`] - Pre-order (document order) walk of a subtree
//!
//! # Example
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use wordwarn_dom::{Document, NodeId};
//! use wordwarn_dom::visitor::{Visitor, VisitResult, walk_node};
//!
//! struct TextCollector<'a> {
//!     texts: Vec<&'a str>,
//! }
//!
//! impl<'a> Visitor<'a> for TextCollector<'a> {
//!     fn visit_text(&mut self, _id: NodeId, text: &'a str) -> VisitResult {
//!         self.texts.push(text);
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let mut doc = Document::new();
//! let p = doc.create_element("p");
//! let text = doc.create_text("hello");
//! doc.append_child(doc.root(), p).unwrap();
//! doc.append_child(p, text).unwrap();
//!
//! let mut collector = TextCollector { texts: Vec::new() };
//! let _ = walk_node(&mut collector, &doc, doc.root());
//! assert_eq!(collector.texts, vec!["hello"]);
//! ```

mod visit;
mod walk;

pub use visit::{VisitResult, Visitor};
pub use walk::walk_node;
