//! # wordwarn_html
//!
//! Bridges HTML source and [`wordwarn_dom::Document`].
//!
//! This crate provides:
//! - A `Parser` trait for turning source text into a document tree
//! - An HTML parser backed by html5ever (through `scraper`)
//! - A plain text parser that wraps paragraphs in `<p>` elements
//! - A serializer writing a document back to HTML
//!
//! ## Example
//!
//! ```rust
//! use wordwarn_html::{HtmlParser, Parser, serialize};
//!
//! let doc = HtmlParser::fragment().parse("<p>Hallo <b>Welt</b></p>").unwrap();
//! assert_eq!(serialize(&doc), "<p>Hallo <b>Welt</b></p>");
//! ```

mod error;
mod html;
mod serializer;
mod text;
mod traits;

pub use error::ParseError;
pub use html::HtmlParser;
pub use serializer::{serialize, serialize_node};
pub use text::PlainTextParser;
pub use traits::Parser;
