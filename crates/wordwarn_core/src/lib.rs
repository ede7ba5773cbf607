//! # wordwarn_core
//!
//! Word-length highlighting engine for wordwarn.
//!
//! This crate provides:
//! - `HighlightOptions` with defaults, schema validation and config file loading
//! - The `Highlighter` that wraps offending words in marker elements and removes them again
//! - Reports describing what a pass changed
//!
//! The engine works on anything implementing [`wordwarn_dom::DomTree`].
//!
//! ## Example
//!
//! ```rust
//! use wordwarn_core::{HighlightOptions, apply_highlights, remove_highlights};
//! use wordwarn_html::{HtmlParser, Parser, serialize};
//!
//! let mut doc = HtmlParser::fragment()
//!     .parse("<p>Der Kühlschrank ist leer.</p>")
//!     .unwrap();
//!
//! let report = apply_highlights(&mut doc, &HighlightOptions::new(10)).unwrap();
//! assert_eq!(report.markers_created, 1);
//! assert!(serialize(&doc).contains(r#"<span class="translator-warn""#));
//!
//! remove_highlights(&mut doc);
//! assert_eq!(serialize(&doc), "<p>Der Kühlschrank ist leer.</p>");
//! ```

mod error;
mod highlighter;
mod marker;
mod options;
mod report;

pub use error::{HighlightError, ValidationError};
pub use highlighter::Highlighter;
pub use marker::{MARKER_CLASS, MARKER_TAG, marker_style};
pub use options::{
    DEFAULT_HIGHLIGHT_COLOR, DEFAULT_MAX_LENGTH, DEFAULT_TEXT_COLOR, HighlightOptions,
    find_config, read_options_file,
};
pub use report::{HighlightReport, RemovalReport};

use wordwarn_dom::DomTree;

/// Applies markers with the default highlighter.
pub fn apply_highlights<T: DomTree>(
    tree: &mut T,
    options: &HighlightOptions,
) -> Result<HighlightReport, ValidationError> {
    Highlighter::new().apply(tree, options)
}

/// Removes every `translator-warn` marker.
pub fn remove_highlights<T: DomTree>(tree: &mut T) -> RemovalReport {
    Highlighter::new().remove(tree)
}
