//! Parser trait definition.

use wordwarn_dom::Document;

use crate::ParseError;

/// Trait for parsing source text into a [`Document`].
pub trait Parser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Returns the file extensions this parser handles.
    ///
    /// Extensions should not include the leading dot (e.g., `["html", "htm"]`).
    fn extensions(&self) -> &[&str];

    /// Parses the source text into a document tree.
    fn parse(&self, source: &str) -> Result<Document, ParseError>;

    /// Returns true if this parser can handle the given file extension.
    fn can_parse(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
