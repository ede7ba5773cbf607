//! Plain text parser.

use wordwarn_dom::Document;

use crate::{ParseError, Parser};

/// Parses plain text into a document of `<p>` elements, one per paragraph.
///
/// Paragraphs are separated by blank lines. Single newlines stay inside the
/// paragraph text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextParser;

impl PlainTextParser {
    /// Creates a new plain text parser.
    pub fn new() -> Self {
        Self
    }
}

impl Parser for PlainTextParser {
    fn name(&self) -> &str {
        "text"
    }

    fn extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn parse(&self, source: &str) -> Result<Document, ParseError> {
        let mut doc = Document::new();
        let normalized = source.replace("\r\n", "\n");

        for paragraph in normalized.split("\n\n") {
            let paragraph = paragraph.trim_matches('\n');
            if paragraph.trim().is_empty() {
                continue;
            }
            let p = doc.create_element("p");
            let text = doc.create_text(paragraph);
            doc.append_child(doc.root(), p)?;
            doc.append_child(p, text)?;
        }

        Ok(doc)
    }
}
