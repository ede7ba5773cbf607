//! HTML parser using html5ever (through `scraper`).
//!
//! html5ever gives browser-compatible error recovery, so the tree built here
//! has the same shape a page would have in the browser the markers are meant
//! for.

use scraper::{Html, Node as HtmlNode};
use wordwarn_dom::{Document, ElementData};

use crate::{ParseError, Parser};

/// How the source is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// A full page: missing `html`/`head`/`body` are synthesized.
    Document,
    /// A body fragment: nodes land directly under the root.
    Fragment,
}

/// HTML parser implementation.
#[derive(Debug, Clone, Copy)]
pub struct HtmlParser {
    mode: Mode,
}

impl HtmlParser {
    /// Creates a parser for complete pages.
    pub fn document() -> Self {
        Self {
            mode: Mode::Document,
        }
    }

    /// Creates a parser for body fragments.
    pub fn fragment() -> Self {
        Self {
            mode: Mode::Fragment,
        }
    }

    /// Picks the mode from the source: complete pages start with a doctype or
    /// an `<html>` tag, anything else is parsed as a fragment so it
    /// serializes back without synthesized wrappers.
    pub fn for_source(source: &str) -> Self {
        let head: String = source
            .trim_start()
            .chars()
            .take(9)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if head.starts_with("<!doctype") || head.starts_with("<html") {
            Self::document()
        } else {
            Self::fragment()
        }
    }

    /// Copies the html5ever tree into a fresh [`Document`].
    fn convert(html: &Html, mode: Mode) -> Result<Document, ParseError> {
        let mut doc = Document::new();

        // A parsed fragment hangs below a synthetic <html> element; skip it.
        let start = match mode {
            Mode::Document => html.tree.root(),
            Mode::Fragment => *html.root_element(),
        };

        let mut stack = vec![(start, doc.root())];
        while let Some((source, target)) = stack.pop() {
            for child in source.children() {
                let id = match child.value() {
                    HtmlNode::Element(element) => {
                        let mut data = ElementData::new(element.name());
                        data.attributes = element
                            .attrs()
                            .map(|(name, value)| (name.to_string(), value.to_string()))
                            .collect();
                        doc.create_element_with(data)
                    }
                    HtmlNode::Text(text) => doc.create_text(text),
                    HtmlNode::Comment(comment) => doc.create_comment(comment),
                    HtmlNode::Doctype(doctype) => doc.create_doctype(doctype.name()),
                    _ => continue,
                };
                doc.append_child(target, id)?;
                stack.push((child, id));
            }
        }

        Ok(doc)
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::document()
    }
}

impl Parser for HtmlParser {
    fn name(&self) -> &str {
        "html"
    }

    fn extensions(&self) -> &[&str] {
        &["html", "htm", "xhtml"]
    }

    fn parse(&self, source: &str) -> Result<Document, ParseError> {
        let html = match self.mode {
            Mode::Document => Html::parse_document(source),
            Mode::Fragment => Html::parse_fragment(source),
        };
        Self::convert(&html, self.mode)
    }
}
