//! HTML serialization of a [`Document`].

use wordwarn_dom::{Document, NodeData, NodeId};

/// Elements that never have an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text children are written verbatim.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "script", "style", "xmp", "iframe", "noembed", "noframes", "plaintext",
];

enum Step {
    Enter(NodeId),
    Leave(NodeId),
}

/// Serializes every child of the document root.
pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();
    for &child in doc.children(doc.root()) {
        write_node(doc, child, &mut out);
    }
    out
}

/// Serializes `id` and its subtree.
pub fn serialize_node(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, id, &mut out);
    out
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    let mut stack = vec![Step::Enter(id)];

    while let Some(step) = stack.pop() {
        let current = match step {
            Step::Enter(current) => current,
            Step::Leave(current) => {
                if let Some(element) = doc.element(current) {
                    out.push_str("</");
                    out.push_str(&element.tag);
                    out.push('>');
                }
                continue;
            }
        };

        let Some(node) = doc.node(current) else {
            continue;
        };

        match &node.data {
            NodeData::Document => {
                stack.extend(node.children().iter().rev().map(|&c| Step::Enter(c)));
            }
            NodeData::Element(element) => {
                out.push('<');
                out.push_str(&element.tag);
                for (name, value) in &element.attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_into(value, true, out);
                    out.push('"');
                }
                out.push('>');

                if VOID_ELEMENTS.contains(&element.tag.as_str()) {
                    continue;
                }
                stack.push(Step::Leave(current));
                stack.extend(node.children().iter().rev().map(|&c| Step::Enter(c)));
            }
            NodeData::Text(text) => {
                let raw = node
                    .parent()
                    .and_then(|parent| doc.element(parent))
                    .is_some_and(|parent| RAW_TEXT_ELEMENTS.contains(&parent.tag.as_str()));
                if raw {
                    out.push_str(text);
                } else {
                    escape_into(text, false, out);
                }
            }
            NodeData::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            NodeData::Doctype(name) => {
                out.push_str("<!DOCTYPE ");
                out.push_str(name);
                out.push('>');
            }
        }
    }
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' if attribute => out.push_str("&quot;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
