use std::ops::ControlFlow;

use crate::{Document, NodeData, NodeId};

use super::{VisitResult, Visitor};

/// Walks the subtree rooted at `id` in document order.
///
/// The walk keeps an explicit stack instead of recursing. Unknown ids are
/// treated as empty subtrees.
pub fn walk_node<'a, V: Visitor<'a>>(visitor: &mut V, doc: &'a Document, id: NodeId) -> VisitResult {
    let mut stack = vec![id];

    while let Some(current) = stack.pop() {
        let Some(node) = doc.node(current) else {
            continue;
        };

        match &node.data {
            NodeData::Element(element) => visitor.visit_element(current, element)?,
            NodeData::Text(text) => visitor.visit_text(current, text)?,
            NodeData::Comment(text) => visitor.visit_comment(current, text)?,
            NodeData::Document | NodeData::Doctype(_) => {}
        }

        stack.extend(node.children.iter().rev().copied());
    }

    ControlFlow::Continue(())
}
