//! Arena-backed document tree.

use std::ops::ControlFlow;

use crate::visitor::{VisitResult, Visitor, walk_node};
use crate::{DomError, DomTree, ElementData, MarkerSpec, Node, NodeData, NodeId, NodeKind};

/// An in-memory document tree.
///
/// All nodes are stored in one arena. The root (`NodeData::Document`) is
/// always at index 0. Nodes removed from the tree are only detached, so a
/// [`NodeId`] never dangles.
///
/// The arena therefore only grows: each highlight or removal pass leaves the
/// replaced leaves and markers behind. [`compacted`](Self::compacted) copies
/// the attached tree into a fresh arena for long-lived documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Creates a document holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
        }
    }

    /// Returns the root node.
    #[inline]
    pub const fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Returns the total number of nodes in the arena, attached or not.
    #[inline]
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns a copy holding only the nodes reachable from the root.
    ///
    /// Ids of the copy are unrelated to the ids of `self`.
    pub fn compacted(&self) -> Document {
        let mut compact = Document::new();
        let mut stack = vec![(self.root(), compact.root())];

        while let Some((source, target)) = stack.pop() {
            for &child in self.children(source) {
                let Some(node) = self.node(child) else {
                    continue;
                };
                let copy = compact.alloc(node.data.clone());
                compact.nodes[copy.index()].parent = Some(target);
                compact.nodes[target.index()].children.push(copy);
                stack.push((child, copy));
            }
        }

        compact
    }

    /// Returns the node addressed by `id`.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.nodes
            .get_mut(id.index())
            .ok_or_else(|| DomError::not_found(id))
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(data));
        id
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(NodeData::Element(ElementData::new(tag)))
    }

    /// Creates a detached element with attributes.
    pub fn create_element_with(&mut self, element: ElementData) -> NodeId {
        self.alloc(NodeData::Element(element))
    }

    /// Creates a detached text leaf.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.alloc(NodeData::Text(text.to_string()))
    }

    /// Creates a detached comment.
    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.alloc(NodeData::Comment(text.to_string()))
    }

    /// Creates a detached doctype.
    pub fn create_doctype(&mut self, name: &str) -> NodeId {
        self.alloc(NodeData::Doctype(name.to_string()))
    }

    /// Returns the parent of `id`.
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.parent)
    }

    /// Returns the children of `id` (empty for unknown ids).
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|node| node.children.as_slice()).unwrap_or(&[])
    }

    /// Returns the kind of `id`.
    #[inline]
    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.node(id).map(Node::kind)
    }

    /// Returns the element payload if `id` is an element.
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.node(id)?.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns a mutable element payload if `id` is an element.
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match &mut self.nodes.get_mut(id.index())?.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the value of a text leaf.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.node(id)?.data {
            NodeData::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Concatenates every text leaf below `id` (or `id` itself) in document order.
    ///
    /// Comments are not part of the text content.
    pub fn text_content(&self, id: NodeId) -> String {
        struct TextCollector {
            out: String,
        }

        impl<'a> Visitor<'a> for TextCollector {
            fn visit_text(&mut self, _id: NodeId, text: &'a str) -> VisitResult {
                self.out.push_str(text);
                ControlFlow::Continue(())
            }
        }

        let mut collector = TextCollector { out: String::new() };
        let _ = walk_node(&mut collector, self, id);
        collector.out
    }

    /// Returns every attached element in document order.
    pub fn elements(&self) -> Vec<NodeId> {
        struct ElementCollector {
            ids: Vec<NodeId>,
        }

        impl<'a> Visitor<'a> for ElementCollector {
            fn visit_element(&mut self, id: NodeId, _element: &'a ElementData) -> VisitResult {
                self.ids.push(id);
                ControlFlow::Continue(())
            }
        }

        let mut collector = ElementCollector { ids: Vec::new() };
        let _ = walk_node(&mut collector, self, self.root());
        collector.ids
    }

    /// Returns true if `ancestor` is `node` or one of its ancestors.
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Removes `id` from its parent's child list. No-op for detached nodes.
    pub fn detach(&mut self, id: NodeId) -> Result<(), DomError> {
        let Some(parent) = self.node_mut(id)?.parent.take() else {
            return Ok(());
        };
        self.node_mut(parent)?.children.retain(|child| *child != id);
        Ok(())
    }

    /// Appends `child` to `parent`, detaching it from any previous parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.node_mut(parent)?;
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::Hierarchy(child.to_string()));
        }
        self.detach(child)?;
        self.node_mut(child)?.parent = Some(parent);
        self.node_mut(parent)?.children.push(child);
        Ok(())
    }

    /// Replaces `old` with `replacements` at its position in its parent.
    ///
    /// Validation happens before any mutation: on error the tree is unchanged.
    pub fn replace_with(&mut self, old: NodeId, replacements: &[NodeId]) -> Result<(), DomError> {
        let parent = self
            .node(old)
            .ok_or_else(|| DomError::not_found(old))?
            .parent
            .ok_or_else(|| DomError::detached(old))?;

        for &replacement in replacements {
            if self.node(replacement).is_none() {
                return Err(DomError::not_found(replacement));
            }
            if self.is_inclusive_ancestor(replacement, parent) || replacement == old {
                return Err(DomError::Hierarchy(replacement.to_string()));
            }
        }

        if !self.children(parent).contains(&old) {
            return Err(DomError::NotAChild {
                node: old.to_string(),
                parent: parent.to_string(),
            });
        }

        for &replacement in replacements {
            self.detach(replacement)?;
        }

        // Detaching a replacement that was a sibling of `old` shifts indices.
        let position = self
            .children(parent)
            .iter()
            .position(|child| *child == old)
            .ok_or_else(|| DomError::NotAChild {
                node: old.to_string(),
                parent: parent.to_string(),
            })?;

        for &replacement in replacements {
            self.node_mut(replacement)?.parent = Some(parent);
        }
        self.node_mut(parent)?
            .children
            .splice(position..=position, replacements.iter().copied());
        self.node_mut(old)?.parent = None;

        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree for Document {
    type Handle = NodeId;

    fn elements(&self) -> Vec<NodeId> {
        Document::elements(self)
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        Document::children(self, *node).to_vec()
    }

    fn kind_of(&self, node: &NodeId) -> Option<NodeKind> {
        self.kind(*node)
    }

    fn tag_name(&self, node: &NodeId) -> Option<String> {
        self.element(*node).map(|element| element.tag.clone())
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.element(*node)
            .is_some_and(|element| element.has_class(class))
    }

    fn text_of(&self, node: &NodeId) -> String {
        self.text_content(*node)
    }

    fn replace_node(&mut self, old: &NodeId, replacements: Vec<NodeId>) -> Result<(), DomError> {
        self.replace_with(*old, &replacements)
    }

    fn create_marker(&mut self, marker: &MarkerSpec<'_>) -> Result<NodeId, DomError> {
        let mut element = ElementData::new(marker.tag);
        element.set_attr("class", marker.class);
        element.set_attr("style", marker.style);
        let id = self.create_element_with(element);
        let text = Document::create_text(self, marker.text);
        self.append_child(id, text)?;
        Ok(id)
    }

    fn create_text(&mut self, text: &str) -> NodeId {
        Document::create_text(self, text)
    }
}
