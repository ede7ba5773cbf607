//! Node definitions.
//!
//! The arena node type used by [`Document`](crate::Document).

use std::fmt;

/// Index of a node inside its [`Document`](crate::Document) arena.
///
/// Holds a full `usize`, so every arena slot has its own id however far the
/// arena grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index of this node.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Coarse classification of a node, as seen through [`DomTree`](crate::DomTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Element,
    Text,
    Comment,
    Doctype,
}

impl NodeKind {
    /// Returns true for raw character data leaves.
    #[inline]
    pub const fn is_text(self) -> bool {
        matches!(self, NodeKind::Text)
    }

    /// Returns true for element nodes.
    #[inline]
    pub const fn is_element(self) -> bool {
        matches!(self, NodeKind::Element)
    }
}

/// Payload of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// The document root. Exactly one per arena, always at index 0.
    Document,
    Element(ElementData),
    Text(String),
    Comment(String),
    Doctype(String),
}

impl NodeData {
    /// Returns the kind tag of this payload.
    pub const fn kind(&self) -> NodeKind {
        match self {
            NodeData::Document => NodeKind::Document,
            NodeData::Element(_) => NodeKind::Element,
            NodeData::Text(_) => NodeKind::Text,
            NodeData::Comment(_) => NodeKind::Comment,
            NodeData::Doctype(_) => NodeKind::Doctype,
        }
    }
}

/// Tag name and attributes of an element.
///
/// Attributes keep their source order so serialization is stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// Lowercase tag name.
    pub tag: String,
    /// Attributes as `(name, value)` pairs.
    pub attributes: Vec<(String, String)>,
}

impl ElementData {
    /// Creates an element payload with no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attributes: Vec::new(),
        }
    }

    /// Returns the value of the named attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Sets an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .attributes
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(&name))
        {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Returns true if the whitespace-separated `class` attribute lists `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
    }

    /// Returns true if this element is the given tag (ASCII case-insensitive).
    #[inline]
    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }
}

/// A node in the document arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The node payload.
    pub data: NodeData,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Returns the parent, if the node is attached.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the ordered child list.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns the kind tag of this node.
    #[inline]
    pub const fn kind(&self) -> NodeKind {
        self.data.kind()
    }
}
