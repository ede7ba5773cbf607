//! The DOM capability trait.

use std::fmt;

use crate::{DomError, NodeKind};

/// Everything needed to materialize one marker element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSpec<'a> {
    /// Tag name of the marker element.
    pub tag: &'a str,
    /// Value of the `class` attribute.
    pub class: &'a str,
    /// Value of the inline `style` attribute.
    pub style: &'a str,
    /// Text content of the marker.
    pub text: &'a str,
}

/// The operations the highlighting engine needs from a document tree.
///
/// Implementations exist for the in-memory [`Document`](crate::Document) and
/// for the browser DOM. Handles are cheap to clone and stay valid after the
/// node they address has been detached.
///
/// # Example
///
/// ```rust
/// use wordwarn_dom::{Document, DomTree, NodeKind};
///
/// let mut doc = Document::new();
/// let p = doc.create_element("p");
/// doc.append_child(doc.root(), p).unwrap();
/// let text = DomTree::create_text(&mut doc, "Hi");
/// doc.append_child(p, text).unwrap();
///
/// let children = DomTree::children(&doc, &p);
/// assert_eq!(doc.kind_of(&children[0]), Some(NodeKind::Text));
/// ```
pub trait DomTree {
    /// Handle addressing one node.
    type Handle: Clone + fmt::Debug;

    /// Returns every element in document order.
    ///
    /// The result is a snapshot: mutating the tree afterwards does not change it.
    fn elements(&self) -> Vec<Self::Handle>;

    /// Returns a snapshot of the direct children of `node`.
    fn children(&self, node: &Self::Handle) -> Vec<Self::Handle>;

    /// Returns the kind of `node`, or `None` for handles the tree does not
    /// know or node types the engine never touches.
    fn kind_of(&self, node: &Self::Handle) -> Option<NodeKind>;

    /// Returns the lowercase tag name if `node` is an element.
    fn tag_name(&self, node: &Self::Handle) -> Option<String>;

    /// Returns true if `node` is an element carrying `class`.
    fn has_class(&self, node: &Self::Handle, class: &str) -> bool;

    /// Returns the text of a text leaf, or the concatenated text content of
    /// an element.
    fn text_of(&self, node: &Self::Handle) -> String;

    /// Replaces `old` with `replacements`, in order, at its current position.
    ///
    /// Fails without mutating anything when `old` has no parent.
    fn replace_node(
        &mut self,
        old: &Self::Handle,
        replacements: Vec<Self::Handle>,
    ) -> Result<(), DomError>;

    /// Creates a detached marker element holding `marker.text`.
    fn create_marker(&mut self, marker: &MarkerSpec<'_>) -> Result<Self::Handle, DomError>;

    /// Creates a detached text leaf.
    fn create_text(&mut self, text: &str) -> Self::Handle;
}
