//! [`DomTree`] over the live browser DOM.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Node};
use wordwarn_dom::{DomError, DomTree, MarkerSpec, NodeKind};

/// The page document, driven through `web-sys`.
#[derive(Debug, Clone)]
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Returns the document of the current window.
    pub fn from_window() -> Result<Self, DomError> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
            .ok_or_else(|| DomError::host("No document available"))
    }
}

/// Turns a thrown DOM exception into a [`DomError`].
fn host_error(e: JsValue) -> DomError {
    let message = e
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .or_else(|| e.as_string())
        .unwrap_or_else(|| format!("{:?}", e));
    DomError::host(message)
}

fn node_list(list: &web_sys::NodeList) -> Vec<Node> {
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

impl DomTree for BrowserDom {
    type Handle = Node;

    fn elements(&self) -> Vec<Node> {
        match self.document.query_selector_all("*") {
            Ok(list) => node_list(&list),
            Err(_) => Vec::new(),
        }
    }

    fn children(&self, node: &Node) -> Vec<Node> {
        node_list(&node.child_nodes())
    }

    fn kind_of(&self, node: &Node) -> Option<NodeKind> {
        match node.node_type() {
            Node::ELEMENT_NODE => Some(NodeKind::Element),
            Node::TEXT_NODE => Some(NodeKind::Text),
            Node::COMMENT_NODE => Some(NodeKind::Comment),
            Node::DOCUMENT_NODE => Some(NodeKind::Document),
            Node::DOCUMENT_TYPE_NODE => Some(NodeKind::Doctype),
            _ => None,
        }
    }

    fn tag_name(&self, node: &Node) -> Option<String> {
        node.dyn_ref::<Element>()
            .map(|element| element.local_name().to_ascii_lowercase())
    }

    fn has_class(&self, node: &Node, class: &str) -> bool {
        node.dyn_ref::<Element>()
            .is_some_and(|element| element.class_list().contains(class))
    }

    fn text_of(&self, node: &Node) -> String {
        node.text_content().unwrap_or_default()
    }

    fn replace_node(&mut self, old: &Node, replacements: Vec<Node>) -> Result<(), DomError> {
        let parent = old
            .parent_node()
            .ok_or_else(|| DomError::detached(old.node_name()))?;

        let fragment = self.document.create_document_fragment();
        for node in &replacements {
            fragment.append_child(node).map_err(host_error)?;
        }
        parent.replace_child(&fragment, old).map_err(host_error)?;
        Ok(())
    }

    fn create_marker(&mut self, marker: &MarkerSpec<'_>) -> Result<Node, DomError> {
        let element = self
            .document
            .create_element(marker.tag)
            .map_err(host_error)?;
        element.set_class_name(marker.class);
        element
            .set_attribute("style", marker.style)
            .map_err(host_error)?;
        element.set_text_content(Some(marker.text));
        Ok(element.into())
    }

    fn create_text(&mut self, text: &str) -> Node {
        self.document.create_text_node(text).into()
    }
}
