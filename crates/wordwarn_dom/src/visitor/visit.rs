use std::ops::ControlFlow;

use crate::{ElementData, NodeId};

/// Result of a visit callback. `Break` stops the whole walk.
pub type VisitResult = ControlFlow<()>;

/// Read-only visitor over a [`Document`](crate::Document).
///
/// Every callback defaults to `Continue`, so implementors only override the
/// node kinds they care about.
pub trait Visitor<'a> {
    /// Called for each element before its children are walked.
    fn visit_element(&mut self, _id: NodeId, _element: &'a ElementData) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called for each text leaf.
    fn visit_text(&mut self, _id: NodeId, _text: &'a str) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called for each comment.
    fn visit_comment(&mut self, _id: NodeId, _text: &'a str) -> VisitResult {
        ControlFlow::Continue(())
    }
}
