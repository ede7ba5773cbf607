//! The marker element contract.
//!
//! Markers written by any version of wordwarn look the same, so a page
//! highlighted by an earlier build can still be cleaned by this one.

/// Class carried by every marker element.
pub const MARKER_CLASS: &str = "translator-warn";

/// Tag name of marker elements.
pub const MARKER_TAG: &str = "span";

/// Builds the inline style of a marker.
///
/// Colors are written verbatim; the host decides whether it understands them.
pub fn marker_style(highlight_color: &str, text_color: &str) -> String {
    format!("background-color: {highlight_color}; color: {text_color};")
}
