use serde::Serialize;

/// Summary of one remove pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalReport {
    /// Markers replaced by plain text.
    pub restored: usize,
    /// Markers that could not be replaced.
    pub skipped: usize,
}

/// Summary of one apply pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightReport {
    /// Text leaves replaced by runs.
    pub rewritten_nodes: usize,
    /// Marker elements inserted.
    pub markers_created: usize,
    /// Text leaves left alone because rewriting them failed.
    pub skipped_nodes: usize,
    /// Result of the remove pass run first when `reset` was set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<RemovalReport>,
}

impl HighlightReport {
    /// Returns true if the pass changed nothing.
    pub fn is_unchanged(&self) -> bool {
        self.rewritten_nodes == 0 && self.removed.is_none_or(|removed| removed.restored == 0)
    }
}
