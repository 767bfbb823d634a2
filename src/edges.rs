//! Edge storage for the graph model.

use crate::nodes::NodeId;

/// A directed edge instance stored in its source node's outgoing list.
///
/// Edges carry no identity of their own: parallel edges between the same
/// pair of nodes are distinct instances, each with its own entry here and a
/// matching entry in the target node's incoming-sources index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub(crate) target: NodeId,
    pub(crate) label: String,
}

impl Edge {
    pub(crate) fn new(target: NodeId, label: String) -> Self {
        Self { target, label }
    }

    /// The destination node id.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }
}
