//! Node storage for the graph model.

use crate::edges::Edge;

/// Caller-assigned node identifier. Ids are never generated by the graph.
pub type NodeId = i64;

/// A node in the graph: a labelled vertex plus its edge bookkeeping.
///
/// The `incoming` list is a derived reverse index of the ids that hold an
/// outgoing edge into this node. It is not independently authoritative:
/// every mutation that touches an outgoing list updates the matching
/// incoming entry in the same call, so the two sides always agree on edge
/// multiplicity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) label: String,
    pub(crate) options: String,
    pub(crate) outgoing: Vec<Edge>,
    pub(crate) incoming: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(id: NodeId, label: String, options: String) -> Self {
        Self {
            id,
            label,
            options,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// The caller-assigned id, immutable for the node's lifetime.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The opaque DOT attribute string, passed through uninterpreted.
    pub fn options(&self) -> &str {
        &self.options
    }

    /// Outgoing edges in insertion order.
    pub fn outgoing(&self) -> &[Edge] {
        &self.outgoing
    }

    /// Ids of nodes with an edge into this node, one entry per edge instance.
    pub fn incoming_sources(&self) -> &[NodeId] {
        &self.incoming
    }
}
