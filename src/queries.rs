//! Read-only inspection of the graph.

use crate::edges::Edge;
use crate::nodes::{Node, NodeId};
use crate::VizGraph;

impl VizGraph {
    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Check whether a node with the given id exists.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edge instances in the graph.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.outgoing.len()).sum()
    }

    /// Check whether the graph holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in ascending id order.
    ///
    /// This is the stable order the exporters follow.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Outgoing edges of a node, empty for an absent id.
    pub fn outgoing(&self, id: NodeId) -> &[Edge] {
        self.nodes.get(&id).map_or(&[], |node| node.outgoing.as_slice())
    }

    /// Incoming edge sources of a node, empty for an absent id.
    ///
    /// One entry per edge instance, so parallel edges repeat their source.
    pub fn incoming_sources(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(&id).map_or(&[], |node| node.incoming.as_slice())
    }

    /// Number of edge instances `from -> to`.
    pub fn edge_count_between(&self, from: NodeId, to: NodeId) -> usize {
        self.outgoing(from)
            .iter()
            .filter(|edge| edge.target == to)
            .count()
    }
}
