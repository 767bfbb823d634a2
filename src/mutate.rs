//! Invariant-preserving mutation operations.
//!
//! Every edge mutation goes through the private `link`/`unlink_all`
//! primitives so an outgoing list and the matching incoming-sources index
//! always change in the same call. No operation ever leaves the two sides
//! disagreeing on edge multiplicity.

use tracing::trace;

use crate::edges::Edge;
use crate::error::GraphError;
use crate::nodes::{Node, NodeId};
use crate::VizGraph;

impl VizGraph {
    /// Insert a node, replacing any existing node with the same id.
    ///
    /// Replacement behaves exactly like [`remove_node`](Self::remove_node)
    /// followed by a fresh insert: the old node's edges in both directions
    /// are purged and the new node starts with none.
    pub fn add_node(&mut self, id: NodeId, label: impl Into<String>, options: impl Into<String>) {
        self.remove_node(id);
        self.nodes
            .insert(id, Node::new(id, label.into(), options.into()));
    }

    /// Overwrite a node's label and options in place, leaving its edges
    /// untouched. Silent no-op if `id` is absent.
    pub fn edit_node(&mut self, id: NodeId, label: impl Into<String>, options: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.label = label.into();
            node.options = options.into();
        }
    }

    /// Remove a node and every edge that touches it. Silent no-op if `id`
    /// is absent.
    pub fn remove_node(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        let sources: Vec<NodeId> = node.incoming.clone();
        let targets: Vec<NodeId> = node.outgoing.iter().map(Edge::target).collect();
        for from in sources {
            self.unlink_all(from, id);
        }
        for to in targets {
            self.unlink_all(id, to);
        }
        self.nodes.remove(&id);
        trace!(id, "removed node");
    }

    /// Add a directed edge `from -> to`. Silent no-op unless both endpoints
    /// currently exist.
    ///
    /// Self-loops and parallel edges are permitted; each call records a
    /// distinct edge instance.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, label: impl Into<String>) {
        self.link(from, to, label.into());
    }

    /// Remove every edge between the two ids, in both directions.
    pub fn remove_edges(&mut self, id_1: NodeId, id_2: NodeId) {
        self.remove_edges_directed(id_1, id_2);
        self.remove_edges_directed(id_2, id_1);
    }

    /// Remove every instance of an edge `from -> to`.
    ///
    /// Multiplicity is fully cleared, not decremented. Absent ids are
    /// treated as empty collections, never an error.
    pub fn remove_edges_directed(&mut self, from: NodeId, to: NodeId) {
        self.unlink_all(from, to);
    }

    /// Drop all nodes and edges. The directed/undirected mode is unaffected.
    pub fn clear(&mut self) {
        self.nodes.clear();
        trace!("cleared graph");
    }

    /// Checked variant of [`edit_node`](Self::edit_node).
    pub fn try_edit_node(
        &mut self,
        id: NodeId,
        label: impl Into<String>,
        options: impl Into<String>,
    ) -> Result<(), GraphError> {
        if !self.nodes.contains_key(&id) {
            return Err(GraphError::NodeNotFound { id });
        }
        self.edit_node(id, label, options);
        Ok(())
    }

    /// Checked variant of [`remove_node`](Self::remove_node).
    pub fn try_remove_node(&mut self, id: NodeId) -> Result<(), GraphError> {
        if !self.nodes.contains_key(&id) {
            return Err(GraphError::NodeNotFound { id });
        }
        self.remove_node(id);
        Ok(())
    }

    /// Checked variant of [`add_edge`](Self::add_edge), reporting the first
    /// missing endpoint. The graph is unchanged on error.
    pub fn try_add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        label: impl Into<String>,
    ) -> Result<(), GraphError> {
        for id in [from, to] {
            if !self.nodes.contains_key(&id) {
                return Err(GraphError::NodeNotFound { id });
            }
        }
        self.link(from, to, label.into());
        Ok(())
    }

    /// Record one edge instance on both sides, or neither.
    ///
    /// Returns `false` without touching the graph when either endpoint is
    /// missing.
    fn link(&mut self, from: NodeId, to: NodeId, label: String) -> bool {
        if !(self.nodes.contains_key(&from) && self.nodes.contains_key(&to)) {
            return false;
        }
        // Both lookups hit after the check above.
        if let Some(node) = self.nodes.get_mut(&from) {
            node.outgoing.push(Edge::new(to, label));
        }
        if let Some(node) = self.nodes.get_mut(&to) {
            node.incoming.push(from);
        }
        true
    }

    /// Remove every `from -> to` edge instance together with the matching
    /// incoming-sources entries. Absent endpoints hold no edges.
    fn unlink_all(&mut self, from: NodeId, to: NodeId) {
        if let Some(node) = self.nodes.get_mut(&from) {
            node.outgoing.retain(|edge| edge.target != to);
        }
        if let Some(node) = self.nodes.get_mut(&to) {
            node.incoming.retain(|&source| source != from);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> VizGraph {
        let mut graph = VizGraph::new();
        graph.add_node(1, "a", "");
        graph.add_node(2, "b", "");
        graph
    }

    #[test]
    fn add_edge_records_both_sides() {
        let mut graph = pair();
        graph.add_edge(1, 2, "e");
        assert_eq!(graph.outgoing(1).len(), 1);
        assert_eq!(graph.outgoing(1)[0].target(), 2);
        assert_eq!(graph.incoming_sources(2), &[1]);
    }

    #[test]
    fn parallel_edges_are_distinct_instances() {
        let mut graph = pair();
        graph.add_edge(1, 2, "e1");
        graph.add_edge(1, 2, "e2");
        assert_eq!(graph.edge_count_between(1, 2), 2);
        assert_eq!(graph.incoming_sources(2), &[1, 1]);
    }

    #[test]
    fn self_loop_is_tracked_on_one_node() {
        let mut graph = pair();
        graph.add_edge(1, 1, "loop");
        assert_eq!(graph.outgoing(1).len(), 1);
        assert_eq!(graph.incoming_sources(1), &[1]);
    }

    #[test]
    fn add_edge_with_missing_endpoint_is_noop() {
        let mut graph = pair();
        graph.add_edge(1, 99, "e");
        graph.add_edge(99, 2, "e");
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.incoming_sources(2).is_empty());
    }

    #[test]
    fn add_node_replaces_and_purges_edges() {
        let mut graph = pair();
        graph.add_edge(1, 2, "out");
        graph.add_edge(2, 1, "in");
        graph.add_node(1, "fresh", "");

        let node = graph.node(1).unwrap();
        assert_eq!(node.label(), "fresh");
        assert!(node.outgoing().is_empty());
        assert!(node.incoming_sources().is_empty());
        assert!(graph.outgoing(2).is_empty());
        assert!(graph.incoming_sources(2).is_empty());
    }

    #[test]
    fn edit_node_keeps_edges() {
        let mut graph = pair();
        graph.add_edge(1, 2, "e");
        graph.edit_node(1, "renamed", "color=red");

        let node = graph.node(1).unwrap();
        assert_eq!(node.label(), "renamed");
        assert_eq!(node.options(), "color=red");
        assert_eq!(node.outgoing().len(), 1);
    }

    #[test]
    fn edit_missing_node_is_noop() {
        let mut graph = VizGraph::new();
        graph.edit_node(99, "nope", "");
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn remove_node_clears_all_references() {
        let mut graph = pair();
        graph.add_node(3, "c", "");
        graph.add_edge(1, 3, "e1");
        graph.add_edge(3, 2, "e2");
        graph.add_edge(2, 3, "e3");
        graph.add_edge(3, 3, "loop");
        graph.remove_node(3);

        assert!(!graph.contains_node(3));
        for node in graph.nodes() {
            assert!(node.outgoing().iter().all(|e| e.target() != 3));
            assert!(node.incoming_sources().iter().all(|&s| s != 3));
        }
    }

    #[test]
    fn remove_missing_node_is_noop() {
        let mut graph = pair();
        graph.add_edge(1, 2, "e");
        graph.remove_node(99);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn remove_edges_directed_clears_full_multiplicity() {
        let mut graph = pair();
        graph.add_edge(1, 2, "e1");
        graph.add_edge(1, 2, "e2");
        graph.add_edge(2, 1, "back");
        graph.remove_edges_directed(1, 2);

        assert!(graph.outgoing(1).is_empty());
        assert!(graph.incoming_sources(2).is_empty());
        // The opposite direction survives.
        assert_eq!(graph.edge_count_between(2, 1), 1);
    }

    #[test]
    fn remove_edges_clears_both_directions() {
        let mut graph = pair();
        graph.add_edge(1, 2, "fwd");
        graph.add_edge(2, 1, "back");
        graph.remove_edges(1, 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn remove_edges_on_missing_ids_is_noop() {
        let mut graph = pair();
        graph.remove_edges(1, 99);
        graph.remove_edges(98, 99);
        graph.remove_edges_directed(99, 1);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn clear_drops_everything() {
        let mut graph = pair();
        graph.add_edge(1, 2, "e");
        graph.clear();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn try_variants_report_missing_ids() {
        let mut graph = pair();
        assert_eq!(
            graph.try_edit_node(99, "x", ""),
            Err(GraphError::NodeNotFound { id: 99 })
        );
        assert_eq!(
            graph.try_remove_node(99),
            Err(GraphError::NodeNotFound { id: 99 })
        );
        assert_eq!(
            graph.try_add_edge(1, 99, "e"),
            Err(GraphError::NodeNotFound { id: 99 })
        );
        assert_eq!(
            graph.try_add_edge(98, 2, "e"),
            Err(GraphError::NodeNotFound { id: 98 })
        );
        assert_eq!(graph.edge_count(), 0);

        assert_eq!(graph.try_add_edge(1, 2, "e"), Ok(()));
        assert_eq!(graph.try_edit_node(1, "renamed", ""), Ok(()));
        assert_eq!(graph.try_remove_node(2), Ok(()));
        assert_eq!(graph.node_count(), 1);
    }
}
