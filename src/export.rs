//! Serializable snapshot representations.
//!
//! These mirror the DOT export ordering, so a JSON snapshot and a DOT
//! snapshot of the same graph agree node-for-node and edge-for-edge.

use serde::{Deserialize, Serialize};

use crate::nodes::{Node, NodeId};
use crate::VizGraph;

/// Serializable representation of a graph snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphRepr {
    pub directed: bool,
    pub nodes: Vec<NodeRepr>,
    pub edges: Vec<EdgeRepr>,
}

impl From<&VizGraph> for GraphRepr {
    fn from(graph: &VizGraph) -> Self {
        let nodes = graph.nodes().map(NodeRepr::from).collect();
        let edges = graph
            .nodes()
            .flat_map(|node| {
                node.outgoing().iter().map(move |edge| EdgeRepr {
                    source: node.id(),
                    target: edge.target(),
                    label: edge.label().to_string(),
                })
            })
            .collect();

        Self {
            directed: graph.is_directed(),
            nodes,
            edges,
        }
    }
}

/// Serializable representation of a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRepr {
    pub id: NodeId,
    pub label: String,
    pub options: String,
}

impl From<&Node> for NodeRepr {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id(),
            label: node.label().to_string(),
            options: node.options().to_string(),
        }
    }
}

/// Serializable representation of one edge instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRepr {
    pub source: NodeId,
    pub target: NodeId,
    pub label: String,
}

/// Render the graph snapshot as pretty-printed JSON.
pub fn render_json(graph: &VizGraph) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&GraphRepr::from(graph))
}
