//! # graphsnap
//!
//! An in-memory mutable graph model with a deterministic export to the
//! Graphviz DOT format.
//!
//! Callers incrementally build or edit a directed or undirected graph and
//! periodically snapshot it to a `.dot` file for rendering. Nodes are keyed
//! by caller-assigned integer ids; each node tracks its outgoing edges plus
//! a reverse index of incoming edge sources so removal never scans the whole
//! graph.
//!
//! ## Features
//!
//! - **Permissive mutation API**: operations on absent ids are silent no-ops;
//!   checked `try_*` variants report `NodeNotFound` for callers that want
//!   failure visibility
//! - **Invariant-preserving bookkeeping**: outgoing edges and the
//!   incoming-sources index always change together, including for self-loops
//!   and parallel edges
//! - **Deterministic export**: identical operation sequences always produce
//!   identical DOT text (ascending node id, then edge insertion order)
//! - **JSON snapshots**: serde representations in the same order as the DOT
//!   output
//!
//! ## Example
//!
//! ```
//! use graphsnap::VizGraph;
//!
//! let mut graph = VizGraph::new();
//! graph.add_node(1, "fetch", "");
//! graph.add_node(2, "parse", "shape=box");
//! graph.add_edge(1, 2, "ok");
//!
//! let dot = graph.to_dot();
//! assert!(dot.contains("digraph{"));
//! assert!(dot.contains(r#"_1 -> _2 [label="ok"];"#));
//! ```
//!
//! Label and options strings are interpolated into the output verbatim; no
//! escaping of DOT metacharacters is performed. Callers must pre-sanitize
//! text that contains quotes or brackets.

mod edges;
mod error;
pub mod export;
mod mutate;
mod nodes;
mod queries;
pub mod render;

pub use edges::Edge;
pub use error::{ExportError, GraphError};
pub use export::{render_json, EdgeRepr, GraphRepr, NodeRepr};
pub use nodes::{Node, NodeId};
pub use render::{render_dot, write_dot};

use std::collections::BTreeMap;

/// A mutable graph model that can be snapshotted to Graphviz DOT.
///
/// Nodes live in an id-keyed map; edges exist only as entries in their
/// source node's outgoing list paired with an entry in the target node's
/// incoming-sources index. The directed/undirected mode is fixed at
/// construction and affects export syntax only, never storage.
#[derive(Debug, Clone)]
pub struct VizGraph {
    /// Nodes keyed by caller-assigned id; ascending id is the export order.
    pub(crate) nodes: BTreeMap<NodeId, Node>,
    pub(crate) directed: bool,
}

impl VizGraph {
    /// Create an empty directed graph (exports as `digraph` with `->`).
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            directed: true,
        }
    }

    /// Create an empty undirected graph (exports as `graph` with `--`).
    ///
    /// Edges are still stored with a source and a target; only the export
    /// syntax changes.
    pub fn undirected() -> Self {
        Self {
            nodes: BTreeMap::new(),
            directed: false,
        }
    }

    /// Whether this graph exports with directed syntax.
    pub fn is_directed(&self) -> bool {
        self.directed
    }
}

impl Default for VizGraph {
    fn default() -> Self {
        Self::new()
    }
}
