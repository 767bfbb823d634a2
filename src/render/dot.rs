//! Graphviz DOT export.
//!
//! The output layout is fixed: a `digraph{`/`graph{` opener, one line per
//! node in ascending id order, one line per edge (nodes in ascending id
//! order, each node's edges in insertion order), then the closing brace.
//! Node ids carry a `_` prefix so purely numeric ids stay valid DOT
//! identifiers.
//!
//! Labels and options are interpolated verbatim. Text containing DOT
//! metacharacters (quotes, brackets) produces malformed output; callers
//! must pre-sanitize.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ExportError;
use crate::VizGraph;

/// Render the graph as DOT text.
///
/// Pure function of graph state: identical operation sequences produce
/// identical text.
pub fn render_dot(graph: &VizGraph) -> String {
    let mut out = String::new();

    let connector = if graph.is_directed() {
        out.push_str("\ndigraph{");
        "->"
    } else {
        out.push_str("\ngraph{");
        "--"
    };

    for node in graph.nodes() {
        write!(
            out,
            "\n_{} [ {} label=\"{}\"];",
            node.id(),
            node.options(),
            node.label()
        )
        .unwrap();
    }
    for node in graph.nodes() {
        for edge in node.outgoing() {
            write!(
                out,
                "\n_{} {} _{} [label=\"{}\"];",
                node.id(),
                connector,
                edge.target(),
                edge.label()
            )
            .unwrap();
        }
    }
    out.push_str("\n}");
    out
}

/// Write the DOT snapshot to `path`, creating or truncating the file.
///
/// An unwritable destination surfaces as [`ExportError::Io`]; nothing is
/// swallowed.
pub fn write_dot(graph: &VizGraph, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    fs::write(path, render_dot(graph)).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "wrote DOT snapshot"
    );
    Ok(())
}

impl VizGraph {
    /// Render the current state as DOT text. See [`render_dot`].
    pub fn to_dot(&self) -> String {
        render_dot(self)
    }

    /// Write the current state to a `.dot` file. See [`write_dot`].
    pub fn export(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        write_dot(self, path)
    }
}
