//! Error types for checked mutations and export.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::nodes::NodeId;

/// Errors surfaced by the checked (`try_*`) mutation variants.
///
/// The permissive default API never produces these; it absorbs missing ids
/// as silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The referenced node id is not present in the graph.
    #[error("node {id} not found")]
    NodeNotFound { id: NodeId },
}

/// Errors raised while writing a DOT snapshot to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination could not be created or written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
