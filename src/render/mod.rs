//! Graph rendering utilities.
//!
//! DOT text output for consumption by Graphviz and compatible layout tools.

mod dot;

pub use dot::{render_dot, write_dot};
