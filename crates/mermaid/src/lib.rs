//! Mermaid diagram rendering.
//!
//! Two flowchart artifacts: the raw chain graph (states as nodes, transitions
//! as probability-labeled edges) and the Hasse diagram (classes as nodes
//! labeled with their member sets, condensation edges as links). Both render
//! to an owned `String`; the caller decides where it goes.

pub mod render;

pub use render::{node_id, render_graph, render_hasse};
