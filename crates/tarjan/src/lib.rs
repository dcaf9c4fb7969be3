//! Strongly connected component decomposition for Markov chain graphs.
//!
//! [`decompose`] runs Tarjan's low-link algorithm over a graph and returns a
//! [`Partition`]: an ordered sequence of communicating [`Class`]es covering
//! every state exactly once. Classes are numbered `C1`, `C2`, ... in the
//! order they close during the traversal.
//!
//! # Quick start
//!
//! ```
//! use ergode_graph::parse_graph;
//! use ergode_tarjan::decompose;
//!
//! let graph = parse_graph("3  1 2 0.5  1 3 0.5  2 1 1.0  3 3 1.0").unwrap();
//! let partition = decompose(&graph);
//!
//! assert_eq!(partition.len(), 2);
//! assert_eq!(partition.classes()[0].members(), &[3]);
//! ```

pub mod partition;
pub mod scc;

pub use partition::{Class, Partition, class_name};
pub use scc::decompose;
