//! Weighted directed graph model for Markov chain analysis.
//!
//! A [`Graph`] holds `N` states (1-indexed) and their outgoing transitions as
//! per-state adjacency lists. Graphs are built once, either programmatically
//! or from the text format read by [`parse_graph`], and treated as immutable
//! by every downstream consumer.
//!
//! # Quick start
//!
//! ```
//! use ergode_graph::{parse_graph, validate};
//!
//! let graph = parse_graph("2  1 2 1.0  2 1 1.0").unwrap();
//! assert_eq!(graph.n_states(), 2);
//!
//! let check = validate(&graph);
//! assert!(check.is_markov());
//! ```

pub mod error;
pub mod graph;
pub mod parse;
pub mod validate;

pub use error::GraphError;
pub use graph::{Arc, Graph};
pub use parse::{parse_graph, read_graph};
pub use validate::{Validation, validate};
