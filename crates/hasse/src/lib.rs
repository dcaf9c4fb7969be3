//! Condensation ("Hasse") structure of a decomposed Markov chain.
//!
//! Collapsing each communicating class to a single node yields a directed
//! acyclic graph whose edges are the inter-class transitions. This crate
//! builds that graph ([`condense`]), optionally removes transitively implied
//! edges ([`reduce_transitive`]), and classifies each class as persistent or
//! transient ([`classify`]).
//!
//! # Quick start
//!
//! ```
//! use ergode_graph::parse_graph;
//! use ergode_tarjan::decompose;
//! use ergode_hasse::{ClassKind, class_of, classify, condense};
//!
//! let graph = parse_graph("3  1 2 0.5  1 3 0.5  2 1 1.0  3 3 1.0").unwrap();
//! let partition = decompose(&graph);
//!
//! let corresp = class_of(&partition, graph.n_states());
//! let edges = condense(&graph, &corresp);
//! let kinds = classify(&graph, &partition);
//!
//! assert_eq!(edges.len(), 1);
//! assert_eq!(kinds[0], ClassKind::Persistent);
//! ```

pub mod classify;
pub mod condense;

pub use classify::{ClassKind, classify, is_absorbing, is_irreducible};
pub use condense::{CondensationEdge, class_of, condense, reduce_transitive};
