//! Error types for the ergode-graph crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the ergode-graph crate.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Returned when the input contains no tokens at all.
    #[error("input is empty")]
    EmptyInput,

    /// Returned when the first token does not parse as a positive state count.
    #[error("invalid state count: {token:?}")]
    InvalidStateCount {
        /// The offending token.
        token: String,
    },

    /// Returned when a transition references a state outside `1..=n_states`.
    #[error("state {state} is out of range 1..={n_states}")]
    StateOutOfRange {
        /// The offending state id.
        state: usize,
        /// Number of states in the graph.
        n_states: usize,
    },

    /// Returned when a transition carries a negative or non-finite probability.
    #[error("invalid probability {prob} on transition {from} -> {to}")]
    InvalidProbability {
        /// Source state (1-indexed).
        from: usize,
        /// Destination state (1-indexed).
        to: usize,
        /// The offending probability.
        prob: f64,
    },

    /// Returned when the input file cannot be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
