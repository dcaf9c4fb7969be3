//! Text-format graph parsing.
//!
//! Format: first token is the state count `N`, followed by whitespace
//! separated `from to probability` triples (1-indexed states). Parsing stops
//! consuming at the first token sequence that fails to parse as a complete
//! triple; anything already parsed is kept (no rollback).

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::GraphError;
use crate::graph::Graph;

/// Parses a graph from its text representation.
///
/// # Errors
///
/// Returns [`GraphError::EmptyInput`] when there are no tokens,
/// [`GraphError::InvalidStateCount`] when the first token is not a positive
/// integer, and range/probability errors from
/// [`Graph::add_transition`] for malformed transitions that do tokenize.
pub fn parse_graph(text: &str) -> Result<Graph, GraphError> {
    let mut tokens = text.split_whitespace();

    let first = tokens.next().ok_or(GraphError::EmptyInput)?;
    let n_states: usize = first
        .parse()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| GraphError::InvalidStateCount {
            token: first.to_string(),
        })?;

    let mut graph = Graph::new(n_states);

    loop {
        let Some(from_tok) = tokens.next() else {
            break;
        };
        let (Some(to_tok), Some(prob_tok)) = (tokens.next(), tokens.next()) else {
            debug!(token = from_tok, "incomplete trailing triple, stopping");
            break;
        };

        let parsed = (
            from_tok.parse::<usize>(),
            to_tok.parse::<usize>(),
            prob_tok.parse::<f64>(),
        );
        let (Ok(from), Ok(to), Ok(prob)) = parsed else {
            debug!(
                from = from_tok,
                to = to_tok,
                prob = prob_tok,
                "malformed triple, stopping"
            );
            break;
        };

        graph.add_transition(from, to, prob)?;
    }

    debug!(
        n_states = graph.n_states(),
        n_transitions = graph.n_transitions(),
        "graph parsed"
    );
    Ok(graph)
}

/// Reads and parses a graph from a file.
///
/// # Errors
///
/// Returns [`GraphError::Io`] when the file cannot be read, plus every error
/// [`parse_graph`] can produce.
pub fn read_graph(path: &Path) -> Result<Graph, GraphError> {
    let text = fs::read_to_string(path).map_err(|source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_graph(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_graph() {
        let g = parse_graph("3\n1 2 0.5\n1 3 0.5\n2 1 1.0\n3 3 1.0").unwrap();
        assert_eq!(g.n_states(), 3);
        assert_eq!(g.n_transitions(), 4);
        assert_eq!(g.outgoing(1)[0].to, 2);
        assert!((g.outgoing(3)[0].prob - 1.0).abs() < 1e-12);
    }

    #[test]
    fn parse_empty_input() {
        assert!(matches!(parse_graph(""), Err(GraphError::EmptyInput)));
        assert!(matches!(parse_graph("  \n\t "), Err(GraphError::EmptyInput)));
    }

    #[test]
    fn parse_bad_state_count() {
        assert!(matches!(
            parse_graph("x 1 2 0.5"),
            Err(GraphError::InvalidStateCount { .. })
        ));
        assert!(matches!(
            parse_graph("0"),
            Err(GraphError::InvalidStateCount { .. })
        ));
        assert!(matches!(
            parse_graph("-2"),
            Err(GraphError::InvalidStateCount { .. })
        ));
    }

    #[test]
    fn parse_stops_at_malformed_triple() {
        // The bad token ends consumption; earlier triples are kept.
        let g = parse_graph("2 1 2 1.0 2 one 1.0").unwrap();
        assert_eq!(g.n_transitions(), 1);
        assert_eq!(g.outgoing(1)[0].to, 2);
        assert!(g.outgoing(2).is_empty());
    }

    #[test]
    fn parse_stops_at_incomplete_triple() {
        let g = parse_graph("2 1 2 1.0 2 1").unwrap();
        assert_eq!(g.n_transitions(), 1);
    }

    #[test]
    fn parse_count_only_is_valid() {
        let g = parse_graph("4").unwrap();
        assert_eq!(g.n_states(), 4);
        assert_eq!(g.n_transitions(), 0);
    }

    #[test]
    fn parse_rejects_out_of_range_state() {
        assert!(matches!(
            parse_graph("2 1 5 1.0"),
            Err(GraphError::StateOutOfRange {
                state: 5,
                n_states: 2
            })
        ));
    }

    #[test]
    fn read_graph_missing_file() {
        let err = read_graph(Path::new("/nonexistent/graph.txt")).unwrap_err();
        assert!(matches!(err, GraphError::Io { .. }));
    }
}
