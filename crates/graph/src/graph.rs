//! Adjacency-list graph of states and weighted transitions.

use crate::error::GraphError;

/// One outgoing transition stored in a state's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    /// Destination state (1-indexed).
    pub to: usize,
    /// Transition probability.
    pub prob: f64,
}

/// Weighted directed graph over states `1..=n_states`.
///
/// Transitions are appended in insertion order, so for graphs built by
/// [`crate::parse_graph`] each state's neighbors iterate in input-file order.
/// Every downstream algorithm (SCC decomposition, condensation, transitive
/// reduction) is deterministic relative to this order.
#[derive(Debug, Clone)]
pub struct Graph {
    n_states: usize,
    outgoing: Vec<Vec<Arc>>,
}

impl Graph {
    /// Creates a graph with `n_states` states and no transitions.
    pub fn new(n_states: usize) -> Self {
        Self {
            n_states,
            outgoing: vec![Vec::new(); n_states],
        }
    }

    /// Number of states.
    pub fn n_states(&self) -> usize {
        self.n_states
    }

    /// Total number of transitions.
    pub fn n_transitions(&self) -> usize {
        self.outgoing.iter().map(Vec::len).sum()
    }

    /// Appends a transition `from -> to` with the given probability.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::StateOutOfRange`] if either endpoint is outside
    /// `1..=n_states`, and [`GraphError::InvalidProbability`] if `prob` is
    /// negative or non-finite.
    pub fn add_transition(&mut self, from: usize, to: usize, prob: f64) -> Result<(), GraphError> {
        for state in [from, to] {
            if state == 0 || state > self.n_states {
                return Err(GraphError::StateOutOfRange {
                    state,
                    n_states: self.n_states,
                });
            }
        }
        if !prob.is_finite() || prob < 0.0 {
            return Err(GraphError::InvalidProbability { from, to, prob });
        }
        self.outgoing[from - 1].push(Arc { to, prob });
        Ok(())
    }

    /// Outgoing transitions of a 1-indexed state, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `state` is 0 or greater than `n_states`.
    pub fn outgoing(&self, state: usize) -> &[Arc] {
        assert!(
            state >= 1 && state <= self.n_states,
            "state must be 1..={}, got {state}",
            self.n_states
        );
        &self.outgoing[state - 1]
    }

    /// Iterates all transitions as `(from, to, prob)` triples, states in id
    /// order and neighbors in insertion order.
    pub fn transitions(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.outgoing
            .iter()
            .enumerate()
            .flat_map(|(i, arcs)| arcs.iter().map(move |a| (i + 1, a.to, a.prob)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_graph_is_empty() {
        let g = Graph::new(3);
        assert_eq!(g.n_states(), 3);
        assert_eq!(g.n_transitions(), 0);
        for s in 1..=3 {
            assert!(g.outgoing(s).is_empty());
        }
    }

    #[test]
    fn add_transition_preserves_order() {
        let mut g = Graph::new(3);
        g.add_transition(1, 2, 0.5).unwrap();
        g.add_transition(1, 3, 0.5).unwrap();
        let arcs = g.outgoing(1);
        assert_eq!(arcs[0].to, 2);
        assert_eq!(arcs[1].to, 3);
    }

    #[test]
    fn add_transition_rejects_out_of_range() {
        let mut g = Graph::new(2);
        assert!(matches!(
            g.add_transition(0, 1, 0.5),
            Err(GraphError::StateOutOfRange { state: 0, .. })
        ));
        assert!(matches!(
            g.add_transition(1, 3, 0.5),
            Err(GraphError::StateOutOfRange {
                state: 3,
                n_states: 2
            })
        ));
    }

    #[test]
    fn add_transition_rejects_negative_prob() {
        let mut g = Graph::new(2);
        assert!(matches!(
            g.add_transition(1, 2, -0.1),
            Err(GraphError::InvalidProbability { .. })
        ));
    }

    #[test]
    fn add_transition_rejects_nan() {
        let mut g = Graph::new(2);
        assert!(g.add_transition(1, 2, f64::NAN).is_err());
    }

    #[test]
    fn transitions_iterate_in_id_then_insertion_order() {
        let mut g = Graph::new(2);
        g.add_transition(2, 1, 1.0).unwrap();
        g.add_transition(1, 2, 0.4).unwrap();
        g.add_transition(1, 1, 0.6).unwrap();
        let all: Vec<_> = g.transitions().collect();
        assert_eq!(all, vec![(1, 2, 0.4), (1, 1, 0.6), (2, 1, 1.0)]);
    }

    #[test]
    #[should_panic(expected = "state must be 1..=2")]
    fn outgoing_panics_on_zero() {
        let g = Graph::new(2);
        let _ = g.outgoing(0);
    }

    #[test]
    fn parallel_transitions_allowed() {
        // Multiple transitions from the same state to the same target are kept.
        let mut g = Graph::new(2);
        g.add_transition(1, 2, 0.3).unwrap();
        g.add_transition(1, 2, 0.7).unwrap();
        assert_eq!(g.outgoing(1).len(), 2);
    }
}
