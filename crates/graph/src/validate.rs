//! Stochasticity check: every state's outgoing probabilities must sum to ~1.

use tracing::debug;

use crate::graph::Graph;

/// Lower bound of the accepted per-state probability sum.
const SUM_LOWER: f64 = 0.99;
/// Upper bound of the accepted per-state probability sum (exactly 1, no slack).
const SUM_UPPER: f64 = 1.00;

/// Result of validating a graph's per-state outgoing probability sums.
#[derive(Debug, Clone)]
pub struct Validation {
    per_state_sums: Vec<f64>,
}

impl Validation {
    /// Per-state outgoing probability sums, index 0 = state 1.
    pub fn per_state_sums(&self) -> &[f64] {
        &self.per_state_sums
    }

    /// True when a single 1-indexed state passes the tolerance band.
    pub fn state_ok(&self, state: usize) -> bool {
        let sum = self.per_state_sums[state - 1];
        (SUM_LOWER..=SUM_UPPER).contains(&sum)
    }

    /// 1-indexed states whose sums fall outside the tolerance band.
    pub fn failing_states(&self) -> Vec<usize> {
        (1..=self.per_state_sums.len())
            .filter(|&s| !self.state_ok(s))
            .collect()
    }

    /// True when every state passes, i.e. the graph is a Markov chain.
    pub fn is_markov(&self) -> bool {
        (1..=self.per_state_sums.len()).all(|s| self.state_ok(s))
    }
}

/// Computes per-state outgoing probability sums and checks each against the
/// band `[0.99, 1.00]`.
///
/// The band is asymmetric on purpose: a sum of 0.995 passes while 1.001 does
/// not. This matches the historical behavior this tool reproduces.
pub fn validate(graph: &Graph) -> Validation {
    let per_state_sums: Vec<f64> = (1..=graph.n_states())
        .map(|s| graph.outgoing(s).iter().map(|a| a.prob).sum())
        .collect();

    let validation = Validation { per_state_sums };
    debug!(
        n_failing = validation.failing_states().len(),
        "validation complete"
    );
    validation
}
