//! Condensation edge set and transitive reduction.

use tracing::debug;

use ergode_graph::Graph;
use ergode_tarjan::Partition;

/// A deduplicated inter-class edge, endpoints as zero-based class indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CondensationEdge {
    /// Source class index.
    pub from: usize,
    /// Destination class index.
    pub to: usize,
}

/// Builds the state -> class-index correspondence by scanning every class.
///
/// Index 0 of the returned vector holds state 1's class. The partition covers
/// every state by construction, so every slot is written.
pub fn class_of(partition: &Partition, n_states: usize) -> Vec<usize> {
    let mut corresp = vec![usize::MAX; n_states];
    for (ci, class) in partition.iter() {
        for &state in class.members() {
            corresp[state - 1] = ci;
        }
    }
    debug_assert!(
        corresp.iter().all(|&c| c != usize::MAX),
        "partition does not cover every state"
    );
    corresp
}

/// Collects the deduplicated inter-class edges of the condensation graph.
///
/// States are scanned in id order and neighbors in the graph's insertion
/// order; each `(from_class, to_class)` pair is pushed the first time it is
/// seen, fixing a deterministic edge order for [`reduce_transitive`].
pub fn condense(graph: &Graph, corresp: &[usize]) -> Vec<CondensationEdge> {
    let n_classes = corresp.iter().map(|&c| c + 1).max().unwrap_or(0);
    let mut seen = vec![vec![false; n_classes]; n_classes];
    let mut edges = Vec::new();

    for (from, to, _) in graph.transitions() {
        let ci = corresp[from - 1];
        let cj = corresp[to - 1];
        if ci != cj && !seen[ci][cj] {
            edges.push(CondensationEdge { from: ci, to: cj });
            seen[ci][cj] = true;
        }
    }

    debug!(n_edges = edges.len(), "condensation built");
    edges
}

/// Removes transitively implied edges in place.
///
/// An edge `(a, c)` is removed when two other edges `(a, b)` and `(b, c)`
/// both remain in the set; witnesses are identified by index, never by
/// label equality with the candidate. Removal swaps the last edge into the
/// vacated slot and re-examines the same index, so the surviving set is
/// deterministic given the insertion order fixed by [`condense`].
///
/// Running the reduction twice is a no-op: the second pass finds no witness
/// pair for any surviving edge.
pub fn reduce_transitive(edges: &mut Vec<CondensationEdge>) {
    let mut i = 0;
    while i < edges.len() {
        let candidate = edges[i];
        let mut witnessed = false;

        'witness: for j in 0..edges.len() {
            if j == i || edges[j].from != candidate.from {
                continue;
            }
            let mid = edges[j].to;
            for k in 0..edges.len() {
                if k != i && k != j && edges[k].from == mid && edges[k].to == candidate.to {
                    witnessed = true;
                    break 'witness;
                }
            }
        }

        if witnessed {
            edges.swap_remove(i);
        } else {
            i += 1;
        }
    }
}
