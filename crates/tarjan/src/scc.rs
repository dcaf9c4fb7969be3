//! Iterative Tarjan decomposition.
//!
//! The traversal uses an explicit frame stack instead of recursion, so graphs
//! shaped like long chains do not exhaust the call stack. Semantics match the
//! recursive formulation exactly: discovery indices are assigned on first
//! visit, an edge to an unvisited neighbor descends into it and propagates
//! the child's low-link back on return, an edge to a visited neighbor still
//! on the active stack lowers the current low-link to the neighbor's
//! discovery *index*, and a vertex closes a component when its low-link
//! equals its own index.

use tracing::debug;

use ergode_graph::Graph;

use crate::partition::{Class, Partition, class_name};

/// One suspended DFS position: vertex (0-indexed) and the next neighbor slot.
struct Frame {
    vertex: usize,
    next_arc: usize,
}

/// First visit of a vertex: assign discovery index, seed the low-link, and
/// push onto the active stack.
fn visit(
    v: usize,
    next_index: &mut usize,
    index: &mut [Option<usize>],
    lowlink: &mut [usize],
    active: &mut Vec<usize>,
    on_stack: &mut [bool],
) {
    index[v] = Some(*next_index);
    lowlink[v] = *next_index;
    *next_index += 1;
    active.push(v);
    on_stack[v] = true;
}

/// Computes the partition of a graph into strongly connected components.
///
/// Classes are appended in closing order (`C1` = first component closed) and
/// class members are listed in active-stack pop order. Roots are scanned in
/// state id order; neighbors iterate in the graph's insertion order, so the
/// result is fully deterministic for a given graph.
pub fn decompose(graph: &Graph) -> Partition {
    let n = graph.n_states();
    let mut index: Vec<Option<usize>> = vec![None; n];
    let mut lowlink: Vec<usize> = vec![0; n];
    let mut on_stack: Vec<bool> = vec![false; n];
    let mut active: Vec<usize> = Vec::new();
    let mut frames: Vec<Frame> = Vec::new();
    let mut next_index = 0;
    let mut classes: Vec<Class> = Vec::new();

    for root in 0..n {
        if index[root].is_some() {
            continue;
        }
        visit(
            root,
            &mut next_index,
            &mut index,
            &mut lowlink,
            &mut active,
            &mut on_stack,
        );
        frames.push(Frame {
            vertex: root,
            next_arc: 0,
        });

        while let Some(frame) = frames.last_mut() {
            let v = frame.vertex;
            let arcs = graph.outgoing(v + 1);

            if frame.next_arc < arcs.len() {
                let w = arcs[frame.next_arc].to - 1;
                frame.next_arc += 1;

                match index[w] {
                    None => {
                        visit(
                            w,
                            &mut next_index,
                            &mut index,
                            &mut lowlink,
                            &mut active,
                            &mut on_stack,
                        );
                        frames.push(Frame {
                            vertex: w,
                            next_arc: 0,
                        });
                    }
                    Some(w_index) if on_stack[w] => {
                        // Back edge into the active stack: lower to the
                        // neighbor's discovery index, not its low-link.
                        lowlink[v] = lowlink[v].min(w_index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            // All neighbors explored.
            frames.pop();

            if index[v] == Some(lowlink[v]) {
                let mut members = Vec::new();
                while let Some(w) = active.pop() {
                    on_stack[w] = false;
                    members.push(w + 1);
                    if w == v {
                        break;
                    }
                }
                classes.push(Class::new(class_name(classes.len()), members));
            }

            if let Some(parent) = frames.last() {
                let p = parent.vertex;
                lowlink[p] = lowlink[p].min(lowlink[v]);
            }
        }
    }

    debug!(n_states = n, n_classes = classes.len(), "decomposition done");
    Partition::new(classes)
}
