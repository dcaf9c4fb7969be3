//! Flowchart text generation.

use std::fmt::Write;

use ergode_graph::Graph;
use ergode_hasse::CondensationEdge;
use ergode_tarjan::Partition;

/// Bijective base-26 alphabetic id for a 1-indexed number: 1 -> "A",
/// 26 -> "Z", 27 -> "AA", 703 -> "AAA".
///
/// Returns a freshly owned string per call.
pub fn node_id(mut num: usize) -> String {
    let mut id = Vec::new();
    while num > 0 {
        num -= 1;
        id.push(b'A' + (num % 26) as u8);
        num /= 26;
    }
    id.reverse();
    // Only ASCII uppercase bytes were pushed.
    String::from_utf8(id).unwrap_or_default()
}

/// Renders the chain graph: one `X((n))` node per state and one
/// `X -->|p.pp|Y` edge per transition, in graph iteration order.
pub fn render_graph(graph: &Graph) -> String {
    let mut out = String::new();
    out.push_str("---\n");
    out.push_str("config:\n");
    out.push_str("  layout: elk\n");
    out.push_str("  theme: neo\n");
    out.push_str("  look: neo\n");
    out.push_str("---\n");
    out.push_str("flowchart LR\n");

    for state in 1..=graph.n_states() {
        let _ = writeln!(out, "{}(({state}))", node_id(state));
    }
    for (from, to, prob) in graph.transitions() {
        let _ = writeln!(out, "{} -->|{prob:.2}|{}", node_id(from), node_id(to));
    }
    out
}

/// Renders the Hasse diagram: one node per class labeled with its literal
/// member set, and one link per condensation edge. Pass the edge set either
/// reduced or unreduced; this function draws whatever it is given.
pub fn render_hasse(partition: &Partition, edges: &[CondensationEdge]) -> String {
    let mut out = String::new();
    out.push_str("---\n");
    out.push_str("config:\n");
    out.push_str("   layout: elk\n");
    out.push_str("   theme: mc\n");
    out.push_str("   look: classic\n");
    out.push_str("---\n");
    out.push_str("\nflowchart LR\n");

    for (ci, class) in partition.iter() {
        let members: Vec<String> = class.members().iter().map(usize::to_string).collect();
        let _ = writeln!(out, "{}[\"{{{}}}\"]", node_id(ci + 1), members.join(","));
    }
    out.push('\n');

    for edge in edges {
        let _ = writeln!(out, "{} --> {}", node_id(edge.from + 1), node_id(edge.to + 1));
    }
    out
}
