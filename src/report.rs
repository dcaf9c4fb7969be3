//! Console formatting of analysis results.

use std::fmt::Write;

use ergode_graph::Validation;
use ergode_hasse::{ClassKind, CondensationEdge, is_absorbing, is_irreducible};
use ergode_matrix::{Convergence, Matrix};
use ergode_tarjan::{Partition, class_name};

/// Formats a matrix with two decimals, tab-separated.
pub fn format_matrix(m: &Matrix) -> String {
    let mut out = String::new();
    for i in 0..m.rows() {
        for j in 0..m.cols() {
            let _ = write!(out, "{:.2}\t", m.get(i, j));
        }
        out.push('\n');
    }
    out
}

/// Formats the validation verdict and any offending state sums.
pub fn format_validation(v: &Validation) -> String {
    let mut out = String::new();
    for &state in &v.failing_states() {
        let _ = writeln!(
            out,
            "state {state} has outgoing probability sum {:.6}",
            v.per_state_sums()[state - 1]
        );
    }
    if v.is_markov() {
        out.push_str("The graph is a Markov chain\n");
    } else {
        out.push_str("The graph is not a Markov chain\n");
    }
    out
}

/// Formats the partition, one class per line.
pub fn format_partition(p: &Partition) -> String {
    let mut out = String::from("Partition:\n");
    for (_, class) in p.iter() {
        let _ = writeln!(out, "{}: {}", class.name(), member_set(class.members()));
    }
    out
}

/// Formats condensation edges as `C1 -> C2` lines.
pub fn format_links(edges: &[CondensationEdge]) -> String {
    let mut out = format!("Links between classes: {}\n", edges.len());
    for e in edges {
        let _ = writeln!(out, "{} -> {}", class_name(e.from), class_name(e.to));
    }
    out
}

/// Formats the persistent/transient classification and irreducibility.
pub fn format_classification(p: &Partition, kinds: &[ClassKind]) -> String {
    let mut out = String::new();
    for (ci, class) in p.iter() {
        let kind = if kinds[ci].is_persistent() {
            "persistent"
        } else {
            "transient"
        };
        let _ = write!(
            out,
            "{}: {} is {kind}",
            class.name(),
            member_set(class.members())
        );
        if is_absorbing(class, kinds[ci]) {
            let _ = write!(out, " (state {} is absorbing)", class.members()[0]);
        }
        out.push('\n');
    }
    if is_irreducible(p) {
        out.push_str("The chain is irreducible.\n");
    } else {
        out.push_str("The chain is not irreducible.\n");
    }
    out
}

/// Formats the power iteration outcome.
pub fn format_convergence(c: &Convergence, epsilon: f64) -> String {
    if c.converged {
        format!(
            "Convergence reached after {} iterations (diff {:.6} <= epsilon {epsilon})\n",
            c.iterations, c.diff
        )
    } else {
        format!(
            "Convergence not reached after {} iterations (diff {:.6} > epsilon {epsilon})\n",
            c.iterations, c.diff
        )
    }
}

fn member_set(members: &[usize]) -> String {
    let inner: Vec<String> = members.iter().map(usize::to_string).collect();
    format!("{{{}}}", inner.join(","))
}
