//! Persistent/transient classification of communicating classes.

use tracing::debug;

use ergode_graph::Graph;
use ergode_tarjan::{Class, Partition};

use crate::condense::class_of;

/// Long-run character of a communicating class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    /// No transition ever leaves the class.
    Persistent,
    /// Some transition leaves the class.
    Transient,
}

impl ClassKind {
    /// True for [`ClassKind::Persistent`].
    pub fn is_persistent(self) -> bool {
        matches!(self, ClassKind::Persistent)
    }
}

/// Classifies every class of the partition, in partition order.
///
/// A class is persistent iff every outgoing transition of every member lands
/// back inside the class.
pub fn classify(graph: &Graph, partition: &Partition) -> Vec<ClassKind> {
    let corresp = class_of(partition, graph.n_states());

    let kinds: Vec<ClassKind> = partition
        .iter()
        .map(|(ci, class)| {
            let leaves = class.members().iter().any(|&state| {
                graph
                    .outgoing(state)
                    .iter()
                    .any(|arc| corresp[arc.to - 1] != ci)
            });
            if leaves {
                ClassKind::Transient
            } else {
                ClassKind::Persistent
            }
        })
        .collect();

    debug!(
        n_persistent = kinds.iter().filter(|k| k.is_persistent()).count(),
        n_transient = kinds.iter().filter(|k| !k.is_persistent()).count(),
        "classes classified"
    );
    kinds
}

/// True when the class denotes an absorbing state: persistent and singleton.
pub fn is_absorbing(class: &Class, kind: ClassKind) -> bool {
    kind.is_persistent() && class.is_singleton()
}

/// True when the chain is irreducible: exactly one communicating class.
pub fn is_irreducible(partition: &Partition) -> bool {
    partition.len() == 1
}
