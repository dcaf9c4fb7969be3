//! Communicating classes and the partition they form.

/// Display name for a class by zero-based index: `C1`, `C2`, ...
///
/// Returns a freshly owned string per call.
pub fn class_name(index: usize) -> String {
    format!("C{}", index + 1)
}

/// One strongly connected component: a non-empty set of 1-indexed state ids.
///
/// Member order is the pop order of Tarjan's active stack, preserved for
/// deterministic downstream output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    name: String,
    members: Vec<usize>,
}

impl Class {
    pub(crate) fn new(name: String, members: Vec<usize>) -> Self {
        debug_assert!(!members.is_empty(), "a class cannot be empty");
        Self { name, members }
    }

    /// Display name (`C1`, `C2`, ...), assigned in discovery order.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member state ids (1-indexed), in stack pop order.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Number of member states.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True for a single-state class.
    pub fn is_singleton(&self) -> bool {
        self.members.len() == 1
    }

    /// True when `state` belongs to this class.
    pub fn contains(&self, state: usize) -> bool {
        self.members.contains(&state)
    }
}

/// Ordered sequence of classes; every state belongs to exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    classes: Vec<Class>,
}

impl Partition {
    pub(crate) fn new(classes: Vec<Class>) -> Self {
        Self { classes }
    }

    /// All classes in closing order.
    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True when there are no classes (only for a zero-state graph).
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterates `(index, class)` pairs in closing order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Class)> {
        self.classes.iter().enumerate()
    }
}
