//! Error types for the ergode-matrix crate.

/// Error type for all fallible operations in the ergode-matrix crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MatrixError {
    /// Returned when two matrices have incompatible shapes for an operation.
    #[error("cannot {op} a {left_rows}x{left_cols} matrix with a {right_rows}x{right_cols} matrix")]
    DimensionMismatch {
        /// The attempted operation ("multiply", "copy", "diff").
        op: &'static str,
        /// Rows of the left operand.
        left_rows: usize,
        /// Columns of the left operand.
        left_cols: usize,
        /// Rows of the right operand.
        right_rows: usize,
        /// Columns of the right operand.
        right_cols: usize,
    },

    /// Returned when a square matrix is required.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// Returned when a class member id falls outside a matrix's index range.
    #[error("member state {state} is outside the index range of a {rows}x{cols} matrix")]
    MemberOutOfRange {
        /// The offending 1-indexed state id.
        state: usize,
        /// Row count of the sliced matrix.
        rows: usize,
        /// Column count of the sliced matrix.
        cols: usize,
    },

    /// Returned when an initial distribution references a missing state.
    #[error("distribution state {state} is out of range 1..={n_states}")]
    StateOutOfRange {
        /// The offending 1-indexed state id.
        state: usize,
        /// Number of chain states.
        n_states: usize,
    },

    /// Returned when distribution weights cannot be normalized.
    #[error("invalid distribution weights: {reason}")]
    InvalidWeights {
        /// Description of the problem.
        reason: String,
    },
}
