//! Error types for the ergode-period crate.

use ergode_matrix::MatrixError;

/// Error type for all fallible operations in the ergode-period crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PeriodError {
    /// Returned when no diagonal entry becomes positive within N powers, so
    /// the period is undefined for this class.
    #[error("no return time within {n_powers} powers, period undefined")]
    NoReturnTimes {
        /// Number of powers examined (the class size).
        n_powers: usize,
    },

    /// Returned when the underlying matrix arithmetic fails.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
