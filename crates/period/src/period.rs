//! Return-time collection and gcd.

use tracing::debug;

use ergode_matrix::{Matrix, MatrixError};

use crate::error::PeriodError;

/// Greatest common divisor over a slice; 0 for an empty slice.
pub fn gcd_all(values: &[usize]) -> usize {
    values.iter().copied().fold(0, gcd)
}

fn gcd(a: usize, b: usize) -> usize {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Computes the period of one communicating class from its square submatrix.
///
/// Walks `power = M^k` incrementally for `k = 1..=N` (N = submatrix size),
/// recording each `k` whose power has a strictly positive diagonal entry.
/// The period is the gcd of the recorded return times; a period of 1 means
/// the class is aperiodic.
///
/// # Errors
///
/// Returns [`PeriodError::NoReturnTimes`] when no diagonal entry ever turns
/// positive (periodicity undefined for this class), and wraps
/// [`MatrixError`] when the input is not square.
pub fn class_period(sub: &Matrix) -> Result<usize, PeriodError> {
    if !sub.is_square() {
        return Err(MatrixError::NotSquare {
            rows: sub.rows(),
            cols: sub.cols(),
        }
        .into());
    }

    let n = sub.rows();
    let mut return_times = Vec::new();
    let mut power = sub.clone();

    for k in 1..=n {
        let diag_positive = (0..n).any(|i| power.get(i, i) > 0.0);
        if diag_positive {
            return_times.push(k);
        }
        if k < n {
            power = power.multiply(sub)?;
        }
    }

    if return_times.is_empty() {
        return Err(PeriodError::NoReturnTimes { n_powers: n });
    }

    let period = gcd_all(&return_times);
    debug!(?return_times, period, "class period computed");
    Ok(period)
}
