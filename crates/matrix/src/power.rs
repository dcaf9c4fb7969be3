//! Matrix-power iteration and arbitrary powers.

use tracing::{debug, warn};

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Convergence threshold on the elementwise difference norm.
pub const DEFAULT_EPSILON: f64 = 0.01;

/// Safety cap on the number of self-multiplications.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Outcome of a power iteration run.
///
/// Non-convergence is reported, not raised: when the cap is hit the last
/// computed matrix is kept and `converged` is false.
#[derive(Debug, Clone)]
pub struct Convergence {
    /// Last computed power of the input matrix.
    pub matrix: Matrix,
    /// Number of multiplications performed; the matrix is `M^(iterations+1)`.
    pub iterations: usize,
    /// Final difference norm between the last two powers.
    pub diff: f64,
    /// True when `diff <= epsilon` within the iteration cap.
    pub converged: bool,
}

/// Iterates `Mk <- Mk * M` from `Mk = M` until the difference norm between
/// consecutive powers drops to `epsilon`, or `max_iterations` is reached.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] for a non-square input; self
/// multiplication is otherwise infallible.
pub fn power_iterate(
    m: &Matrix,
    epsilon: f64,
    max_iterations: usize,
) -> Result<Convergence, MatrixError> {
    if !m.is_square() {
        return Err(MatrixError::NotSquare {
            rows: m.rows(),
            cols: m.cols(),
        });
    }

    let mut current = m.clone();
    let mut iterations = 0;
    let mut diff = f64::INFINITY;

    while iterations < max_iterations {
        let next = current.multiply(m)?;
        diff = next.diff_norm(&current)?;
        current = next;
        iterations += 1;

        if diff <= epsilon {
            debug!(iterations, diff, "power iteration converged");
            return Ok(Convergence {
                matrix: current,
                iterations,
                diff,
                converged: true,
            });
        }
    }

    warn!(
        iterations,
        diff, "power iteration hit the cap without converging"
    );
    Ok(Convergence {
        matrix: current,
        iterations,
        diff,
        converged: false,
    })
}

/// Computes `M^n`: the identity for `n = 0`, a copy for `n = 1`, and `n - 1`
/// multiplications otherwise.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] for a non-square input.
pub fn power(m: &Matrix, n: usize) -> Result<Matrix, MatrixError> {
    if !m.is_square() {
        return Err(MatrixError::NotSquare {
            rows: m.rows(),
            cols: m.cols(),
        });
    }
    match n {
        0 => Ok(Matrix::identity(m.rows())),
        1 => Ok(m.clone()),
        _ => {
            let mut result = m.clone();
            for _ in 1..n {
                result = result.multiply(m)?;
            }
            Ok(result)
        }
    }
}
