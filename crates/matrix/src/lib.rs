//! Dense matrix engine for Markov chain long-run analysis.
//!
//! The [`Matrix`] type is a plain row-major `rows x cols` store of `f64`
//! with explicit, owned results: every operation that produces a matrix
//! allocates a fresh one, and dimension mismatches surface as
//! [`MatrixError`] instead of panics.
//!
//! On top of the core ops sit:
//! - [`power_iterate`]: repeated self-multiplication until the elementwise
//!   difference norm drops below epsilon (or a hard iteration cap);
//! - [`power`]: exact `M^n` by iterated multiplication;
//! - [`InitialDistribution`] / [`propagate`]: 1xN row vectors pushed
//!   through `M^n`.
//!
//! # Quick start
//!
//! ```
//! use ergode_matrix::Matrix;
//!
//! let m = Matrix::from_rows(&[vec![0.5, 0.5], vec![0.0, 1.0]]).unwrap();
//! let i = Matrix::identity(2);
//! let product = m.multiply(&i).unwrap();
//! assert!((m.diff_norm(&product).unwrap() - 0.0).abs() < 1e-12);
//! ```

pub mod distribution;
pub mod error;
pub mod matrix;
pub mod power;

pub use distribution::{InitialDistribution, propagate};
pub use error::MatrixError;
pub use matrix::Matrix;
pub use power::{Convergence, DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS, power, power_iterate};
