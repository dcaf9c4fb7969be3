//! Per-class periodicity analysis.
//!
//! Given the square submatrix of one communicating class, [`class_period`]
//! walks the powers `M^1 .. M^N` (N = class size) and records every step `k`
//! at which some diagonal entry is strictly positive, i.e. some member state
//! can return to itself in exactly `k` steps. The class period is the gcd of
//! those return times: 1 means aperiodic, anything larger is the cycle length.
//!
//! # Quick start
//!
//! ```
//! use ergode_matrix::Matrix;
//! use ergode_period::class_period;
//!
//! // 2-cycle: returns only at even steps.
//! let sub = Matrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
//! assert_eq!(class_period(&sub).unwrap(), 2);
//! ```

pub mod error;
pub mod period;

pub use error::PeriodError;
pub use period::{class_period, gcd_all};
