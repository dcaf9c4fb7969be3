//! Initial distributions and their propagation through the chain.

use rand::Rng;
use tracing::debug;

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::power::power;

/// Strategy for building the 1xN initial distribution row vector.
#[derive(Debug, Clone, PartialEq)]
pub enum InitialDistribution {
    /// All mass on one 1-indexed state.
    SingleState(usize),
    /// Mass spread over `(state, weight)` pairs; weights are normalized to
    /// sum to 1.
    Weighted(Vec<(usize, f64)>),
    /// Equal mass `1/N` on every state.
    Uniform,
    /// Random mass drawn uniform per state, then normalized. Reproducible
    /// through the caller-supplied rng.
    Random,
}

impl InitialDistribution {
    /// Builds the 1xN row vector for a chain with `n_states` states.
    ///
    /// The result always sums to 1 (within floating arithmetic for the
    /// weighted and random strategies).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::StateOutOfRange`] for a state id outside
    /// `1..=n_states` and [`MatrixError::InvalidWeights`] for empty, negative,
    /// non-finite, or all-zero weights.
    pub fn build(&self, n_states: usize, rng: &mut impl Rng) -> Result<Matrix, MatrixError> {
        if n_states == 0 {
            return Err(MatrixError::InvalidWeights {
                reason: "cannot build a distribution over zero states".to_string(),
            });
        }

        let mut row = Matrix::zeros(1, n_states);
        match self {
            Self::SingleState(state) => {
                check_state(*state, n_states)?;
                row.set(0, state - 1, 1.0);
            }
            Self::Weighted(entries) => {
                if entries.is_empty() {
                    return Err(MatrixError::InvalidWeights {
                        reason: "no weighted states given".to_string(),
                    });
                }
                let mut total = 0.0;
                for &(state, weight) in entries {
                    check_state(state, n_states)?;
                    if !weight.is_finite() || weight < 0.0 {
                        return Err(MatrixError::InvalidWeights {
                            reason: format!("weight {weight} for state {state}"),
                        });
                    }
                    total += weight;
                }
                if total <= 0.0 {
                    return Err(MatrixError::InvalidWeights {
                        reason: "weights sum to 0".to_string(),
                    });
                }
                for &(state, weight) in entries {
                    let current = row.get(0, state - 1);
                    row.set(0, state - 1, current + weight / total);
                }
            }
            Self::Uniform => {
                let mass = 1.0 / n_states as f64;
                for j in 0..n_states {
                    row.set(0, j, mass);
                }
            }
            Self::Random => {
                let draws: Vec<f64> = (0..n_states).map(|_| rng.random::<f64>()).collect();
                let total: f64 = draws.iter().sum();
                for (j, d) in draws.iter().enumerate() {
                    row.set(0, j, d / total);
                }
            }
        }

        debug!(strategy = ?self, n_states, "initial distribution built");
        Ok(row)
    }
}

fn check_state(state: usize, n_states: usize) -> Result<(), MatrixError> {
    if state == 0 || state > n_states {
        return Err(MatrixError::StateOutOfRange { state, n_states });
    }
    Ok(())
}

/// Propagates a 1xN distribution `n` steps: `dist * M^n`.
///
/// With `n = 0` the result equals the initial distribution exactly.
///
/// # Errors
///
/// Propagates dimension errors from [`power`] and the final multiplication.
pub fn propagate(dist: &Matrix, m: &Matrix, n: usize) -> Result<Matrix, MatrixError> {
    let stepped = power(m, n)?;
    dist.multiply(&stepped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn row_sum(m: &Matrix) -> f64 {
        (0..m.cols()).map(|j| m.get(0, j)).sum()
    }

    #[test]
    fn single_state_masses_one_entry() {
        let d = InitialDistribution::SingleState(2)
            .build(3, &mut rng())
            .unwrap();
        assert!((d.get(0, 1) - 1.0).abs() < 1e-12);
        assert!((row_sum(&d) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_state_out_of_range() {
        let err = InitialDistribution::SingleState(4)
            .build(3, &mut rng())
            .unwrap_err();
        assert!(matches!(
            err,
            MatrixError::StateOutOfRange {
                state: 4,
                n_states: 3
            }
        ));
    }

    #[test]
    fn weighted_normalizes() {
        let d = InitialDistribution::Weighted(vec![(1, 2.0), (3, 6.0)])
            .build(3, &mut rng())
            .unwrap();
        assert!((d.get(0, 0) - 0.25).abs() < 1e-12);
        assert!((d.get(0, 2) - 0.75).abs() < 1e-12);
        assert!((row_sum(&d) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn weighted_rejects_bad_weights() {
        let empty = InitialDistribution::Weighted(vec![]).build(3, &mut rng());
        assert!(matches!(empty, Err(MatrixError::InvalidWeights { .. })));

        let negative =
            InitialDistribution::Weighted(vec![(1, -1.0), (2, 2.0)]).build(3, &mut rng());
        assert!(matches!(negative, Err(MatrixError::InvalidWeights { .. })));

        let zero = InitialDistribution::Weighted(vec![(1, 0.0)]).build(3, &mut rng());
        assert!(matches!(zero, Err(MatrixError::InvalidWeights { .. })));
    }

    #[test]
    fn uniform_spreads_evenly() {
        let d = InitialDistribution::Uniform.build(4, &mut rng()).unwrap();
        for j in 0..4 {
            assert!((d.get(0, j) - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn random_sums_to_one_and_is_seeded() {
        let a = InitialDistribution::Random.build(5, &mut rng()).unwrap();
        let b = InitialDistribution::Random.build(5, &mut rng()).unwrap();
        assert!((row_sum(&a) - 1.0).abs() < 1e-9);
        // Same seed, same draws.
        assert!((a.diff_norm(&b).unwrap() - 0.0).abs() < 1e-12);

        let mut other = StdRng::seed_from_u64(7);
        let c = InitialDistribution::Random.build(5, &mut other).unwrap();
        assert!(a.diff_norm(&c).unwrap() > 1e-6);
    }

    #[test]
    fn propagate_zero_steps_is_exact_identity() {
        let m = Matrix::from_rows(&[vec![0.5, 0.5], vec![0.25, 0.75]]).unwrap();
        let d = InitialDistribution::Weighted(vec![(1, 1.0), (2, 3.0)])
            .build(2, &mut rng())
            .unwrap();
        let p = propagate(&d, &m, 0).unwrap();
        assert_eq!(p.row(0), d.row(0));
    }

    #[test]
    fn propagated_distribution_stays_stochastic() {
        let m = Matrix::from_rows(&[vec![0.5, 0.5], vec![0.25, 0.75]]).unwrap();
        let d = InitialDistribution::SingleState(1)
            .build(2, &mut rng())
            .unwrap();
        for n in 0..=10 {
            let p = propagate(&d, &m, n).unwrap();
            assert!(
                (row_sum(&p) - 1.0).abs() < 1e-9,
                "sum after {n} steps drifted: {}",
                row_sum(&p)
            );
        }
    }

    #[test]
    fn propagate_one_step_matches_row() {
        // Mass on state 1 after one step equals row 1 of M.
        let m = Matrix::from_rows(&[vec![0.1, 0.9], vec![0.8, 0.2]]).unwrap();
        let d = InitialDistribution::SingleState(1)
            .build(2, &mut rng())
            .unwrap();
        let p = propagate(&d, &m, 1).unwrap();
        assert!((p.get(0, 0) - 0.1).abs() < 1e-12);
        assert!((p.get(0, 1) - 0.9).abs() < 1e-12);
    }
}
