//! Eigenvector Estimator - Priority weights from a pairwise matrix.
//!
//! Two independent approximations of the principal eigenvector:
//!
//! - Geometric mean of each row (closed form, Saaty's recommended method)
//! - Power iteration from the uniform vector (iterative cross-check)

use serde::{Deserialize, Serialize};

use super::{AnalysisError, PairwiseMatrix, WeightVector};

/// Default iteration budget for the power method.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Default convergence threshold for the power method.
pub const DEFAULT_POWER_TOLERANCE: f64 = 1e-6;

/// Stopping rules for power iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerIterationSettings {
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for PowerIterationSettings {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_POWER_TOLERANCE,
        }
    }
}

/// Result of power iteration.
///
/// Running out of iterations is not an error: the last iterate is kept and
/// `converged` is false.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerIterationOutcome {
    pub weights: WeightVector,
    pub iterations: usize,
    pub converged: bool,
}

/// Eigenvector estimation functions.
pub struct EigenvectorEstimator;

impl EigenvectorEstimator {
    /// Computes weights with the geometric-mean method.
    ///
    /// # Algorithm
    /// For each row i: g_i = (Π_j a_ij)^(1/n), then w = g / Σg
    ///
    /// The mean is taken in log space so large matrices cannot overflow the
    /// row product.
    ///
    /// # Errors
    /// `InvalidMatrix` if any entry is zero or negative.
    pub fn geometric_mean_weights(matrix: &PairwiseMatrix) -> Result<WeightVector, AnalysisError> {
        matrix.ensure_positive()?;

        let n = matrix.size() as f64;
        let geometric_means = matrix
            .rows()
            .iter()
            .map(|row| (row.iter().map(|a| a.ln()).sum::<f64>() / n).exp())
            .collect();

        WeightVector::normalize(geometric_means)
    }

    /// Computes weights with the power method.
    ///
    /// # Algorithm
    /// v_0 = uniform; v_{k+1} = A·v_k / Σ(A·v_k), stopping once
    /// max|v_{k+1} - v_k| < tolerance or the budget is spent.
    ///
    /// # Edge Cases
    /// - n = 1: returns `[1.0]` without iterating
    /// - Budget spent: returns the last iterate with `converged = false`
    pub fn power_iteration_weights(
        matrix: &PairwiseMatrix,
        settings: PowerIterationSettings,
    ) -> Result<PowerIterationOutcome, AnalysisError> {
        if matrix.size() == 1 {
            return Ok(PowerIterationOutcome {
                weights: WeightVector::unit(),
                iterations: 0,
                converged: true,
            });
        }

        let mut current = WeightVector::uniform(matrix.size())?;

        for iteration in 1..=settings.max_iterations {
            let next = WeightVector::normalize(matrix.multiply(current.as_slice())?)?;
            let change = next.max_abs_difference(current.as_slice())?;
            current = next;

            if change < settings.tolerance {
                return Ok(PowerIterationOutcome {
                    weights: current,
                    iterations: iteration,
                    converged: true,
                });
            }
        }

        Ok(PowerIterationOutcome {
            weights: current,
            iterations: settings.max_iterations,
            converged: false,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const SAATY_SCALE: [f64; 9] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];

    /// Random positive reciprocal matrix on the 1/9..9 scale.
    fn reciprocal_matrix() -> impl Strategy<Value = PairwiseMatrix> {
        (1usize..=8).prop_flat_map(|n| {
            let judgments = n * (n - 1) / 2;
            prop::collection::vec(
                (prop::sample::select(SAATY_SCALE.to_vec()), any::<bool>()),
                judgments,
            )
            .prop_map(move |upper| {
                let mut rows = vec![vec![1.0; n]; n];
                let mut cells = upper.into_iter();
                for i in 0..n {
                    for j in (i + 1)..n {
                        if let Some((value, invert)) = cells.next() {
                            let a = if invert { 1.0 / value } else { value };
                            rows[i][j] = a;
                            rows[j][i] = 1.0 / a;
                        }
                    }
                }
                PairwiseMatrix::new(rows).unwrap()
            })
        })
    }

    proptest! {
        /// Property: geometric-mean weights sum to 1
        #[test]
        fn geometric_mean_weights_sum_to_one(matrix in reciprocal_matrix()) {
            let weights = EigenvectorEstimator::geometric_mean_weights(&matrix).unwrap();
            let sum: f64 = weights.as_slice().iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
            prop_assert!(weights.as_slice().iter().all(|w| *w > 0.0));
        }

        /// Property: power-iteration weights sum to 1
        #[test]
        fn power_iteration_weights_sum_to_one(matrix in reciprocal_matrix()) {
            let outcome = EigenvectorEstimator::power_iteration_weights(
                &matrix,
                PowerIterationSettings::default(),
            ).unwrap();
            let sum: f64 = outcome.weights.as_slice().iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
            prop_assert_eq!(outcome.weights.len(), matrix.size());
        }

        /// Property: no hidden state between calls
        #[test]
        fn geometric_mean_is_deterministic(matrix in reciprocal_matrix()) {
            let first = EigenvectorEstimator::geometric_mean_weights(&matrix).unwrap();
            let second = EigenvectorEstimator::geometric_mean_weights(&matrix).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
