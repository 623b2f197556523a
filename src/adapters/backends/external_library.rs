//! External library backend - principal eigenvector via nalgebra.
//!
//! Raises the matrix to successive powers by repeated squaring and reads the
//! normalized row sums, which converge to the principal eigenvector of a
//! positive matrix. Each power is rescaled to sum 1 so entries stay finite.

use nalgebra::DMatrix;

use crate::domain::analysis::{
    AnalysisError, ConsistencyAnalyzer, EigenvectorEstimator, PairwiseMatrix,
    PowerIterationSettings, RandomIndex, WeightVector,
};
use crate::ports::{BackendKind, CrossCheck, Estimate, WeightEstimationBackend};

#[derive(Debug, Clone, Default)]
pub struct ExternalLibraryBackend {
    settings: PowerIterationSettings,
    analyzer: ConsistencyAnalyzer,
}

impl ExternalLibraryBackend {
    pub const METHOD: &'static str = "eigenvector_squaring";
    pub const CROSS_CHECK_METHOD: &'static str = "geometric_mean";

    pub fn new(settings: PowerIterationSettings, random_index: RandomIndex) -> Self {
        Self {
            settings,
            analyzer: ConsistencyAnalyzer::new(random_index),
        }
    }

    /// Principal eigenvector by repeated squaring.
    ///
    /// Returns the weights, the number of squarings and whether successive
    /// estimates settled below the tolerance.
    fn principal_eigenvector(
        &self,
        matrix: &PairwiseMatrix,
    ) -> Result<(WeightVector, usize, bool), AnalysisError> {
        matrix.ensure_positive()?;

        let n = matrix.size();
        let mut power = DMatrix::from_fn(n, n, |i, j| matrix.get(i, j));
        let mut previous: Option<WeightVector> = None;

        for iteration in 1..=self.settings.max_iterations {
            power = &power * &power;

            let total = power.sum();
            if !(total.is_finite() && total > 0.0) {
                return Err(AnalysisError::invalid_matrix(
                    "matrix powers did not stay finite",
                ));
            }
            power /= total;

            let row_sums = (0..n).map(|i| power.row(i).sum()).collect();
            let weights = WeightVector::normalize(row_sums)?;

            if let Some(prev) = &previous {
                if weights.max_abs_difference(prev.as_slice())? < self.settings.tolerance {
                    return Ok((weights, iteration, true));
                }
            }
            previous = Some(weights);
        }

        match previous {
            Some(weights) => Ok((weights, self.settings.max_iterations, false)),
            None => Ok((WeightVector::uniform(n)?, 0, false)),
        }
    }
}

impl WeightEstimationBackend for ExternalLibraryBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::ExternalLibrary
    }

    fn estimate(&self, matrix: &PairwiseMatrix) -> Result<Estimate, AnalysisError> {
        let (weights, iterations, converged) = self.principal_eigenvector(matrix)?;
        if !converged {
            tracing::warn!(
                size = matrix.size(),
                iterations,
                "Eigenvector squaring did not converge, using last estimate"
            );
        }

        let geometric = EigenvectorEstimator::geometric_mean_weights(matrix)?;
        let consistency = self.analyzer.analyze(matrix, &weights)?;

        Ok(Estimate {
            method: Self::METHOD,
            weights,
            consistency,
            cross_check: Some(CrossCheck {
                method: Self::CROSS_CHECK_METHOD,
                weights: geometric,
                iterations: 0,
                converged: true,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wijnmalen_bocr() -> PairwiseMatrix {
        PairwiseMatrix::new(vec![
            vec![1.0, 2.0, 3.0, 5.0],
            vec![0.5, 1.0, 2.0, 4.0],
            vec![1.0 / 3.0, 0.5, 1.0, 2.0],
            vec![0.2, 0.25, 0.5, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn squaring_agrees_with_power_iteration() {
        let matrix = wijnmalen_bocr();
        let estimate = ExternalLibraryBackend::default().estimate(&matrix).unwrap();
        let power =
            EigenvectorEstimator::power_iteration_weights(&matrix, PowerIterationSettings::default())
                .unwrap();

        let diff = estimate
            .weights
            .max_abs_difference(power.weights.as_slice())
            .unwrap();
        assert!(diff < 1e-5, "difference was {}", diff);
        assert_eq!(estimate.method, "eigenvector_squaring");
    }

    #[test]
    fn squaring_reports_consistency() {
        let estimate = ExternalLibraryBackend::default().estimate(&wijnmalen_bocr()).unwrap();
        assert!((estimate.consistency.lambda_max - 4.0211).abs() < 1e-3);
        assert!((estimate.consistency.cr - 0.0078).abs() < 1e-3);
    }

    #[test]
    fn geometric_mean_is_the_cross_check() {
        let matrix = wijnmalen_bocr();
        let estimate = ExternalLibraryBackend::default().estimate(&matrix).unwrap();
        let cross_check = estimate.cross_check.unwrap();

        assert_eq!(cross_check.method, "geometric_mean");
        assert_eq!(
            cross_check.weights,
            EigenvectorEstimator::geometric_mean_weights(&matrix).unwrap()
        );
    }

    #[test]
    fn single_item_matrix_yields_unit_weight() {
        let matrix = PairwiseMatrix::new(vec![vec![1.0]]).unwrap();
        let estimate = ExternalLibraryBackend::default().estimate(&matrix).unwrap();
        assert_eq!(estimate.weights.as_slice(), &[1.0]);
        assert_eq!(estimate.consistency.cr, 0.0);
    }

    #[test]
    fn zero_entry_is_rejected() {
        let matrix = PairwiseMatrix::new(vec![vec![1.0, 0.0], vec![2.0, 1.0]]).unwrap();
        assert!(ExternalLibraryBackend::default().estimate(&matrix).is_err());
    }

    #[test]
    fn reports_external_library_kind() {
        assert_eq!(
            ExternalLibraryBackend::default().kind(),
            BackendKind::ExternalLibrary
        );
    }
}
