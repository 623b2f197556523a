//! Built-in reference backend - geometric mean with a power-iteration cross-check.

use crate::domain::analysis::{
    AnalysisError, ConsistencyAnalyzer, EigenvectorEstimator, PairwiseMatrix,
    PowerIterationSettings, RandomIndex,
};
use crate::ports::{BackendKind, CrossCheck, Estimate, WeightEstimationBackend};

/// Reference implementation following Saaty (1980).
///
/// Primary weights come from the geometric-mean method; power iteration runs
/// alongside as an independent cross-check.
#[derive(Debug, Clone, Default)]
pub struct BuiltinReferenceBackend {
    power_iteration: PowerIterationSettings,
    analyzer: ConsistencyAnalyzer,
}

impl BuiltinReferenceBackend {
    pub const METHOD: &'static str = "geometric_mean";
    pub const CROSS_CHECK_METHOD: &'static str = "power_iteration";

    pub fn new(power_iteration: PowerIterationSettings, random_index: RandomIndex) -> Self {
        Self {
            power_iteration,
            analyzer: ConsistencyAnalyzer::new(random_index),
        }
    }
}

impl WeightEstimationBackend for BuiltinReferenceBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::BuiltinReference
    }

    fn estimate(&self, matrix: &PairwiseMatrix) -> Result<Estimate, AnalysisError> {
        let weights = EigenvectorEstimator::geometric_mean_weights(matrix)?;
        let power = EigenvectorEstimator::power_iteration_weights(matrix, self.power_iteration)?;

        if !power.converged {
            tracing::warn!(
                size = matrix.size(),
                iterations = power.iterations,
                "Power iteration did not converge, using last iterate"
            );
        }

        let consistency = self.analyzer.analyze(matrix, &weights)?;

        Ok(Estimate {
            method: Self::METHOD,
            weights,
            consistency,
            cross_check: Some(CrossCheck {
                method: Self::CROSS_CHECK_METHOD,
                weights: power.weights,
                iterations: power.iterations,
                converged: power.converged,
            }),
        })
    }
}
