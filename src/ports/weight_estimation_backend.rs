//! Weight Estimation Backend Port - Reference weight computation interface.
//!
//! This port defines the contract for producing the reference weights and
//! consistency figures a candidate is validated against. The application
//! layer depends on this trait, while adapters (the built-in reference
//! implementation and the linear-algebra backend) provide it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::analysis::{AnalysisError, ConsistencyResult, PairwiseMatrix, WeightVector};

/// Which backend produced a reference estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Geometric mean with a power-iteration cross-check.
    #[default]
    BuiltinReference,
    /// Eigenvector from a linear-algebra library.
    ExternalLibrary,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::BuiltinReference => "builtin_reference",
            BackendKind::ExternalLibrary => "external_library",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weights from an independent second method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossCheck {
    pub method: &'static str,
    pub weights: WeightVector,
    pub iterations: usize,
    pub converged: bool,
}

/// Reference result for one matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    /// Name of the method behind `weights`.
    pub method: &'static str,
    pub weights: WeightVector,
    /// Consistency of the matrix under `weights`.
    pub consistency: ConsistencyResult,
    pub cross_check: Option<CrossCheck>,
}

/// Port for computing reference weights.
///
/// # Contract
///
/// Implementations must:
/// - Be pure: the same matrix always yields the same estimate
/// - Return weights summing to 1 and aligned with the matrix rows
/// - Compute consistency from the returned primary weights
/// - Treat non-convergence of an iterative method as a soft signal
///   (`converged = false`), never as an error
pub trait WeightEstimationBackend: Send + Sync {
    /// Identifies the backend in responses and logs.
    fn kind(&self) -> BackendKind;

    /// Computes reference weights, consistency and an optional cross-check.
    fn estimate(&self, matrix: &PairwiseMatrix) -> Result<Estimate, AnalysisError>;
}
