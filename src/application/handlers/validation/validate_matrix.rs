//! ValidateMatrixHandler - Recomputes reference weights and judges a candidate.
//!
//! Rejects structurally invalid requests before anything reaches the numeric
//! engine, then asks the configured backend for an estimate and compares the
//! candidate result against it.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::analysis::{
    Comparator, ComparisonResult, ItemLabels, MethodAgreement, PairwiseMatrix,
};
use crate::domain::foundation::{DomainError, ValidationError};
use crate::ports::{BackendKind, Estimate, WeightEstimationBackend};

/// Result computed by the system under validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandidateResult {
    pub weights: Vec<f64>,
    pub cr: Option<f64>,
    pub lambda_max: Option<f64>,
}

/// Command to validate one matrix.
#[derive(Debug, Clone, Default)]
pub struct ValidateMatrixCommand {
    pub matrix: Vec<Vec<f64>>,
    /// Labels for the rows; synthesized when absent.
    pub items: Option<Vec<String>>,
    pub candidate: Option<CandidateResult>,
}

/// Outcome of validating one matrix.
#[derive(Debug, Clone)]
pub struct MatrixValidation {
    pub items: ItemLabels,
    /// Reference weight per item label.
    pub weights_by_item: BTreeMap<String, f64>,
    pub backend: BackendKind,
    pub estimate: Estimate,
    /// Primary vs cross-check weights, when the backend produced both.
    pub method_agreement: Option<MethodAgreement>,
    pub candidate: Option<CandidateResult>,
    pub comparison: Option<ComparisonResult>,
    /// |candidate λmax - reference λmax|, informational only.
    pub lambda_diff: Option<f64>,
}

impl MatrixValidation {
    /// A validation without a candidate has nothing to contradict it.
    pub fn is_valid(&self) -> bool {
        self.comparison.as_ref().map_or(true, |c| c.is_valid)
    }
}

/// Handler for validating a single matrix.
pub struct ValidateMatrixHandler {
    backend: Arc<dyn WeightEstimationBackend>,
    comparator: Comparator,
}

impl ValidateMatrixHandler {
    pub fn new(backend: Arc<dyn WeightEstimationBackend>, comparator: Comparator) -> Self {
        Self {
            backend,
            comparator,
        }
    }

    pub fn handle(&self, cmd: ValidateMatrixCommand) -> Result<MatrixValidation, DomainError> {
        // 1. Structural checks
        let (matrix, items) = Self::parse_input(cmd.matrix, cmd.items)?;
        if let Some(candidate) = &cmd.candidate {
            Self::check_candidate(candidate, matrix.size())?;
        }

        // 2. Reference estimate
        let estimate = self.backend.estimate(&matrix)?;
        debug!(
            size = matrix.size(),
            backend = %self.backend.kind(),
            lambda_max = estimate.consistency.lambda_max,
            cr = estimate.consistency.cr,
            "Computed reference weights"
        );
        if estimate.consistency.extrapolated_random_index {
            warn!(
                size = matrix.size(),
                random_index = estimate.consistency.random_index,
                "Matrix exceeds the Random Index table, CR uses the fallback value"
            );
        }

        let weights_by_item = estimate.weights.by_label(&items)?;

        // 3. Cross-method agreement
        let method_agreement = match &estimate.cross_check {
            Some(cross_check) => Some(
                self.comparator
                    .methods_agree(&estimate.weights, &cross_check.weights)?,
            ),
            None => None,
        };

        // 4. Candidate comparison
        let (comparison, lambda_diff) = match &cmd.candidate {
            Some(candidate) => {
                let comparison = self.comparator.compare(
                    &candidate.weights,
                    &estimate.weights,
                    candidate.cr,
                    estimate.consistency.cr,
                )?;
                debug!(
                    is_valid = comparison.is_valid,
                    max_weight_diff = comparison.max_weight_diff,
                    cr_diff = comparison.cr_diff,
                    "Compared candidate result"
                );
                let lambda_diff = candidate
                    .lambda_max
                    .map(|l| (l - estimate.consistency.lambda_max).abs());
                (Some(comparison), lambda_diff)
            }
            None => (None, None),
        };

        Ok(MatrixValidation {
            items,
            weights_by_item,
            backend: self.backend.kind(),
            estimate,
            method_agreement,
            candidate: cmd.candidate,
            comparison,
            lambda_diff,
        })
    }

    /// Builds the matrix and labels, rejecting anything the engine cannot take.
    fn parse_input(
        rows: Vec<Vec<f64>>,
        items: Option<Vec<String>>,
    ) -> Result<(PairwiseMatrix, ItemLabels), DomainError> {
        if rows.is_empty() {
            return Err(ValidationError::empty_field("matrix").into());
        }

        let matrix = PairwiseMatrix::new(rows)?;
        matrix.ensure_positive()?;

        let items = match items {
            Some(labels) => {
                let labels = ItemLabels::new(labels)?;
                if labels.len() != matrix.size() {
                    return Err(
                        ValidationError::dimension_mismatch("items", matrix.size(), labels.len())
                            .into(),
                    );
                }
                labels
            }
            None => ItemLabels::synthesized(matrix.size()),
        };

        Ok((matrix, items))
    }

    fn check_candidate(candidate: &CandidateResult, n: usize) -> Result<(), DomainError> {
        if candidate.weights.len() != n {
            return Err(
                ValidationError::dimension_mismatch("your_weights", n, candidate.weights.len())
                    .into(),
            );
        }
        if candidate.weights.iter().any(|w| !w.is_finite()) {
            return Err(
                ValidationError::invalid_format("your_weights", "weights must be finite numbers")
                    .into(),
            );
        }
        if candidate.cr.is_some_and(|cr| !cr.is_finite()) {
            return Err(ValidationError::invalid_format("your_cr", "must be a finite number").into());
        }
        Ok(())
    }
}
