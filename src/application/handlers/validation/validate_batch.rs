//! ValidateBatchHandler - Validates many named matrices independently.
//!
//! A failing entry is recorded with its error and counted as errored; it
//! never aborts the rest of the batch.

use tracing::{info, warn};

use super::validate_matrix::{MatrixValidation, ValidateMatrixCommand, ValidateMatrixHandler};
use crate::domain::foundation::DomainError;

/// Name used for entries submitted without one.
pub const DEFAULT_ENTRY_NAME: &str = "Unknown";

/// One named matrix in a batch.
#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub name: Option<String>,
    pub command: ValidateMatrixCommand,
}

/// Command to validate a batch of matrices.
#[derive(Debug, Clone, Default)]
pub struct ValidateBatchCommand {
    pub entries: Vec<BatchEntry>,
}

/// Per-entry outcome, kept in submission order.
#[derive(Debug, Clone)]
pub struct BatchEntryResult {
    pub name: String,
    pub outcome: Result<MatrixValidation, DomainError>,
}

impl BatchEntryResult {
    pub fn is_valid(&self) -> bool {
        self.outcome.as_ref().is_ok_and(MatrixValidation::is_valid)
    }
}

/// Running counts and maxima over a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchTally {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
    pub all_valid: bool,
    pub max_weight_diff: f64,
    pub max_cr_diff: f64,
}

impl Default for BatchTally {
    fn default() -> Self {
        Self {
            total: 0,
            passed: 0,
            failed: 0,
            errored: 0,
            all_valid: true,
            max_weight_diff: 0.0,
            max_cr_diff: 0.0,
        }
    }
}

impl BatchTally {
    /// Folds one entry outcome into the tally.
    pub fn record(&mut self, outcome: &Result<MatrixValidation, DomainError>) {
        self.total += 1;
        match outcome {
            Ok(validation) => {
                if let Some(comparison) = &validation.comparison {
                    self.max_weight_diff = self.max_weight_diff.max(comparison.max_weight_diff);
                    self.max_cr_diff = self.max_cr_diff.max(comparison.cr_diff);
                }
                if validation.is_valid() {
                    self.passed += 1;
                } else {
                    self.failed += 1;
                    self.all_valid = false;
                }
            }
            Err(_) => {
                self.errored += 1;
                self.all_valid = false;
            }
        }
    }
}

/// Result of a batch validation.
#[derive(Debug, Clone)]
pub struct BatchValidation {
    pub tally: BatchTally,
    pub results: Vec<BatchEntryResult>,
}

/// Handler for batch validation.
pub struct ValidateBatchHandler {
    matrix_handler: ValidateMatrixHandler,
}

impl ValidateBatchHandler {
    pub fn new(matrix_handler: ValidateMatrixHandler) -> Self {
        Self { matrix_handler }
    }

    pub fn handle(&self, cmd: ValidateBatchCommand) -> BatchValidation {
        let mut tally = BatchTally::default();
        let mut results = Vec::with_capacity(cmd.entries.len());

        for entry in cmd.entries {
            let name = entry
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ENTRY_NAME.to_string());

            let outcome = self.matrix_handler.handle(entry.command);
            if let Err(err) = &outcome {
                warn!(entry = %name, error = %err, "Batch entry could not be validated");
            }

            tally.record(&outcome);
            results.push(BatchEntryResult { name, outcome });
        }

        info!(
            total = tally.total,
            passed = tally.passed,
            failed = tally.failed,
            errored = tally.errored,
            "Batch validation complete"
        );

        BatchValidation { tally, results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::backends::BuiltinReferenceBackend;
    use crate::application::handlers::validation::CandidateResult;
    use crate::domain::analysis::Comparator;
    use crate::domain::foundation::ErrorCode;
    use std::sync::Arc;

    fn handler() -> ValidateBatchHandler {
        ValidateBatchHandler::new(ValidateMatrixHandler::new(
            Arc::new(BuiltinReferenceBackend::default()),
            Comparator::default(),
        ))
    }

    fn entry(name: Option<&str>, matrix: Vec<Vec<f64>>, weights: Option<Vec<f64>>) -> BatchEntry {
        BatchEntry {
            name: name.map(String::from),
            command: ValidateMatrixCommand {
                matrix,
                items: None,
                candidate: weights.map(|weights| CandidateResult {
                    weights,
                    ..Default::default()
                }),
            },
        }
    }

    fn identity(n: usize) -> Vec<Vec<f64>> {
        vec![vec![1.0; n]; n]
    }

    #[test]
    fn empty_batch_is_vacuously_valid() {
        let result = handler().handle(ValidateBatchCommand::default());
        assert_eq!(result.tally, BatchTally::default());
        assert!(result.tally.all_valid);
        assert!(result.results.is_empty());
    }

    #[test]
    fn entries_without_candidate_pass() {
        let result = handler().handle(ValidateBatchCommand {
            entries: vec![entry(Some("a"), identity(3), None), entry(None, identity(2), None)],
        });

        assert_eq!(result.tally.total, 2);
        assert_eq!(result.tally.passed, 2);
        assert!(result.tally.all_valid);
        assert_eq!(result.results[1].name, DEFAULT_ENTRY_NAME);
    }

    #[test]
    fn inconsistent_matrix_without_candidate_passes() {
        let matrix = vec![
            vec![1.0, 3.0, 5.0],
            vec![1.0 / 3.0, 1.0, 2.0],
            vec![0.2, 0.5, 1.0],
        ];
        let result = handler().handle(ValidateBatchCommand {
            entries: vec![entry(Some("criteria"), matrix, None)],
        });

        assert_eq!(result.tally.passed, 1);
        assert!(result.tally.all_valid);
        let validation = result.results[0].outcome.as_ref().unwrap();
        assert!(validation.estimate.consistency.cr > 0.0);
    }

    #[test]
    fn bad_entry_is_counted_without_aborting() {
        let result = handler().handle(ValidateBatchCommand {
            entries: vec![
                entry(Some("good"), identity(3), Some(vec![1.0 / 3.0; 3])),
                entry(Some("ragged"), vec![vec![1.0, 2.0], vec![0.5]], None),
                entry(Some("off"), identity(2), Some(vec![0.6, 0.4])),
            ],
        });

        let tally = result.tally;
        assert_eq!(tally.total, 3);
        assert_eq!(tally.passed, 1);
        assert_eq!(tally.failed, 1);
        assert_eq!(tally.errored, 1);
        assert!(!tally.all_valid);
        assert!((tally.max_weight_diff - 0.1).abs() < 1e-9);

        let ragged = &result.results[1];
        assert_eq!(ragged.name, "ragged");
        assert!(!ragged.is_valid());
        assert_eq!(
            ragged.outcome.as_ref().unwrap_err().code,
            ErrorCode::InvalidMatrix
        );
    }

    #[test]
    fn tally_tracks_largest_cr_difference() {
        let mut entries = vec![entry(Some("x"), identity(3), Some(vec![1.0 / 3.0; 3]))];
        entries[0].command.candidate.as_mut().unwrap().cr = Some(0.05);

        let result = handler().handle(ValidateBatchCommand { entries });
        assert!((result.tally.max_cr_diff - 0.05).abs() < 1e-9);
        assert_eq!(result.tally.failed, 1);
    }
}
