//! HTTP DTOs for validation endpoints.
//!
//! Field names follow the public service contract (`your_weights`,
//! `sdk_weights`, ...), so existing clients keep working.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

pub use crate::application::handlers::{ReferenceCaseCheck, ReferenceCheckReport};
pub use crate::domain::analysis::ReferenceCase;

use crate::application::handlers::{
    BatchEntry, BatchEntryResult, BatchTally, BatchValidation, CandidateResult, MatrixValidation,
    ValidateBatchCommand, ValidateMatrixCommand,
};
use crate::domain::analysis::Tier;
use crate::domain::foundation::DomainError;
use crate::ports::BackendKind;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to validate one matrix.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub matrix: Vec<Vec<f64>>,
    pub items: Option<Vec<String>>,
    pub your_weights: Option<Vec<f64>>,
    pub your_cr: Option<f64>,
    pub your_lambda: Option<f64>,
}

impl ValidateRequest {
    pub fn into_command(self) -> ValidateMatrixCommand {
        ValidateMatrixCommand {
            matrix: self.matrix,
            items: self.items,
            candidate: candidate(self.your_weights, self.your_cr, self.your_lambda),
        }
    }
}

/// One named matrix inside a batch request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchMatrixRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub matrix: Vec<Vec<f64>>,
    pub items: Option<Vec<String>>,
    pub your_weights: Option<Vec<f64>>,
    pub your_cr: Option<f64>,
}

/// Request to validate several matrices.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateBatchRequest {
    #[serde(default)]
    pub matrices: Vec<BatchMatrixRequest>,
}

impl ValidateBatchRequest {
    pub fn into_command(self) -> ValidateBatchCommand {
        ValidateBatchCommand {
            entries: self
                .matrices
                .into_iter()
                .map(|m| BatchEntry {
                    name: m.name,
                    command: ValidateMatrixCommand {
                        matrix: m.matrix,
                        items: m.items,
                        candidate: candidate(m.your_weights, m.your_cr, None),
                    },
                })
                .collect(),
        }
    }
}

/// An empty weight list means "nothing to compare", same as an absent one.
fn candidate(
    weights: Option<Vec<f64>>,
    cr: Option<f64>,
    lambda_max: Option<f64>,
) -> Option<CandidateResult> {
    weights
        .filter(|w| !w.is_empty())
        .map(|weights| CandidateResult {
            weights,
            cr,
            lambda_max,
        })
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub backend: BackendKind,
    pub external_library_available: bool,
}

/// Verdict block of a single validation.
#[derive(Debug, Clone, Serialize)]
pub struct VerdictView {
    pub is_valid: bool,
    pub tolerance: f64,
    pub weights_valid: bool,
    pub cr_valid: bool,
    pub tier: Tier,
    pub tiers: Vec<Tier>,
}

/// Echo of the candidate result.
#[derive(Debug, Clone, Default, Serialize)]
pub struct YourSystemView {
    pub weights: Vec<f64>,
    pub cr: Option<f64>,
    pub lambda_max: Option<f64>,
}

/// Reference figures computed by the configured backend.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceView {
    pub weights: Vec<f64>,
    pub weights_by_item: BTreeMap<String, f64>,
    pub lambda_max: f64,
    pub ci: f64,
    pub cr: f64,
    pub random_index: f64,
    pub extrapolated_random_index: bool,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methods_agree: Option<bool>,
    /// Largest difference between the primary and cross-check weights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_convergence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_check_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_check_weights: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_check_converged: Option<bool>,
}

/// Itemized candidate vs reference differences.
#[derive(Debug, Clone, Serialize)]
pub struct DifferencesView {
    pub weights: Vec<f64>,
    pub max_weight_diff: f64,
    pub cr_diff: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lambda_diff: Option<f64>,
}

/// Response for `POST /validate`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<VerdictView>,
    pub your_system: YourSystemView,
    pub reference: ReferenceView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub differences: Option<DifferencesView>,
    pub backend: BackendKind,
}

impl From<MatrixValidation> for ValidateResponse {
    fn from(result: MatrixValidation) -> Self {
        let estimate = &result.estimate;
        let cross_check = estimate.cross_check.as_ref();

        let reference = ReferenceView {
            weights: estimate.weights.to_vec(),
            weights_by_item: result.weights_by_item.clone(),
            lambda_max: estimate.consistency.lambda_max,
            ci: estimate.consistency.ci,
            cr: estimate.consistency.cr,
            random_index: estimate.consistency.random_index,
            extrapolated_random_index: estimate.consistency.extrapolated_random_index,
            method: estimate.method.to_string(),
            methods_agree: result.method_agreement.map(|a| a.agree),
            method_convergence: result.method_agreement.map(|a| a.max_difference),
            cross_check_method: cross_check.map(|c| c.method.to_string()),
            cross_check_weights: cross_check.map(|c| c.weights.to_vec()),
            cross_check_converged: cross_check.map(|c| c.converged),
        };

        let validation = result.comparison.as_ref().map(|c| VerdictView {
            is_valid: c.is_valid,
            tolerance: c.tolerance,
            weights_valid: c.weights_valid,
            cr_valid: c.cr_valid,
            tier: c.tier,
            tiers: c.tiers.clone(),
        });

        let differences = result.comparison.as_ref().map(|c| DifferencesView {
            weights: c.differences.clone(),
            max_weight_diff: c.max_weight_diff,
            cr_diff: c.cr_diff,
            lambda_diff: result.lambda_diff,
        });

        let your_system = result
            .candidate
            .as_ref()
            .map(|c| YourSystemView {
                weights: c.weights.clone(),
                cr: c.cr,
                lambda_max: c.lambda_max,
            })
            .unwrap_or_default();

        Self {
            success: true,
            validation,
            your_system,
            reference,
            differences,
            backend: result.backend,
        }
    }
}

/// Error block attached to a batch entry that could not be validated.
#[derive(Debug, Clone, Serialize)]
pub struct EntryError {
    pub code: String,
    pub message: String,
}

/// One row of a batch response.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResultView {
    pub name: String,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub your_weights: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk_weights: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub your_cr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk_cr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_weight_diff: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cr_diff: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<EntryError>,
}

impl From<BatchEntryResult> for BatchResultView {
    fn from(entry: BatchEntryResult) -> Self {
        let is_valid = entry.is_valid();
        match entry.outcome {
            Ok(result) => {
                let comparison = result.comparison.as_ref();
                Self {
                    name: entry.name,
                    is_valid,
                    tier: comparison.map(|c| c.tier),
                    your_weights: result.candidate.as_ref().map(|c| c.weights.clone()),
                    sdk_weights: Some(result.estimate.weights.to_vec()),
                    your_cr: result.candidate.as_ref().and_then(|c| c.cr),
                    sdk_cr: Some(result.estimate.consistency.cr),
                    max_weight_diff: comparison.map(|c| c.max_weight_diff),
                    cr_diff: comparison.map(|c| c.cr_diff),
                    error: None,
                }
            }
            Err(err) => Self {
                name: entry.name,
                is_valid,
                tier: None,
                your_weights: None,
                sdk_weights: None,
                your_cr: None,
                sdk_cr: None,
                max_weight_diff: None,
                cr_diff: None,
                error: Some(EntryError {
                    code: err.code.to_string(),
                    message: err.message,
                }),
            },
        }
    }
}

/// Response for `POST /validate-batch`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateBatchResponse {
    pub success: bool,
    pub all_valid: bool,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
    pub max_weight_diff: f64,
    pub max_cr_diff: f64,
    pub results: Vec<BatchResultView>,
}

impl From<BatchValidation> for ValidateBatchResponse {
    fn from(batch: BatchValidation) -> Self {
        let BatchTally {
            total,
            passed,
            failed,
            errored,
            all_valid,
            max_weight_diff,
            max_cr_diff,
        } = batch.tally;

        Self {
            success: true,
            all_valid,
            total,
            passed,
            failed,
            errored,
            max_weight_diff,
            max_cr_diff,
            results: batch.results.into_iter().map(BatchResultView::from).collect(),
        }
    }
}

/// Response for `GET /reference-cases`.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceCasesResponse {
    pub cases: &'static [ReferenceCase],
    pub note: String,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, String>,
}

impl ErrorResponse {
    pub fn from_domain(error: DomainError) -> Self {
        Self {
            success: false,
            code: error.code.to_string(),
            message: error.message,
            details: error.details,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            success: false,
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: HashMap::new(),
        }
    }
}
