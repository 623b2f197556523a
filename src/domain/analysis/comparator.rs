//! Comparator - Candidate weights and CR against reference values.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AnalysisError, WeightVector};

/// Maximum absolute difference for a candidate to pass (0.1%).
pub const TOLERANCE: f64 = 0.001;

/// Differences at or above this value need review (1%).
pub const REVIEW_THRESHOLD: f64 = 0.01;

/// Maximum difference for two estimation methods to be considered in agreement.
pub const METHOD_AGREEMENT_THRESHOLD: f64 = 0.01;

/// Classification of a single difference.
///
/// Ordered from best to worst so the worst tier of a set is its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "excellent")]
    Excellent,
    #[serde(rename = "valid")]
    Valid,
    #[serde(rename = "needs review")]
    NeedsReview,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Valid => "valid",
            Tier::NeedsReview => "needs review",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thresholds applied by the comparator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPolicy {
    /// Pass/fail bound, also the upper edge of the `Excellent` tier.
    pub tolerance: f64,
    /// Upper edge of the `Valid` tier.
    pub review_threshold: f64,
    /// Bound for the cross-method agreement signal.
    pub method_agreement_threshold: f64,
}

impl Default for ComparisonPolicy {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
            review_threshold: REVIEW_THRESHOLD,
            method_agreement_threshold: METHOD_AGREEMENT_THRESHOLD,
        }
    }
}

/// Itemized weight differences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightComparison {
    pub differences: Vec<f64>,
    pub max_weight_diff: f64,
    pub weights_valid: bool,
    pub tiers: Vec<Tier>,
    pub tier: Tier,
}

/// Full verdict for a candidate result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub differences: Vec<f64>,
    pub max_weight_diff: f64,
    pub cr_diff: f64,
    pub weights_valid: bool,
    pub cr_valid: bool,
    pub is_valid: bool,
    /// Tier of each weight difference, aligned with the items.
    pub tiers: Vec<Tier>,
    /// Worst tier across weights and CR.
    pub tier: Tier,
    pub tolerance: f64,
}

/// Agreement between two estimation methods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MethodAgreement {
    pub max_difference: f64,
    pub agree: bool,
}

/// Comparison functions parameterized by a [`ComparisonPolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Comparator {
    policy: ComparisonPolicy,
}

impl Comparator {
    pub fn new(policy: ComparisonPolicy) -> Self {
        Self { policy }
    }

    /// Classifies one absolute difference.
    pub fn classify(&self, difference: f64) -> Tier {
        if difference < self.policy.tolerance {
            Tier::Excellent
        } else if difference < self.policy.review_threshold {
            Tier::Valid
        } else {
            Tier::NeedsReview
        }
    }

    /// Compares candidate weights elementwise against the reference.
    ///
    /// # Errors
    /// `LengthMismatch` if the vectors differ in length.
    pub fn compare_weights(
        &self,
        candidate: &[f64],
        reference: &WeightVector,
    ) -> Result<WeightComparison, AnalysisError> {
        AnalysisError::check_lengths(reference.len(), candidate.len())?;

        let differences: Vec<f64> = candidate
            .iter()
            .zip(reference.as_slice())
            .map(|(c, r)| (c - r).abs())
            .collect();
        let max_weight_diff = differences.iter().copied().fold(0.0, f64::max);
        let tiers: Vec<Tier> = differences.iter().map(|d| self.classify(*d)).collect();

        Ok(WeightComparison {
            weights_valid: max_weight_diff < self.policy.tolerance,
            tier: self.classify(max_weight_diff),
            differences,
            max_weight_diff,
            tiers,
        })
    }

    /// Absolute CR difference.
    pub fn compare_cr(&self, candidate_cr: f64, reference_cr: f64) -> f64 {
        (candidate_cr - reference_cr).abs()
    }

    /// Weights and CR together.
    ///
    /// A missing candidate CR is not held against the candidate.
    pub fn compare(
        &self,
        candidate: &[f64],
        reference: &WeightVector,
        candidate_cr: Option<f64>,
        reference_cr: f64,
    ) -> Result<ComparisonResult, AnalysisError> {
        let weights = self.compare_weights(candidate, reference)?;
        let cr_diff = candidate_cr
            .map(|cr| self.compare_cr(cr, reference_cr))
            .unwrap_or(0.0);
        let cr_valid = cr_diff < self.policy.tolerance;

        Ok(ComparisonResult {
            is_valid: weights.weights_valid && cr_valid,
            tier: weights.tier.max(self.classify(cr_diff)),
            differences: weights.differences,
            max_weight_diff: weights.max_weight_diff,
            cr_diff,
            weights_valid: weights.weights_valid,
            cr_valid,
            tiers: weights.tiers,
            tolerance: self.policy.tolerance,
        })
    }

    /// Cross-method sanity signal; not a pass/fail criterion.
    pub fn methods_agree(
        &self,
        primary: &WeightVector,
        secondary: &WeightVector,
    ) -> Result<MethodAgreement, AnalysisError> {
        let max_difference = primary.max_abs_difference(secondary.as_slice())?;
        Ok(MethodAgreement {
            max_difference,
            agree: max_difference < self.policy.method_agreement_threshold,
        })
    }
}
