//! Validation engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::backends::EXTERNAL_LIBRARY_AVAILABLE;
use crate::domain::analysis::{
    ComparisonPolicy, PowerIterationSettings, RandomIndex, DEFAULT_MAX_ITERATIONS,
    DEFAULT_POWER_TOLERANCE, FALLBACK_RANDOM_INDEX, METHOD_AGREEMENT_THRESHOLD, REVIEW_THRESHOLD,
    TOLERANCE,
};
use crate::ports::BackendKind;

/// Numeric engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Backend producing the reference weights
    #[serde(default)]
    pub backend: BackendKind,

    /// Pass/fail bound for weight and CR differences
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Differences at or above this need review
    #[serde(default = "default_review_threshold")]
    pub review_threshold: f64,

    /// Bound for geometric-mean vs power-iteration agreement
    #[serde(default = "default_method_agreement_threshold")]
    pub method_agreement_threshold: f64,

    /// Power iteration budget
    #[serde(default = "default_power_max_iterations")]
    pub power_max_iterations: usize,

    /// Power iteration convergence threshold
    #[serde(default = "default_power_tolerance")]
    pub power_tolerance: f64,

    /// Random Index for matrices larger than 15x15
    #[serde(default = "default_fallback_random_index")]
    pub fallback_random_index: f64,
}

impl EngineConfig {
    pub fn comparison_policy(&self) -> ComparisonPolicy {
        ComparisonPolicy {
            tolerance: self.tolerance,
            review_threshold: self.review_threshold,
            method_agreement_threshold: self.method_agreement_threshold,
        }
    }

    pub fn power_iteration_settings(&self) -> PowerIterationSettings {
        PowerIterationSettings {
            max_iterations: self.power_max_iterations,
            tolerance: self.power_tolerance,
        }
    }

    pub fn random_index(&self) -> RandomIndex {
        RandomIndex::with_fallback(self.fallback_random_index)
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;

        if !positive(self.tolerance) {
            return Err(ValidationError::InvalidTolerance("tolerance"));
        }
        if !positive(self.review_threshold) {
            return Err(ValidationError::InvalidTolerance("review_threshold"));
        }
        if !positive(self.method_agreement_threshold) {
            return Err(ValidationError::InvalidTolerance("method_agreement_threshold"));
        }
        if !positive(self.power_tolerance) {
            return Err(ValidationError::InvalidTolerance("power_tolerance"));
        }
        if self.review_threshold < self.tolerance {
            return Err(ValidationError::InvalidThresholdOrder);
        }
        if self.power_max_iterations == 0 {
            return Err(ValidationError::InvalidIterationBudget);
        }
        if !positive(self.fallback_random_index) {
            return Err(ValidationError::InvalidRandomIndex);
        }
        if self.backend == BackendKind::ExternalLibrary && !EXTERNAL_LIBRARY_AVAILABLE {
            return Err(ValidationError::BackendUnavailable(self.backend.as_str()));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            tolerance: default_tolerance(),
            review_threshold: default_review_threshold(),
            method_agreement_threshold: default_method_agreement_threshold(),
            power_max_iterations: default_power_max_iterations(),
            power_tolerance: default_power_tolerance(),
            fallback_random_index: default_fallback_random_index(),
        }
    }
}

fn default_tolerance() -> f64 {
    TOLERANCE
}

fn default_review_threshold() -> f64 {
    REVIEW_THRESHOLD
}

fn default_method_agreement_threshold() -> f64 {
    METHOD_AGREEMENT_THRESHOLD
}

fn default_power_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

fn default_power_tolerance() -> f64 {
    DEFAULT_POWER_TOLERANCE
}

fn default_fallback_random_index() -> f64 {
    FALLBACK_RANDOM_INDEX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.backend, BackendKind::BuiltinReference);
        assert_eq!(config.tolerance, 0.001);
        assert_eq!(config.review_threshold, 0.01);
        assert_eq!(config.power_max_iterations, 100);
        assert_eq!(config.power_tolerance, 1e-6);
        assert_eq!(config.fallback_random_index, 1.49);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_config_deserialization() {
        let json = r#"{
            "backend": "builtin_reference",
            "tolerance": 0.01,
            "review_threshold": 0.05,
            "fallback_random_index": 1.6
        }"#;

        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.tolerance, 0.01);
        assert_eq!(config.comparison_policy().review_threshold, 0.05);
        assert_eq!(config.random_index().lookup(20), 1.6);
        assert_eq!(config.power_max_iterations, 100);
    }

    #[test]
    fn test_validation_rejects_non_positive_tolerance() {
        let config = EngineConfig {
            tolerance: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidTolerance("tolerance"))
        );
    }

    #[test]
    fn test_validation_rejects_inverted_thresholds() {
        let config = EngineConfig {
            tolerance: 0.05,
            review_threshold: 0.01,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidThresholdOrder));
    }

    #[test]
    fn test_validation_rejects_empty_iteration_budget() {
        let config = EngineConfig {
            power_max_iterations: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidIterationBudget));
    }

    #[test]
    fn test_validation_rejects_bad_fallback_random_index() {
        let config = EngineConfig {
            fallback_random_index: f64::NAN,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidRandomIndex));
    }

    #[test]
    fn test_external_backend_availability_matches_build() {
        let config = EngineConfig {
            backend: BackendKind::ExternalLibrary,
            ..Default::default()
        };
        assert_eq!(config.validate().is_ok(), EXTERNAL_LIBRARY_AVAILABLE);
    }
}
