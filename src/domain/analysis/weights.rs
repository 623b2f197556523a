//! Normalized priority weights.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{AnalysisError, ItemLabels};

/// Maximum deviation of a weight vector's sum from 1.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// Ordered, non-negative weights summing to 1.
///
/// Only obtainable through normalization, so every instance honours the sum
/// invariant. There are no mutators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Divides every component by the total.
    ///
    /// Fails when the total is not a positive finite number or a component is
    /// negative, since no meaningful priority vector exists then.
    pub fn normalize(raw: Vec<f64>) -> Result<Self, AnalysisError> {
        if raw.is_empty() {
            return Err(AnalysisError::invalid_matrix("weight vector is empty"));
        }
        if let Some(i) = raw.iter().position(|v| !v.is_finite() || *v < 0.0) {
            return Err(AnalysisError::invalid_matrix(format!(
                "weight component {} is {}, expected a non-negative finite number",
                i, raw[i]
            )));
        }

        let total: f64 = raw.iter().sum();
        if !(total.is_finite() && total > 0.0) {
            return Err(AnalysisError::invalid_matrix(format!(
                "weights sum to {}, cannot normalize",
                total
            )));
        }

        Ok(Self(raw.into_iter().map(|v| v / total).collect()))
    }

    /// The single-item vector `[1.0]`.
    pub fn unit() -> Self {
        Self(vec![1.0])
    }

    /// Uniform vector with every component `1 / n`.
    pub fn uniform(n: usize) -> Result<Self, AnalysisError> {
        Self::normalize(vec![1.0; n])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.clone()
    }

    /// Largest elementwise absolute difference to `other`.
    pub fn max_abs_difference(&self, other: &[f64]) -> Result<f64, AnalysisError> {
        AnalysisError::check_lengths(self.len(), other.len())?;
        Ok(self
            .0
            .iter()
            .zip(other)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max))
    }

    /// Pairs every weight with its label.
    pub fn by_label(&self, labels: &ItemLabels) -> Result<BTreeMap<String, f64>, AnalysisError> {
        AnalysisError::check_lengths(self.len(), labels.len())?;
        Ok(labels
            .as_slice()
            .iter()
            .cloned()
            .zip(self.0.iter().copied())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_sums_to_one() {
        let weights = WeightVector::normalize(vec![2.0, 1.0, 1.0]).unwrap();
        assert_eq!(weights.as_slice(), &[0.5, 0.25, 0.25]);
        let sum: f64 = weights.as_slice().iter().sum();
        assert!((sum - 1.0).abs() < SUM_TOLERANCE);
    }

    #[test]
    fn normalize_rejects_zero_total() {
        let result = WeightVector::normalize(vec![0.0, 0.0]);
        assert!(matches!(result, Err(AnalysisError::InvalidMatrix(_))));
    }

    #[test]
    fn normalize_rejects_negative_components() {
        let err = WeightVector::normalize(vec![1.0, -0.5]).unwrap_err();
        assert!(err.to_string().contains("weight component 1"));
    }

    #[test]
    fn normalize_rejects_empty_input() {
        assert!(WeightVector::normalize(vec![]).is_err());
    }

    #[test]
    fn uniform_spreads_weight_evenly() {
        let weights = WeightVector::uniform(4).unwrap();
        assert_eq!(weights.as_slice(), &[0.25; 4]);
    }

    #[test]
    fn max_abs_difference_finds_largest_gap() {
        let weights = WeightVector::normalize(vec![0.5, 0.3, 0.2]).unwrap();
        let diff = weights.max_abs_difference(&[0.45, 0.31, 0.24]).unwrap();
        assert!((diff - 0.05).abs() < 1e-12);
    }

    #[test]
    fn max_abs_difference_requires_equal_lengths() {
        let weights = WeightVector::unit();
        assert!(weights.max_abs_difference(&[0.5, 0.5]).is_err());
    }

    #[test]
    fn by_label_maps_names_to_weights() {
        let weights = WeightVector::normalize(vec![3.0, 1.0]).unwrap();
        let labels = ItemLabels::new(vec!["Tea".to_string(), "Coffee".to_string()]).unwrap();
        let map = weights.by_label(&labels).unwrap();
        assert_eq!(map.get("Tea"), Some(&0.75));
        assert_eq!(map.get("Coffee"), Some(&0.25));
    }
}
