//! Pairwise comparison matrix and the labels aligned with its rows.

use std::collections::HashSet;

use serde::Serialize;

use super::AnalysisError;
use crate::domain::foundation::ValidationError;

/// Square matrix of pairwise preferences.
///
/// Entry `(i, j)` is the preference of item `i` over item `j`. The diagonal is
/// expected to be 1 and `(j, i)` roughly `1 / (i, j)`, but neither is enforced:
/// inconsistent input is exactly what the consistency ratio measures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PairwiseMatrix {
    rows: Vec<Vec<f64>>,
}

impl PairwiseMatrix {
    /// Builds a matrix, rejecting empty, ragged, non-square or non-finite input.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, AnalysisError> {
        let n = rows.len();
        if n == 0 {
            return Err(AnalysisError::invalid_matrix("matrix is empty"));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(AnalysisError::invalid_matrix(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(AnalysisError::invalid_matrix(format!(
                    "entry ({}, {}) is not a finite number",
                    i, j
                )));
            }
        }

        Ok(Self { rows })
    }

    /// Matrix dimension `n`.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Fails on the first entry that is zero or negative.
    pub fn ensure_positive(&self) -> Result<(), AnalysisError> {
        for (i, row) in self.rows.iter().enumerate() {
            if let Some(j) = row.iter().position(|&v| v <= 0.0) {
                return Err(AnalysisError::invalid_matrix(format!(
                    "entry ({}, {}) is {}, all entries must be strictly positive",
                    i, j, row[j]
                )));
            }
        }
        Ok(())
    }

    /// Standard matrix-vector product `self × vector`.
    pub fn multiply(&self, vector: &[f64]) -> Result<Vec<f64>, AnalysisError> {
        AnalysisError::check_lengths(self.size(), vector.len())?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.iter().zip(vector).map(|(a, v)| a * v).sum())
            .collect())
    }
}

/// Ordered, unique names positionally aligned with the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemLabels(Vec<String>);

impl ItemLabels {
    /// Validates that labels are present, non-blank and unique.
    pub fn new(labels: Vec<String>) -> Result<Self, ValidationError> {
        if labels.is_empty() {
            return Err(ValidationError::empty_field("items"));
        }

        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if label.trim().is_empty() {
                return Err(ValidationError::invalid_format("items", "labels cannot be blank"));
            }
            if !seen.insert(label.as_str()) {
                return Err(ValidationError::invalid_format(
                    "items",
                    format!("duplicate label '{}'", label),
                ));
            }
        }
        Ok(Self(labels))
    }

    /// Labels `Item_0` .. `Item_{n-1}` for callers that supply none.
    pub fn synthesized(n: usize) -> Self {
        Self((0..n).map(|i| format!("Item_{}", i)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
