//! Consistency Analyzer - λmax, CI and CR for a matrix and its weights.

use serde::Serialize;

use super::{AnalysisError, PairwiseMatrix, WeightVector};

/// Random Index values for n = 1..=15 (Saaty 1980, Table 3.1).
pub const RANDOM_INDEX_TABLE: [f64; 15] = [
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.52, 1.54, 1.56, 1.58, 1.59,
];

/// Random Index used beyond the published table.
///
/// An approximation with no cited derivation; results for n > 15 are lower
/// confidence.
pub const FALLBACK_RANDOM_INDEX: f64 = 1.49;

/// CR at or below this value is conventionally acceptable.
pub const ACCEPTABLE_CONSISTENCY_RATIO: f64 = 0.10;

/// Random Index lookup with an overridable fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomIndex {
    fallback: f64,
}

impl Default for RandomIndex {
    fn default() -> Self {
        Self {
            fallback: FALLBACK_RANDOM_INDEX,
        }
    }
}

impl RandomIndex {
    pub fn with_fallback(fallback: f64) -> Self {
        Self { fallback }
    }

    /// RI for a matrix of size `n`.
    pub fn lookup(&self, n: usize) -> f64 {
        match n {
            0 => 0.0,
            n if n <= RANDOM_INDEX_TABLE.len() => RANDOM_INDEX_TABLE[n - 1],
            _ => self.fallback,
        }
    }

    /// Whether `n` lies beyond the published table.
    pub fn is_extrapolated(&self, n: usize) -> bool {
        n > RANDOM_INDEX_TABLE.len()
    }
}

/// λmax, consistency index and consistency ratio of one (matrix, weights) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConsistencyResult {
    pub lambda_max: f64,
    pub ci: f64,
    pub cr: f64,
    /// RI the ratio was computed against.
    pub random_index: f64,
    /// True when `random_index` came from the fallback rather than the table.
    pub extrapolated_random_index: bool,
}

impl ConsistencyResult {
    pub fn is_acceptable(&self) -> bool {
        self.cr <= ACCEPTABLE_CONSISTENCY_RATIO
    }
}

/// Consistency analysis functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsistencyAnalyzer {
    random_index: RandomIndex,
}

impl ConsistencyAnalyzer {
    pub fn new(random_index: RandomIndex) -> Self {
        Self { random_index }
    }

    /// Computes λmax, CI and CR.
    ///
    /// # Algorithm
    /// λmax = mean_i((A·w)_i / w_i); CI = (λmax - n) / (n - 1); CR = CI / RI(n)
    ///
    /// # Edge Cases
    /// - n ≤ 2: CI = CR = 0, two comparisons are always consistent
    /// - RI = 0: CR = 0
    ///
    /// # Errors
    /// - `LengthMismatch` if `weights` does not match the matrix size
    /// - `DivisionUndefined` if any weight is zero
    pub fn analyze(
        &self,
        matrix: &PairwiseMatrix,
        weights: &WeightVector,
    ) -> Result<ConsistencyResult, AnalysisError> {
        let n = matrix.size();
        let weighted_sum = matrix.multiply(weights.as_slice())?;

        let mut ratio_total = 0.0;
        for (index, (sum, weight)) in weighted_sum.iter().zip(weights.as_slice()).enumerate() {
            if *weight == 0.0 {
                return Err(AnalysisError::DivisionUndefined { index });
            }
            ratio_total += sum / weight;
        }
        let lambda_max = ratio_total / n as f64;

        if n <= 2 {
            return Ok(ConsistencyResult {
                lambda_max,
                ci: 0.0,
                cr: 0.0,
                random_index: self.random_index.lookup(n),
                extrapolated_random_index: false,
            });
        }

        let ci = (lambda_max - n as f64) / (n as f64 - 1.0);
        let random_index = self.random_index.lookup(n);
        let cr = if random_index > 0.0 { ci / random_index } else { 0.0 };

        Ok(ConsistencyResult {
            lambda_max,
            ci,
            cr,
            random_index,
            extrapolated_random_index: self.random_index.is_extrapolated(n),
        })
    }
}
