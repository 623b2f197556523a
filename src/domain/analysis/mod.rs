//! Analysis Module - Pure numeric services for AHP validation.
//!
//! This module contains stateless functions that recompute priority weights
//! and consistency from a pairwise comparison matrix and compare them with a
//! candidate result.
//!
//! # Components
//!
//! - `PairwiseMatrix` / `ItemLabels` - Input value objects
//! - `WeightVector` - Normalized priority weights (sum = 1)
//! - `EigenvectorEstimator` - Geometric-mean and power-iteration weights
//! - `ConsistencyAnalyzer` - λmax, CI and CR against Saaty's Random Index
//! - `Comparator` - Tolerance checks and tier classification
//! - `reference_cases` - Published literature fixtures
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take value
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies.

mod comparator;
mod consistency;
mod eigenvector;
mod errors;
mod matrix;
mod reference_cases;
mod weights;

// Re-export all public types
pub use comparator::{
    Comparator, ComparisonPolicy, ComparisonResult, MethodAgreement, Tier, WeightComparison,
    METHOD_AGREEMENT_THRESHOLD, REVIEW_THRESHOLD, TOLERANCE,
};
pub use consistency::{
    ConsistencyAnalyzer, ConsistencyResult, RandomIndex, ACCEPTABLE_CONSISTENCY_RATIO,
    FALLBACK_RANDOM_INDEX, RANDOM_INDEX_TABLE,
};
pub use eigenvector::{
    EigenvectorEstimator, PowerIterationOutcome, PowerIterationSettings, DEFAULT_MAX_ITERATIONS,
    DEFAULT_POWER_TOLERANCE,
};
pub use errors::AnalysisError;
pub use matrix::{ItemLabels, PairwiseMatrix};
pub use reference_cases::{
    find_reference_case, reference_cases, ReferenceCase, REFERENCE_MATCH_TOLERANCE,
};
pub use weights::{WeightVector, SUM_TOLERANCE};
