//! Failures raised by the numeric engine.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Error returned when the engine cannot produce a meaningful number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Invalid matrix: {0}")]
    InvalidMatrix(String),

    #[error("Division undefined: weight at index {index} is zero")]
    DivisionUndefined { index: usize },

    #[error("Length mismatch: expected {expected} entries, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl AnalysisError {
    pub fn invalid_matrix(reason: impl Into<String>) -> Self {
        AnalysisError::InvalidMatrix(reason.into())
    }

    /// Returns `Ok(())` when both lengths agree.
    pub fn check_lengths(expected: usize, actual: usize) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(AnalysisError::LengthMismatch { expected, actual })
        }
    }
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        let code = match &err {
            AnalysisError::InvalidMatrix(_) => ErrorCode::InvalidMatrix,
            AnalysisError::DivisionUndefined { .. } => ErrorCode::DivisionUndefined,
            AnalysisError::LengthMismatch { .. } => ErrorCode::LengthMismatch,
        };
        DomainError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_lengths_accepts_equal_lengths() {
        assert!(AnalysisError::check_lengths(3, 3).is_ok());
    }

    #[test]
    fn check_lengths_reports_both_lengths() {
        let err = AnalysisError::check_lengths(3, 4).unwrap_err();
        assert_eq!(err, AnalysisError::LengthMismatch { expected: 3, actual: 4 });
        assert_eq!(err.to_string(), "Length mismatch: expected 3 entries, got 4");
    }

    #[test]
    fn converts_to_domain_error_codes() {
        let err: DomainError = AnalysisError::DivisionUndefined { index: 2 }.into();
        assert_eq!(err.code, ErrorCode::DivisionUndefined);

        let err: DomainError = AnalysisError::invalid_matrix("entry (0, 1) is 0").into();
        assert_eq!(err.code, ErrorCode::InvalidMatrix);
        assert_eq!(err.message, "Invalid matrix: entry (0, 1) is 0");
    }
}
