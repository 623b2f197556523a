//! Validation handlers.
//!
//! Handlers that check candidate AHP results against reference weights
//! computed by the configured estimation backend.

mod reference_cases;
mod validate_batch;
mod validate_matrix;

pub use reference_cases::{ReferenceCaseCheck, ReferenceCasesHandler, ReferenceCheckReport};
pub use validate_batch::{
    BatchEntry, BatchEntryResult, BatchTally, BatchValidation, ValidateBatchCommand,
    ValidateBatchHandler, DEFAULT_ENTRY_NAME,
};
pub use validate_matrix::{
    CandidateResult, MatrixValidation, ValidateMatrixCommand, ValidateMatrixHandler,
};
