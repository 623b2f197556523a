//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod validation;

pub use validation::{
    // Single matrix
    CandidateResult, MatrixValidation, ValidateMatrixCommand, ValidateMatrixHandler,
    // Batch
    BatchEntry, BatchEntryResult, BatchTally, BatchValidation, ValidateBatchCommand,
    ValidateBatchHandler,
    // Literature fixtures
    ReferenceCaseCheck, ReferenceCasesHandler, ReferenceCheckReport,
};
