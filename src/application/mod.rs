//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers are synchronous: every operation is a pure computation over the
//! request and the injected estimation backend.

pub mod handlers;

pub use handlers::{
    BatchValidation, ReferenceCasesHandler, ValidateBatchCommand, ValidateBatchHandler,
    ValidateMatrixCommand, ValidateMatrixHandler,
};
