//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary of the AHP validator: request validation
//! errors and the coded `DomainError` every layer reports through.

mod errors;

pub use errors::{DomainError, ErrorCode, ValidationError};
