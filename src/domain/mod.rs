//! Domain layer containing the validation engine and its vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Shared error types used by every layer
//! - `analysis` - Pure numeric services for AHP weights, consistency and comparison

pub mod analysis;
pub mod foundation;
