//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `backends` - Weight estimation backends (built-in reference, nalgebra)
//! - `http` - axum REST API

pub mod backends;
pub mod http;

pub use backends::{build_backend, BuiltinReferenceBackend, EXTERNAL_LIBRARY_AVAILABLE};
