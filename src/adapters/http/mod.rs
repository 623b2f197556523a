//! HTTP adapters - REST API implementations.
//!
//! The validation adapter exposes the engine; `router` wraps it in the
//! CORS, timeout and tracing layers.

pub mod router;
pub mod validation;

// Re-export key types for convenience
pub use router::app_router;
pub use validation::ValidationAppState;
pub use validation::validation_routes;
