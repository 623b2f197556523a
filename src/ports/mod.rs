//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Estimation Ports
//!
//! - `WeightEstimationBackend` - Produces the reference weights and consistency
//!   a candidate result is validated against

mod weight_estimation_backend;

pub use weight_estimation_backend::{BackendKind, CrossCheck, Estimate, WeightEstimationBackend};
