//! Validation HTTP adapter module.
//!
//! Provides REST API endpoints for matrix validation, batch validation and
//! the literature reference cases.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{ValidationApiError, ValidationAppState};
pub use routes::validation_routes;
