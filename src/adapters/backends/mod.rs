//! Weight estimation backends.
//!
//! Implementations of the WeightEstimationBackend port.
//!
//! ## Available Adapters
//!
//! - `BuiltinReferenceBackend` - Geometric mean plus power-iteration cross-check
//! - `ExternalLibraryBackend` - nalgebra eigenvector by repeated squaring
//!   (requires the `linalg` feature)
//!
//! ## Usage
//!
//! ```ignore
//! use ahp_validator::adapters::backends::build_backend;
//!
//! let backend = build_backend(&config.engine)?;
//! let estimate = backend.estimate(&matrix)?;
//! ```

mod builtin_reference;
#[cfg(feature = "linalg")]
mod external_library;

use std::sync::Arc;

pub use builtin_reference::BuiltinReferenceBackend;
#[cfg(feature = "linalg")]
pub use external_library::ExternalLibraryBackend;

use crate::config::{EngineConfig, ValidationError};
use crate::ports::{BackendKind, WeightEstimationBackend};

/// Whether this build carries the external library backend.
pub const EXTERNAL_LIBRARY_AVAILABLE: bool = cfg!(feature = "linalg");

/// Builds the backend selected in configuration.
///
/// # Errors
///
/// `BackendUnavailable` when the external library backend is requested in a
/// build without the `linalg` feature.
pub fn build_backend(
    engine: &EngineConfig,
) -> Result<Arc<dyn WeightEstimationBackend>, ValidationError> {
    let settings = engine.power_iteration_settings();
    let random_index = engine.random_index();

    let backend: Arc<dyn WeightEstimationBackend> = match engine.backend {
        BackendKind::BuiltinReference => Arc::new(BuiltinReferenceBackend::new(settings, random_index)),
        #[cfg(feature = "linalg")]
        BackendKind::ExternalLibrary => Arc::new(ExternalLibraryBackend::new(settings, random_index)),
        #[cfg(not(feature = "linalg"))]
        BackendKind::ExternalLibrary => {
            return Err(ValidationError::BackendUnavailable(
                BackendKind::ExternalLibrary.as_str(),
            ))
        }
    };

    Ok(backend)
}
