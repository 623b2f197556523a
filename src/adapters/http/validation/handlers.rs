//! HTTP handlers for validation endpoints.
//!
//! These handlers connect Axum routes to the application layer handlers.
//! The numeric work is CPU-bound, so it runs on the blocking thread pool.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{error, warn};

use crate::adapters::backends::EXTERNAL_LIBRARY_AVAILABLE;
use crate::application::handlers::{
    ReferenceCasesHandler, ValidateBatchHandler, ValidateMatrixHandler,
};
use crate::domain::analysis::Comparator;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{BackendKind, WeightEstimationBackend};

use super::dto::{
    ErrorResponse, HealthResponse, ReferenceCasesResponse, ReferenceCheckReport,
    ValidateBatchRequest, ValidateBatchResponse, ValidateRequest, ValidateResponse,
};

pub const SERVICE_NAME: &str = "AHP Validator";

const REFERENCE_CASES_NOTE: &str = "Use these cases to validate your AHP implementation";

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Validation API error that implements IntoResponse.
#[derive(Debug)]
pub struct ValidationApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ValidationApiError {
    /// Maps a domain error onto a response, hiding internal details unless `verbose`.
    pub fn from_domain(error: DomainError, verbose: bool) -> Self {
        let status = status_for(error.code);
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %error, "Validation request failed");
            if !verbose {
                return Self {
                    status,
                    body: ErrorResponse::internal("Internal server error"),
                };
            }
        } else {
            warn!(code = %error.code, message = %error.message, "Rejected validation request");
        }

        Self {
            status,
            body: ErrorResponse::from_domain(error),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ValidationApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// HTTP status for each error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::DivisionUndefined => StatusCode::UNPROCESSABLE_ENTITY,
        code if code.is_client_error() => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing validation dependencies.
#[derive(Clone)]
pub struct ValidationAppState {
    pub matrix_handler: Arc<ValidateMatrixHandler>,
    pub batch_handler: Arc<ValidateBatchHandler>,
    pub reference_handler: Arc<ReferenceCasesHandler>,
    pub backend: BackendKind,
    /// Expose internal error messages in 500 responses.
    pub verbose_errors: bool,
}

impl ValidationAppState {
    pub fn new(
        backend: Arc<dyn WeightEstimationBackend>,
        comparator: Comparator,
        verbose_errors: bool,
    ) -> Self {
        let kind = backend.kind();
        Self {
            matrix_handler: Arc::new(ValidateMatrixHandler::new(backend.clone(), comparator)),
            batch_handler: Arc::new(ValidateBatchHandler::new(ValidateMatrixHandler::new(
                backend.clone(),
                comparator,
            ))),
            reference_handler: Arc::new(ReferenceCasesHandler::new(backend)),
            backend: kind,
            verbose_errors,
        }
    }

    fn api_error(&self, error: DomainError) -> ValidationApiError {
        ValidationApiError::from_domain(error, self.verbose_errors)
    }

    /// Runs a synchronous computation on the blocking pool.
    async fn run_blocking<T, F>(&self, work: F) -> Result<T, ValidationApiError>
    where
        F: FnOnce() -> Result<T, DomainError> + Send + 'static,
        T: Send + 'static,
    {
        tokio::task::spawn_blocking(work)
            .await
            .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))
            .and_then(|result| result)
            .map_err(|e| self.api_error(e))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET / and GET /health
pub async fn health(State(state): State<ValidationAppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend: state.backend,
        external_library_available: EXTERNAL_LIBRARY_AVAILABLE,
    })
}

/// POST /validate
///
/// Recomputes reference weights and compares the submitted result.
pub async fn validate(
    State(state): State<ValidationAppState>,
    Json(request): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, ValidationApiError> {
    let handler = state.matrix_handler.clone();
    let command = request.into_command();

    let result = state.run_blocking(move || handler.handle(command)).await?;

    Ok(Json(ValidateResponse::from(result)))
}

/// POST /validate-batch
///
/// Validates every entry; entries that fail are reported inline.
pub async fn validate_batch(
    State(state): State<ValidationAppState>,
    Json(request): Json<ValidateBatchRequest>,
) -> Result<Json<ValidateBatchResponse>, ValidationApiError> {
    let handler = state.batch_handler.clone();
    let command = request.into_command();

    let result = state
        .run_blocking(move || Ok(handler.handle(command)))
        .await?;

    Ok(Json(ValidateBatchResponse::from(result)))
}

/// GET /reference-cases
pub async fn list_reference_cases(
    State(state): State<ValidationAppState>,
) -> Json<ReferenceCasesResponse> {
    Json(ReferenceCasesResponse {
        cases: state.reference_handler.list(),
        note: REFERENCE_CASES_NOTE.to_string(),
    })
}

/// GET /reference-cases/check
///
/// Runs the configured backend against every literature case.
pub async fn check_reference_cases(
    State(state): State<ValidationAppState>,
) -> Result<Json<ReferenceCheckReport>, ValidationApiError> {
    let handler = state.reference_handler.clone();

    let report = state.run_blocking(move || handler.check()).await?;

    Ok(Json(report))
}
