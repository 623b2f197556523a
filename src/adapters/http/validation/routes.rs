//! HTTP routes for validation endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    check_reference_cases, health, list_reference_cases, validate, validate_batch,
    ValidationAppState,
};

/// Creates the validation router with all routes.
pub fn validation_routes(state: ValidationAppState) -> Router {
    Router::new()
        // GET / and GET /health
        .route("/", get(health))
        .route("/health", get(health))
        // POST /validate
        .route("/validate", post(validate))
        // POST /validate-batch
        .route("/validate-batch", post(validate_batch))
        // GET /reference-cases
        .route("/reference-cases", get(list_reference_cases))
        // GET /reference-cases/check
        .route("/reference-cases/check", get(check_reference_cases))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::backends::BuiltinReferenceBackend;
    use crate::domain::analysis::Comparator;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        validation_routes(ValidationAppState::new(
            Arc::new(BuiltinReferenceBackend::default()),
            Comparator::default(),
            false,
        ))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn health_reports_backend() {
        for uri in ["/", "/health"] {
            let (status, body) = send(get_request(uri)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["status"], "ok");
            assert_eq!(body["service"], "AHP Validator");
            assert_eq!(body["backend"], "builtin_reference");
        }
    }

    #[tokio::test]
    async fn validate_returns_reference_and_verdict() {
        let (status, body) = send(post_json(
            "/validate",
            json!({
                "matrix": [[1, 3, 5], [0.3333333333333333, 1, 2], [0.2, 0.5, 1]],
                "items": ["A", "B", "C"],
                "your_weights": [0.637, 0.258, 0.105],
                "your_cr": 0.0158
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["validation"]["is_valid"], false);
        assert_eq!(body["validation"]["tier"], "needs review");
        assert_eq!(body["reference"]["method"], "geometric_mean");
        assert_eq!(body["reference"]["methods_agree"], true);
        assert_eq!(body["differences"]["weights"].as_array().unwrap().len(), 3);
        let a = body["reference"]["weights_by_item"]["A"].as_f64().unwrap();
        assert!((a - 0.6483).abs() < 1e-3);
    }

    #[tokio::test]
    async fn validate_without_candidate_omits_verdict() {
        let (status, body) = send(post_json(
            "/validate",
            json!({"matrix": [[1, 2], [0.5, 1]]}),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.get("validation").is_none());
        assert!(body.get("differences").is_none());
        assert_eq!(body["reference"]["ci"], 0.0);
        let second = body["reference"]["weights_by_item"]["Item_1"].as_f64().unwrap();
        assert!((second - 1.0 / 3.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn validate_rejects_empty_matrix() {
        let (status, body) = send(post_json("/validate", json!({"matrix": []}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "EMPTY_FIELD");
    }

    #[tokio::test]
    async fn validate_rejects_length_mismatch() {
        let (status, body) = send(post_json(
            "/validate",
            json!({"matrix": [[1, 2], [0.5, 1]], "your_weights": [1.0]}),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "LENGTH_MISMATCH");
        assert_eq!(body["details"]["field"], "your_weights");
    }

    #[tokio::test]
    async fn validate_rejects_malformed_json() {
        let request = Request::builder()
            .method("POST")
            .uri("/validate")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn batch_reports_errored_entries_inline() {
        let (status, body) = send(post_json(
            "/validate-batch",
            json!({"matrices": [
                {"name": "ok", "matrix": [[1, 1], [1, 1]], "your_weights": [0.5, 0.5], "your_cr": 0.0},
                {"name": "broken", "matrix": [[1, 0], [1, 1]]}
            ]}),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["passed"], 1);
        assert_eq!(body["errored"], 1);
        assert_eq!(body["all_valid"], false);
        assert_eq!(body["results"][0]["is_valid"], true);
        assert_eq!(body["results"][1]["error"]["code"], "INVALID_MATRIX");
    }

    #[tokio::test]
    async fn reference_cases_are_listed() {
        let (status, body) = send(get_request("/reference-cases")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cases"].as_array().unwrap().len(), 3);
        assert_eq!(body["cases"][0]["items"][0], "Coffee");
    }

    #[tokio::test]
    async fn reference_check_reports_each_case() {
        let (status, body) = send(get_request("/reference-cases/check")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tolerance"], 0.01);
        assert_eq!(body["results"].as_array().unwrap().len(), 3);
        assert_eq!(body["results"][0]["matches"], true);
    }
}
