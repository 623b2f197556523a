//! Router assembly - mounts the validation routes behind the tower-http layers.

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::{FeatureFlags, ServerConfig};

use super::validation::{validation_routes, ValidationAppState};

/// Builds the complete application router.
pub fn app_router(state: ValidationAppState, server: &ServerConfig, features: &FeatureFlags) -> Router {
    let mut router = validation_routes(state)
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(server.request_timeout()));

    if features.enable_tracing {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

/// Any origin unless an explicit list is configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = server.cors_origins_list();
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(allowed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::backends::BuiltinReferenceBackend;
    use crate::domain::analysis::Comparator;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state() -> ValidationAppState {
        ValidationAppState::new(
            Arc::new(BuiltinReferenceBackend::default()),
            Comparator::default(),
            false,
        )
    }

    #[tokio::test]
    async fn default_cors_allows_any_origin() {
        let app = app_router(state(), &ServerConfig::default(), &FeatureFlags::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("origin", "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn configured_origins_are_enforced() {
        let server = ServerConfig {
            cors_origins: Some("http://localhost:5173".to_string()),
            ..Default::default()
        };
        let features = FeatureFlags {
            enable_tracing: false,
            ..Default::default()
        };
        let app = app_router(state(), &server, &features);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("origin", "http://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get("access-control-allow-origin").is_none());
    }
}
