//! AHP Validator server
//!
//! Loads configuration from the environment and serves the validation API.

use std::process;

use ahp_validator::adapters::backends::build_backend;
use ahp_validator::adapters::http::{app_router, ValidationAppState};
use ahp_validator::config::{AppConfig, ConfigError, ValidationError};
use ahp_validator::domain::analysis::Comparator;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Server startup error
#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let backend = build_backend(&config.engine)?;
    let state = ValidationAppState::new(
        backend,
        Comparator::new(config.engine.comparison_policy()),
        config.features.verbose_errors,
    );
    info!(
        backend = %state.backend,
        tolerance = config.engine.tolerance,
        "Starting AHP Validator"
    );

    let app = app_router(state, &config.server, &config.features);

    let listener = TcpListener::bind(config.server.bind_address()).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over config.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).pretty().init();
    }
}
