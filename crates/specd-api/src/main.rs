//! # specd-api — Binary Entry Point
//!
//! Starts the Axum HTTP server. Binds to a configurable port (default 8080).

use specd_api::config::AppConfig;
use specd_api::{bootstrap, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Configuration error: {e}");
        e
    })?;
    let port = config.port;

    let state = AppState::try_with_config(config).map_err(|e| {
        tracing::error!("Validation engine initialization failed: {e}");
        e
    })?;

    // Hydrate the seed store from the seeds folder (if present).
    let seeds = bootstrap::hydrate_seeds(&state.seeds, &state.config.seeds_folder);
    tracing::info!(seeds, stage = %state.config.stage, "hydrated seed store");

    let app = specd_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("specd API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
