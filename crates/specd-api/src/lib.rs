//! # specd-api — Axum HTTP Facade for Specification Validation
//!
//! The top of the dependency DAG. Accepts raw specification text, runs it
//! through the `specd-core` loading pipeline, and asks the `specd-engine`
//! whether the result is a well-formed managed or unmanaged specification.
//! Also exposes a minimal named-value seed store for staging test data.
//!
//! ## API Surface
//!
//! | Route                            | Module             |
//! |----------------------------------|--------------------|
//! | `POST /v1/specs/validate-*`      | [`routes::specs`]  |
//! | `GET /v1/seed`, `/v1/seeds/*`    | [`routes::seeds`]  |
//! | `GET /openapi.json`              | [`openapi`]        |
//! | `GET /health/*`                  | unauthenticated probes |
//!
//! ## Middleware
//!
//! `TraceLayer` for request tracing and a `CorsLayer` built from the
//! `ACCESS_CONTROL_ALLOW_*` configuration. Health probes sit outside both.
//!
//! ## Crate Policy
//!
//! - No validation logic in route handlers — they orchestrate the core and
//!   engine crates and shape responses.
//! - All errors map to structured HTTP responses via [`AppError`]; load
//!   failures map to the uniform validation failure shape instead.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod seed;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes (`/health/*`) are mounted outside the CORS and trace
/// layers so they stay as cheap as possible.
pub fn app(state: AppState) -> Router {
    let cors = state.config.cors_layer();

    let api = Router::new()
        .merge(routes::specs::router())
        .merge(routes::seeds::router())
        .merge(openapi::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
