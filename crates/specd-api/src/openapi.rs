//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "specd API",
        version = "0.1.0",
        description = "HTTP facade for specification validation: managed and unmanaged checks over YAML/JSON documents, plus a seed staging store.",
        license(name = "Apache-2.0")
    ),
    paths(
        // Specs
        crate::routes::specs::validate_managed,
        crate::routes::specs::validate_unmanaged,
        // Seeds
        crate::routes::seeds::get_default_seed,
        crate::routes::seeds::list_seeds,
        crate::routes::seeds::get_seed,
        crate::routes::seeds::put_seed,
        crate::routes::seeds::delete_seed,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::routes::seeds::SeedList,
    ))
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_spec))
}

/// GET /openapi.json — the assembled OpenAPI document.
async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
