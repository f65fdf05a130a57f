//! # Seed Routes
//!
//! CRUD over the in-memory seed store:
//! - GET    /v1/seed — the default seed (from `DEFAULT_SEED_NAME`)
//! - GET    /v1/seeds — list seed names
//! - GET    /v1/seeds/{name} — get a seed
//! - PUT    /v1/seeds/{name} — upsert a seed (JSON body)
//! - DELETE /v1/seeds/{name} — delete a seed
//!
//! Seed names may contain `/` segments, so the parameterized routes use a
//! wildcard capture.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::seed::{SeedName, SeedValue};
use crate::state::AppState;

/// Response body for the seed listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct SeedList {
    pub seeds: Vec<SeedName>,
}

/// Build the seeds router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/seed", get(get_default_seed))
        .route("/v1/seeds", get(list_seeds))
        .route(
            "/v1/seeds/{*name}",
            get(get_seed).put(put_seed).delete(delete_seed),
        )
}

/// GET /v1/seed — the default seed.
#[utoipa::path(
    get,
    path = "/v1/seed",
    responses(
        (status = 200, description = "The default seed value"),
        (status = 404, description = "Default seed not loaded", body = crate::error::ErrorBody),
    ),
    tag = "seeds"
)]
pub async fn get_default_seed(
    State(state): State<AppState>,
) -> Result<Json<SeedValue>, AppError> {
    let value = state.seeds.get(&state.config.default_seed_name)?;
    Ok(Json(value))
}

/// GET /v1/seeds — list available seed names.
#[utoipa::path(
    get,
    path = "/v1/seeds",
    responses((status = 200, description = "Sorted seed names", body = SeedList)),
    tag = "seeds"
)]
pub async fn list_seeds(State(state): State<AppState>) -> Json<SeedList> {
    Json(SeedList {
        seeds: state.seeds.list(),
    })
}

/// GET /v1/seeds/{name} — get a seed by name.
#[utoipa::path(
    get,
    path = "/v1/seeds/{name}",
    params(("name" = String, Path, description = "Seed name, may contain / segments")),
    responses(
        (status = 200, description = "The seed value"),
        (status = 404, description = "No such seed", body = crate::error::ErrorBody),
    ),
    tag = "seeds"
)]
pub async fn get_seed(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SeedValue>, AppError> {
    Ok(Json(state.seeds.get(&name)?))
}

/// PUT /v1/seeds/{name} — create or overwrite a seed.
#[utoipa::path(
    put,
    path = "/v1/seeds/{name}",
    params(("name" = String, Path, description = "Seed name, may contain / segments")),
    request_body(content = serde_json::Value, description = "Arbitrary seed value"),
    responses(
        (status = 204, description = "Seed stored"),
        (status = 400, description = "Body is not valid JSON", body = crate::error::ErrorBody),
    ),
    tag = "seeds"
)]
pub async fn put_seed(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Result<Json<SeedValue>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(value) = body.map_err(|err| AppError::BadRequest(err.body_text()))?;
    state.seeds.set(name, value);
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /v1/seeds/{name} — delete a seed by name.
#[utoipa::path(
    delete,
    path = "/v1/seeds/{name}",
    params(("name" = String, Path, description = "Seed name, may contain / segments")),
    responses(
        (status = 204, description = "Seed deleted"),
        (status = 404, description = "No such seed", body = crate::error::ErrorBody),
    ),
    tag = "seeds"
)]
pub async fn delete_seed(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    state.seeds.delete(&name)?;
    Ok(StatusCode::NO_CONTENT)
}
