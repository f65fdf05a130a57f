//! # Specification Validation Routes
//!
//! Routes:
//! - POST /v1/specs/validate-managed — managed-mode validation
//! - POST /v1/specs/validate-unmanaged — unmanaged-mode validation
//!
//! Both handlers share one orchestration path parameterized by
//! [`ValidationMode`]: read the `X-LANGUAGE` header, load the document,
//! dispatch to the selected strategy. Load failures short-circuit into the
//! uniform `{result: {valid: false, reason}}` shape without ever touching
//! the engine.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};

use specd_core::{load_spec, LanguageTag};
use specd_engine::{dispatch, ValidationMode, ValidationResponse};

use crate::error::AppError;
use crate::state::AppState;

/// Request header naming the source language of the submitted document.
pub const LANGUAGE_HEADER: &str = "x-language";

/// Build the specs router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/specs/validate-managed", post(validate_managed))
        .route("/v1/specs/validate-unmanaged", post(validate_unmanaged))
}

/// POST /v1/specs/validate-managed — validate a spec in managed mode.
#[utoipa::path(
    post,
    path = "/v1/specs/validate-managed",
    request_body(content = String, description = "Raw specification text"),
    params(
        ("X-LANGUAGE" = String, Header, description = "Source language of the document, e.g. JSON or YAML"),
    ),
    responses(
        (status = 200, description = "Validation result"),
        (status = 400, description = "Missing or unreadable X-LANGUAGE header", body = crate::error::ErrorBody),
    ),
    tag = "specs"
)]
pub async fn validate_managed(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<ValidationResponse>, AppError> {
    validate(&state, &headers, &body, ValidationMode::Managed)
}

/// POST /v1/specs/validate-unmanaged — validate a spec in unmanaged mode.
#[utoipa::path(
    post,
    path = "/v1/specs/validate-unmanaged",
    request_body(content = String, description = "Raw specification text"),
    params(
        ("X-LANGUAGE" = String, Header, description = "Source language of the document, e.g. JSON or YAML"),
    ),
    responses(
        (status = 200, description = "Validation result"),
        (status = 400, description = "Missing or unreadable X-LANGUAGE header", body = crate::error::ErrorBody),
    ),
    tag = "specs"
)]
pub async fn validate_unmanaged(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<ValidationResponse>, AppError> {
    validate(&state, &headers, &body, ValidationMode::Unmanaged)
}

/// Shared orchestration for both validation endpoints.
///
/// Load failures never reach the engine and are reported in the exact same
/// result shape as engine-detected invalidity; engine results are returned
/// verbatim.
fn validate(
    state: &AppState,
    headers: &HeaderMap,
    body: &str,
    mode: ValidationMode,
) -> Result<Json<ValidationResponse>, AppError> {
    let tag = language_tag(headers)?;
    tracing::debug!(language = %tag, mode = %mode, bytes = body.len(), "validating specification");

    let spec = match load_spec(&state.registry, body, &tag) {
        Ok(spec) => spec,
        Err(err) => return Ok(Json(ValidationResponse::failure(err.to_string()))),
    };
    Ok(Json(dispatch(&state.engine, mode, &spec)))
}

/// Extract the language tag from the required `X-LANGUAGE` header.
fn language_tag(headers: &HeaderMap) -> Result<LanguageTag, AppError> {
    let value = headers.get(LANGUAGE_HEADER).ok_or_else(|| {
        AppError::BadRequest("missing required X-LANGUAGE header".to_string())
    })?;
    let tag = value
        .to_str()
        .map_err(|_| AppError::BadRequest("X-LANGUAGE header is not valid UTF-8".to_string()))?;
    Ok(LanguageTag::new(tag))
}
