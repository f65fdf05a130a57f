//! # Integration Tests for specd-api
//!
//! Drives the assembled router end to end: validation endpoints in both
//! modes, load-failure short-circuiting, the seed CRUD surface, seed
//! bootstrap, health probes, CORS, and OpenAPI generation.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use specd_api::config::AppConfig;
use specd_api::{bootstrap, AppState};

/// Helper: build the test app with default configuration.
fn test_app() -> axum::Router {
    specd_api::app(AppState::new())
}

/// Helper: read a response body as JSON.
async fn body_json(response: axum::http::Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Helper: POST a validation request with an X-LANGUAGE header.
fn validation_request(uri: &str, language: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(language) = language {
        builder = builder.header("X-LANGUAGE", language);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health/liveness")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_probe() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health/readiness")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// -- Spec Validation: managed -------------------------------------------------

#[tokio::test]
async fn test_managed_yaml_spec_reaches_the_engine() {
    // Loads fine, so the engine runs; the document has no models, so the
    // engine (not the loader) rejects it.
    let response = test_app()
        .oneshot(validation_request(
            "/v1/specs/validate-managed",
            Some("YAML"),
            "openapi: 3.0.0",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["result"]["valid"], false);
    let reason = body["result"]["reason"].as_str().unwrap();
    assert!(
        reason.contains("components.schemas"),
        "expected an engine-side reason, got: {reason}"
    );
}

#[tokio::test]
async fn test_managed_valid_spec_returns_model_diagnostics() {
    let spec = r#"
openapi: 3.0.0
components:
  schemas:
    Employee:
      type: object
      x-tablename: employee
      properties:
        id:
          type: integer
          x-primary-key: true
        name:
          type: string
"#;
    let response = test_app()
        .oneshot(validation_request(
            "/v1/specs/validate-managed",
            Some("YAML"),
            spec,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["result"]["valid"], true);
    assert!(body["result"].get("reason").is_none());
    assert_eq!(body["models"]["Employee"]["result"]["valid"], true);
    assert_eq!(
        body["models"]["Employee"]["properties"]["id"]["result"]["valid"],
        true
    );
}

#[tokio::test]
async fn test_malformed_yaml_never_reaches_the_engine() {
    let response = test_app()
        .oneshot(validation_request(
            "/v1/specs/validate-managed",
            Some("YAML"),
            "not: valid: yaml: [",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["result"]["valid"], false);
    let reason = body["result"]["reason"].as_str().unwrap();
    assert!(!reason.is_empty());
    assert!(reason.contains("syntax"), "got: {reason}");
    // Load failures carry no model diagnostics — the engine never ran.
    assert!(body.get("models").is_none());
}

#[tokio::test]
async fn test_unregistered_language_mentions_unsupported() {
    let response = test_app()
        .oneshot(validation_request(
            "/v1/specs/validate-managed",
            Some("cobol"),
            "IDENTIFICATION DIVISION.",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["result"]["valid"], false);
    let reason = body["result"]["reason"].as_str().unwrap();
    assert!(reason.contains("unsupported language cobol"), "got: {reason}");
    assert!(reason.contains("JSON and YAML"), "got: {reason}");
}

#[tokio::test]
async fn test_missing_language_header_is_a_bad_request() {
    let response = test_app()
        .oneshot(validation_request(
            "/v1/specs/validate-managed",
            None,
            "openapi: 3.0.0",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("X-LANGUAGE"));
}

#[tokio::test]
async fn test_json_language_is_supported() {
    let spec = json!({
        "components": {
            "schemas": {
                "Employee": {
                    "type": "object",
                    "x-tablename": "employee",
                    "properties": {"id": {"type": "integer", "x-primary-key": true}}
                }
            }
        }
    });
    let response = test_app()
        .oneshot(validation_request(
            "/v1/specs/validate-managed",
            Some("JSON"),
            &spec.to_string(),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["result"]["valid"], true);
}

#[tokio::test]
async fn test_scalar_top_level_is_a_load_failure() {
    let response = test_app()
        .oneshot(validation_request(
            "/v1/specs/validate-managed",
            Some("YAML"),
            "just a string",
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["result"]["valid"], false);
    assert!(body["result"]["reason"]
        .as_str()
        .unwrap()
        .contains("mapping at the top level"));
}

// -- Spec Validation: unmanaged -----------------------------------------------

#[tokio::test]
async fn test_unmanaged_routes_to_the_other_strategy() {
    // One unmanaged model only: the managed check rejects this document,
    // so a passing result proves the unmanaged strategy ran.
    let spec = r#"
components:
  schemas:
    Address:
      type: object
      properties:
        street:
          type: string
"#;
    let response = test_app()
        .oneshot(validation_request(
            "/v1/specs/validate-unmanaged",
            Some("YAML"),
            spec,
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["result"]["valid"], true);
    assert_eq!(body["models"]["Address"]["result"]["valid"], true);
}

#[tokio::test]
async fn test_unmanaged_load_failures_share_the_failure_shape() {
    let response = test_app()
        .oneshot(validation_request(
            "/v1/specs/validate-unmanaged",
            Some("cobol"),
            "anything",
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["result"]["valid"], false);
    assert!(body["result"]["reason"]
        .as_str()
        .unwrap()
        .contains("unsupported language"));
}

// -- Seeds --------------------------------------------------------------------

#[tokio::test]
async fn test_seed_lifecycle() {
    let app = test_app();

    // set
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/v1/seeds/a")
                .header("content-type", "application/json")
                .body(Body::from("1"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // get
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/v1/seeds/a").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!(1));

    // delete
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/v1/seeds/a")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // get after delete
    let response = app
        .oneshot(Request::builder().uri("/v1/seeds/a").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_seed_names_may_contain_slashes() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/v1/seeds/simple/example-spec")
                .header("content-type", "application/json")
                .body(Body::from(r#""openapi: 3.0.0""#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/seeds/simple/example-spec")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!("openapi: 3.0.0"));
}

#[tokio::test]
async fn test_list_seeds_is_sorted() {
    let state = AppState::new();
    state.seeds.set("zebra", json!(null));
    state.seeds.set("alpha", json!(null));
    let app = specd_api::app(state);

    let response = app
        .oneshot(Request::builder().uri("/v1/seeds").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"seeds": ["alpha", "zebra"]}));
}

#[tokio::test]
async fn test_delete_missing_seed_is_not_found() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/v1/seeds/never-inserted")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_put_seed_with_invalid_json_is_a_bad_request() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/v1/seeds/a")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_default_seed_served_after_bootstrap() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("default-seed.yaml"), "openapi: 3.0.0\n").unwrap();

    let config = AppConfig {
        seeds_folder: dir.path().to_path_buf(),
        ..AppConfig::default()
    };
    let state = AppState::try_with_config(config).unwrap();
    let loaded = bootstrap::hydrate_seeds(&state.seeds, &state.config.seeds_folder);
    assert_eq!(loaded, 1);

    let response = specd_api::app(state)
        .oneshot(Request::builder().uri("/v1/seed").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!("openapi: 3.0.0\n"));
}

#[tokio::test]
async fn test_default_seed_missing_is_not_found() {
    let response = test_app()
        .oneshot(Request::builder().uri("/v1/seed").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// -- CORS ---------------------------------------------------------------------

#[tokio::test]
async fn test_cors_headers_present_for_cross_origin_requests() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/v1/seeds")
                .header("origin", "https://editor.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

// -- OpenAPI ------------------------------------------------------------------

#[tokio::test]
async fn test_openapi_spec_is_served() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["info"]["title"], "specd API");
    assert!(body["paths"]
        .as_object()
        .unwrap()
        .contains_key("/v1/specs/validate-managed"));
}
