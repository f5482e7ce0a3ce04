//! Tests for `AppError` → HTTP response mapping.
//!
//! Most call `IntoResponse` directly, or drive the router over a pool that
//! never connects, and need no database.

mod common;

use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use orphanage_api::error::AppError;
use common::{body_json, get, post_json, send_raw};
use orphanage_core::error::CoreError;
use orphanage_db::models::admin::CreateAdmin;
use orphanage_db::repositories::AdminRepo;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let (status, json) = error_to_response(AppError::not_found("Orphan", 42)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Orphan with id 42 not found");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("Username and password are required".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Username and password are required");
}

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized("Invalid credentials".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("too short".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn internal_error_hides_details() {
    let err = AppError::InternalError("hash column corrupted".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn pool_timeout_maps_to_500() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unique_violation_is_sanitized_500(pool: sqlx::PgPool) {
    common::seed_admin(&pool, "admin").await;
    let input = CreateAdmin {
        username: "admin".to_string(),
        password_hash: "unused".to_string(),
    };
    let err = AdminRepo::create(&pool, &input).await.unwrap_err();

    let (status, json) = error_to_response(AppError::Database(err)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Extractor rejections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_required_field_returns_json_400() {
    let app = common::build_offline_app();
    let response = post_json(app, "/api/orphans", serde_json::json!({ "name": "x" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_JSON");
    assert!(json["error"].as_str().unwrap().contains("missing field `age`"));
}

#[tokio::test]
async fn malformed_json_returns_json_400() {
    let app = common::build_offline_app();
    let response = send_raw(
        app,
        Method::POST,
        "/api/donations",
        Some("application/json"),
        "{not json",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_JSON");
}

#[tokio::test]
async fn missing_content_type_returns_json_400() {
    let app = common::build_offline_app();
    let response = send_raw(
        app,
        Method::POST,
        "/api/login",
        None,
        r#"{"username":"admin","password":"secret"}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    assert_eq!(body_json(response).await["code"], "INVALID_JSON");
}

#[tokio::test]
async fn non_numeric_id_returns_json_400() {
    for uri in ["/api/orphans/abc", "/api/donations/abc", "/api/members/1.5"] {
        let response = get(common::build_offline_app(), uri).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body_json(response).await["code"], "INVALID_PATH", "{uri}");
    }
}
