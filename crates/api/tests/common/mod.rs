#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use orphanage_api::auth::password::hash_password;
use orphanage_api::config::{AdminSeed, ServerConfig};
use orphanage_api::router::build_app_router;
use orphanage_api::state::AppState;
use orphanage_db::models::admin::CreateAdmin;
use orphanage_db::repositories::AdminRepo;

/// Build a test `ServerConfig` with safe defaults.
///
/// Allows any CORS origin (matching the production default) and a
/// 30-second request timeout. The database URL is unused because
/// `#[sqlx::test]` hands each test its own pool.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        db_max_connections: 5,
        admin_seed: AdminSeed {
            username: "admin".to_string(),
            password: None,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

/// Build the app over a pool that never connects.
///
/// Requests rejected before reaching the store behave normally; anything
/// that touches the database fails fast.
pub fn build_offline_app() -> Router {
    let pool = PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(1))
        .connect_lazy("postgres://orphanage@127.0.0.1:1/orphanage")
        .unwrap();
    build_test_app(pool)
}

/// Insert an administrator directly and return the plaintext password.
pub async fn seed_admin(pool: &PgPool, username: &str) -> String {
    let password = "test_password_123!";
    let input = CreateAdmin {
        username: username.to_string(),
        password_hash: hash_password(password).expect("hashing should succeed"),
    };
    AdminRepo::create(pool, &input)
        .await
        .expect("admin creation should succeed");
    password.to_string()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Send `body` verbatim, with `content_type` if given.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
