//! Shared helpers for HTTP-level integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use agency_api::auth::basic::{encode_basic_header, AdminCredentials};
use agency_api::config::ServerConfig;
use agency_api::router::build_app_router;
use agency_api::state::AppState;
use agency_db::DbPool;
use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct-horse";

/// A router backed by its own SQLite file. Keep the value alive for the
/// whole test; dropping it removes the database directory.
pub struct TestApp {
    pub app: Router,
    pub pool: DbPool,
    _dir: TempDir,
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(database_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: database_url.to_string(),
        db_max_connections: 5,
        cors_origins: vec!["http://localhost:8000".to_string()],
        request_timeout_secs: 30,
        admin: AdminCredentials::new(ADMIN_USERNAME, ADMIN_PASSWORD),
    }
}

/// Build the full application router on a fresh, initialized database.
///
/// Uses [`build_app_router`] so tests run through the same middleware stack
/// as production.
pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().expect("temp dir");
    let url = format!("sqlite://{}", dir.path().join("contacts.db").display());
    let config = test_config(&url);

    let pool = agency_db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("pool");
    agency_db::initialize(&pool).await.expect("initialize");

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
    };

    TestApp {
        app: build_app_router(state, &config),
        pool,
        _dir: dir,
    }
}

pub fn admin_auth() -> String {
    encode_basic_header(ADMIN_USERNAME, ADMIN_PASSWORD)
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: &Router, uri: &str, authorization: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: &Router, uri: &str, authorization: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// A submission that passes validation; `i` keeps names and emails unique.
pub fn valid_submission(i: usize) -> serde_json::Value {
    serde_json::json!({
        "name": format!("Guest {}", (b'A' + (i % 26) as u8) as char),
        "email": format!("guest{i}@example.com"),
        "phone": "",
        "message": "Нужна площадка на 50 человек",
    })
}
