//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router or
//! database is involved.

use agency_api::error::{AppError, INTERNAL_ERROR_MESSAGE};
use agency_core::contact::{validate, ContactSubmission};
use agency_core::error::CoreError;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code, headers and JSON body.
async fn error_to_response(
    err: AppError,
) -> (StatusCode, axum::http::HeaderMap, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, headers, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Contact",
        id: 42,
    });

    let (status, _, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], "error");
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["detail"], "Contact with id 42 not found");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 422 and lists every violation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_422_with_field_list() {
    let err = validate(&ContactSubmission::new(
        "A",
        "nope",
        None,
        "Привет, хотим праздник",
    ))
    .unwrap_err();

    let (status, _, json) = error_to_response(AppError::Core(err)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let errors = json["errors"].as_array().unwrap();
    let fields: Vec<&str> = errors.iter().map(|e| e["field"].as_str().unwrap()).collect();
    assert_eq!(fields, vec!["name", "email"]);

    // `detail` joins the individual messages for clients that show one line.
    let detail = json["detail"].as_str().unwrap();
    for e in errors {
        assert!(detail.contains(e["message"].as_str().unwrap()));
    }
}

// ---------------------------------------------------------------------------
// Test: CoreError::Unauthorized maps to 401 with a Basic challenge
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unauthorized_error_returns_401_with_challenge() {
    let err = AppError::Core(CoreError::Unauthorized("password mismatch for admin".into()));

    let (status, headers, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
    // The internal reason is never echoed back.
    assert_eq!(json["detail"], "Invalid credentials");

    let challenge = headers[header::WWW_AUTHENTICATE].to_str().unwrap();
    assert!(challenge.starts_with("Basic realm=\"admin\""));
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400 with BAD_REQUEST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("expected value at line 1 column 1".into());

    let (status, _, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["detail"], "expected value at line 1 column 1");
    assert!(json.get("errors").is_none());
}

// ---------------------------------------------------------------------------
// Test: AppError::Database maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn database_error_returns_500_and_sanitizes_message() {
    let err = AppError::Database(sqlx::Error::Protocol(
        "disk I/O error at /var/lib/contacts.db".into(),
    ));

    let (status, _, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["detail"], INTERNAL_ERROR_MESSAGE);
    assert!(!json.to_string().contains("/var/lib"));
}

// ---------------------------------------------------------------------------
// Test: sqlx RowNotFound maps to 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, _, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}
