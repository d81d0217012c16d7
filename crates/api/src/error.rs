use agency_core::contact::FieldViolation;
use agency_core::error::CoreError;
use axum::http::header::WWW_AUTHENTICATE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::auth::basic::REALM;

/// Generic text returned for storage faults; details stay in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "Ошибка сервера. Попробуйте еще раз позже.";

/// Text returned for every failed admin authentication.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{ "status": "error", "code": ..., "detail": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `agency_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request body or query that could not be parsed.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut violations: &[FieldViolation] = &[];

        let (status, code, detail) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(v) => {
                    violations = v.as_slice();
                    let detail = v
                        .iter()
                        .map(|v| v.message.as_str())
                        .collect::<Vec<_>>()
                        .join("; ");
                    (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", detail)
                }
                CoreError::Unauthorized(_) => (
                    StatusCode::UNAUTHORIZED,
                    "UNAUTHORIZED",
                    INVALID_CREDENTIALS_MESSAGE.to_string(),
                ),
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let mut body = json!({
            "status": "error",
            "code": code,
            "detail": detail,
        });
        if !violations.is_empty() {
            body["errors"] = json!(violations);
        }

        let mut response = (status, axum::Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            if let Ok(challenge) =
                HeaderValue::from_str(&format!("Basic realm=\"{REALM}\", charset=\"UTF-8\""))
            {
                response.headers_mut().insert(WWW_AUTHENTICATE, challenge);
            }
        }
        response
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL_ERROR_MESSAGE.to_string(),
            )
        }
    }
}
