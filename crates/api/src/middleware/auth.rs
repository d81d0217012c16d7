//! Basic-auth extractor for admin handlers.

use agency_core::error::CoreError;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::basic::parse_basic_header;
use crate::error::AppError;
use crate::state::AppState;

/// An admin authenticated with the configured Basic credentials.
///
/// Add it as a handler parameter to guard a route:
///
/// ```ignore
/// async fn my_handler(RequireAdmin(username): RequireAdmin) -> AppResult<Json<()>> {
///     tracing::info!(%username, "handling admin request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub String);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let (username, password) = parse_basic_header(header)
            .ok_or_else(|| unauthorized("Malformed Basic credentials"))?;

        if !state.config.admin.verify(&username, &password) {
            tracing::warn!(%username, "Rejected admin credentials");
            return Err(unauthorized("Credentials did not match"));
        }

        Ok(RequireAdmin(username))
    }
}

/// The reason is logged for operators; clients always see the same body.
fn unauthorized(reason: &str) -> AppError {
    tracing::debug!(reason, "Admin authentication failed");
    AppError::Core(CoreError::Unauthorized(reason.to_string()))
}
