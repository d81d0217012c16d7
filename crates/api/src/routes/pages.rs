//! Route definitions for the server-rendered public pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Page routes.
///
/// ```text
/// GET    /          -> landing
/// GET    /admin     -> admin_login
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::landing))
        .route("/admin", get(pages::admin_login))
}
