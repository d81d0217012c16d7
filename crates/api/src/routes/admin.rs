//! Route definitions for contact administration.
//!
//! Mounted at `/admin/contacts` by `app_routes()`.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Admin contact routes. All handlers require admin credentials.
///
/// ```text
/// GET    /          -> list_contacts
/// DELETE /{id}      -> delete_contact
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::list_contacts))
        .route("/{id}", delete(admin::delete_contact))
}
