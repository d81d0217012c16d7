pub mod admin;
pub mod contact;
pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /                                 landing page (public)
/// /contact                          submit contact form (public, POST)
///
/// /admin                            admin entry page (public)
/// /admin/contacts                   paginated, searchable list (admin)
/// /admin/contacts/{id}              delete (admin, DELETE)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(contact::router())
        .nest("/admin/contacts", admin::router())
}
