//! Handlers for the server-rendered public pages.

use axum::response::Html;

use crate::pages;

/// GET / -- landing page with the contact form.
pub async fn landing() -> Html<String> {
    Html(pages::landing())
}

/// GET /admin -- admin entry page.
pub async fn admin_login() -> Html<String> {
    Html(pages::admin_login())
}
