//! Handlers for the admin contact listing and deletion.
//!
//! Every handler here takes [`RequireAdmin`], so all `/admin/contacts`
//! routes share the same credential check.

use agency_core::error::CoreError;
use agency_core::pagination::{clamp_page, PageInfo, PAGE_SIZE};
use agency_core::types::DbId;
use agency_db::models::contact::{ContactFilter, ContactListParams};
use agency_db::repositories::ContactRepo;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::pages;
use crate::response::{StatusResponse, STATUS_SUCCESS};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /admin/contacts
// ---------------------------------------------------------------------------

/// Render one page of contacts, optionally filtered by a search term.
///
/// The count and the page are read with separate queries; a submission
/// landing between them can shift the page by one row.
pub async fn list_contacts(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    params: Result<Query<ContactListParams>, QueryRejection>,
) -> AppResult<Html<String>> {
    let Query(params) = params.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let filter = ContactFilter::from_search(params.search.as_deref());
    let page = clamp_page(params.page);

    let total = ContactRepo::count(&state.pool, &filter).await?;
    let info = PageInfo::new(page, PAGE_SIZE, total);
    let contacts = ContactRepo::list(&state.pool, &filter, info.per_page, info.offset()).await?;

    Ok(Html(pages::contact_list(&contacts, &info, filter.term())))
}

// ---------------------------------------------------------------------------
// DELETE /admin/contacts/{id}
// ---------------------------------------------------------------------------

/// Permanently delete a contact.
pub async fn delete_contact(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<StatusResponse>> {
    let Path(id) = id.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let not_found = || AppError::Core(CoreError::NotFound {
        entity: "Contact",
        id,
    });

    ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;

    // Another admin may have removed it since the lookup.
    if !ContactRepo::delete(&state.pool, id).await? {
        return Err(not_found());
    }

    tracing::info!(contact_id = id, %admin, "Contact deleted");

    Ok(Json(StatusResponse {
        status: STATUS_SUCCESS,
        message: "Contact deleted",
    }))
}
