//! Handler for public contact form submissions.

use agency_core::contact::{self, ContactSubmission};
use agency_core::error::CoreError;
use agency_db::repositories::ContactRepo;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::client_ip::ClientIp;
use crate::response::{SubmitResponse, STATUS_SUCCESS, SUBMIT_SUCCESS_MESSAGE};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /contact
// ---------------------------------------------------------------------------

/// Validate and store a contact submission.
///
/// Nothing is written unless every field passes validation.
pub async fn submit_contact(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> AppResult<Json<SubmitResponse>> {
    let Json(input) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let new_contact = contact::validate(&input).inspect_err(|err| {
        if let CoreError::Validation(violations) = err {
            let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
            tracing::debug!(?fields, "Contact submission rejected");
        }
    })?;

    let created = ContactRepo::create(&state.pool, &new_contact, ip.as_deref()).await?;

    tracing::info!(
        contact_id = created.id,
        ip = created.ip_address.as_deref().unwrap_or("-"),
        "Contact submission stored",
    );

    Ok(Json(SubmitResponse {
        status: STATUS_SUCCESS,
        message: SUBMIT_SUCCESS_MESSAGE,
        contact_id: created.id,
    }))
}
