//! JSON response bodies shared by the public and admin handlers.
//!
//! Success bodies carry `status: "success"` because the landing page script
//! branches on that field.

use agency_core::types::DbId;
use serde::Serialize;

pub const STATUS_SUCCESS: &str = "success";

/// Message shown to a visitor after a stored submission.
pub const SUBMIT_SUCCESS_MESSAGE: &str =
    "Ваше сообщение успешно отправлено! Мы свяжемся с вами в ближайшее время.";

/// `{ "status": ..., "message": ... }`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Body returned by `POST /contact`.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub contact_id: DbId,
}
