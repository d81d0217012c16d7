use crate::contact::FieldViolation;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// One entry per rejected field. Never empty.
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
