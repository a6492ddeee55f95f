use crate::types::DbId;

/// Domain-level error taxonomy shared by the DB and API layers.
///
/// Maps one-to-one onto HTTP status classes at the API boundary:
/// validation 400, not-found 404, conflict 409, unauthorized 401,
/// forbidden 403, internal 500.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
