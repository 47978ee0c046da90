use crate::types::DbId;

/// Domain-level error kinds.
///
/// `NotFound` is only used when an absence must cross an API boundary as an
/// error; lookups themselves return `Option` and let the caller decide.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
