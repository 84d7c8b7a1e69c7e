use crate::types::DbId;

/// Domain-level error type shared across the workspace.
///
/// The API layer maps each variant to an HTTP status and a stable error
/// code; repositories and domain modules never construct HTTP concepts
/// directly.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Not-found error for an entity addressed by numeric ID.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound {
            entity,
            key: id.to_string(),
        }
    }

    /// Not-found error for an entity addressed by slug.
    pub fn not_found_slug(entity: &'static str, slug: &str) -> Self {
        CoreError::NotFound {
            entity,
            key: format!("'{slug}'"),
        }
    }
}
