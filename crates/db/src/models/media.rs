//! Media asset model and DTOs.
//!
//! Media rows record assets the browser has already uploaded directly to
//! the delivery provider: the provider-assigned public ID, the delivery
//! URL, a poster URL for videos, and whatever metadata the provider
//! reported at upload time.

use mosaic_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `media` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Media {
    pub id: DbId,
    /// `image` or `video`.
    pub kind: String,
    pub public_id: String,
    pub url: String,
    pub poster_url: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub bytes: Option<i64>,
    pub format: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering an uploaded asset.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMedia {
    pub kind: String,
    pub public_id: String,
    pub url: String,
    pub poster_url: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub bytes: Option<i64>,
    pub format: Option<String>,
}
