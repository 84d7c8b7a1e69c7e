//! Layout entity model and DTOs.
//!
//! A layout is a named arrangement of media items on the fixed 6x4 grid.
//! The item array is stored as a single JSONB column and replaced
//! wholesale on every save; there is no per-item versioning.

use mosaic_core::grid::LayoutItem;
use mosaic_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `layouts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Layout {
    pub id: DbId,
    pub slug: String,
    pub items: Json<Vec<LayoutItem>>,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new layout.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLayout {
    pub slug: String,
    #[serde(default)]
    pub items: Vec<LayoutItem>,
    pub published: Option<bool>,
}

/// DTO for partially updating a layout.
///
/// The target layout's identifier travels in the body, not the path;
/// absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLayout {
    pub id: DbId,
    pub slug: Option<String>,
    pub items: Option<Vec<LayoutItem>>,
    pub published: Option<bool>,
}
