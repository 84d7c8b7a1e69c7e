//! Repository for the `layouts` table.

use mosaic_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::layout::{CreateLayout, Layout, UpdateLayout};

/// Column list for `layouts` queries.
const LAYOUT_COLUMNS: &str = "id, slug, items, published, created_at, updated_at";

/// Provides data access for layouts.
pub struct LayoutRepo;

impl LayoutRepo {
    /// Create a new layout. Fails on a duplicate slug
    /// (`uq_layouts_slug`).
    pub async fn create(pool: &PgPool, dto: &CreateLayout) -> Result<Layout, sqlx::Error> {
        let query = format!(
            "INSERT INTO layouts (slug, items, published) \
             VALUES ($1, $2, COALESCE($3, FALSE)) \
             RETURNING {LAYOUT_COLUMNS}"
        );
        sqlx::query_as::<_, Layout>(&query)
            .bind(&dto.slug)
            .bind(Json(&dto.items))
            .bind(dto.published)
            .fetch_one(pool)
            .await
    }

    /// List all layouts, published or not.
    pub async fn list(pool: &PgPool) -> Result<Vec<Layout>, sqlx::Error> {
        let query = format!("SELECT {LAYOUT_COLUMNS} FROM layouts ORDER BY slug");
        sqlx::query_as::<_, Layout>(&query).fetch_all(pool).await
    }

    /// Find a single layout by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Layout>, sqlx::Error> {
        let query = format!("SELECT {LAYOUT_COLUMNS} FROM layouts WHERE id = $1");
        sqlx::query_as::<_, Layout>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a single layout by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Layout>, sqlx::Error> {
        let query = format!("SELECT {LAYOUT_COLUMNS} FROM layouts WHERE slug = $1");
        sqlx::query_as::<_, Layout>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a layout.
    ///
    /// Uses `COALESCE` so only provided fields are changed. The item
    /// array is replaced wholesale, never merged; the last writer wins.
    pub async fn update(pool: &PgPool, dto: &UpdateLayout) -> Result<Option<Layout>, sqlx::Error> {
        let query = format!(
            "UPDATE layouts SET \
                 slug       = COALESCE($2, slug), \
                 items      = COALESCE($3, items), \
                 published  = COALESCE($4, published), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {LAYOUT_COLUMNS}"
        );
        sqlx::query_as::<_, Layout>(&query)
            .bind(dto.id)
            .bind(&dto.slug)
            .bind(dto.items.as_ref().map(Json))
            .bind(dto.published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a layout by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM layouts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
