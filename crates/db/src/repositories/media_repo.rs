//! Repository for the `media` table.

use mosaic_core::types::DbId;
use sqlx::PgPool;

use crate::models::media::{CreateMedia, Media};

/// Column list for `media` queries.
const MEDIA_COLUMNS: &str = "\
    id, kind, public_id, url, poster_url, width, height, bytes, format, \
    created_at, updated_at";

/// Provides data access for uploaded media assets.
pub struct MediaRepo;

impl MediaRepo {
    /// Register an uploaded asset. Fails on a duplicate public ID
    /// (`uq_media_public_id`).
    pub async fn create(pool: &PgPool, dto: &CreateMedia) -> Result<Media, sqlx::Error> {
        let query = format!(
            "INSERT INTO media (kind, public_id, url, poster_url, width, height, bytes, format) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {MEDIA_COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(&dto.kind)
            .bind(&dto.public_id)
            .bind(&dto.url)
            .bind(&dto.poster_url)
            .bind(dto.width)
            .bind(dto.height)
            .bind(dto.bytes)
            .bind(&dto.format)
            .fetch_one(pool)
            .await
    }

    /// List all media assets, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Media>, sqlx::Error> {
        let query = format!("SELECT {MEDIA_COLUMNS} FROM media ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Media>(&query).fetch_all(pool).await
    }

    /// Find a single media asset by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("SELECT {MEDIA_COLUMNS} FROM media WHERE id = $1");
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a media asset by ID.
    ///
    /// Returns `true` if a row was deleted. Layout items referencing the
    /// asset are not touched; the grid editor renders a placeholder for
    /// dangling references.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
