//! Handlers for the media library backing the grid editor.
//!
//! Files never pass through this server: browsers upload directly to the
//! delivery provider (see the `uploads` handlers) and then register the
//! resulting asset here.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mosaic_core::error::CoreError;
use mosaic_core::media;
use mosaic_core::types::DbId;
use mosaic_db::models::media::CreateMedia;
use mosaic_db::repositories::MediaRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/media
///
/// List all registered media assets, newest first.
pub async fn list_media(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let media = MediaRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: media }))
}

/// POST /api/v1/media
///
/// Register an asset the browser has uploaded to the provider.
pub async fn register_media(
    State(state): State<AppState>,
    Json(input): Json<CreateMedia>,
) -> AppResult<impl IntoResponse> {
    if !media::is_valid_kind(&input.kind) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown media kind '{}'",
            input.kind
        ))));
    }
    if input.public_id.is_empty() || input.url.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "public_id and url must not be empty".to_string(),
        )));
    }

    let media = MediaRepo::create(&state.pool, &input).await?;

    tracing::info!(
        media_id = media.id,
        kind = %media.kind,
        public_id = %media.public_id,
        "Media registered",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: media })))
}

/// DELETE /api/v1/media/:id
///
/// Remove a media record. Layout items referencing it are left in place;
/// the editor shows a placeholder for dangling references.
pub async fn delete_media(
    State(state): State<AppState>,
    Path(media_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = MediaRepo::delete(&state.pool, media_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Media", media_id)));
    }

    tracing::info!(media_id, "Media deleted");

    Ok(StatusCode::NO_CONTENT)
}
