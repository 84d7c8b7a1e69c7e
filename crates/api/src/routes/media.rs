//! Route definitions for the media library.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Media routes mounted at `/media`.
///
/// ```text
/// GET    /      -> list_media
/// POST   /      -> register_media
/// DELETE /{id}  -> delete_media
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(media::list_media).post(media::register_media))
        .route("/{id}", delete(media::delete_media))
}
