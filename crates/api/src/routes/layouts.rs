//! Route definitions for layout management.
//!
//! Mounted at `/layouts`. Collection-level GET/POST/PATCH mirror the
//! editor's save model: reads are addressed by slug query parameter and
//! partial updates carry the layout id in the body.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::layouts;
use crate::state::AppState;

/// Layout routes mounted at `/layouts`.
///
/// ```text
/// GET    /      -> get_layouts (by slug, or admin listing)
/// POST   /      -> create_layout
/// PATCH  /      -> update_layout (id in body)
/// DELETE /{id}  -> delete_layout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(layouts::get_layouts)
                .post(layouts::create_layout)
                .patch(layouts::update_layout),
        )
        .route("/{id}", delete(layouts::delete_layout))
}
