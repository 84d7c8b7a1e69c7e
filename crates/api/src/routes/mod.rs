pub mod health;
pub mod layouts;
pub mod media;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /layouts            get by slug / admin listing, create, partial update
/// /layouts/{id}       delete
///
/// /media              list, register uploaded asset
/// /media/{id}         delete
///
/// /uploads/sign       sign a direct upload (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/layouts", layouts::router())
        .nest("/media", media::router())
        .nest("/uploads", uploads::router())
}
