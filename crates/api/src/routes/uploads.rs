//! Route definitions for direct-upload signing.

use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Upload routes mounted at `/uploads`.
///
/// ```text
/// POST /sign -> sign_upload
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/sign", post(uploads::sign_upload))
}
