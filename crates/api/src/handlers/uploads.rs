//! Handlers for direct-upload signing.
//!
//! The browser asks for a signature, then POSTs the file straight to the
//! provider's upload endpoint with it. The API secret stays server-side.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use mosaic_core::error::CoreError;
use mosaic_core::signing;
use mosaic_core::slug;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /api/v1/uploads/sign`.
#[derive(Debug, Default, Deserialize)]
pub struct SignUploadRequest {
    /// Optional folder for the generated public ID.
    pub folder: Option<String>,
}

/// Signed upload parameters handed back to the browser.
#[derive(Debug, Serialize)]
pub struct UploadSignature {
    pub signature: String,
    pub timestamp: i64,
    pub public_id: String,
    pub api_key: String,
    pub cloud_name: String,
    pub signature_algorithm: &'static str,
}

/// POST /api/v1/uploads/sign
///
/// Generate a public ID and sign the upload parameters for it.
pub async fn sign_upload(
    State(state): State<AppState>,
    Json(input): Json<SignUploadRequest>,
) -> AppResult<impl IntoResponse> {
    if let Some(folder) = &input.folder {
        slug::validate_slug(folder)
            .map_err(|err| CoreError::Validation(format!("Invalid folder: {err}")))?;
    }

    let public_id = signing::generate_public_id(input.folder.as_deref());
    let timestamp = chrono::Utc::now().timestamp();

    let params = [
        ("public_id", public_id.clone()),
        ("timestamp", timestamp.to_string()),
    ];
    let signature = signing::sign_request(&params, &state.config.cloudinary.api_secret);

    tracing::info!(public_id = %public_id, "Upload signature issued");

    Ok(Json(DataResponse {
        data: UploadSignature {
            signature,
            timestamp,
            public_id,
            api_key: state.config.cloudinary.api_key.clone(),
            cloud_name: state.config.cloudinary.cloud_name.clone(),
            signature_algorithm: "sha256",
        },
    }))
}
