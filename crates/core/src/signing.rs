//! Direct-upload request signing.
//!
//! The browser uploads media straight to the delivery provider; the
//! server only signs the upload parameters so the API secret never
//! leaves the backend. The signature scheme is the provider's standard
//! one: parameters sorted by key, joined as `key=value` pairs with `&`,
//! the secret appended, and the whole string digested to SHA-256 hex.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Folder prefix for generated public IDs.
pub const UPLOAD_FOLDER: &str = "uploads";

/// Compute the signature over a parameter set.
///
/// Parameters with empty values are excluded, matching the provider's
/// rules; the caller must not include `file`, `api_key`, or
/// `resource_type`, which are never part of the signed string.
pub fn sign_request(params: &[(&str, String)], api_secret: &str) -> String {
    let mut signable: Vec<(&str, &str)> = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (*key, value.as_str()))
        .collect();
    signable.sort();

    let joined = signable
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    sha256_hex(format!("{joined}{api_secret}").as_bytes())
}

/// Generate a fresh public ID, under `folder` when given and
/// [`UPLOAD_FOLDER`] otherwise.
pub fn generate_public_id(folder: Option<&str>) -> String {
    let folder = folder.unwrap_or(UPLOAD_FOLDER);
    format!("{folder}/{}", Uuid::new_v4().simple())
}

/// SHA-256 hex digest of the given bytes.
fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}
