//! Key naming policy for user uploads
//!
//! Every upload lives under `uploads/{user_id}/{file_name}`. The policy is
//! deliberately strict about path traversal: only the base name of the file
//! survives, and user ids may not carry separators or dot segments.

use crate::error::{StoreError, StoreResult};

/// User id assumed when a request does not carry one
pub const DEFAULT_USER_ID: &str = "1";

/// Content type assumed for uploads when a request does not carry one
pub const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// Presigned URL lifetime used by every production call site, in seconds
pub const DEFAULT_EXPIRY_SECS: u64 = 900;

/// Prefix under which all user uploads live
const UPLOADS_PREFIX: &str = "uploads";

/// Returns the listing prefix for a user, `uploads/{user_id}/`.
#[must_use]
pub fn user_prefix(user_id: &str) -> String {
    format!("{UPLOADS_PREFIX}/{user_id}/")
}

/// Strips directory components from a file name.
///
/// Both `/` and `\` count as separators, so a caller cannot smuggle path
/// segments into the key.
#[must_use]
pub fn basename(file_name: &str) -> &str {
    file_name.rsplit(['/', '\\']).next().unwrap_or(file_name)
}

/// Composes the storage key `uploads/{user_id}/{basename(file_name)}`.
///
/// # Errors
///
/// Returns `StoreError::Validation` when the file name is empty after
/// stripping directory components, or when either component would escape the
/// `uploads/{user_id}/` namespace.
pub fn make_key(user_id: &str, file_name: &str) -> StoreResult<String> {
    if user_id.is_empty() || user_id.contains(['/', '\\']) || user_id == "." || user_id == ".." {
        return Err(StoreError::Validation(
            "user_id must not contain path separators".to_string(),
        ));
    }

    let name = basename(file_name);
    if name.is_empty() {
        return Err(StoreError::Validation("file_name required".to_string()));
    }
    if name == "." || name == ".." {
        return Err(StoreError::Validation(
            "file_name must be a plain file name".to_string(),
        ));
    }

    Ok(format!("{UPLOADS_PREFIX}/{user_id}/{name}"))
}

/// Extension-to-MIME lookup for local tooling.
///
/// Falls back to `application/octet-stream` for unknown extensions.
#[must_use]
pub fn guess_content_type(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
