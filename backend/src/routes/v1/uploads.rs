//! Presigned upload URL handler

use std::sync::Arc;

use axum::{Extension, Json};
use media_store::{key, MediaStore};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::types::AppError;

/// Request body for a presigned upload URL
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UploadUrlRequest {
    /// Uploading user; defaults to "1" when absent
    pub user_id: Option<String>,
    /// File name to store under `uploads/{user_id}/`; base name only
    pub file_name: Option<String>,
    /// Content type the upload must send; defaults to `image/jpeg`
    pub content_type: Option<String>,
}

/// Response body carrying the presigned upload URL
#[derive(Debug, Serialize, JsonSchema)]
pub struct UploadUrlResponse {
    /// Presigned PUT URL, valid for 900 seconds
    pub upload_url: String,
    /// Storage key the URL uploads to
    pub key: String,
}

/// Creates a presigned PUT URL for one file upload
///
/// The content type becomes a signed condition, so the upload must send a
/// matching `Content-Type` header or the bucket rejects it.
///
/// # Errors
///
/// Returns 400 with `{"error": "file_name required"}` when the file name is
/// missing, 400 for keys that would escape the user's namespace, and a
/// generic 5xx body for storage failures.
#[instrument(skip(store, payload))]
pub async fn create_upload_url(
    Extension(store): Extension<Arc<MediaStore>>,
    Json(payload): Json<UploadUrlRequest>,
) -> Result<Json<UploadUrlResponse>, AppError> {
    let file_name = payload.file_name.as_deref().unwrap_or("");
    if file_name.is_empty() {
        return Err(AppError::bad_request("file_name required"));
    }

    let user_id = payload.user_id.as_deref().unwrap_or(key::DEFAULT_USER_ID);
    let content_type = payload
        .content_type
        .as_deref()
        .unwrap_or(key::DEFAULT_CONTENT_TYPE);

    let storage_key = key::make_key(user_id, file_name)?;
    let presigned = store
        .presigned_put_url(&storage_key, content_type, key::DEFAULT_EXPIRY_SECS)
        .await?;

    tracing::info!(key = %presigned.key, "issued presigned upload URL");

    Ok(Json(UploadUrlResponse {
        upload_url: presigned.url,
        key: presigned.key,
    }))
}
