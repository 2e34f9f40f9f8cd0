//! JSON index rendering for machine consumers

use serde::Serialize;

use crate::error::{StoreError, StoreResult};
use crate::listing::ObjectRecord;
use crate::store::PresignedUrl;

/// One index entry, mirroring the `uploads.json` wire shape
#[derive(Debug, Clone, Serialize)]
pub struct IndexEntry {
    /// Storage key
    pub key: String,
    /// Last modification time, RFC 3339
    pub lm: String,
    /// Object size in bytes
    pub size: i64,
    /// Presigned GET URL
    pub url: String,
}

impl IndexEntry {
    /// Pairs a listing record with its presigned URL.
    #[must_use]
    pub fn new(record: &ObjectRecord, presigned: &PresignedUrl) -> Self {
        Self {
            key: record.key.clone(),
            lm: record.last_modified.to_rfc3339(),
            size: record.size,
            url: presigned.url.clone(),
        }
    }
}

#[derive(Serialize)]
struct UploadIndex<'a> {
    user: &'a str,
    items: &'a [IndexEntry],
}

/// Serializes `{"user": ..., "items": [{key, lm, size, url}]}`.
///
/// # Errors
///
/// Returns `StoreError::Template` when serialization fails.
pub fn render_index(user_id: &str, items: &[IndexEntry]) -> StoreResult<String> {
    serde_json::to_string(&UploadIndex {
        user: user_id,
        items,
    })
    .map_err(|e| StoreError::Template(format!("failed to serialize upload index: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_has_the_expected_shape() {
        let items = vec![IndexEntry {
            key: "uploads/1/a.png".to_string(),
            lm: "2026-01-02T03:04:05+00:00".to_string(),
            size: 2048,
            url: "https://example.com/a?sig=1".to_string(),
        }];

        let json = render_index("1", &items).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["user"], "1");
        assert_eq!(parsed["items"][0]["key"], "uploads/1/a.png");
        assert_eq!(parsed["items"][0]["lm"], "2026-01-02T03:04:05+00:00");
        assert_eq!(parsed["items"][0]["size"], 2048);
        assert_eq!(parsed["items"][0]["url"], "https://example.com/a?sig=1");
    }

    #[test]
    fn empty_index_keeps_the_envelope() {
        let json = render_index("7", &[]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["user"], "7");
        assert_eq!(parsed["items"].as_array().unwrap().len(), 0);
    }
}
