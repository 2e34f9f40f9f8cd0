//! Listing and pagination over bucket objects
//!
//! The walker is split in two: an [`ObjectPages`] source that yields one
//! listing page at a time, and [`collect_pages`] which drains the source and
//! applies a key filter. The S3-backed source lives in [`crate::store`];
//! tests drive the walker with in-memory pages.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::StoreResult;

/// One object under a prefix, as reported by a listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectRecord {
    /// Full storage key
    pub key: String,
    /// Last modification time reported by the backend
    pub last_modified: DateTime<Utc>,
    /// Object size in bytes
    pub size: i64,
}

/// Lazy sequence of listing pages.
///
/// `next_page` returns `Ok(None)` once the backend reports the listing is no
/// longer truncated. A fresh source restarts the listing from the beginning.
#[async_trait]
pub trait ObjectPages {
    /// Fetches the next page, or `None` when the listing is exhausted.
    async fn next_page(&mut self) -> StoreResult<Option<Vec<ObjectRecord>>>;
}

/// Key filter applied while accumulating pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingFilter {
    skip_json_sidecars: bool,
}

impl ListingFilter {
    /// Keeps every leaf object, excluding only `/`-suffixed pseudo-directories.
    #[must_use]
    pub const fn leaves() -> Self {
        Self {
            skip_json_sidecars: false,
        }
    }

    /// Gallery filter: additionally excludes `.json` sidecar files.
    #[must_use]
    pub const fn media() -> Self {
        Self {
            skip_json_sidecars: true,
        }
    }

    /// Whether a key survives the filter.
    #[must_use]
    pub fn keeps(&self, key: &str) -> bool {
        if key.ends_with('/') {
            return false;
        }
        if self.skip_json_sidecars && key.to_ascii_lowercase().ends_with(".json") {
            return false;
        }
        true
    }
}

/// Accumulates every page of a listing, applying `filter`.
///
/// Loops until the source is exhausted; a single page is never assumed to be
/// the whole listing. Any page error aborts the walk, so callers see either
/// the complete listing or none of it.
pub async fn collect_pages<P>(mut pages: P, filter: ListingFilter) -> StoreResult<Vec<ObjectRecord>>
where
    P: ObjectPages + Send,
{
    let mut records = Vec::new();
    while let Some(page) = pages.next_page().await? {
        records.extend(page.into_iter().filter(|record| filter.keeps(&record.key)));
    }
    Ok(records)
}

/// Sorts records by last modification time, newest first.
pub fn newest_first(records: &mut [ObjectRecord]) {
    records.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
}
