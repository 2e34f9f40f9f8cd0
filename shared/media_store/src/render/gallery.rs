//! HTML gallery rendering

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{StoreError, StoreResult};
use crate::listing::ObjectRecord;
use crate::store::PresignedUrl;

/// One gallery card: a listed object paired with its presigned GET URL
#[derive(Debug, Clone, Serialize)]
pub struct GalleryItem {
    /// Storage key, shown as the caption
    pub key: String,
    /// Presigned GET URL the card links to
    pub url: String,
    /// Last modification time, RFC 3339
    pub last_modified: String,
    /// Object size in bytes
    pub size: i64,
}

impl GalleryItem {
    /// Pairs a listing record with its presigned URL.
    #[must_use]
    pub fn new(record: &ObjectRecord, presigned: &PresignedUrl) -> Self {
        Self {
            key: record.key.clone(),
            url: presigned.url.clone(),
            last_modified: record.last_modified.to_rfc3339(),
            size: record.size,
        }
    }
}

#[derive(Serialize)]
struct GalleryContext<'a> {
    user_id: &'a str,
    expires_secs: u64,
    items: &'a [GalleryItem],
}

/// Renders the gallery page.
///
/// Handlebars escapes every `{{ }}` expansion, so user ids, keys and URLs
/// taken from bucket contents cannot inject markup.
///
/// # Errors
///
/// Returns `StoreError::Template` when the embedded template fails to
/// register or render.
pub fn render_gallery(
    user_id: &str,
    expires_secs: u64,
    items: &[GalleryItem],
) -> StoreResult<String> {
    let mut engine = Handlebars::new();
    engine
        .register_template_string("gallery", include_str!("../../templates/gallery.hbs"))
        .map_err(|e| StoreError::Template(format!("failed to register gallery template: {e}")))?;

    engine
        .render(
            "gallery",
            &GalleryContext {
                user_id,
                expires_secs,
                items,
            },
        )
        .map_err(|e| StoreError::Template(format!("failed to render gallery: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(key: &str, url: &str) -> GalleryItem {
        GalleryItem {
            key: key.to_string(),
            url: url.to_string(),
            last_modified: "2026-01-02T03:04:05+00:00".to_string(),
            size: 2048,
        }
    }

    #[test]
    fn gallery_embeds_items() {
        let items = vec![
            item("uploads/1/a.png", "https://example.com/a?sig=1"),
            item("uploads/1/b.png", "https://example.com/b?sig=2"),
        ];
        let html = render_gallery("1", 900, &items).unwrap();

        assert!(html.contains("<img"));
        assert!(html.contains("uploads/1/a.png"));
        assert!(html.contains("900"));
        assert!(html.contains("user 1"));
    }

    #[test]
    fn markup_in_keys_is_escaped() {
        let items = vec![item("uploads/1/<script>alert(1)</script>.png", "https://example.com/x")];
        let html = render_gallery("<script>u</script>", 900, &items).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(!html.contains("<script>u</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn url_query_ampersands_survive_escaped() {
        // Handlebars entity-encodes attribute values (= becomes &#x3D;), so
        // assert on the escaping rather than the literal query string
        let items = vec![item("uploads/1/a.png", "https://example.com/a?x=1&y=2")];
        let html = render_gallery("1", 900, &items).unwrap();
        assert!(html.contains("https://example.com/a?x"));
        assert!(html.contains("&amp;"));
        assert!(!html.contains("&y="));
    }

    #[test]
    fn empty_listing_still_renders() {
        let html = render_gallery("1", 900, &[]).unwrap();
        assert!(html.contains("<html"));
        assert!(!html.contains("<img"));
    }
}
