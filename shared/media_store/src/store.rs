//! S3-backed presign and listing operations

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::{presigning::PresigningConfig, Client as S3Client};
use chrono::{DateTime, Utc};

use crate::error::{StoreError, StoreResult};
use crate::listing::{collect_pages, newest_first, ListingFilter, ObjectPages, ObjectRecord};

/// Operation a presigned URL authorizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresignOperation {
    /// Upload (HTTP PUT)
    Put,
    /// Download (HTTP GET)
    Get,
}

/// Presigned URL with expiration information
#[derive(Debug, Clone)]
pub struct PresignedUrl {
    /// The presigned URL
    pub url: String,
    /// Storage key the URL operates on
    pub key: String,
    /// Operation the URL authorizes
    pub operation: PresignOperation,
    /// Requested lifetime in seconds
    pub expires_in: u64,
    /// UTC timestamp when the URL expires
    pub expires_at: DateTime<Utc>,
}

/// Media store over a single S3 bucket.
///
/// The client is injected so call sites (and tests) decide how the SDK is
/// configured; nothing here is a process-wide singleton.
#[derive(Clone)]
pub struct MediaStore {
    client: Arc<S3Client>,
    bucket: String,
}

impl MediaStore {
    /// Creates a media store over `bucket` using a pre-configured client.
    #[must_use]
    pub const fn new(client: Arc<S3Client>, bucket: String) -> Self {
        Self { client, bucket }
    }

    /// Bucket this store operates on.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    fn presign_config(expires_in: u64) -> StoreResult<PresigningConfig> {
        if expires_in == 0 {
            return Err(StoreError::Validation(
                "expires_in must be positive".to_string(),
            ));
        }
        PresigningConfig::expires_in(Duration::from_secs(expires_in))
            .map_err(|e| StoreError::Config(format!("invalid presigning config: {e}")))
    }

    fn wrap(url: String, key: &str, operation: PresignOperation, expires_in: u64) -> PresignedUrl {
        PresignedUrl {
            url,
            key: key.to_string(),
            operation,
            expires_in,
            expires_at: Utc::now() + Duration::from_secs(expires_in),
        }
    }

    /// Generates a presigned URL for a PUT upload.
    ///
    /// `content_type` becomes part of the signed conditions, so the eventual
    /// upload must send a matching `Content-Type` header or the backend
    /// rejects it. Signing is a local computation; no object bytes move.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` for a zero expiry and
    /// `StoreError::Backend`/`StoreError::Upstream` when the SDK rejects the
    /// request.
    pub async fn presigned_put_url(
        &self,
        key: &str,
        content_type: &str,
        expires_in: u64,
    ) -> StoreResult<PresignedUrl> {
        let config = Self::presign_config(expires_in)?;

        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .presigned(config)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, bucket = %self.bucket, key = %key, "presigning PUT failed");
                StoreError::from(e)
            })?;

        Ok(Self::wrap(
            presigned.uri().to_string(),
            key,
            PresignOperation::Put,
            expires_in,
        ))
    }

    /// Generates a presigned URL for a GET download. No content type is
    /// involved.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::presigned_put_url`].
    pub async fn presigned_get_url(&self, key: &str, expires_in: u64) -> StoreResult<PresignedUrl> {
        let config = Self::presign_config(expires_in)?;

        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(config)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, bucket = %self.bucket, key = %key, "presigning GET failed");
                StoreError::from(e)
            })?;

        Ok(Self::wrap(
            presigned.uri().to_string(),
            key,
            PresignOperation::Get,
            expires_in,
        ))
    }

    /// Lazy page sequence over every object under `prefix`.
    #[must_use]
    pub fn pages<'a>(&'a self, prefix: &str) -> S3ObjectPages<'a> {
        S3ObjectPages {
            client: self.client.as_ref(),
            bucket: &self.bucket,
            prefix: prefix.to_string(),
            token: None,
            done: false,
        }
    }

    /// Walks every page under `prefix`, sorts newest first and truncates to
    /// `limit` when one is supplied.
    ///
    /// # Errors
    ///
    /// A listing error aborts the whole walk; partial results are never
    /// returned.
    pub async fn list_all(
        &self,
        prefix: &str,
        filter: ListingFilter,
        limit: Option<usize>,
    ) -> StoreResult<Vec<ObjectRecord>> {
        let mut records = collect_pages(self.pages(prefix), filter).await?;
        newest_first(&mut records);
        if let Some(limit) = limit {
            records.truncate(limit);
        }
        Ok(records)
    }
}

/// `ListObjectsV2` page source driven by continuation tokens.
///
/// Each call to `next_page` issues one request; the next page is requested
/// only after the previous one has been consumed. The source is done once the
/// backend clears the truncated flag.
pub struct S3ObjectPages<'a> {
    client: &'a S3Client,
    bucket: &'a str,
    prefix: String,
    token: Option<String>,
    done: bool,
}

#[async_trait]
impl ObjectPages for S3ObjectPages<'_> {
    async fn next_page(&mut self) -> StoreResult<Option<Vec<ObjectRecord>>> {
        if self.done {
            return Ok(None);
        }

        let mut request = self
            .client
            .list_objects_v2()
            .bucket(self.bucket)
            .prefix(&self.prefix);
        if let Some(token) = self.token.take() {
            request = request.continuation_token(token);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, bucket = %self.bucket, prefix = %self.prefix, "S3 listing failed");
            StoreError::from(e)
        })?;

        self.token = response.next_continuation_token().map(str::to_string);
        self.done = !response.is_truncated().unwrap_or(false);

        let page = response.contents().iter().filter_map(object_record).collect();
        Ok(Some(page))
    }
}

fn object_record(object: &aws_sdk_s3::types::Object) -> Option<ObjectRecord> {
    let key = object.key()?.to_string();
    let last_modified = object
        .last_modified()
        .and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos()))
        .unwrap_or_default();

    Some(ObjectRecord {
        key,
        last_modified,
        size: object.size().unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use aws_config::{BehaviorVersion, Region};
    use aws_credential_types::Credentials;
    use url::Url;

    use super::*;

    const TEST_BUCKET: &str = "media-uploads-test";

    // Presigning never contacts the endpoint, so these tests run offline
    // against static credentials.
    fn test_store() -> MediaStore {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::from_keys(
                "test-access-key",
                "test-secret-key",
                None,
            ))
            .build();
        MediaStore::new(
            Arc::new(S3Client::from_conf(config)),
            TEST_BUCKET.to_string(),
        )
    }

    fn query(url: &str, name: &str) -> Option<String> {
        let parsed = Url::parse(url).expect("presigned URL must parse");
        parsed
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    #[tokio::test]
    async fn put_url_declares_requested_expiry() {
        let store = test_store();
        let presigned = store
            .presigned_put_url("uploads/1/photo.png", "image/jpeg", 900)
            .await
            .unwrap();

        assert_eq!(presigned.expires_in, 900);
        assert_eq!(presigned.key, "uploads/1/photo.png");
        assert_eq!(presigned.operation, PresignOperation::Put);
        assert_eq!(query(&presigned.url, "X-Amz-Expires").as_deref(), Some("900"));
    }

    #[tokio::test]
    async fn put_url_signs_the_content_type() {
        let store = test_store();
        let presigned = store
            .presigned_put_url("uploads/1/photo.png", "image/png", 900)
            .await
            .unwrap();

        let signed_headers = query(&presigned.url, "X-Amz-SignedHeaders").unwrap();
        assert!(
            signed_headers.contains("content-type"),
            "content-type missing from {signed_headers}"
        );
    }

    #[tokio::test]
    async fn get_url_signs_no_content_type() {
        let store = test_store();
        let presigned = store
            .presigned_get_url("uploads/1/photo.png", 300)
            .await
            .unwrap();

        assert_eq!(presigned.operation, PresignOperation::Get);
        assert_eq!(query(&presigned.url, "X-Amz-Expires").as_deref(), Some("300"));
        let signed_headers = query(&presigned.url, "X-Amz-SignedHeaders").unwrap();
        assert!(!signed_headers.contains("content-type"));
    }

    #[tokio::test]
    async fn url_points_at_the_key() {
        let store = test_store();
        assert_eq!(store.bucket(), TEST_BUCKET);

        let presigned = store
            .presigned_get_url("uploads/1/photo.png", 900)
            .await
            .unwrap();

        let parsed = Url::parse(&presigned.url).unwrap();
        assert!(parsed.path().ends_with("/uploads/1/photo.png"));
        let host = parsed.host_str().unwrap();
        assert!(host.contains(store.bucket()) || parsed.path().contains(store.bucket()));
    }

    #[tokio::test]
    async fn zero_expiry_is_rejected() {
        let store = test_store();
        let err = store
            .presigned_get_url("uploads/1/photo.png", 0)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }
}
