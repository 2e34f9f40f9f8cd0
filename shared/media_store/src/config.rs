//! Environment-driven configuration for the media bucket

use std::env;
use std::time::Duration;

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion, Region};
use aws_sdk_s3::Client as S3Client;

use crate::error::{StoreError, StoreResult};

/// Region assumed when `REGION` is not set
pub const DEFAULT_REGION: &str = "us-east-1";

/// Bucket configuration resolved from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Bucket holding user uploads (`BUCKET`, required)
    pub bucket: String,
    /// AWS region (`REGION`, defaults to `us-east-1`)
    pub region: String,
    /// Bucket serving the static site (`WEB_BUCKET`, gallery build only)
    pub web_bucket: Option<String>,
    /// Custom endpoint for S3-compatible providers (`AWS_ENDPOINT_URL`)
    pub endpoint_url: Option<String>,
}

impl StoreConfig {
    /// Reads `BUCKET`, `REGION`, `WEB_BUCKET` and `AWS_ENDPOINT_URL`.
    ///
    /// # Errors
    ///
    /// Fails fast with a `Config` error naming the missing variable, so a
    /// misconfigured deployment never reaches the SDK and surfaces a raw
    /// signing failure instead.
    pub fn from_env() -> StoreResult<Self> {
        let bucket = env::var("BUCKET")
            .map_err(|_| StoreError::Config("BUCKET not set in environment/.env".to_string()))?;
        let region = env::var("REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());
        let web_bucket = env::var("WEB_BUCKET").ok();
        let endpoint_url = env::var("AWS_ENDPOINT_URL").ok();

        Ok(Self {
            bucket,
            region,
            web_bucket,
            endpoint_url,
        })
    }

    /// Web bucket, required by the gallery build.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error naming `WEB_BUCKET` when it is not set.
    pub fn require_web_bucket(&self) -> StoreResult<&str> {
        self.web_bucket
            .as_deref()
            .ok_or_else(|| StoreError::Config("WEB_BUCKET not set in environment/.env".to_string()))
    }

    /// AWS configuration with retry and timeout settings.
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let retry_config = RetryConfig::standard()
            .with_max_attempts(3)
            .with_initial_backoff(Duration::from_millis(50));

        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(30))
            .build();

        let mut builder = aws_config::load_defaults(BehaviorVersion::latest())
            .await
            .to_builder()
            .region(Region::new(self.region.clone()))
            .retry_config(retry_config)
            .timeout_config(timeout_config);

        if let Some(ref endpoint_url) = self.endpoint_url {
            builder = builder.endpoint_url(endpoint_url);
        }

        builder.build()
    }

    /// S3 service configuration.
    ///
    /// Path-style addressing is forced when a custom endpoint (LocalStack,
    /// MinIO) is in use.
    pub async fn s3_client_config(&self) -> aws_sdk_s3::Config {
        let aws_config = self.aws_config().await;
        let s3_config: aws_sdk_s3::Config = (&aws_config).into();
        let mut builder = s3_config.to_builder();

        if self.endpoint_url.is_some() {
            builder.set_force_path_style(Some(true));
        }

        builder.build()
    }

    /// Ready-to-use S3 client.
    pub async fn client(&self) -> S3Client {
        S3Client::from_conf(self.s3_client_config().await)
    }
}
