// Not every util is used in every test, so we allow dead code
#![allow(dead_code)]

use std::sync::Arc;

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::Client as S3Client;
use axum::{body::Body, http::Request, response::Response, Extension, Router};
use backend::{routes, types::Environment};
use media_store::MediaStore;
use tower::ServiceExt;

/// Bucket used by router tests; presigning never contacts it.
pub const TEST_BUCKET: &str = "media-uploads-test";

/// Builds an S3 client with static credentials.
///
/// Presigned URL generation is a local signing computation, so these tests
/// run without a live endpoint.
pub fn test_s3_client() -> S3Client {
    let config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys(
            "test-access-key",
            "test-secret-key",
            None,
        ))
        .build();
    S3Client::from_conf(config)
}

/// Router plus the dependencies it was built from
pub struct TestContext {
    pub router: Router,
    pub store: Arc<MediaStore>,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(MediaStore::new(
            Arc::new(test_s3_client()),
            TEST_BUCKET.to_string(),
        ));

        let router = routes::handler()
            .layer(Extension(Environment::Development))
            .layer(Extension(store.clone()))
            .into();

        Self { router, store }
    }

    pub async fn send_post_request(
        &self,
        route: &str,
        payload: serde_json::Value,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string()))?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }
}

pub async fn parse_response_body(response: Response) -> serde_json::Value {
    use http_body_util::BodyExt;

    let body = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    serde_json::from_slice(&body).expect("body is not valid JSON")
}
