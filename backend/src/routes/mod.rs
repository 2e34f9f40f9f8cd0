//! Route registration

mod docs;
mod health;

/// Versioned API routes
pub mod v1;

use aide::axum::{
    routing::{get, post},
    ApiRouter,
};

/// Creates the router with all handler routes
pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler())
        .api_route("/health", get(health::handler))
        .api_route(
            "/v1/uploads/presigned-urls",
            post(v1::uploads::create_upload_url),
        )
}
