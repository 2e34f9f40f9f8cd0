//! Pre-signed upload/download URLs and gallery tooling for a media bucket
//!
//! This crate is shared between the HTTP backend and the uploads CLI. It
//! covers key naming under `uploads/{user_id}/`, presigning through
//! `aws-sdk-s3`, paginated listing, and the static gallery/index renderers.
//! All signing and canonical-request work lives inside the SDK; this crate
//! only assembles parameters and calls it.

pub mod config;
pub mod error;
pub mod key;
pub mod listing;
pub mod render;
pub mod store;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use listing::{collect_pages, newest_first, ListingFilter, ObjectPages, ObjectRecord};
pub use store::{MediaStore, PresignOperation, PresignedUrl};
