//! Upload URL backend service

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Handler routes
pub mod routes;

/// HTTP server setup
pub mod server;

/// Shared types: environment and error handling
pub mod types;
