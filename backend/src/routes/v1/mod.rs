//! Version 1 API handlers

/// Presigned upload URL handler
pub mod uploads;
