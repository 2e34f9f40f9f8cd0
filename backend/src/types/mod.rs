//! Type definitions shared across handlers

mod environment;
mod error;

pub use environment::Environment;
pub use error::AppError;
