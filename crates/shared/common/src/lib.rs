//! Shared error handling for the taxi fleet registry.
//!
//! Maps domain and infrastructure failures to HTTP responses.

pub mod error;

pub use error::{AppError, AppResult, OptionExt};
