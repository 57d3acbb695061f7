//! Error types and categorization.
//!
//! The library returns typed errors; `anyhow` is used only at the binary
//! boundary. Transport failures, HTTP error statuses, and not-found results
//! are distinguished here so pages can pick the right user-facing message.

mod categorization;
mod types;

pub use categorization::{categorize_status, categorize_transport};
pub use types::{ApiError, InitializationError};
