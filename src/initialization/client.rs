//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{DEFAULT_USER_AGENT, TCP_CONNECT_TIMEOUT_SECS};

/// Initializes the shared HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - The crate's User-Agent header
/// - A global request timeout from configuration
/// - A TCP connect timeout so an unreachable backend fails fast
///
/// The client is cheap to clone and safe to share across concurrent callers.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(timeout_seconds: u64) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_seconds))
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .user_agent(DEFAULT_USER_AGENT)
        .build()
}
