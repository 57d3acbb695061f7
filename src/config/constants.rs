//! Configuration constants.

/// Base URL of the airport admin backend, overridable via `--base-url` or
/// the `AIRPORT_API_BASE_URL` environment variable. The trailing slash
/// matters: endpoint paths are joined relative to it.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/";

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// TCP connect timeout in seconds, kept below the global request timeout so
/// an unreachable backend fails fast.
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// User-Agent header sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("airport_console/", env!("CARGO_PKG_VERSION"));

/// Authorization scheme expected by the flight search endpoint.
pub const AUTH_SCHEME: &str = "Token";
