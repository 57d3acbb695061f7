//! Error type definitions.

use log::SetLoggerError;
use reqwest::StatusCode;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Failures surfaced by the API client.
///
/// Raw transport errors are never shown to the user verbatim; pages map
/// these variants to short human-readable messages. The only backend text
/// that may be surfaced directly is the structured `error` string carried by
/// [`ApiError::Status`].
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request did not complete within the client timeout.
    #[error("request timed out")]
    Timeout,

    /// The connection to the backend could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// Any other transport-level failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered 404 for a keyed lookup.
    #[error("resource not found")]
    NotFound,

    /// A non-success HTTP status, with the backend's structured `error`
    /// string when the response body supplied one.
    #[error("server returned HTTP {status}")]
    Status {
        /// The HTTP status code of the response.
        status: StatusCode,
        /// Structured `error` field parsed from the response body, if any.
        message: Option<String>,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The caller supplied input the client refuses to send.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ApiError {
    /// Structured `error` string supplied by the backend, if any.
    ///
    /// Only the flight-search page surfaces this verbatim; every other page
    /// uses its own fixed message.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// True when the backend reported the resource as absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}
