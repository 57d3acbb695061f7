//! airport_console library: typed access to the airport admin backend and
//! the console pages that render it.
//!
//! The crate is a thin presentation layer over an external REST backend:
//! a stateless [`ApiClient`] with six operations (airports, synchronization
//! triggers and history, flight search), a [`ViewModel`] that drives the
//! loading/ready/failed lifecycle each page goes through, and pure rendering
//! helpers. No business logic or persistent state lives here.
//!
//! # Example
//!
//! ```no_run
//! use airport_console::{ApiClient, initialization::init_client};
//! use url::Url;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let http = init_client(10)?;
//! let base_url = Url::parse("http://127.0.0.1:8000/api/")?;
//! let client = ApiClient::new(http, base_url);
//!
//! let airports = client.list_airports().await?.data;
//! println!("{} airports", airports.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The client requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call it from within an async context.

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod pages;
pub mod render;
pub mod view;

// Re-export public API
pub use client::{ApiClient, ApiResponse, ApiResult, FlightQuery};
pub use config::{Cli, Command, LogFormat, LogLevel};
pub use error_handling::ApiError;
pub use models::{Airport, FlightSearchResponse, ImportAck, ImportLog, ImportStatus};
pub use view::{ViewModel, ViewState};
