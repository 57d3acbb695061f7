//! Application configuration.
//!
//! This module provides:
//! - Configuration constants (base URL, timeouts, user agent)
//! - CLI option types and subcommand parsing

mod constants;
mod types;

pub use constants::*;
pub use types::{Cli, Command, LogFormat, LogLevel};
