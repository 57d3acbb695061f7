//! CLI option types and subcommand parsing.
//!
//! The subcommand table mirrors the backend's route table: the airports
//! list at the root, a keyed airport detail, the import trigger, the
//! synchronization history and its keyed detail, and flight search.

use std::fmt;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use url::Url;

use crate::config::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogFormat::Plain => "plain",
            LogFormat::Json => "json",
        })
    }
}

/// Command-line interface of the airport console.
#[derive(Debug, Parser)]
#[command(name = "airport_console", version, about)]
pub struct Cli {
    /// The page to run; defaults to the airports list.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the airport admin backend (trailing slash required).
    #[arg(long, env = "AIRPORT_API_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: Url,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_seconds: u64,

    /// Log level.
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format.
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,
}

/// One subcommand per page.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all airports, optionally filtered by city or IATA code.
    Airports {
        /// Case-insensitive substring filter on city or IATA code.
        #[arg(long)]
        filter: Option<String>,
    },

    /// Show one airport by IATA code.
    Airport {
        /// Three-letter IATA code.
        iata: String,
    },

    /// Trigger a synchronization job on the backend.
    ///
    /// Credentials are forwarded to the backend as-is and never logged or
    /// stored. The command returns as soon as the trigger is accepted; the
    /// job itself runs asynchronously and shows up in the history.
    Import {
        /// Username for the external airport data source.
        #[arg(long, env = "AIRPORT_IMPORT_USER")]
        user: String,

        /// Password for the external airport data source.
        #[arg(long, env = "AIRPORT_IMPORT_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// List the synchronization history, most recent first.
    Logs,

    /// Show one synchronization log by id.
    Log {
        /// Numeric log id.
        id: i64,
    },

    /// Search flight combinations via the flights integration.
    Flights {
        /// Origin IATA code.
        #[arg(long)]
        from: String,

        /// Destination IATA code.
        #[arg(long)]
        to: String,

        /// Departure date (YYYY-MM-DD).
        #[arg(long)]
        departure_date: NaiveDate,

        /// Optional return date (YYYY-MM-DD); omitted from the query when absent.
        #[arg(long)]
        return_date: Option<NaiveDate>,

        /// Auth token for the flights API, sent as a bearer-style header.
        #[arg(long, env = "AIRPORT_FLIGHTS_TOKEN", hide_env_values = true)]
        token: String,
    },
}
