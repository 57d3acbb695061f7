//! JSON shapes of the backend-owned entities.
//!
//! Every entity here is a read-only projection of backend state; this crate
//! never mutates them locally. Field names match the backend's wire format.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single airport row, keyed by its three-letter IATA code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// Three-letter IATA code, the natural key for lookups and routing.
    pub iata: String,
    /// City the airport serves.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Latitude; the backend does not have coordinates for every airport.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude; see `lat`.
    #[serde(default)]
    pub lon: Option<f64>,
}

/// Status of a synchronization run.
///
/// The backend may grow new status strings over time; unrecognized values are
/// preserved as [`ImportStatus::Other`] rather than rejected during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportStatus {
    /// The run finished and all airports were processed.
    Success,
    /// The run finished with an error; see the log's `error_message`.
    Failure,
    /// The run has started but not yet reached a terminal state.
    Running,
    /// A status string this client does not know about.
    Other(String),
}

impl ImportStatus {
    /// Raw wire representation of the status.
    pub fn as_str(&self) -> &str {
        match self {
            ImportStatus::Success => "SUCCESS",
            ImportStatus::Failure => "FAILURE",
            ImportStatus::Running => "RUNNING",
            ImportStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for ImportStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "SUCCESS" => ImportStatus::Success,
            "FAILURE" => ImportStatus::Failure,
            "RUNNING" => ImportStatus::Running,
            _ => ImportStatus::Other(raw),
        }
    }
}

impl fmt::Display for ImportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ImportStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(ImportStatus::from(String::deserialize(deserializer)?))
    }
}

impl Serialize for ImportStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// One historical synchronization run, immutable once terminal.
///
/// A `Running` log has no `end_time` yet; `Success` and `Failure` logs do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportLog {
    /// Numeric log id used for detail lookups.
    pub id: i64,
    /// Outcome (or in-flight state) of the run.
    pub status: ImportStatus,
    /// When the run started.
    pub start_time: DateTime<Utc>,
    /// When the run reached a terminal state, if it has.
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    /// Number of airports created by the run.
    #[serde(default)]
    pub airports_created: u32,
    /// Number of airports updated by the run.
    #[serde(default)]
    pub airports_updated: u32,
    /// IATA codes of airports created by the run.
    #[serde(default)]
    pub created_iatas: Vec<String>,
    /// IATA codes of airports updated by the run.
    #[serde(default)]
    pub updated_iatas: Vec<String>,
    /// Backend-supplied error details for failed runs.
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Synchronous acknowledgement returned by the import trigger.
///
/// This reflects the trigger request only; the job itself runs on the
/// backend and is tracked through [`ImportLog`] history.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportAck {
    /// Status reported for the triggered run.
    pub status: ImportStatus,
    /// Airports created so far, as counted by the trigger response.
    #[serde(default)]
    pub created: u32,
    /// Airports updated so far.
    #[serde(default)]
    pub updated: u32,
    /// IATA codes created.
    #[serde(default)]
    pub created_iatas: Vec<String>,
    /// IATA codes updated.
    #[serde(default)]
    pub updated_iatas: Vec<String>,
    /// Free-form details string from the backend.
    #[serde(default)]
    pub details: Option<String>,
}

/// Response body of the flight search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightSearchResponse {
    /// Offered outbound/inbound pairings, possibly empty.
    #[serde(default)]
    pub combinations: Vec<Combination>,
}

/// A paired outbound/optional-inbound flight offer with an aggregate price.
#[derive(Debug, Clone, Deserialize)]
pub struct Combination {
    /// Aggregate price for the combination.
    pub price: Price,
    /// The outbound leg, always present.
    pub outbound_flight: Flight,
    /// The inbound leg, present only for round trips.
    #[serde(default)]
    pub inbound_flight: Option<Flight>,
}

/// Aggregate price of a combination.
#[derive(Debug, Clone, Deserialize)]
pub struct Price {
    /// ISO currency code, e.g. "BRL".
    pub currency: String,
    /// Total amount including fees.
    pub total: f64,
}

/// One flight leg of a combination.
#[derive(Debug, Clone, Deserialize)]
pub struct Flight {
    /// Aircraft operating the leg.
    pub aircraft: Aircraft,
    /// Scheduled departure.
    pub departure_time: DateTime<Utc>,
    /// Scheduled arrival.
    pub arrival_time: DateTime<Utc>,
}

/// Aircraft description attached to a flight leg.
#[derive(Debug, Clone, Deserialize)]
pub struct Aircraft {
    /// Manufacturer name, e.g. "Boeing".
    pub manufacturer: String,
    /// Model designation, e.g. "737-800".
    pub model: String,
}
