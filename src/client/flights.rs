//! Flight search query parameters.

use std::fmt;

use chrono::NaiveDate;

/// Parameters of a flight search.
///
/// The token is part of the query object rather than the client so the
/// client itself stays credential-free; `Debug` redacts it.
#[derive(Clone)]
pub struct FlightQuery {
    /// Origin IATA code.
    pub from: String,
    /// Destination IATA code.
    pub to: String,
    /// Departure date.
    pub departure_date: NaiveDate,
    /// Optional return date; when absent, `returnDate` is omitted from the
    /// query string entirely.
    pub return_date: Option<NaiveDate>,
    /// Caller-supplied auth token for the flights API.
    pub api_auth_token: String,
}

impl FlightQuery {
    /// Query-string pairs in the order the backend documents them.
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("from", self.from.clone()),
            ("to", self.to.clone()),
            ("departureDate", self.departure_date.to_string()),
        ];
        if let Some(return_date) = self.return_date {
            pairs.push(("returnDate", return_date.to_string()));
        }
        pairs
    }
}

impl fmt::Debug for FlightQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlightQuery")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("departure_date", &self.departure_date)
            .field("return_date", &self.return_date)
            .field("api_auth_token", &"<redacted>")
            .finish()
    }
}
