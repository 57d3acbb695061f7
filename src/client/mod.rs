//! The API client: six typed operations against the airport admin backend.
//!
//! The client holds only the shared `reqwest::Client` and the base URL; it
//! keeps no state between calls and is safe to share across concurrent
//! callers. Every operation resolves to an [`ApiResponse`] envelope whose
//! `data` field holds the typed payload, or fails with an
//! [`ApiError`](crate::error_handling::ApiError).

mod flights;

pub use flights::FlightQuery;

use log::debug;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::AUTH_SCHEME;
use crate::error_handling::{categorize_status, categorize_transport, ApiError};
use crate::models::{Airport, FlightSearchResponse, ImportAck, ImportLog};

/// Success envelope returned by every client operation.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// The typed payload.
    pub data: T,
}

/// Result alias used by all client operations.
pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

/// Stateless HTTP access to the airport admin backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client over an already-built `reqwest::Client` and base URL.
    ///
    /// The base URL must end with a slash; endpoint paths are joined
    /// relative to it.
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The base URL all endpoint paths are joined against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches the full airport list.
    pub async fn list_airports(&self) -> ApiResult<Vec<Airport>> {
        let url = self.endpoint("airports/")?;
        self.send_json(self.http.get(url)).await
    }

    /// Fetches one airport by IATA code.
    ///
    /// The code must be non-empty; an absent airport surfaces as
    /// [`ApiError::NotFound`].
    pub async fn get_airport(&self, iata: &str) -> ApiResult<Airport> {
        let iata = iata.trim();
        if iata.is_empty() {
            return Err(ApiError::InvalidInput(
                "IATA code must not be empty".to_string(),
            ));
        }
        let url = self.endpoint(&format!("airports/{iata}/"))?;
        self.send_json(self.http.get(url)).await
    }

    /// Triggers a synchronization job with the supplied credentials.
    ///
    /// Credentials are posted as multipart form fields and are never logged
    /// or retained. This resolves once the trigger request is accepted or
    /// rejected; it never waits for the job itself.
    pub async fn trigger_import(&self, user: &str, password: &str) -> ApiResult<ImportAck> {
        let url = self.endpoint("airports/import/")?;
        let form = reqwest::multipart::Form::new()
            .text("user", user.to_owned())
            .text("password", password.to_owned());
        self.send_json(self.http.post(url).multipart(form)).await
    }

    /// Fetches the synchronization history, ordered by the backend.
    pub async fn list_import_logs(&self) -> ApiResult<Vec<ImportLog>> {
        let url = self.endpoint("import-logs/")?;
        self.send_json(self.http.get(url)).await
    }

    /// Fetches one synchronization log by numeric id.
    pub async fn get_import_log(&self, id: i64) -> ApiResult<ImportLog> {
        let url = self.endpoint(&format!("import-logs/{id}/"))?;
        self.send_json(self.http.get(url)).await
    }

    /// Searches flight combinations via the flights integration.
    ///
    /// `returnDate` is included in the query string only when the caller
    /// supplied one. The caller's token travels as an
    /// `Authorization: Token <token>` header and is never logged.
    pub async fn search_flights(&self, query: &FlightQuery) -> ApiResult<FlightSearchResponse> {
        let url = self.endpoint("flights_integration/search/")?;
        let request = self
            .http
            .get(url)
            .query(&query.to_query_pairs())
            .header(
                AUTHORIZATION,
                format!("{AUTH_SCHEME} {}", query.api_auth_token),
            );
        self.send_json(request).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidInput(format!("invalid endpoint path {path:?}: {e}")))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> ApiResult<T> {
        let response = request.send().await.map_err(categorize_transport)?;
        let status = response.status();
        debug!("backend answered {status}");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(categorize_status(status, &body));
        }
        let data = response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(ApiResponse { data })
    }
}
