//! Flight combination search.
//!
//! The only page that surfaces a backend-supplied `error` string verbatim;
//! every other failure collapses into the fixed fallback message.

use anyhow::{bail, Result};
use colored::Colorize;
use log::{info, warn};

use crate::client::{ApiClient, FlightQuery};
use crate::error_handling::ApiError;
use crate::render::combination_lines;
use crate::view::{ViewModel, ViewState};

const SEARCH_FAILED: &str = "Failed to search flights. Please try again.";
const NO_RESULTS: &str = "No flight combinations found for the given criteria.";

fn failure_message(error: &ApiError) -> String {
    match error.backend_message() {
        Some(message) => message.to_string(),
        None => SEARCH_FAILED.to_string(),
    }
}

/// Searches flight combinations and renders the offers.
pub async fn run(client: &ApiClient, query: FlightQuery) -> Result<()> {
    let mut view = ViewModel::new();
    let token = view.begin();

    info!(
        "searching flights {} -> {} on {}",
        query.from, query.to, query.departure_date
    );
    let result = client
        .search_flights(&query)
        .await
        .map(|response| response.data)
        .map_err(|e| {
            warn!("flight search failed: {e}");
            failure_message(&e)
        });
    view.resolve(token, result);

    match view.into_state() {
        ViewState::Ready(results) => {
            if results.combinations.is_empty() {
                println!("{NO_RESULTS}");
                return Ok(());
            }
            println!("{}", "Search Results".bold());
            for (index, combination) in results.combinations.iter().enumerate() {
                println!();
                for line in combination_lines(index, combination) {
                    println!("{line}");
                }
            }
            Ok(())
        }
        ViewState::Failed(message) => bail!(message),
        ViewState::Loading => bail!(SEARCH_FAILED),
    }
}
