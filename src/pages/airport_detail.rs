//! Detail page for one airport.

use anyhow::{bail, Result};
use colored::Colorize;
use log::{info, warn};

use crate::client::ApiClient;
use crate::error_handling::ApiError;
use crate::render::coordinate;
use crate::view::{ViewModel, ViewState};

const FETCH_FAILED: &str = "Failed to fetch airport details.";
const NOT_FOUND: &str = "Airport not found.";

fn failure_message(error: &ApiError) -> &'static str {
    if error.is_not_found() {
        NOT_FOUND
    } else {
        FETCH_FAILED
    }
}

/// Fetches one airport by IATA code and renders its detail view.
pub async fn run(client: &ApiClient, iata: &str) -> Result<()> {
    let mut view = ViewModel::new();
    let token = view.begin();

    info!("fetching airport {iata}");
    let result = client
        .get_airport(iata)
        .await
        .map(|response| response.data)
        .map_err(|e| {
            warn!("airport detail request failed: {e}");
            failure_message(&e).to_string()
        });
    view.resolve(token, result);

    match view.into_state() {
        ViewState::Ready(airport) => {
            println!("{}", format!("Airport {}", airport.iata).bold());
            println!("  IATA Code: {}", airport.iata);
            println!("  City:      {}", airport.city);
            println!("  State:     {}", airport.state);
            println!("  Latitude:  {}", coordinate(airport.lat));
            println!("  Longitude: {}", coordinate(airport.lon));
            Ok(())
        }
        ViewState::Failed(message) => bail!(message),
        ViewState::Loading => bail!(FETCH_FAILED),
    }
}
