//! The airports list, the console's root page.

use anyhow::{bail, Result};
use log::{info, warn};

use crate::client::ApiClient;
use crate::render::{filter_airports, Table};
use crate::view::{ViewModel, ViewState};

const FETCH_FAILED: &str = "Failed to fetch airports.";

/// Fetches the airport list, applies the optional client-side filter, and
/// renders the table.
pub async fn run(client: &ApiClient, filter: Option<&str>) -> Result<()> {
    let mut view = ViewModel::new();
    let token = view.begin();

    info!("fetching airports from {}", client.base_url());
    let result = client
        .list_airports()
        .await
        .map(|response| response.data)
        .map_err(|e| {
            warn!("airport list request failed: {e}");
            FETCH_FAILED.to_string()
        });
    view.resolve(token, result);

    match view.into_state() {
        ViewState::Ready(airports) => {
            let term = filter.unwrap_or("");
            let filtered = filter_airports(&airports, term);

            let mut table = Table::new(&["IATA", "City", "State"]);
            for airport in &filtered {
                table.push_row(vec![
                    airport.iata.clone(),
                    airport.city.clone(),
                    airport.state.clone(),
                ]);
            }
            println!("{}", table.render());
            if term.is_empty() {
                println!("\n{} airports", filtered.len());
            } else {
                println!("\n{} of {} airports match {term:?}", filtered.len(), airports.len());
            }
            Ok(())
        }
        ViewState::Failed(message) => bail!(message),
        ViewState::Loading => bail!(FETCH_FAILED),
    }
}
