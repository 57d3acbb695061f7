//! Detail page for one synchronization log.

use anyhow::{bail, Result};
use colored::Colorize;
use log::{info, warn};

use crate::client::ApiClient;
use crate::error_handling::ApiError;
use crate::render::{iata_list, status_badge};
use crate::view::{ViewModel, ViewState};

const FETCH_FAILED: &str = "Failed to fetch log details.";
const NOT_FOUND: &str = "Log not found.";

fn failure_message(error: &ApiError) -> &'static str {
    if error.is_not_found() {
        NOT_FOUND
    } else {
        FETCH_FAILED
    }
}

/// Fetches one synchronization log by id and renders its detail view.
pub async fn run(client: &ApiClient, id: i64) -> Result<()> {
    let mut view = ViewModel::new();
    let token = view.begin();

    info!("fetching synchronization log {id}");
    let result = client
        .get_import_log(id)
        .await
        .map(|response| response.data)
        .map_err(|e| {
            warn!("log detail request failed: {e}");
            failure_message(&e).to_string()
        });
    view.resolve(token, result);

    match view.into_state() {
        ViewState::Ready(log) => {
            let badge = status_badge(&log.status);
            println!("{}", format!("Synchronization #{}", log.id).bold());
            println!("  Status:     {}", badge.label.color(badge.color));
            println!(
                "  Start Time: {}",
                log.start_time.format("%Y-%m-%d %H:%M:%S")
            );
            match log.end_time {
                Some(end_time) => {
                    println!("  End Time:   {}", end_time.format("%Y-%m-%d %H:%M:%S"));
                }
                None => println!("  End Time:   N/A"),
            }
            println!("  Created:    {}", log.airports_created);
            println!("  Updated:    {}", log.airports_updated);
            println!("  Created IATA Codes: {}", iata_list(&log.created_iatas));
            println!("  Updated IATA Codes: {}", iata_list(&log.updated_iatas));
            if let Some(error_message) = &log.error_message {
                println!("  {}", "Error Message:".red());
                println!("    {error_message}");
            }
            Ok(())
        }
        ViewState::Failed(message) => bail!(message),
        ViewState::Loading => bail!(FETCH_FAILED),
    }
}
