//! Synchronization history list.

use anyhow::{bail, Result};
use colored::Colorize;
use log::{info, warn};

use crate::client::ApiClient;
use crate::render::status_badge;
use crate::view::{ViewModel, ViewState};

const FETCH_FAILED: &str = "Failed to fetch sync history.";

/// Fetches the synchronization history and renders it, most recent first
/// (the backend orders the collection).
pub async fn run(client: &ApiClient) -> Result<()> {
    let mut view = ViewModel::new();
    let token = view.begin();

    info!("fetching synchronization history");
    let result = client
        .list_import_logs()
        .await
        .map(|response| response.data)
        .map_err(|e| {
            warn!("history request failed: {e}");
            FETCH_FAILED.to_string()
        });
    view.resolve(token, result);

    match view.into_state() {
        ViewState::Ready(logs) => {
            // Manual layout: the status cell is padded before coloring so
            // ANSI escape codes do not break column alignment.
            println!(
                "{:<4}  {:<19}  {:<8}  {:>7}  {:>7}",
                "ID", "Start Time", "Status", "Created", "Updated"
            );
            println!("{}", "-".repeat(53));
            for log in &logs {
                let badge = status_badge(&log.status);
                println!(
                    "{:<4}  {:<19}  {}  {:>7}  {:>7}",
                    log.id,
                    log.start_time.format("%Y-%m-%d %H:%M:%S"),
                    format!("{:<8}", badge.label).color(badge.color),
                    log.airports_created,
                    log.airports_updated
                );
            }
            println!("\n{} runs", logs.len());
            Ok(())
        }
        ViewState::Failed(message) => bail!(message),
        ViewState::Loading => bail!(FETCH_FAILED),
    }
}
