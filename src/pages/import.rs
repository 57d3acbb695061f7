//! Manual synchronization trigger.
//!
//! This posts the credentials and returns as soon as the backend accepts or
//! rejects the trigger; the job itself runs asynchronously and is reviewed
//! through the history pages. Credentials are forwarded, never logged, and
//! dropped when the page finishes.

use anyhow::{bail, Result};
use colored::Colorize;
use log::{info, warn};

use crate::client::ApiClient;
use crate::view::{ViewModel, ViewState};

const TRIGGER_FAILED: &str = "Failed to start synchronization. Check the credentials.";
const TRIGGER_OK: &str = "Synchronization started successfully.";

/// Triggers a synchronization job and renders the acknowledgement.
pub async fn run(client: &ApiClient, user: &str, password: &str) -> Result<()> {
    let mut view = ViewModel::new();
    let token = view.begin();

    info!("triggering synchronization");
    println!("Starting synchronization...");
    let result = client
        .trigger_import(user, password)
        .await
        .map(|response| response.data)
        .map_err(|e| {
            warn!("import trigger rejected: {e}");
            TRIGGER_FAILED.to_string()
        });
    view.resolve(token, result);

    match view.into_state() {
        ViewState::Ready(ack) => {
            println!("{}", TRIGGER_OK.green());
            println!(
                "  Status: {} ({} created, {} updated)",
                ack.status, ack.created, ack.updated
            );
            if let Some(details) = &ack.details {
                println!("  Details: {details}");
            }
            Ok(())
        }
        ViewState::Failed(message) => bail!(message),
        ViewState::Loading => bail!(TRIGGER_FAILED),
    }
}
