//! Page runners, one per subcommand.
//!
//! Each page drives the fetch lifecycle around exactly one API call: begin a
//! fetch, resolve it, then render the terminal state. A failed page prints
//! nothing but its user-facing message (returned as the error), so one page's
//! failure never takes the rest of the console down with it.

mod airport_detail;
mod airports;
mod flight_search;
mod import;
mod log_detail;
mod logs;

use anyhow::Result;

use crate::client::{ApiClient, FlightQuery};
use crate::config::Command;

/// Dispatches a subcommand to its page runner.
pub async fn run(command: Command, client: &ApiClient) -> Result<()> {
    match command {
        Command::Airports { filter } => airports::run(client, filter.as_deref()).await,
        Command::Airport { iata } => airport_detail::run(client, &iata).await,
        Command::Import { user, password } => import::run(client, &user, &password).await,
        Command::Logs => logs::run(client).await,
        Command::Log { id } => log_detail::run(client, id).await,
        Command::Flights {
            from,
            to,
            departure_date,
            return_date,
            token,
        } => {
            // IATA codes are upper-case on the wire; accept either case here.
            let query = FlightQuery {
                from: from.to_uppercase(),
                to: to.to_uppercase(),
                departure_date,
                return_date,
                api_auth_token: token,
            };
            flight_search::run(client, query).await
        }
    }
}
