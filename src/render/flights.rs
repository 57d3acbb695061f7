//! Formatting of flight combinations into display lines.

use crate::models::{Combination, Flight};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Formats one combination as indented display lines: the priced header,
/// the outbound leg, and the inbound leg when the offer has one.
pub fn combination_lines(index: usize, combination: &Combination) -> Vec<String> {
    let mut lines = vec![format!(
        "Option {} - Total Price: {} {:.2}",
        index + 1,
        combination.price.currency,
        combination.price.total
    )];
    lines.extend(flight_lines("Outbound Flight", &combination.outbound_flight));
    if let Some(inbound) = &combination.inbound_flight {
        lines.extend(flight_lines("Inbound Flight", inbound));
    }
    lines
}

fn flight_lines(title: &str, flight: &Flight) -> Vec<String> {
    vec![
        format!("  {title}"),
        format!(
            "    Aircraft: {} {}",
            flight.aircraft.manufacturer, flight.aircraft.model
        ),
        format!(
            "    Departure: {} - Arrival: {}",
            flight.departure_time.format(TIME_FORMAT),
            flight.arrival_time.format(TIME_FORMAT)
        ),
    ]
}
