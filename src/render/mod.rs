//! Pure rendering helpers: no I/O, no state.

mod filter;
mod flights;
mod status;
mod table;

pub use filter::filter_airports;
pub use flights::combination_lines;
pub use status::{status_badge, StatusBadge};
pub use table::Table;

/// Renders an optional coordinate, using the fixed placeholder when the
/// backend has none.
pub fn coordinate(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "not available".to_string(),
    }
}

/// Joins a list of IATA codes, rendering an explicit placeholder for an
/// empty list rather than an empty string.
pub fn iata_list(codes: &[String]) -> String {
    if codes.is_empty() {
        "None".to_string()
    } else {
        codes.join(", ")
    }
}
