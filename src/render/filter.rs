//! Client-side airport filter.

use crate::models::Airport;

/// Case-insensitive substring filter on city OR IATA code.
///
/// An empty filter returns every row unmodified. The underlying collection
/// is never touched; the result borrows from it.
pub fn filter_airports<'a>(airports: &'a [Airport], term: &str) -> Vec<&'a Airport> {
    if term.is_empty() {
        return airports.iter().collect();
    }
    let needle = term.to_lowercase();
    airports
        .iter()
        .filter(|airport| {
            airport.city.to_lowercase().contains(&needle)
                || airport.iata.to_lowercase().contains(&needle)
        })
        .collect()
}
