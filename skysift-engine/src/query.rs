use tracing::debug;

use skysift_core::criteria::{FilterOptions, SortKey};
use skysift_core::flight::Flight;

use crate::filter::matches;
use crate::sort::sort_flights;

/// Filter-then-sort pipeline over a flight collection.
///
/// Produces a new ordered view; the input is never mutated and no state
/// is kept between calls. Zero matches is a valid outcome, not an
/// error.
pub fn query(flights: &[Flight], filters: &FilterOptions, sort_key: SortKey) -> Vec<Flight> {
    let mut result: Vec<Flight> = flights
        .iter()
        .filter(|flight| matches(flight, filters))
        .cloned()
        .collect();

    sort_flights(&mut result, sort_key);

    debug!(
        total = flights.len(),
        matched = result.len(),
        sort_key = ?sort_key,
        "flight query evaluated"
    );

    result
}
