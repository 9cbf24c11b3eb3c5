use chrono::Timelike;

use skysift_core::criteria::{DepartureWindow, FilterOptions};
use skysift_core::flight::Flight;

/// Decide whether a single flight satisfies every active constraint.
///
/// Active fields combine with AND; values within a multi-valued field
/// combine with OR. An unset (or empty) field never excludes a flight.
pub fn matches(flight: &Flight, filters: &FilterOptions) -> bool {
    matches_price(flight, filters)
        && matches_airlines(flight, filters)
        && matches_stops(flight, filters)
        && matches_departure_window(flight, filters)
        && matches_duration(flight, filters)
}

fn matches_price(flight: &Flight, filters: &FilterOptions) -> bool {
    match filters.max_price {
        Some(max) => flight.price.amount <= max,
        None => true,
    }
}

/// At least one segment operated by one of the selected carriers.
fn matches_airlines(flight: &Flight, filters: &FilterOptions) -> bool {
    match filters.airlines.as_deref() {
        None | Some([]) => true,
        Some(codes) => flight
            .segments
            .iter()
            .any(|segment| codes.iter().any(|code| code == &segment.airline.code)),
    }
}

fn matches_stops(flight: &Flight, filters: &FilterOptions) -> bool {
    match filters.stops.as_deref() {
        None | Some([]) => true,
        Some(allowed) => allowed.contains(&flight.stops),
    }
}

/// Classifies the first segment's departure on the clock local to its
/// stated timestamp. A segment-less flight has no departure to
/// classify and cannot satisfy an active window constraint.
fn matches_departure_window(flight: &Flight, filters: &FilterOptions) -> bool {
    let windows = match filters.departure_time.as_deref() {
        None | Some([]) => return true,
        Some(windows) => windows,
    };
    match flight.departure_time() {
        Some(departure) => windows.contains(&DepartureWindow::from_hour(departure.hour())),
        None => false,
    }
}

fn matches_duration(flight: &Flight, filters: &FilterOptions) -> bool {
    match filters.duration {
        Some(range) => range.min <= flight.total_duration && flight.total_duration <= range.max,
        None => true,
    }
}
