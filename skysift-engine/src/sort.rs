use std::cmp::Ordering;

use skysift_core::criteria::SortKey;
use skysift_core::flight::Flight;

/// Order two flights under the active key. Ties compare equal; the
/// caller's stable sort preserves input order between them.
pub fn compare(a: &Flight, b: &Flight, key: SortKey) -> Ordering {
    match key {
        SortKey::Price => a
            .price
            .amount
            .partial_cmp(&b.price.amount)
            .unwrap_or(Ordering::Equal),
        SortKey::Duration => a.total_duration.cmp(&b.total_duration),
        SortKey::Departure => compare_departure(a, b),
        SortKey::Stops => a.stops.cmp(&b.stops),
    }
}

/// Ascending by the first segment's departure as an absolute instant,
/// so cross-midnight and cross-timezone offers order correctly.
/// Segment-less flights sort after everything with a departure.
fn compare_departure(a: &Flight, b: &Flight) -> Ordering {
    match (a.departure_time(), b.departure_time()) {
        (Some(da), Some(db)) => da.cmp(&db),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort under the active key.
pub fn sort_flights(flights: &mut [Flight], key: SortKey) {
    flights.sort_by(|a, b| compare(a, b, key));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use skysift_core::flight::{Airline, Airport, Baggage, BookingClass, FlightSegment, Money};

    fn airport(code: &str) -> Airport {
        Airport {
            code: code.to_string(),
            name: format!("{code} International"),
            city: code.to_string(),
            country: "USA".to_string(),
        }
    }

    fn flight(id: &str, price: f64, duration: i64, stops: u32, departure: &str) -> Flight {
        let dep = DateTime::parse_from_rfc3339(departure).unwrap();
        let segments = (0..=stops)
            .map(|i| FlightSegment {
                origin: airport("JFK"),
                destination: airport("LAX"),
                departure_time: dep,
                arrival_time: dep,
                duration,
                flight_number: format!("XX{i}"),
                airline: Airline {
                    code: "XX".to_string(),
                    name: "Test Air".to_string(),
                    logo: None,
                },
                aircraft: "A320".to_string(),
            })
            .collect();
        Flight {
            id: id.to_string(),
            segments,
            total_duration: duration,
            stops,
            price: Money {
                amount: price,
                currency: "USD".to_string(),
            },
            availability: 5,
            booking_class: BookingClass::Economy,
            baggage: Baggage {
                carry: "1 x 22lbs".to_string(),
                checked: "1 x 50lbs".to_string(),
            },
        }
    }

    fn ids(flights: &[Flight]) -> Vec<&str> {
        flights.iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn test_sort_by_price_ascending() {
        let mut flights = vec![
            flight("a", 299.0, 390, 0, "2024-03-15T08:00:00Z"),
            flight("b", 245.0, 525, 1, "2024-03-15T10:15:00Z"),
        ];
        sort_flights(&mut flights, SortKey::Price);
        assert_eq!(ids(&flights), ["b", "a"]);
    }

    #[test]
    fn test_sort_by_duration_ascending() {
        let mut flights = vec![
            flight("a", 245.0, 525, 1, "2024-03-15T10:15:00Z"),
            flight("b", 299.0, 390, 0, "2024-03-15T08:00:00Z"),
        ];
        sort_flights(&mut flights, SortKey::Duration);
        assert_eq!(ids(&flights), ["b", "a"]);
    }

    #[test]
    fn test_sort_by_stops_ascending() {
        let mut flights = vec![
            flight("a", 245.0, 525, 1, "2024-03-15T10:15:00Z"),
            flight("b", 299.0, 390, 0, "2024-03-15T08:00:00Z"),
        ];
        sort_flights(&mut flights, SortKey::Stops);
        assert_eq!(ids(&flights), ["b", "a"]);
    }

    #[test]
    fn test_departure_sort_compares_instants_across_offsets() {
        // Both depart at 2024-03-16T00:00:00Z; equal instants keep
        // input order even though the local clocks differ wildly.
        let mut flights = vec![
            flight("tokyo", 500.0, 600, 0, "2024-03-16T09:00:00+09:00"),
            flight("azores", 400.0, 300, 0, "2024-03-15T23:00:00-01:00"),
        ];
        sort_flights(&mut flights, SortKey::Departure);
        assert_eq!(ids(&flights), ["tokyo", "azores"]);

        let mut flights = vec![
            flight("later", 500.0, 600, 0, "2024-03-16T10:00:00+09:00"),
            flight("earlier", 400.0, 300, 0, "2024-03-15T23:00:00-01:00"),
        ];
        sort_flights(&mut flights, SortKey::Departure);
        assert_eq!(ids(&flights), ["earlier", "later"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let mut flights = vec![
            flight("first", 250.0, 390, 0, "2024-03-15T08:00:00Z"),
            flight("second", 250.0, 420, 1, "2024-03-15T09:00:00Z"),
            flight("third", 250.0, 300, 0, "2024-03-15T07:00:00Z"),
        ];
        sort_flights(&mut flights, SortKey::Price);
        assert_eq!(ids(&flights), ["first", "second", "third"]);
    }

    #[test]
    fn test_segmentless_flights_sort_last_by_departure() {
        let mut malformed = flight("bad", 100.0, 0, 0, "2024-03-15T08:00:00Z");
        malformed.segments.clear();
        let mut flights = vec![
            malformed,
            flight("ok", 299.0, 390, 0, "2024-03-15T08:00:00Z"),
        ];
        sort_flights(&mut flights, SortKey::Departure);
        assert_eq!(ids(&flights), ["ok", "bad"]);
    }
}
