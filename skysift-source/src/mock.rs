use async_trait::async_trait;
use tracing::info;

use skysift_core::flight::Flight;
use skysift_core::repository::FlightSource;
use skysift_core::search::SearchParams;
use skysift_core::{CoreError, CoreResult};

const FIXTURE: &str = include_str!("../data/flights.json");

/// Canned JFK–LAX inventory standing in for a real backend.
pub struct MockFlightSource {
    flights: Vec<Flight>,
}

impl MockFlightSource {
    pub fn new() -> CoreResult<Self> {
        let flights: Vec<Flight> = serde_json::from_str(FIXTURE)
            .map_err(|e| CoreError::InternalError(format!("fixture inventory: {e}")))?;
        for flight in &flights {
            flight.validate()?;
        }
        Ok(Self { flights })
    }

    /// Serve an arbitrary inventory instead of the built-in fixture.
    pub fn with_flights(flights: Vec<Flight>) -> Self {
        Self { flights }
    }
}

#[async_trait]
impl FlightSource for MockFlightSource {
    /// Matches the requested route against each offer's overall
    /// origin/destination; a blank code matches any airport.
    async fn search(
        &self,
        params: &SearchParams,
    ) -> Result<Vec<Flight>, Box<dyn std::error::Error + Send + Sync>> {
        let matched: Vec<Flight> = self
            .flights
            .iter()
            .filter(|flight| serves_route(flight, &params.origin, &params.destination))
            .cloned()
            .collect();

        info!(
            origin = %params.origin,
            destination = %params.destination,
            matched = matched.len(),
            "mock flight search"
        );

        Ok(matched)
    }
}

fn serves_route(flight: &Flight, origin: &str, destination: &str) -> bool {
    let from_ok = origin.is_empty()
        || flight
            .segments
            .first()
            .is_some_and(|s| s.origin.code == origin);
    let to_ok = destination.is_empty()
        || flight
            .segments
            .last()
            .is_some_and(|s| s.destination.code == destination);
    from_ok && to_ok
}
