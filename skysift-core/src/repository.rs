use async_trait::async_trait;

use crate::flight::{Airport, Flight};
use crate::search::SearchParams;

/// Provider of raw flight inventory.
///
/// Any real implementation (HTTP client, database-backed service) can
/// be substituted without touching the query pipeline.
#[async_trait]
pub trait FlightSource: Send + Sync {
    async fn search(
        &self,
        params: &SearchParams,
    ) -> Result<Vec<Flight>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Autocomplete candidate provider for the search form.
#[async_trait]
pub trait AirportLookup: Send + Sync {
    async fn search(
        &self,
        query: &str,
    ) -> Result<Vec<Airport>, Box<dyn std::error::Error + Send + Sync>>;
}
