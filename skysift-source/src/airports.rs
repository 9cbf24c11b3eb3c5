use async_trait::async_trait;

use skysift_core::flight::Airport;
use skysift_core::repository::AirportLookup;

/// Autocomplete candidates over a fixed airport table, matched
/// case-insensitively on code, name, or city.
pub struct MockAirportLookup {
    airports: Vec<Airport>,
    max_results: usize,
}

impl MockAirportLookup {
    pub fn new(max_results: usize) -> Self {
        Self {
            airports: default_airports(),
            max_results,
        }
    }

    pub fn with_airports(airports: Vec<Airport>, max_results: usize) -> Self {
        Self {
            airports,
            max_results,
        }
    }
}

#[async_trait]
impl AirportLookup for MockAirportLookup {
    async fn search(
        &self,
        query: &str,
    ) -> Result<Vec<Airport>, Box<dyn std::error::Error + Send + Sync>> {
        let needle = query.to_lowercase();
        Ok(self
            .airports
            .iter()
            .filter(|airport| {
                airport.name.to_lowercase().contains(&needle)
                    || airport.city.to_lowercase().contains(&needle)
                    || airport.code.to_lowercase().contains(&needle)
            })
            .take(self.max_results)
            .cloned()
            .collect())
    }
}

fn airport(code: &str, name: &str, city: &str) -> Airport {
    Airport {
        code: code.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        country: "USA".to_string(),
    }
}

fn default_airports() -> Vec<Airport> {
    vec![
        airport("JFK", "John F. Kennedy International", "New York"),
        airport("LAX", "Los Angeles International", "Los Angeles"),
        airport("ORD", "O'Hare International", "Chicago"),
        airport("DFW", "Dallas/Fort Worth International", "Dallas"),
    ]
}
