pub mod criteria;
pub mod flight;
pub mod repository;
pub mod search;

pub use criteria::{DepartureWindow, DurationRange, FilterOptions, SortKey};
pub use flight::{Airline, Airport, Baggage, BookingClass, Flight, FlightSegment, Money};
pub use repository::{AirportLookup, FlightSource};
pub use search::{CabinClass, Passengers, SearchParams, TripType};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
