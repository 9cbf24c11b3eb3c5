use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// An airport, keyed by its unique 3-letter code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
}

/// Operating carrier of a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airline {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Monetary amount as displayed to the customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: f64,
    pub currency: String,
}

/// Free-text baggage allowances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baggage {
    pub carry: String,
    pub checked: String,
}

/// Service tier offered for a fare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingClass {
    Economy,
    #[serde(rename = "Premium Economy")]
    PremiumEconomy,
    Business,
    First,
}

/// One non-stop flown leg between two airports.
///
/// Timestamps keep their stated offset: comparisons order by absolute
/// instant while clock-time reads (departure-window classification) see
/// the local wall clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSegment {
    pub origin: Airport,
    pub destination: Airport,
    pub departure_time: DateTime<FixedOffset>,
    pub arrival_time: DateTime<FixedOffset>,
    /// Flight time in minutes.
    pub duration: i64,
    pub flight_number: String,
    pub airline: Airline,
    pub aircraft: String,
}

/// A bookable offer: an ordered, chronological sequence of segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub segments: Vec<FlightSegment>,
    /// Total trip time in minutes, layovers included. Supplied by the
    /// source, never derived here.
    pub total_duration: i64,
    /// Intermediate stop count, trusted as supplied. Equals
    /// `segments.len() - 1` in well-formed data.
    pub stops: u32,
    pub price: Money,
    /// Remaining seats.
    pub availability: i32,
    pub booking_class: BookingClass,
    pub baggage: Baggage,
}

impl Flight {
    /// First segment in chronological order, if any.
    pub fn first_segment(&self) -> Option<&FlightSegment> {
        self.segments.first()
    }

    /// Departure instant of the whole trip.
    pub fn departure_time(&self) -> Option<DateTime<FixedOffset>> {
        self.first_segment().map(|s| s.departure_time)
    }

    /// Arrival instant of the whole trip.
    pub fn arrival_time(&self) -> Option<DateTime<FixedOffset>> {
        self.segments.last().map(|s| s.arrival_time)
    }

    /// Well-formedness check for sources and fixtures. The query engine
    /// trusts supplied data and degrades gracefully instead of calling
    /// this.
    pub fn validate(&self) -> CoreResult<()> {
        if self.segments.is_empty() {
            return Err(CoreError::ValidationError(format!(
                "flight {} has no segments",
                self.id
            )));
        }
        if self.stops as usize != self.segments.len() - 1 {
            return Err(CoreError::ValidationError(format!(
                "flight {}: {} stops inconsistent with {} segments",
                self.id,
                self.stops,
                self.segments.len()
            )));
        }
        if self.price.amount < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "flight {} has a negative price",
                self.id
            )));
        }
        if self.availability < 0 {
            return Err(CoreError::ValidationError(format!(
                "flight {} has negative availability",
                self.id
            )));
        }
        Ok(())
    }
}
