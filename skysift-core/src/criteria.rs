use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Named time-of-day buckets for the departure-time filter.
///
/// Half-open ranges on the 24h clock, local to the stated departure
/// timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DepartureWindow {
    /// [00:00, 06:00)
    EarlyMorning,
    /// [06:00, 12:00)
    Morning,
    /// [12:00, 18:00)
    Afternoon,
    /// [18:00, 24:00)
    Evening,
}

impl DepartureWindow {
    /// Bucket containing a local clock hour.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=5 => Self::EarlyMorning,
            6..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            _ => Self::Evening,
        }
    }
}

/// Inclusive total-duration range in minutes. A bound-less range is not
/// a supported input; leave the filter unset instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationRange {
    pub min: i64,
    pub max: i64,
}

/// A criteria set. Every field is optional; absence means no
/// constraint. Active fields combine with AND, values within a
/// multi-valued field with OR.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airlines: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stops: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<Vec<DepartureWindow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<DurationRange>,
}

impl FilterOptions {
    /// True when no constraint is active (an empty multi-valued field
    /// counts as inactive).
    pub fn is_unconstrained(&self) -> bool {
        self.max_price.is_none()
            && self.airlines.as_deref().map_or(true, |a| a.is_empty())
            && self.stops.as_deref().map_or(true, |s| s.is_empty())
            && self
                .departure_time
                .as_deref()
                .map_or(true, |w| w.is_empty())
            && self.duration.is_none()
    }
}

/// Comparator applied to the filtered result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Price,
    Duration,
    Departure,
    Stops,
}

impl FromStr for SortKey {
    type Err = CoreError;

    // Sort keys arrive as user-facing strings; unknown values are a
    // construction-time error, never a silent no-op inside the engine.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(Self::Price),
            "duration" => Ok(Self::Duration),
            "departure" => Ok(Self::Departure),
            "stops" => Ok(Self::Stops),
            other => Err(CoreError::ValidationError(format!(
                "unknown sort key: {other}"
            ))),
        }
    }
}
