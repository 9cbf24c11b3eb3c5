use serde::{Deserialize, Serialize};

/// Trip parameters collected by the search form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub origin: String,
    pub destination: String,
    pub depart_date: chrono::NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<chrono::NaiveDate>,
    pub passengers: Passengers,
    pub trip_type: TripType,
    pub cabin_class: CabinClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passengers {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl Passengers {
    pub fn total(&self) -> u32 {
        self.adults + self.children + self.infants
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripType {
    OneWay,
    RoundTrip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CabinClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_search_params_deserialization() {
        let json = r#"
        {
            "origin": "JFK",
            "destination": "LAX",
            "departDate": "2024-03-15",
            "passengers": {"adults": 2, "children": 1, "infants": 0},
            "tripType": "one-way",
            "cabinClass": "premium-economy"
        }
        "#;
        let params: SearchParams = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(params.origin, "JFK");
        assert_eq!(
            params.depart_date,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert_eq!(params.return_date, None);
        assert_eq!(params.passengers.total(), 3);
        assert_eq!(params.trip_type, TripType::OneWay);
        assert_eq!(params.cabin_class, CabinClass::PremiumEconomy);
    }
}
