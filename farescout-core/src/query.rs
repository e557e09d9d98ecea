use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Cabin of service requested for the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cabin {
    Economy,
    Premium,
    Business,
    First,
}

impl Default for Cabin {
    fn default() -> Self {
        Cabin::Economy
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passengers {
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub infants: u32,
}

impl Default for Passengers {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
            infants: 0,
        }
    }
}

/// A one-way or round-trip flight search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDate,
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    #[serde(default)]
    pub flexible: bool,
    #[serde(default)]
    pub cabins: Vec<Cabin>,
    #[serde(default)]
    pub passengers: Passengers,
}

impl SearchQuery {
    /// Convenience constructor for a one-way economy search.
    pub fn one_way(origin: &str, destination: &str, departure: NaiveDate) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure,
            return_date: None,
            flexible: false,
            cabins: Vec::new(),
            passengers: Passengers::default(),
        }
    }

    /// Copy of the query with airport codes uppercased and trimmed.
    ///
    /// Dedup keys downstream are normalisation-sensitive, so every search
    /// runs against the normalised form.
    pub fn normalized(&self) -> Self {
        let mut q = self.clone();
        q.origin = q.origin.trim().to_ascii_uppercase();
        q.destination = q.destination.trim().to_ascii_uppercase();
        q
    }

    /// The cabin used for upstream calls: first requested, economy otherwise.
    pub fn cabin(&self) -> Cabin {
        self.cabins.first().copied().unwrap_or_default()
    }

    /// Validate the query against a normalised copy of itself.
    pub fn validate(&self) -> CoreResult<()> {
        let q = self.normalized();

        if !is_valid_iata(&q.origin) {
            return Err(CoreError::InvalidInput(format!(
                "origin is not a valid IATA code: {:?}",
                self.origin
            )));
        }
        if !is_valid_iata(&q.destination) {
            return Err(CoreError::InvalidInput(format!(
                "destination is not a valid IATA code: {:?}",
                self.destination
            )));
        }
        if q.origin == q.destination {
            return Err(CoreError::InvalidInput(
                "origin and destination must differ".to_string(),
            ));
        }

        let today = Utc::now().date_naive();
        if q.departure < today {
            return Err(CoreError::InvalidInput(format!(
                "departure date {} is in the past",
                q.departure
            )));
        }
        if let Some(ret) = q.return_date {
            if ret < q.departure {
                return Err(CoreError::InvalidInput(format!(
                    "return date {} is before departure {}",
                    ret, q.departure
                )));
            }
        }

        if q.passengers.adults < 1 {
            return Err(CoreError::InvalidInput(
                "at least one adult passenger is required".to_string(),
            ));
        }

        Ok(())
    }
}

/// Three ASCII uppercase letters.
pub fn is_valid_iata(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn future_date() -> NaiveDate {
        Utc::now().date_naive() + Duration::days(30)
    }

    #[test]
    fn test_query_deserialization() {
        let json = r#"
            {
                "origin": "JFK",
                "destination": "LAX",
                "departure": "2027-03-15",
                "cabins": ["economy"],
                "passengers": { "adults": 2 }
            }
        "#;
        let query: SearchQuery = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(query.origin, "JFK");
        assert_eq!(query.passengers.adults, 2);
        assert_eq!(query.passengers.children, 0);
        assert_eq!(query.cabin(), Cabin::Economy);
    }

    #[test]
    fn test_valid_query_passes() {
        let query = SearchQuery::one_way("JFK", "LAX", future_date());
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_lowercase_codes_are_normalised() {
        let query = SearchQuery::one_way("jfk", "lax", future_date());
        assert!(query.validate().is_ok());
        assert_eq!(query.normalized().origin, "JFK");
    }

    #[test]
    fn test_bad_iata_rejected() {
        let query = SearchQuery::one_way("NEWYORK", "LAX", future_date());
        assert!(matches!(query.validate(), Err(CoreError::InvalidInput(_))));

        let query = SearchQuery::one_way("J1K", "LAX", future_date());
        assert!(matches!(query.validate(), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn test_past_departure_rejected() {
        let yesterday = Utc::now().date_naive() - Duration::days(1);
        let query = SearchQuery::one_way("JFK", "LAX", yesterday);
        assert!(matches!(query.validate(), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn test_zero_adults_rejected() {
        let mut query = SearchQuery::one_way("JFK", "LAX", future_date());
        query.passengers.adults = 0;
        assert!(matches!(query.validate(), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn test_return_before_departure_rejected() {
        let mut query = SearchQuery::one_way("JFK", "LAX", future_date());
        query.return_date = Some(future_date() - Duration::days(5));
        assert!(matches!(query.validate(), Err(CoreError::InvalidInput(_))));
    }
}
