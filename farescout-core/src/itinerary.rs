use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An intermediate stop within a single bookable leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layover {
    pub airport: String,
    pub duration_min: u32,
}

/// One flight segment of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub origin: String,
    pub destination: String,
    pub depart_at: DateTime<Utc>,
    pub arrive_at: DateTime<Utc>,
    pub airline: String,
    pub flight_number: String,
    pub duration_min: u32,
    #[serde(default)]
    pub layovers: Vec<Layover>,
}

impl Leg {
    /// Total layover time across this leg's stops.
    pub fn layover_min(&self) -> u32 {
        self.layovers.iter().map(|l| l.duration_min).sum()
    }
}

/// A priced, bookable sequence of legs as returned by the upstream provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub legs: Vec<Leg>,
    pub price_usd: f64,
    #[serde(default)]
    pub booking_token: Option<String>,
}

impl Itinerary {
    /// Single leg with no layovers.
    pub fn is_direct(&self) -> bool {
        self.legs.len() == 1 && self.legs[0].layovers.is_empty()
    }

    pub fn first_leg(&self) -> Option<&Leg> {
        self.legs.first()
    }

    /// The airport the ticket actually terminates at.
    pub fn final_destination(&self) -> Option<&str> {
        self.legs.last().map(|l| l.destination.as_str())
    }

    /// Whether any leg stops over at `airport`.
    pub fn has_layover_at(&self, airport: &str) -> bool {
        self.legs
            .iter()
            .flat_map(|leg| leg.layovers.iter())
            .any(|lay| lay.airport.eq_ignore_ascii_case(airport))
    }

    pub fn has_any_layover(&self) -> bool {
        self.legs.iter().any(|leg| !leg.layovers.is_empty())
    }

    /// Total layover time across all legs.
    pub fn total_layover_min(&self) -> u32 {
        self.legs.iter().map(Leg::layover_min).sum()
    }

    /// Connecting = more than one leg, or any layover.
    pub fn is_connecting(&self) -> bool {
        self.legs.len() > 1 || self.has_any_layover()
    }

    /// First layover, if any, scanning legs in order.
    pub fn first_layover(&self) -> Option<&Layover> {
        self.legs.iter().flat_map(|leg| leg.layovers.iter()).next()
    }

    /// Identity of the first flight: `(airline, flight number, departure date)`.
    ///
    /// Dates render as ISO-8601 so keys hash consistently.
    pub fn flight_key(&self) -> Option<(String, String, String)> {
        self.first_leg().map(|leg| {
            (
                leg.airline.clone(),
                leg.flight_number.clone(),
                leg.depart_at.date_naive().to_string(),
            )
        })
    }
}
