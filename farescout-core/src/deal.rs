use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::itinerary::{Itinerary, Leg};

/// How a deal was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DealStrategy {
    Standard,
    HiddenCity,
    Award,
    #[serde(rename = "error")]
    ErrorFare,
    Currency,
    Throwaway,
}

/// A discovered fare opportunity.
///
/// Split-ticket and positioning deals carry two separately bookable
/// itineraries; every other strategy carries one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub price_usd: f64,
    pub strategy: DealStrategy,
    pub risk_score: u8,
    pub booking_link: String,
    pub explanation: String,
    pub itineraries: Vec<Itinerary>,
}

impl Deal {
    pub fn new(
        strategy: DealStrategy,
        price_usd: f64,
        risk_score: u8,
        booking_link: String,
        explanation: String,
        itineraries: Vec<Itinerary>,
    ) -> Self {
        Self {
            price_usd,
            strategy,
            risk_score: risk_score.min(100),
            booking_link,
            explanation,
            itineraries,
        }
    }

    /// All legs across the deal's itineraries, booking order.
    pub fn legs(&self) -> impl Iterator<Item = &Leg> {
        self.itineraries.iter().flat_map(|i| i.legs.iter())
    }

    pub fn first_leg(&self) -> Option<&Leg> {
        self.itineraries.first().and_then(Itinerary::first_leg)
    }

    /// Dedup identity: `(airline, flight number, departure date)` of the
    /// first leg.
    pub fn dedup_key(&self) -> Option<(String, String, String)> {
        self.itineraries.first().and_then(Itinerary::flight_key)
    }

    /// Hour of day of the first leg's departure, for time-of-day bucketing.
    pub fn departure_hour(&self) -> Option<u32> {
        self.first_leg().map(|leg| leg.depart_at.hour())
    }
}
