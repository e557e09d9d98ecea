use async_trait::async_trait;
use chrono::NaiveDate;

use farescout_core::{Cabin, Itinerary};

/// One upstream price lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRequest {
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub cabin: Cabin,
}

impl PriceRequest {
    pub fn one_way(origin: &str, destination: &str, departure: NaiveDate, cabin: Cabin) -> Self {
        Self {
            origin: origin.to_ascii_uppercase(),
            destination: destination.to_ascii_uppercase(),
            departure,
            return_date: None,
            cabin,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("provider returned status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("failed to decode provider response: {0}")]
    Decode(String),
}

/// Opaque interface to the upstream flight-price provider.
///
/// Callers may treat `results[0]` as the provider's preferred itinerary;
/// no other ordering is guaranteed. Implementations must be safe for
/// concurrent invocation.
#[async_trait]
pub trait FlightPriceSource: Send + Sync {
    async fn search(&self, req: &PriceRequest) -> Result<Vec<Itinerary>, SourceError>;
}
