pub mod booking;
pub mod deal;
pub mod itinerary;
pub mod query;

pub use deal::{Deal, DealStrategy};
pub use itinerary::{Itinerary, Layover, Leg};
pub use query::{Cabin, Passengers, SearchQuery};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
