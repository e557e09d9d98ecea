pub mod config;
pub mod orchestrator;

pub use config::EngineConfig;
pub use orchestrator::{DealFinder, SearchOutcome};

pub use farescout_core::{Cabin, Deal, DealStrategy, Itinerary, Layover, Leg, Passengers, SearchQuery};
pub use farescout_provider::{FlightPriceSource, PriceRequest, SourceError, StaticPriceSource};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Call budget must allow at least one upstream call")]
    BudgetZero,
}

pub type EngineResult<T> = Result<T, EngineError>;
