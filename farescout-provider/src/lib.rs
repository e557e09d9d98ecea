pub mod budget;
pub mod mock;
pub mod source;

pub use budget::BudgetedSource;
pub use mock::StaticPriceSource;
pub use source::{FlightPriceSource, PriceRequest, SourceError};
