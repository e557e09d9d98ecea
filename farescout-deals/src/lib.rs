pub mod analyser;
pub mod carriers;
pub mod config;
pub mod curator;
pub mod extract;
pub mod selectors;
pub mod strategies;

pub use analyser::analyse;
pub use config::StrategyConfig;
pub use curator::{curate, MAX_CURATED};
