pub mod airports;
pub mod routes;

pub use airports::{lookup, Airport};
pub use routes::{distance, optimal_hubs, route_type, RouteType, MAJOR_HUBS};
