use serde::{Deserialize, Serialize};

use crate::airports::lookup;

const EARTH_RADIUS_MI: f64 = 3959.0;

/// Distance assumed when either endpoint is not in the airport table.
pub const DEFAULT_DISTANCE_MI: f64 = 1000.0;

/// Major connecting hubs considered for routing heuristics.
pub const MAJOR_HUBS: [&str; 9] = [
    "ORD", "ATL", "DFW", "DEN", "IAH", "SFO", "LAX", "JFK", "EWR",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    Domestic,
    International,
}

/// Great-circle distance in miles between two airports.
///
/// Unknown codes degrade to [`DEFAULT_DISTANCE_MI`] rather than erroring.
pub fn distance(a: &str, b: &str) -> f64 {
    let (Some(from), Some(to)) = (lookup(a), lookup(b)) else {
        return DEFAULT_DISTANCE_MI;
    };
    haversine(from.lat, from.lon, to.lat, to.lon)
}

fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MI * h.sqrt().asin()
}

/// Domestic when both airports are known and share a country. Unknown
/// codes default to domestic.
pub fn route_type(a: &str, b: &str) -> RouteType {
    match (lookup(a), lookup(b)) {
        (Some(from), Some(to)) if from.country != to.country => RouteType::International,
        _ => RouteType::Domestic,
    }
}

/// Major hubs ranked by least added detour for the `a -> b` route.
///
/// Returns the top 3, never including either endpoint.
pub fn optimal_hubs(a: &str, b: &str) -> Vec<&'static str> {
    let direct = distance(a, b);
    let mut ranked: Vec<(&'static str, f64)> = MAJOR_HUBS
        .iter()
        .filter(|hub| !hub.eq_ignore_ascii_case(a) && !hub.eq_ignore_ascii_case(b))
        .map(|hub| (*hub, distance(a, hub) + distance(hub, b) - direct))
        .collect();
    ranked.sort_by(|x, y| x.1.partial_cmp(&y.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.into_iter().take(3).map(|(hub, _)| hub).collect()
}
