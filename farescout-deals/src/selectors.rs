//! Pure heuristics choosing which routes are worth spending budget on.

use crate::config::StrategyConfig;

/// Metro clusters of interchangeable airports. Order within a cluster
/// matters: cheaper baselines only probe the leading alternatives.
const CLUSTERS: &[&[&str]] = &[
    &["JFK", "EWR", "LGA"],
    &["LAX", "BUR", "ONT", "LGB", "SNA"],
    &["SFO", "OAK", "SJC"],
    &["ORD", "MDW"],
    &["IAD", "DCA", "BWI"],
    &["MIA", "FLL", "PBI"],
];

const EAST_COAST: [&str; 6] = ["JFK", "EWR", "LGA", "BOS", "DCA", "PHL"];
const WEST_COAST: [&str; 5] = ["LAX", "SFO", "SEA", "PDX", "SAN"];

/// Fallback hub ring for routes that are not coast-to-coast.
const HUB_RING: [&str; 8] = ["ORD", "ATL", "DFW", "DEN", "LAX", "SFO", "JFK", "MIA"];

/// Cities commonly ticketed through each destination, used for
/// hidden-city probing.
const BEYOND: &[(&str, &[&str])] = &[
    ("LAX", &["SFO", "SAN", "LAS"]),
    ("SFO", &["SEA", "PDX", "LAX"]),
    ("SEA", &["PDX", "YVR"]),
    ("ORD", &["MSP", "DTW"]),
    ("DEN", &["SLC", "PHX"]),
    ("JFK", &["BOS", "PHL"]),
    ("BOS", &["JFK", "PHL"]),
    ("ATL", &["CLT", "BNA"]),
    ("MIA", &["TPA", "FLL"]),
    ("DFW", &["AUS", "IAH"]),
];

fn is_east_coast(code: &str) -> bool {
    EAST_COAST.iter().any(|c| c.eq_ignore_ascii_case(code))
}

fn is_west_coast(code: &str) -> bool {
    WEST_COAST.iter().any(|c| c.eq_ignore_ascii_case(code))
}

/// Alternative airports in the same metro as `code`.
///
/// Cheap baselines only justify one probe; expensive ones justify the
/// whole cluster.
pub fn nearby_alternatives(code: &str, base_price: f64) -> Vec<&'static str> {
    let Some(cluster) = CLUSTERS
        .iter()
        .find(|c| c.iter().any(|a| a.eq_ignore_ascii_case(code)))
    else {
        return Vec::new();
    };

    let alternatives: Vec<&'static str> = cluster
        .iter()
        .filter(|a| !a.eq_ignore_ascii_case(code))
        .copied()
        .collect();

    let take = if base_price < 100.0 {
        1
    } else if base_price < 200.0 {
        2
    } else {
        alternatives.len()
    };
    alternatives.into_iter().take(take).collect()
}

/// Connecting hubs worth pricing a split ticket through.
///
/// Coast-to-coast routes have one dominant mid-continent hub per
/// direction; everything else falls back to the first hub of the ring
/// that is not an endpoint.
pub fn smart_hubs(
    origin: &str,
    destination: &str,
    base_price: f64,
    cfg: &StrategyConfig,
) -> Vec<&'static str> {
    if base_price < cfg.hub_min_base {
        return Vec::new();
    }

    if is_east_coast(origin) && is_west_coast(destination) {
        return vec!["DEN"];
    }
    if is_west_coast(origin) && is_east_coast(destination) {
        return vec!["ORD"];
    }

    HUB_RING
        .iter()
        .find(|hub| !hub.eq_ignore_ascii_case(origin) && !hub.eq_ignore_ascii_case(destination))
        .map(|hub| vec![*hub])
        .unwrap_or_default()
}

/// Cities beyond the destination worth probing for hidden-city fares.
///
/// Transcontinental eastbound-origin routes lead with the mid-continent
/// trio; the destination-keyed table supplies cities ticketed through
/// the destination itself.
pub fn smart_beyond_cities(origin: &str, destination: &str) -> Vec<&'static str> {
    let coast_to_coast = is_east_coast(origin) && is_west_coast(destination);
    let mut cities: Vec<&'static str> = Vec::new();

    if coast_to_coast {
        cities.extend(
            ["DEN", "ORD", "DFW"]
                .iter()
                .filter(|c| {
                    !c.eq_ignore_ascii_case(origin) && !c.eq_ignore_ascii_case(destination)
                })
                .take(2),
        );
    }

    if let Some((_, keyed)) = BEYOND
        .iter()
        .find(|(dest, _)| dest.eq_ignore_ascii_case(destination))
    {
        for city in keyed
            .iter()
            .copied()
            .filter(|c| !c.eq_ignore_ascii_case(origin) && !c.eq_ignore_ascii_case(destination))
        {
            if cities.contains(&city) {
                continue;
            }
            // Non-coastal routes cap at two keyed cities.
            if !coast_to_coast && cities.len() >= 2 {
                break;
            }
            cities.push(city);
        }
    }

    cities
}

/// Positioning flights only pay off on expensive baselines.
pub fn should_check_positioning(base_price: f64, cfg: &StrategyConfig) -> bool {
    base_price > cfg.positioning_min_base
}

/// Hidden-city probing threshold.
pub fn should_check_hidden_city(base_price: f64, cfg: &StrategyConfig) -> bool {
    base_price > cfg.hidden_city_min_base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearby_scales_with_base_price() {
        assert_eq!(nearby_alternatives("JFK", 80.0), vec!["EWR"]);
        assert_eq!(nearby_alternatives("JFK", 150.0), vec!["EWR", "LGA"]);
        assert_eq!(
            nearby_alternatives("LAX", 250.0),
            vec!["BUR", "ONT", "LGB", "SNA"]
        );
    }

    #[test]
    fn test_nearby_unknown_metro_is_empty() {
        assert!(nearby_alternatives("BNA", 300.0).is_empty());
    }

    #[test]
    fn test_smart_hubs_coast_to_coast() {
        let cfg = StrategyConfig::default();
        assert_eq!(smart_hubs("JFK", "LAX", 400.0, &cfg), vec!["DEN"]);
        assert_eq!(smart_hubs("SFO", "BOS", 400.0, &cfg), vec!["ORD"]);
    }

    #[test]
    fn test_smart_hubs_below_threshold_empty() {
        let cfg = StrategyConfig::default();
        assert!(smart_hubs("JFK", "LAX", 100.0, &cfg).is_empty());
    }

    #[test]
    fn test_smart_hubs_fallback_skips_endpoints() {
        let cfg = StrategyConfig::default();
        // ORD is an endpoint, so the ring falls through to ATL.
        assert_eq!(smart_hubs("ORD", "MCO", 200.0, &cfg), vec!["ATL"]);
    }

    #[test]
    fn test_beyond_cities_transcontinental() {
        let cities = smart_beyond_cities("JFK", "LAX");
        assert!(cities.starts_with(&["DEN", "ORD"]));
        // Destination-keyed cities extend the probe list.
        assert!(cities.contains(&"SFO"));
        assert!(!cities.contains(&"LAX"));
    }

    #[test]
    fn test_beyond_cities_keyed_route_capped() {
        let cities = smart_beyond_cities("DEN", "ORD");
        assert!(cities.len() <= 2);
        assert!(!cities.contains(&"DEN"));
    }

    #[test]
    fn test_positioning_and_hidden_city_gates() {
        let cfg = StrategyConfig::default();
        assert!(!should_check_positioning(300.0, &cfg));
        assert!(should_check_positioning(301.0, &cfg));
        assert!(!should_check_hidden_city(100.0, &cfg));
        assert!(should_check_hidden_city(101.0, &cfg));
    }
}
