use serde::Deserialize;

/// Thresholds and discount ratios driving strategy activation.
///
/// These are first-class knobs rather than inline literals so tests can
/// drive edge cases and operators can tune aggressiveness per deployment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Below this baseline price the nearby-airport strategy is skipped.
    pub nearby_min_base: f64,
    /// Below this baseline price the split-ticket strategy is skipped.
    pub split_min_base: f64,
    /// Hidden-city probing activates strictly above this baseline price.
    pub hidden_city_min_base: f64,
    /// Hub substitution activates at or above this baseline price.
    pub hub_min_base: f64,
    /// Positioning flights activate strictly above this baseline price.
    pub positioning_min_base: f64,

    /// Nearby alternative accepted below this fraction of baseline.
    pub nearby_discount: f64,
    /// Split-ticket total accepted below this fraction of baseline.
    pub split_discount: f64,
    /// Positioning total accepted below this fraction of baseline.
    pub positioning_discount: f64,
    /// Connecting itinerary counts as a deal below this fraction of the
    /// cheapest direct price.
    pub connecting_discount: f64,

    /// Ceiling on beyond-city probes per hidden-city pass.
    pub max_beyond_probes: usize,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            nearby_min_base: 70.0,
            split_min_base: 90.0,
            hidden_city_min_base: 100.0,
            hub_min_base: 120.0,
            positioning_min_base: 300.0,
            nearby_discount: 0.85,
            split_discount: 0.85,
            positioning_discount: 0.75,
            connecting_discount: 0.90,
            max_beyond_probes: 5,
        }
    }
}
