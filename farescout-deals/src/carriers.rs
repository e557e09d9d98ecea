use farescout_core::Itinerary;

/// Low-cost carriers whose fares routinely undercut the majors.
pub const BUDGET_CARRIERS: [&str; 7] = [
    "Spirit",
    "Frontier",
    "Allegiant",
    "Sun Country",
    "Southwest",
    "JetBlue",
    "Breeze",
];

/// Case-insensitive substring match against the budget carrier list.
pub fn is_budget_airline(airline: &str) -> bool {
    let name = airline.to_lowercase();
    BUDGET_CARRIERS
        .iter()
        .any(|carrier| name.contains(&carrier.to_lowercase()))
}

/// Whether any leg of the itinerary is flown by a budget carrier.
pub fn has_budget_carrier(itinerary: &Itinerary) -> bool {
    itinerary.legs.iter().any(|leg| is_budget_airline(&leg.airline))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_match_is_case_insensitive() {
        assert!(is_budget_airline("Spirit Airlines"));
        assert!(is_budget_airline("FRONTIER"));
        assert!(is_budget_airline("sun country airlines"));
        assert!(is_budget_airline("Breeze Airways"));
    }

    #[test]
    fn test_major_carriers_not_matched() {
        assert!(!is_budget_airline("United Airlines"));
        assert!(!is_budget_airline("Delta Air Lines"));
        assert!(!is_budget_airline("American Airlines"));
    }
}
