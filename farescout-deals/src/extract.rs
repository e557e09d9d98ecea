//! Zero-call strategies over itineraries that are already in hand.

use farescout_core::booking::booking_link;
use farescout_core::{Deal, DealStrategy, Itinerary};

use crate::carriers::has_budget_carrier;
use crate::config::StrategyConfig;
use crate::strategies::savings_percent;

/// Connecting itineraries priced well under the cheapest direct fare.
pub fn connecting_flight_deals(
    itineraries: &[Itinerary],
    cheapest_direct: f64,
    cfg: &StrategyConfig,
) -> Vec<Deal> {
    itineraries
        .iter()
        .filter(|i| i.is_connecting() && i.price_usd < cfg.connecting_discount * cheapest_direct)
        .map(|itinerary| {
            let savings = cheapest_direct - itinerary.price_usd;
            let explanation = format!(
                "Connecting itinerary at ${:.0} beats the ${:.0} direct fare by ${:.0} ({}%)",
                itinerary.price_usd,
                cheapest_direct,
                savings,
                savings_percent(cheapest_direct, itinerary.price_usd),
            );
            Deal::new(
                DealStrategy::Standard,
                itinerary.price_usd,
                10,
                booking_link(itinerary),
                explanation,
                vec![itinerary.clone()],
            )
        })
        .collect()
}

/// Itineraries with at least one budget-carrier leg.
pub fn budget_airline_deals(itineraries: &[Itinerary]) -> Vec<Deal> {
    itineraries
        .iter()
        .filter(|i| has_budget_carrier(i))
        .map(|itinerary| {
            let carrier = itinerary
                .first_leg()
                .map(|l| l.airline.clone())
                .unwrap_or_default();
            let explanation = format!(
                "Budget carrier fare on {carrier} at ${:.0}. Bags, seats and changes are \
                 usually extra; compare the all-in price.",
                itinerary.price_usd,
            );
            Deal::new(
                DealStrategy::Standard,
                itinerary.price_usd,
                15,
                booking_link(itinerary),
                explanation,
                vec![itinerary.clone()],
            )
        })
        .collect()
}
