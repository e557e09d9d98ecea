//! Zero-call analysis of itineraries already fetched by the baseline
//! search. Finds deals that are hiding in the data: awkward departure
//! times, tolerable layovers, budget metal.

use std::collections::HashSet;

use chrono::{DateTime, Timelike, Utc};
use tracing::debug;

use farescout_core::booking::booking_link;
use farescout_core::{Deal, DealStrategy, Itinerary};

use crate::carriers::has_budget_carrier;
use crate::strategies::savings_percent;

/// Savings below this aren't worth calling out in a red-eye note.
const NOTE_SAVINGS_MIN: f64 = 5.0;
/// A layover is "worth it" when it saves this much over the direct fare.
const LAYOVER_WORTH_SAVINGS: f64 = 30.0;
/// ...and the stop itself stays under this.
const LAYOVER_WORTH_MAX_MIN: u32 = 240;
/// Minimum saving for a connection to count as a deal in its own right.
const CONNECTING_MIN_SAVINGS: f64 = 20.0;

/// Single pass over the baseline itineraries. Issues no upstream calls.
pub fn analyse(itineraries: &[Itinerary]) -> Vec<Deal> {
    if itineraries.is_empty() {
        return Vec::new();
    }

    let base_price = itineraries
        .iter()
        .map(|i| i.price_usd)
        .fold(f64::INFINITY, f64::min);

    // Typical fare for the route: mean of the five highest-priced
    // itineraries, so savings notes compare against what the route
    // usually costs rather than its outliers.
    let avg_price = {
        let mut prices: Vec<f64> = itineraries.iter().map(|i| i.price_usd).collect();
        prices.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
        let top: &[f64] = &prices[..prices.len().min(5)];
        top.iter().sum::<f64>() / top.len() as f64
    };

    let cheapest_direct = itineraries
        .iter()
        .filter(|i| i.is_direct())
        .map(|i| i.price_usd)
        .fold(f64::INFINITY, f64::min);
    let cheapest_direct = if cheapest_direct.is_finite() {
        cheapest_direct
    } else {
        base_price
    };

    let mut seen: HashSet<(String, String, DateTime<Utc>)> = HashSet::new();

    let mut red_eye = Vec::new();
    let mut early_bird = Vec::new();
    let mut layover = Vec::new();
    let mut budget = Vec::new();
    let mut connecting = Vec::new();

    for itinerary in itineraries {
        let Some(leg) = itinerary.first_leg() else {
            continue;
        };
        if !seen.insert((leg.airline.clone(), leg.flight_number.clone(), leg.depart_at)) {
            continue;
        }

        let hour = leg.depart_at.hour();
        let price = itinerary.price_usd;

        if (22..=23).contains(&hour) || hour <= 5 {
            let savings = avg_price - price;
            let explanation = if savings > NOTE_SAVINGS_MIN {
                format!(
                    "Red-eye departure at {:02}:00 runs ${:.0}, about ${:.0} under typical \
                     fares on this route",
                    hour, price, savings,
                )
            } else {
                format!("Red-eye departure at {:02}:00 for ${:.0}", hour, price)
            };
            red_eye.push(deal(itinerary, 5, explanation));
        }

        if (6..=8).contains(&hour) {
            early_bird.push(deal(
                itinerary,
                5,
                format!(
                    "Early departure at {:02}:00 for ${:.0}; first flights out misconnect least",
                    hour, price,
                ),
            ));
        }

        if let Some(stop) = itinerary.first_layover() {
            let worth_it = cheapest_direct - price > LAYOVER_WORTH_SAVINGS
                && stop.duration_min < LAYOVER_WORTH_MAX_MIN;
            let mut explanation = format!(
                "{}min layover in {} brings this to ${:.0}",
                stop.duration_min, stop.airport, price,
            );
            if worth_it {
                explanation.push_str(&format!(
                    "; worth the stop at ${:.0} under the direct fare",
                    cheapest_direct - price,
                ));
            }
            layover.push(deal(itinerary, 10, explanation));
        }

        if has_budget_carrier(itinerary) {
            budget.push(deal(
                itinerary,
                15,
                format!(
                    "${:.0} on {}; bags, seats and boarding order usually cost extra",
                    price, leg.airline,
                ),
            ));
        }

        if itinerary.has_any_layover() && cheapest_direct - price > CONNECTING_MIN_SAVINGS {
            connecting.push(deal(
                itinerary,
                10,
                format!(
                    "Connection saves {}% (${:.0} vs ${:.0} direct)",
                    savings_percent(cheapest_direct, price),
                    price,
                    cheapest_direct,
                ),
            ));
        }
    }

    let mut deals = Vec::new();
    for mut category in [red_eye, early_bird, layover, budget, connecting] {
        category.sort_by(|a, b| {
            a.price_usd
                .partial_cmp(&b.price_usd)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        deals.extend(category);
    }

    debug!(deals = deals.len(), "itinerary analysis finished");
    deals
}

fn deal(itinerary: &Itinerary, risk: u8, explanation: String) -> Deal {
    Deal::new(
        DealStrategy::Standard,
        itinerary.price_usd,
        risk,
        booking_link(itinerary),
        explanation,
        vec![itinerary.clone()],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use farescout_core::{Layover, Leg};

    fn itinerary(
        airline: &str,
        flight_number: &str,
        hour: u32,
        price: f64,
        layovers: Vec<Layover>,
    ) -> Itinerary {
        let depart = Utc.with_ymd_and_hms(2027, 3, 15, hour, 0, 0).unwrap();
        Itinerary {
            legs: vec![Leg {
                origin: "JFK".to_string(),
                destination: "LAX".to_string(),
                depart_at: depart,
                arrive_at: depart + chrono::Duration::hours(6),
                airline: airline.to_string(),
                flight_number: flight_number.to_string(),
                duration_min: 360,
                layovers,
            }],
            price_usd: price,
            booking_token: None,
        }
    }

    fn stop(airport: &str, duration_min: u32) -> Layover {
        Layover {
            airport: airport.to_string(),
            duration_min,
        }
    }

    #[test]
    fn test_empty_input_no_deals() {
        assert!(analyse(&[]).is_empty());
    }

    #[test]
    fn test_red_eye_and_early_bird_buckets() {
        let deals = analyse(&[
            itinerary("United Airlines", "UA1", 23, 180.0, vec![]),
            itinerary("United Airlines", "UA2", 7, 210.0, vec![]),
            itinerary("United Airlines", "UA3", 14, 250.0, vec![]),
        ]);

        let red_eye: Vec<_> = deals
            .iter()
            .filter(|d| d.explanation.contains("Red-eye"))
            .collect();
        let early: Vec<_> = deals
            .iter()
            .filter(|d| d.explanation.contains("Early departure"))
            .collect();
        assert_eq!(red_eye.len(), 1);
        assert_eq!(early.len(), 1);
        assert_eq!(red_eye[0].risk_score, 5);
    }

    #[test]
    fn test_red_eye_notes_savings_only_when_material() {
        // Average of the set is ~213; the $180 red-eye saves ~$33.
        let deals = analyse(&[
            itinerary("United Airlines", "UA1", 23, 180.0, vec![]),
            itinerary("United Airlines", "UA2", 14, 230.0, vec![]),
            itinerary("United Airlines", "UA3", 15, 230.0, vec![]),
        ]);
        let red_eye = deals
            .iter()
            .find(|d| d.explanation.contains("Red-eye"))
            .unwrap();
        assert!(red_eye.explanation.contains("under typical"));
    }

    #[test]
    fn test_typical_fare_uses_highest_priced_itineraries() {
        // The $200 red-eye sits above the cheap fares but well under the
        // route's typical price once the expensive listings are counted:
        // mean of the top five (600, 200, 180, 170, 160) is 262.
        let deals = analyse(&[
            itinerary("United Airlines", "UA1", 10, 150.0, vec![]),
            itinerary("United Airlines", "UA2", 11, 160.0, vec![]),
            itinerary("United Airlines", "UA3", 12, 170.0, vec![]),
            itinerary("United Airlines", "UA4", 13, 180.0, vec![]),
            itinerary("United Airlines", "UA5", 14, 600.0, vec![]),
            itinerary("United Airlines", "UA6", 23, 200.0, vec![]),
        ]);

        let red_eye = deals
            .iter()
            .find(|d| d.explanation.contains("Red-eye"))
            .unwrap();
        assert!(red_eye.explanation.contains("under typical"));
    }

    #[test]
    fn test_worth_it_layover_flagged() {
        let deals = analyse(&[
            itinerary("United Airlines", "UA1", 10, 300.0, vec![]),
            itinerary(
                "United Airlines",
                "UA2",
                11,
                250.0,
                vec![stop("DEN", 90)],
            ),
        ]);

        let layover = deals
            .iter()
            .find(|d| d.explanation.contains("layover in DEN"))
            .unwrap();
        assert!(layover.explanation.contains("worth the stop"));
    }

    #[test]
    fn test_long_layover_not_worth_it() {
        let deals = analyse(&[
            itinerary("United Airlines", "UA1", 10, 300.0, vec![]),
            itinerary(
                "United Airlines",
                "UA2",
                11,
                250.0,
                vec![stop("DEN", 300)],
            ),
        ]);

        let layover = deals
            .iter()
            .find(|d| d.explanation.contains("layover in DEN"))
            .unwrap();
        assert!(!layover.explanation.contains("worth the stop"));
    }

    #[test]
    fn test_budget_carrier_and_connecting_deals() {
        let deals = analyse(&[
            itinerary("United Airlines", "UA1", 10, 300.0, vec![]),
            itinerary("Spirit Airlines", "NK5", 11, 120.0, vec![stop("BWI", 120)]),
            itinerary(
                "United Airlines",
                "UA2",
                12,
                250.0,
                vec![stop("ORD", 100)],
            ),
        ]);

        assert!(deals.iter().any(|d| d.explanation.contains("Spirit")));
        let connecting: Vec<_> = deals
            .iter()
            .filter(|d| d.explanation.contains("Connection saves"))
            .collect();
        assert_eq!(connecting.len(), 2);
        // Category output is cheapest first.
        assert!(connecting[0].explanation.contains("60%"));
        assert!(connecting[1].explanation.contains("17%"));
        assert_eq!(connecting[1].risk_score, 10);
    }

    #[test]
    fn test_duplicate_flights_analysed_once() {
        let deals = analyse(&[
            itinerary("United Airlines", "UA1", 23, 180.0, vec![]),
            itinerary("United Airlines", "UA1", 23, 180.0, vec![]),
        ]);
        let red_eye: Vec<_> = deals
            .iter()
            .filter(|d| d.explanation.contains("Red-eye"))
            .collect();
        assert_eq!(red_eye.len(), 1);
    }

    #[test]
    fn test_categories_sorted_by_price() {
        let deals = analyse(&[
            itinerary("United Airlines", "UA1", 23, 220.0, vec![]),
            itinerary("Delta Air Lines", "DL2", 23, 180.0, vec![]),
        ]);
        let red_eye: Vec<f64> = deals
            .iter()
            .filter(|d| d.explanation.contains("Red-eye"))
            .map(|d| d.price_usd)
            .collect();
        assert_eq!(red_eye, vec![180.0, 220.0]);
    }
}
