use farescout_core::booking::booking_link;
use farescout_core::{Deal, DealStrategy, Itinerary, SearchQuery};
use farescout_provider::{BudgetedSource, PriceRequest};
use tracing::debug;

use crate::config::StrategyConfig;
use crate::selectors::nearby_alternatives;

use super::savings_percent;

/// Probe interchangeable metro airports on both ends of the route.
///
/// Only direct flights priced well under the baseline qualify; a cheap
/// connection through an alternate airport is not the same product.
pub async fn find_nearby_airport_deals(
    query: &SearchQuery,
    base_price: f64,
    source: &BudgetedSource,
    cfg: &StrategyConfig,
) -> Vec<Deal> {
    if base_price < cfg.nearby_min_base {
        return Vec::new();
    }

    let mut deals = Vec::new();

    for alt in nearby_alternatives(&query.origin, base_price) {
        let req = PriceRequest::one_way(alt, &query.destination, query.departure, query.cabin());
        let results = source.call(&req, "nearby-origin").await;
        if let Some(deal) = accept(results, base_price, cfg, alt, &query.origin) {
            deals.push(deal);
        }
    }

    for alt in nearby_alternatives(&query.destination, base_price) {
        let req = PriceRequest::one_way(&query.origin, alt, query.departure, query.cabin());
        let results = source.call(&req, "nearby-destination").await;
        if let Some(deal) = accept(results, base_price, cfg, alt, &query.destination) {
            deals.push(deal);
        }
    }

    debug!(deals = deals.len(), "nearby-airport strategy finished");
    deals
}

fn accept(
    results: Vec<Itinerary>,
    base_price: f64,
    cfg: &StrategyConfig,
    alternative: &str,
    replaced: &str,
) -> Option<Deal> {
    let itinerary = results.into_iter().next()?;
    if itinerary.price_usd >= cfg.nearby_discount * base_price || !itinerary.is_direct() {
        return None;
    }

    let savings = base_price - itinerary.price_usd;
    let explanation = format!(
        "Use {alternative} instead of {replaced}: ${:.0} direct vs ${:.0} baseline, saving ${:.0} ({}%)",
        itinerary.price_usd,
        base_price,
        savings,
        savings_percent(base_price, itinerary.price_usd),
    );
    let link = booking_link(&itinerary);

    Some(Deal::new(
        DealStrategy::Standard,
        itinerary.price_usd,
        10,
        link,
        explanation,
        vec![itinerary],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use farescout_core::{Layover, Leg};
    use farescout_provider::StaticPriceSource;
    use std::sync::Arc;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2027, 3, 15).unwrap()
    }

    fn itinerary(origin: &str, destination: &str, price: f64, layovers: Vec<Layover>) -> Itinerary {
        let depart = Utc.with_ymd_and_hms(2027, 3, 15, 9, 0, 0).unwrap();
        Itinerary {
            legs: vec![Leg {
                origin: origin.to_string(),
                destination: destination.to_string(),
                depart_at: depart,
                arrive_at: depart + chrono::Duration::hours(6),
                airline: "United Airlines".to_string(),
                flight_number: format!("UA{origin}{destination}"),
                duration_min: 360,
                layovers,
            }],
            price_usd: price,
            booking_token: None,
        }
    }

    fn query() -> SearchQuery {
        SearchQuery::one_way("JFK", "LAX", date())
    }

    #[tokio::test]
    async fn test_cheaper_direct_alternate_accepted() {
        let source = Arc::new(
            StaticPriceSource::new()
                .with_route("EWR", "LAX", vec![itinerary("EWR", "LAX", 240.0, vec![])]),
        );
        let budgeted = BudgetedSource::new(source, 15);

        let deals =
            find_nearby_airport_deals(&query(), 300.0, &budgeted, &StrategyConfig::default()).await;

        assert_eq!(deals.len(), 1);
        let deal = &deals[0];
        assert_eq!(deal.strategy, DealStrategy::Standard);
        assert_eq!(deal.price_usd, 240.0);
        assert!(deal.risk_score <= 10);
        assert!(deal.explanation.contains("EWR"));
        assert!(deal.explanation.contains("JFK"));
    }

    #[tokio::test]
    async fn test_connecting_alternate_rejected() {
        let source = Arc::new(StaticPriceSource::new().with_route(
            "EWR",
            "LAX",
            vec![itinerary(
                "EWR",
                "LAX",
                200.0,
                vec![Layover {
                    airport: "ORD".to_string(),
                    duration_min: 90,
                }],
            )],
        ));
        let budgeted = BudgetedSource::new(source, 15);

        let deals =
            find_nearby_airport_deals(&query(), 300.0, &budgeted, &StrategyConfig::default()).await;

        assert!(deals.is_empty());
    }

    #[tokio::test]
    async fn test_insufficient_discount_rejected() {
        // 260 is not below 85% of 300.
        let source = Arc::new(
            StaticPriceSource::new()
                .with_route("EWR", "LAX", vec![itinerary("EWR", "LAX", 260.0, vec![])]),
        );
        let budgeted = BudgetedSource::new(source, 15);

        let deals =
            find_nearby_airport_deals(&query(), 300.0, &budgeted, &StrategyConfig::default()).await;

        assert!(deals.is_empty());
    }

    #[tokio::test]
    async fn test_cheap_baseline_skips_strategy() {
        let source = Arc::new(StaticPriceSource::new());
        let budgeted = BudgetedSource::new(source.clone(), 15);

        let deals =
            find_nearby_airport_deals(&query(), 50.0, &budgeted, &StrategyConfig::default()).await;

        assert!(deals.is_empty());
        assert_eq!(source.call_count(), 0);
    }
}
