use farescout_core::booking::booking_link;
use farescout_core::{Deal, DealStrategy, SearchQuery};
use farescout_provider::{BudgetedSource, PriceRequest};
use tracing::debug;

use crate::config::StrategyConfig;
use crate::selectors::smart_hubs;

/// Price the route as two independent tickets through a hub.
///
/// Both hub legs are fetched concurrently; the pair only qualifies when
/// the combined price clears the split discount.
pub async fn find_split_ticket_deals(
    query: &SearchQuery,
    base_price: f64,
    source: &BudgetedSource,
    cfg: &StrategyConfig,
) -> Vec<Deal> {
    if base_price < cfg.split_min_base {
        return Vec::new();
    }

    let mut deals = Vec::new();

    for hub in smart_hubs(&query.origin, &query.destination, base_price, cfg) {
        let first_req =
            PriceRequest::one_way(&query.origin, hub, query.departure, query.cabin());
        let second_req =
            PriceRequest::one_way(hub, &query.destination, query.departure, query.cabin());

        let (first, second) = tokio::join!(
            source.call(&first_req, "split-first-leg"),
            source.call(&second_req, "split-second-leg"),
        );

        let (Some(first), Some(second)) =
            (first.into_iter().next(), second.into_iter().next())
        else {
            continue;
        };

        let total = first.price_usd + second.price_usd;
        if total >= cfg.split_discount * base_price {
            continue;
        }

        let explanation = format!(
            "Book two separate tickets via {hub}: {}-{hub} at ${:.0} plus {hub}-{} at ${:.0}, \
             total ${:.0} vs ${:.0} baseline (save ${:.0}). Two bookings; a missed connection \
             on the first ticket is not protected.",
            query.origin,
            first.price_usd,
            query.destination,
            second.price_usd,
            total,
            base_price,
            base_price - total,
        );
        let link = booking_link(&first);

        deals.push(Deal::new(
            DealStrategy::Standard,
            total,
            40,
            link,
            explanation,
            vec![first, second],
        ));
    }

    debug!(deals = deals.len(), "split-ticket strategy finished");
    deals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use farescout_core::{Itinerary, Leg};
    use farescout_provider::StaticPriceSource;
    use std::sync::Arc;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2027, 3, 15).unwrap()
    }

    fn direct(origin: &str, destination: &str, price: f64) -> Itinerary {
        let depart = Utc.with_ymd_and_hms(2027, 3, 15, 9, 0, 0).unwrap();
        Itinerary {
            legs: vec![Leg {
                origin: origin.to_string(),
                destination: destination.to_string(),
                depart_at: depart,
                arrive_at: depart + chrono::Duration::hours(3),
                airline: "United Airlines".to_string(),
                flight_number: format!("UA{origin}{destination}"),
                duration_min: 180,
                layovers: vec![],
            }],
            price_usd: price,
            booking_token: None,
        }
    }

    #[tokio::test]
    async fn test_cheap_split_found_through_hub() {
        let source = Arc::new(
            StaticPriceSource::new()
                .with_route("JFK", "DEN", vec![direct("JFK", "DEN", 150.0)])
                .with_route("DEN", "LAX", vec![direct("DEN", "LAX", 180.0)]),
        );
        let budgeted = BudgetedSource::new(source.clone(), 15);
        let query = SearchQuery::one_way("JFK", "LAX", date());

        let deals =
            find_split_ticket_deals(&query, 400.0, &budgeted, &StrategyConfig::default()).await;

        assert_eq!(deals.len(), 1);
        let deal = &deals[0];
        assert_eq!(deal.price_usd, 330.0);
        assert_eq!(deal.itineraries.len(), 2);
        assert_eq!(deal.risk_score, 40);
        assert!(deal.explanation.contains("two separate tickets"));
        assert!(deal.explanation.contains("DEN"));
        // Both hub legs were fetched.
        assert_eq!(source.call_count(), 2);
    }

    #[tokio::test]
    async fn test_expensive_split_rejected() {
        // 200 + 180 = 380 is not below 85% of 400.
        let source = Arc::new(
            StaticPriceSource::new()
                .with_route("JFK", "DEN", vec![direct("JFK", "DEN", 200.0)])
                .with_route("DEN", "LAX", vec![direct("DEN", "LAX", 180.0)]),
        );
        let budgeted = BudgetedSource::new(source, 15);
        let query = SearchQuery::one_way("JFK", "LAX", date());

        let deals =
            find_split_ticket_deals(&query, 400.0, &budgeted, &StrategyConfig::default()).await;

        assert!(deals.is_empty());
    }

    #[tokio::test]
    async fn test_missing_leg_is_not_a_deal() {
        let source = Arc::new(
            StaticPriceSource::new()
                .with_route("JFK", "DEN", vec![direct("JFK", "DEN", 150.0)]),
        );
        let budgeted = BudgetedSource::new(source, 15);
        let query = SearchQuery::one_way("JFK", "LAX", date());

        let deals =
            find_split_ticket_deals(&query, 400.0, &budgeted, &StrategyConfig::default()).await;

        assert!(deals.is_empty());
    }
}
