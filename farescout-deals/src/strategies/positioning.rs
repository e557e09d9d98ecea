use farescout_core::booking::booking_link;
use farescout_core::{Deal, DealStrategy, SearchQuery};
use farescout_provider::{BudgetedSource, PriceRequest};
use tracing::debug;

use crate::config::StrategyConfig;

/// Cheap-departure cities worth repositioning to the day before.
const POSITIONING_CITIES: [&str; 2] = ["FLL", "MIA"];

/// Hop to a cheaper departure city the day before, then fly the main leg.
///
/// Only worthwhile on expensive baselines; the combined total must clear
/// the positioning discount to cover the overnight hassle.
pub async fn find_positioning_deals(
    query: &SearchQuery,
    base_price: f64,
    source: &BudgetedSource,
    cfg: &StrategyConfig,
) -> Vec<Deal> {
    if base_price < cfg.positioning_min_base {
        return Vec::new();
    }

    let day_before = query.departure - chrono::Duration::days(1);
    let mut deals = Vec::new();

    for city in POSITIONING_CITIES.iter().filter(|c| {
        !c.eq_ignore_ascii_case(&query.origin) && !c.eq_ignore_ascii_case(&query.destination)
    }) {
        let hop_req = PriceRequest::one_way(&query.origin, city, day_before, query.cabin());
        let main_req =
            PriceRequest::one_way(city, &query.destination, query.departure, query.cabin());

        let (hop, main) = tokio::join!(
            source.call(&hop_req, "positioning-hop"),
            source.call(&main_req, "positioning-main"),
        );

        let (Some(hop), Some(main)) = (hop.into_iter().next(), main.into_iter().next()) else {
            continue;
        };

        let total = hop.price_usd + main.price_usd;
        if total >= cfg.positioning_discount * base_price {
            continue;
        }

        let explanation = format!(
            "Position to {city} on {day_before} for ${:.0}, then {city}-{} on {} for ${:.0}: \
             total ${:.0} vs ${:.0} baseline (save ${:.0}). Two bookings plus an overnight \
             you arrange yourself.",
            hop.price_usd,
            query.destination,
            query.departure,
            main.price_usd,
            total,
            base_price,
            base_price - total,
        );
        let link = booking_link(&hop);

        deals.push(Deal::new(
            DealStrategy::Standard,
            total,
            50,
            link,
            explanation,
            vec![hop, main],
        ));
    }

    debug!(deals = deals.len(), "positioning strategy finished");
    deals
}
