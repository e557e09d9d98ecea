use farescout_core::booking::booking_link;
use farescout_core::{Deal, DealStrategy, SearchQuery};
use farescout_provider::{BudgetedSource, PriceRequest};
use tracing::debug;

use crate::config::StrategyConfig;
use crate::selectors::smart_beyond_cities;

/// Probe through-tickets past the destination and keep the ones that
/// stop over at it.
///
/// High risk by construction: deplaning at a layover violates most
/// carriers' ticketing rules and forfeits any checked baggage.
pub async fn find_hidden_city_deals(
    query: &SearchQuery,
    base_price: f64,
    source: &BudgetedSource,
    cfg: &StrategyConfig,
) -> Vec<Deal> {
    if base_price < cfg.hidden_city_min_base {
        return Vec::new();
    }

    let mut deals = Vec::new();

    for beyond in smart_beyond_cities(&query.origin, &query.destination)
        .into_iter()
        .take(cfg.max_beyond_probes)
    {
        let req = PriceRequest::one_way(&query.origin, beyond, query.departure, query.cabin());
        let results = source.call(&req, "hidden-city").await;

        for itinerary in results {
            if !itinerary.has_layover_at(&query.destination) {
                continue;
            }
            // A through-ticket pricier than the baseline is not a deal.
            if itinerary.price_usd >= base_price {
                continue;
            }

            let savings = base_price - itinerary.price_usd;
            let explanation = format!(
                "Ticketed {}-{beyond} at ${:.0}, deplane at the {} layover and save ${:.0} \
                 vs the ${:.0} baseline. Carry-on only: checked bags continue to {beyond}, \
                 and skipping the final segment violates most carriers' conditions of carriage.",
                query.origin, itinerary.price_usd, query.destination, savings, base_price,
            );
            let link = booking_link(&itinerary);

            deals.push(Deal::new(
                DealStrategy::HiddenCity,
                itinerary.price_usd,
                65,
                link,
                explanation,
                vec![itinerary],
            ));
        }
    }

    debug!(deals = deals.len(), "hidden-city strategy finished");
    deals
}
