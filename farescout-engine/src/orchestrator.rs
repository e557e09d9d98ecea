//! Top-level search coordination: baseline call, concurrent strategy
//! dispatch under a shared call budget, analysis, curation.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use farescout_core::booking::booking_link;
use farescout_core::{Deal, DealStrategy, Itinerary, SearchQuery};
use farescout_deals::strategies::{
    find_hidden_city_deals, find_nearby_airport_deals, find_positioning_deals,
    find_split_ticket_deals,
};
use farescout_deals::{analyse, curate, extract, selectors};
use farescout_geo::{distance, route_type};
use farescout_provider::{BudgetedSource, FlightPriceSource, PriceRequest};

use crate::config::EngineConfig;
use crate::{EngineError, EngineResult};

/// Curated result of one search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub deals: Vec<Deal>,
    pub calls_used: u32,
}

/// The deal discovery core. One instance serves many concurrent
/// searches; per-search state lives on the stack of each call.
pub struct DealFinder {
    source: Arc<dyn FlightPriceSource>,
    config: EngineConfig,
}

impl DealFinder {
    pub fn new(source: Arc<dyn FlightPriceSource>, config: EngineConfig) -> Self {
        Self { source, config }
    }

    /// Run a search to completion.
    pub async fn search(&self, query: &SearchQuery) -> EngineResult<SearchOutcome> {
        self.search_with_cancel(query, CancellationToken::new())
            .await
    }

    /// Run a search, giving up after `deadline` and returning whatever
    /// has been gathered by then.
    pub async fn search_with_deadline(
        &self,
        query: &SearchQuery,
        deadline: std::time::Duration,
    ) -> EngineResult<SearchOutcome> {
        let cancel = CancellationToken::new();
        let timer = {
            let cancel = cancel.clone();
            tokio::spawn(async move {
                tokio::time::sleep(deadline).await;
                cancel.cancel();
            })
        };
        let result = self.search_with_cancel(query, cancel).await;
        timer.abort();
        result
    }

    /// Run a search under an external cancellation signal. On
    /// cancellation, in-flight strategy tasks abandon their work and the
    /// partial results gathered so far are curated and returned.
    #[instrument(
        skip_all,
        fields(
            search_id = %Uuid::new_v4(),
            origin = %query.origin,
            destination = %query.destination,
        )
    )]
    pub async fn search_with_cancel(
        &self,
        query: &SearchQuery,
        cancel: CancellationToken,
    ) -> EngineResult<SearchOutcome> {
        query
            .validate()
            .map_err(|e| EngineError::InvalidInput(e.to_string()))?;
        let query = query.normalized();

        if self.config.max_calls_per_search < 1 {
            return Err(EngineError::BudgetZero);
        }
        let budget = Arc::new(BudgetedSource::new(
            self.source.clone(),
            self.config.max_calls_per_search,
        ));

        info!(
            departure = %query.departure,
            route_type = ?route_type(&query.origin, &query.destination),
            distance_mi = distance(&query.origin, &query.destination).round(),
            "starting deal search"
        );

        let baseline_req = PriceRequest {
            origin: query.origin.clone(),
            destination: query.destination.clone(),
            departure: query.departure,
            return_date: query.return_date,
            cabin: query.cabin(),
        };
        let baseline = tokio::select! {
            _ = cancel.cancelled() => Vec::new(),
            results = budget.call(&baseline_req, "baseline") => results,
        };

        if baseline.is_empty() {
            info!("baseline search returned nothing; no deals to curate");
            return Ok(SearchOutcome {
                deals: Vec::new(),
                calls_used: budget.used(),
            });
        }

        // The provider's preferred itinerary anchors every threshold.
        let base_price = baseline[0].price_usd;
        info!(
            base_price,
            results = baseline.len(),
            "baseline search complete"
        );

        let handles = self.dispatch_strategies(&query, base_price, &baseline, &budget, &cancel);

        let mut deals = vec![standard_deal(&query, cheapest_of(&baseline))];
        for (name, handle) in handles {
            match handle.await {
                Ok(found) => {
                    debug!(strategy = name, deals = found.len(), "strategy joined");
                    deals.extend(found);
                }
                Err(err) => {
                    warn!(
                        strategy = name,
                        error = %err,
                        "strategy task failed; dropping its deals"
                    );
                }
            }
        }

        let curated = curate(deals);
        info!(
            deals = curated.len(),
            calls_used = budget.used(),
            "search complete"
        );

        Ok(SearchOutcome {
            deals: curated,
            calls_used: budget.used(),
        })
    }

    /// Spawn each eligible strategy plus the zero-call analysis pass.
    /// Cheap baselines never even schedule a task.
    fn dispatch_strategies(
        &self,
        query: &SearchQuery,
        base_price: f64,
        baseline: &[Itinerary],
        budget: &Arc<BudgetedSource>,
        cancel: &CancellationToken,
    ) -> Vec<(&'static str, JoinHandle<Vec<Deal>>)> {
        let cfg = &self.config.strategy;
        let mut handles: Vec<(&'static str, JoinHandle<Vec<Deal>>)> = Vec::new();

        if base_price >= cfg.nearby_min_base {
            let (query, budget, cfg, cancel) =
                (query.clone(), budget.clone(), cfg.clone(), cancel.clone());
            handles.push((
                "nearby-airport",
                tokio::spawn(async move {
                    tokio::select! {
                        _ = cancel.cancelled() => Vec::new(),
                        deals = find_nearby_airport_deals(&query, base_price, &budget, &cfg) => deals,
                    }
                }),
            ));
        }

        if base_price >= cfg.split_min_base {
            let (query, budget, cfg, cancel) =
                (query.clone(), budget.clone(), cfg.clone(), cancel.clone());
            handles.push((
                "split-ticket",
                tokio::spawn(async move {
                    tokio::select! {
                        _ = cancel.cancelled() => Vec::new(),
                        deals = find_split_ticket_deals(&query, base_price, &budget, &cfg) => deals,
                    }
                }),
            ));
        }

        if selectors::should_check_positioning(base_price, cfg) {
            let (query, budget, cfg, cancel) =
                (query.clone(), budget.clone(), cfg.clone(), cancel.clone());
            handles.push((
                "positioning",
                tokio::spawn(async move {
                    tokio::select! {
                        _ = cancel.cancelled() => Vec::new(),
                        deals = find_positioning_deals(&query, base_price, &budget, &cfg) => deals,
                    }
                }),
            ));
        }

        if selectors::should_check_hidden_city(base_price, cfg) {
            let (query, budget, cfg, cancel) =
                (query.clone(), budget.clone(), cfg.clone(), cancel.clone());
            handles.push((
                "hidden-city",
                tokio::spawn(async move {
                    tokio::select! {
                        _ = cancel.cancelled() => Vec::new(),
                        deals = find_hidden_city_deals(&query, base_price, &budget, &cfg) => deals,
                    }
                }),
            ));
        }

        // CPU-only pass over what the baseline already fetched.
        {
            let baseline = baseline.to_vec();
            let cfg = cfg.clone();
            let cancel = cancel.clone();
            handles.push((
                "analysis",
                tokio::spawn(async move {
                    if cancel.is_cancelled() {
                        return Vec::new();
                    }
                    let direct = cheapest_direct_price(&baseline);
                    let mut deals = analyse(&baseline);
                    deals.extend(extract::connecting_flight_deals(&baseline, direct, &cfg));
                    deals.extend(extract::budget_airline_deals(&baseline));
                    deals
                }),
            ));
        }

        handles
    }
}

fn cheapest_of(itineraries: &[Itinerary]) -> &Itinerary {
    let mut cheapest = &itineraries[0];
    for itinerary in itineraries {
        if itinerary.price_usd < cheapest.price_usd {
            cheapest = itinerary;
        }
    }
    cheapest
}

/// Cheapest direct fare, falling back to the cheapest fare of any shape.
fn cheapest_direct_price(itineraries: &[Itinerary]) -> f64 {
    let direct = itineraries
        .iter()
        .filter(|i| i.is_direct())
        .map(|i| i.price_usd)
        .fold(f64::INFINITY, f64::min);
    if direct.is_finite() {
        direct
    } else {
        itineraries
            .iter()
            .map(|i| i.price_usd)
            .fold(f64::INFINITY, f64::min)
    }
}

fn standard_deal(query: &SearchQuery, itinerary: &Itinerary) -> Deal {
    let airline = itinerary
        .first_leg()
        .map(|l| l.airline.as_str())
        .unwrap_or("unknown carrier");
    let explanation = format!(
        "Standard fare {}-{} on {} at ${:.0}",
        query.origin, query.destination, airline, itinerary.price_usd,
    );
    Deal::new(
        DealStrategy::Standard,
        itinerary.price_usd,
        0,
        booking_link(itinerary),
        explanation,
        vec![itinerary.clone()],
    )
}
