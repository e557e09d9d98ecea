//! Final selection pass: deduplicate, group for diversity, sort by price.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use farescout_core::{Deal, DealStrategy};

/// Maximum deals returned from one search.
pub const MAX_CURATED: usize = 35;

/// Specials stop being force-included once the set reaches this size.
const SPECIALS_TARGET: usize = 30;
/// Time-of-day and airline grouping stop once the set reaches this size.
const GROUPS_TARGET: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum TimeBucket {
    Morning,
    Afternoon,
    Evening,
    Overnight,
}

const BUCKET_ORDER: [TimeBucket; 4] = [
    TimeBucket::Morning,
    TimeBucket::Afternoon,
    TimeBucket::Evening,
    TimeBucket::Overnight,
];

fn bucket_of(hour: u32) -> TimeBucket {
    match hour {
        6..=11 => TimeBucket::Morning,
        12..=17 => TimeBucket::Afternoon,
        18..=23 => TimeBucket::Evening,
        _ => TimeBucket::Overnight,
    }
}

/// Curate a merged strategy output into a diverse set of at most
/// [`MAX_CURATED`] deals, cheapest first.
///
/// Selection preserves insertion order and skips duplicate flights, so
/// the result is deterministic for identical inputs: the globally
/// cheapest deal always survives, specials (non-standard strategies) are
/// prioritised, then time-of-day, carrier, and price-band diversity fill
/// the remainder.
pub fn curate(deals: Vec<Deal>) -> Vec<Deal> {
    let candidates: Vec<Deal> = deals
        .into_iter()
        .filter(|d| d.dedup_key().is_some() && d.price_usd > 0.0)
        .collect();
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut seen: HashSet<(String, String, String)> = HashSet::new();
    let mut selected: Vec<Deal> = Vec::new();

    // 1. The cheapest deal is non-negotiable.
    let mut cheapest_idx = 0;
    for (idx, deal) in candidates.iter().enumerate() {
        if deal.price_usd < candidates[cheapest_idx].price_usd {
            cheapest_idx = idx;
        }
    }
    select(&candidates[cheapest_idx], &mut seen, &mut selected);

    // 2. Everything a strategy surfaced is worth showing.
    for deal in candidates
        .iter()
        .filter(|d| d.strategy != DealStrategy::Standard)
    {
        if selected.len() >= SPECIALS_TARGET {
            break;
        }
        select(deal, &mut seen, &mut selected);
    }

    // 3. Up to two per time-of-day bucket.
    let mut by_bucket: HashMap<TimeBucket, Vec<&Deal>> = HashMap::new();
    for deal in &candidates {
        if let Some(hour) = deal.departure_hour() {
            by_bucket.entry(bucket_of(hour)).or_default().push(deal);
        }
    }
    'buckets: for bucket in BUCKET_ORDER {
        let Some(group) = by_bucket.get_mut(&bucket) else {
            continue;
        };
        group.sort_by(|a, b| {
            a.price_usd
                .partial_cmp(&b.price_usd)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for deal in group.iter().take(2) {
            if selected.len() >= GROUPS_TARGET {
                break 'buckets;
            }
            select(deal, &mut seen, &mut selected);
        }
    }

    // 4. Up to two per airline, airlines in first-seen order.
    let mut airline_order: Vec<String> = Vec::new();
    let mut by_airline: HashMap<String, Vec<&Deal>> = HashMap::new();
    for deal in &candidates {
        let Some(leg) = deal.first_leg() else { continue };
        if !by_airline.contains_key(&leg.airline) {
            airline_order.push(leg.airline.clone());
        }
        by_airline.entry(leg.airline.clone()).or_default().push(deal);
    }
    'airlines: for airline in &airline_order {
        let Some(group) = by_airline.get_mut(airline) else {
            continue;
        };
        group.sort_by(|a, b| {
            a.price_usd
                .partial_cmp(&b.price_usd)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for deal in group.iter().take(2) {
            if selected.len() >= GROUPS_TARGET {
                break 'airlines;
            }
            select(deal, &mut seen, &mut selected);
        }
    }

    // 5. Fill remaining slots from unseen $10 price bands.
    let mut bands: HashSet<i64> = selected
        .iter()
        .map(|d| price_band(d.price_usd))
        .collect();
    for deal in &candidates {
        if selected.len() >= MAX_CURATED {
            break;
        }
        let band = price_band(deal.price_usd);
        if bands.contains(&band) {
            continue;
        }
        if select(deal, &mut seen, &mut selected) {
            bands.insert(band);
        }
    }

    selected.sort_by(|a, b| {
        a.price_usd
            .partial_cmp(&b.price_usd)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    selected.truncate(MAX_CURATED);

    debug!(curated = selected.len(), "curation finished");
    selected
}

fn price_band(price: f64) -> i64 {
    (price / 10.0).floor() as i64 * 10
}

fn select(
    deal: &Deal,
    seen: &mut HashSet<(String, String, String)>,
    selected: &mut Vec<Deal>,
) -> bool {
    let Some(key) = deal.dedup_key() else {
        return false;
    };
    if !seen.insert(key) {
        return false;
    }
    selected.push(deal.clone());
    true
}
