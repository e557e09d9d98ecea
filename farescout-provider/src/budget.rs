use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use farescout_core::Itinerary;

use crate::source::{FlightPriceSource, PriceRequest};

/// Per-search wrapper enforcing a hard ceiling on upstream calls.
///
/// The counter is shared by every concurrent strategy task within one
/// search; the wrapper never invokes the source after `max` calls have
/// been initiated. Budget exhaustion and upstream failures both surface
/// as empty itinerary lists, so strategies treat an empty return as
/// "move on".
pub struct BudgetedSource {
    inner: Arc<dyn FlightPriceSource>,
    max: u32,
    used: AtomicU32,
}

impl BudgetedSource {
    pub fn new(inner: Arc<dyn FlightPriceSource>, max: u32) -> Self {
        Self {
            inner,
            max,
            used: AtomicU32::new(0),
        }
    }

    /// Issue one upstream call if budget remains.
    ///
    /// `reason` names the strategy branch for the logs.
    pub async fn call(&self, req: &PriceRequest, reason: &str) -> Vec<Itinerary> {
        let acquired = self
            .used
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |used| {
                (used < self.max).then_some(used + 1)
            });

        if acquired.is_err() {
            debug!(
                reason,
                max = self.max,
                "call budget exhausted, skipping upstream call"
            );
            return Vec::new();
        }

        match self.inner.search(req).await {
            Ok(itineraries) => {
                debug!(
                    reason,
                    origin = %req.origin,
                    destination = %req.destination,
                    results = itineraries.len(),
                    used = self.used(),
                    "upstream call completed"
                );
                itineraries
            }
            Err(err) => {
                warn!(
                    reason,
                    origin = %req.origin,
                    destination = %req.destination,
                    error = %err,
                    "upstream call failed, treating as no results"
                );
                Vec::new()
            }
        }
    }

    /// Calls issued so far. Never exceeds `max`.
    pub fn used(&self) -> u32 {
        self.used.load(Ordering::SeqCst)
    }

    pub fn remaining(&self) -> u32 {
        self.max - self.used()
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}
