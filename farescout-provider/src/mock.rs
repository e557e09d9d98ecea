//! In-memory price source for development and testing.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use farescout_core::Itinerary;

use crate::source::{FlightPriceSource, PriceRequest, SourceError};

/// Price source serving canned itineraries keyed by route.
///
/// Mimics the real provider interface: unknown routes return an empty
/// list, identical requests return identical responses. An optional
/// per-call latency lets tests exercise budget exhaustion and
/// cancellation under slow upstream conditions.
#[derive(Default)]
pub struct StaticPriceSource {
    routes: HashMap<(String, String), Vec<Itinerary>>,
    latency: Option<Duration>,
    calls: Mutex<Vec<PriceRequest>>,
}

impl StaticPriceSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the itineraries returned for `origin -> destination`.
    pub fn with_route(mut self, origin: &str, destination: &str, itineraries: Vec<Itinerary>) -> Self {
        self.routes.insert(
            (
                origin.to_ascii_uppercase(),
                destination.to_ascii_uppercase(),
            ),
            itineraries,
        );
        self
    }

    /// Delay every call by `latency`, simulating a slow provider.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Every request received, in arrival order.
    pub fn calls(&self) -> Vec<PriceRequest> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("call log poisoned").len()
    }
}

#[async_trait]
impl FlightPriceSource for StaticPriceSource {
    async fn search(&self, req: &PriceRequest) -> Result<Vec<Itinerary>, SourceError> {
        self.calls.lock().expect("call log poisoned").push(req.clone());

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let key = (
            req.origin.to_ascii_uppercase(),
            req.destination.to_ascii_uppercase(),
        );
        Ok(self.routes.get(&key).cloned().unwrap_or_default())
    }
}
