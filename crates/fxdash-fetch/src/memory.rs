//! In-memory rate source.

use async_trait::async_trait;
use fxdash_types::{CurrencyData, CurrencyPair, SupportedPair};
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::{FetchError, RateRequest, RateSource};

/// A [`RateSource`] backed by canned series.
///
/// Used for tests, benchmarks and offline runs. Requests are recorded so
/// callers can check what was asked for, unless recording is switched off
/// with [`MemorySource::without_request_log`].
#[derive(Debug, Default)]
pub struct MemorySource {
    series: HashMap<String, CurrencyData>,
    failing: HashSet<String>,
    delays: HashMap<String, Duration>,
    pairs: Vec<SupportedPair>,
    requests: Mutex<Vec<RateRequest>>,
    unlogged: bool,
}

impl MemorySource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a series, keyed by its code.
    #[must_use]
    pub fn with_series(mut self, data: CurrencyData) -> Self {
        self.series.insert(data.code.to_ascii_uppercase(), data);
        self
    }

    /// Makes every request for `pair` fail with a 503.
    #[must_use]
    pub fn with_failure(mut self, pair: &CurrencyPair) -> Self {
        self.failing.insert(pair.code().to_string());
        self
    }

    /// Delays responses for `pair`.
    #[must_use]
    pub fn with_delay(mut self, pair: &CurrencyPair, delay: Duration) -> Self {
        self.delays.insert(pair.code().to_string(), delay);
        self
    }

    /// Sets the supported-pairs listing.
    #[must_use]
    pub fn with_pairs(mut self, pairs: Vec<SupportedPair>) -> Self {
        self.pairs = pairs;
        self
    }

    /// Stops recording requests. Long-running callers such as benchmarks use
    /// this to keep memory flat.
    #[must_use]
    pub fn without_request_log(mut self) -> Self {
        self.unlogged = true;
        self
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<RateRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl RateSource for MemorySource {
    async fn exchange_rates(&self, request: &RateRequest) -> Result<Vec<CurrencyData>, FetchError> {
        if !self.unlogged {
            self.requests
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(request.clone());
        }

        let code = request.pair.code();
        if let Some(delay) = self.delays.get(code) {
            tokio::time::sleep(*delay).await;
        }

        if self.failing.contains(code) {
            return Err(FetchError::Status {
                status: 503,
                reason: "Service Unavailable".to_string(),
            });
        }

        let Some(data) = self.series.get(code) else {
            return Err(FetchError::Status {
                status: 404,
                reason: "Not Found".to_string(),
            });
        };

        let rates = data
            .rates
            .iter()
            .filter(|point| request.range.contains(point.date))
            .copied()
            .collect();
        Ok(vec![CurrencyData::new(data.code.clone(), rates)])
    }

    async fn supported_pairs(&self) -> Result<Vec<SupportedPair>, FetchError> {
        Ok(self.pairs.clone())
    }
}
