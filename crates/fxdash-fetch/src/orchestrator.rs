//! Concurrent fetch of every selected pair.

use futures::future::try_join_all;
use fxdash_types::{CurrencyData, CurrencyPair, DateRange, SupportedPair};
use std::time::Instant;
use tracing::{debug, info};

use crate::{FetchError, FetchToken, GenerationCounter, RateRequest, RateSource};

/// Result of a tagged fetch batch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The batch is still the latest one; its data may be applied.
    Current {
        /// Token the batch was started with.
        token: FetchToken,
        /// Series of every requested pair, in request order.
        data: Vec<CurrencyData>,
    },
    /// A newer batch started while this one was in flight.
    Superseded {
        /// Token the batch was started with.
        token: FetchToken,
    },
}

impl FetchOutcome {
    /// Returns `true` if the batch was superseded.
    #[must_use]
    pub const fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded { .. })
    }

    /// Token the batch was started with.
    #[must_use]
    pub const fn token(&self) -> FetchToken {
        match self {
            Self::Current { token, .. } | Self::Superseded { token } => *token,
        }
    }

    /// Fetched series, or `None` if the batch was superseded.
    #[must_use]
    pub fn into_data(self) -> Option<Vec<CurrencyData>> {
        match self {
            Self::Current { data, .. } => Some(data),
            Self::Superseded { .. } => None,
        }
    }
}

/// Fans a batch of pair requests out to a [`RateSource`].
///
/// All requests of a batch run concurrently. The batch succeeds only if every
/// request succeeds; results keep the order of the input pairs.
#[derive(Debug)]
pub struct RateFetcher<S> {
    source: S,
    generations: GenerationCounter,
}

impl<S: RateSource> RateFetcher<S> {
    /// Creates a fetcher with its own generation counter.
    pub fn new(source: S) -> Self {
        Self::with_generations(source, GenerationCounter::new())
    }

    /// Creates a fetcher sharing an existing generation counter.
    pub const fn with_generations(source: S, generations: GenerationCounter) -> Self {
        Self {
            source,
            generations,
        }
    }

    /// Underlying rate source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Generation counter used to tag batches.
    pub const fn generations(&self) -> &GenerationCounter {
        &self.generations
    }

    /// Starts a new generation; earlier batches become stale.
    pub fn issue(&self) -> FetchToken {
        self.generations.issue()
    }

    /// Marks every in-flight batch as stale.
    pub fn supersede(&self) -> u64 {
        self.generations.supersede()
    }

    /// Returns `true` if `token` belongs to the latest batch.
    pub fn is_current(&self, token: FetchToken) -> bool {
        self.generations.is_current(token)
    }

    /// Fetches the supported-pairs listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails.
    pub async fn supported_pairs(&self) -> Result<Vec<SupportedPair>, FetchError> {
        let pairs = self.source.supported_pairs().await?;
        debug!(count = pairs.len(), "loaded supported pairs");
        Ok(pairs)
    }

    /// Fetches `range` for every pair concurrently.
    ///
    /// An empty `pairs` slice returns immediately without touching the source.
    ///
    /// # Errors
    ///
    /// Returns the first error of any request; partial results are discarded.
    pub async fn fetch_all(
        &self,
        pairs: &[CurrencyPair],
        range: DateRange,
    ) -> Result<Vec<CurrencyData>, FetchError> {
        if pairs.is_empty() {
            return Ok(Vec::new());
        }

        let start = Instant::now();
        let requests: Vec<RateRequest> = pairs
            .iter()
            .map(|pair| RateRequest::new(pair.clone(), range))
            .collect();

        let batches = try_join_all(
            requests
                .iter()
                .map(|request| self.source.exchange_rates(request)),
        )
        .await?;

        let data: Vec<CurrencyData> = batches.into_iter().flatten().collect();
        info!(
            pairs = pairs.len(),
            series = data.len(),
            %range,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "fetched exchange rates"
        );
        Ok(data)
    }

    /// Runs a batch tagged with `token`.
    ///
    /// If a newer generation started before the batch finished, the result
    /// (success or failure) is reported as [`FetchOutcome::Superseded`].
    ///
    /// # Errors
    ///
    /// Returns the batch error if the batch is still current.
    pub async fn fetch_tagged(
        &self,
        token: FetchToken,
        pairs: &[CurrencyPair],
        range: DateRange,
    ) -> Result<FetchOutcome, FetchError> {
        let result = self.fetch_all(pairs, range).await;

        if !self.is_current(token) {
            debug!(
                generation = token.generation(),
                current = self.generations.current(),
                "discarding superseded fetch"
            );
            return Ok(FetchOutcome::Superseded { token });
        }

        result.map(|data| FetchOutcome::Current { token, data })
    }

    /// Issues a new token and runs a tagged batch with it.
    ///
    /// # Errors
    ///
    /// Returns the batch error if the batch is still current.
    pub async fn fetch_latest(
        &self,
        pairs: &[CurrencyPair],
        range: DateRange,
    ) -> Result<FetchOutcome, FetchError> {
        let token = self.issue();
        self.fetch_tagged(token, pairs, range).await
    }
}
