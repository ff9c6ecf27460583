//! Rate API client and fetch orchestration for the fxdash exchange-rate dashboard.
//!
//! This crate provides the data retrieval pipeline:
//!
//! - [`ApiConfig`] - Explicit API configuration (base URL, key, timeout)
//! - [`url`] - Endpoint URL construction
//! - [`RateClient`] - HTTP client for the remote rate API
//! - [`RateSource`] - Seam between the orchestrator and a rate provider
//! - [`RateFetcher`] - Concurrent per-pair fan-out with generation tagging
//! - [`MemorySource`] - In-memory rate provider for tests and demos

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fxdash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod config;
mod error;
mod generation;
mod memory;
mod orchestrator;
mod source;
pub mod url;

pub use client::{API_KEY_HEADER, RateClient};
pub use config::ApiConfig;
pub use error::FetchError;
pub use generation::{FetchToken, GenerationCounter};
pub use memory::MemorySource;
pub use orchestrator::{FetchOutcome, RateFetcher};
pub use source::{
    ExchangeRateResponse, RateRequest, RateSource, SupportedCurrenciesResponse, SupportedPairs,
};
