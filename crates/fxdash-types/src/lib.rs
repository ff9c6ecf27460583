//! Core types for the fxdash exchange-rate dashboard.
//!
//! This crate provides the fundamental data structures used throughout fxdash:
//!
//! - [`CurrencyPair`] - Validated six-letter pair code (e.g. `EURUSD`)
//! - [`SupportedPair`] - Entry of the remote supported-pairs list
//! - [`RatePoint`] / [`CurrencyData`] - One observation and one pair's series
//! - [`Timeframe`] - Symbolic history window (`1D` .. `2Y`)
//! - [`DateRange`] - Inclusive calendar date range for rate queries

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fxdash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod pair;
mod rate;
mod timeframe;

pub use date_range::DateRange;
pub use error::{DateRangeError, PairCodeError};
pub use pair::{CurrencyPair, SupportedPair};
pub use rate::{CurrencyData, RatePoint};
pub use timeframe::{DEFAULT_DAYS, Timeframe, TimeframeParseError, days_for_token};
