//! Error types for fxdash core types.

use chrono::NaiveDate;
use thiserror::Error;

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}

/// Error for malformed currency pair codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairCodeError {
    /// The code is not exactly six characters long.
    #[error("Invalid pair code '{0}': expected six letters (e.g. EURUSD)")]
    Length(String),

    /// The code contains something other than ASCII letters.
    #[error("Invalid pair code '{0}': only ASCII letters are allowed")]
    Characters(String),
}
