//! History window timeframes and their resolution to date ranges.

use chrono::{Datelike, Local, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

use crate::DateRange;

/// Day count used for tokens that do not name a known timeframe.
pub const DEFAULT_DAYS: i64 = 30;

/// Symbolic history window selecting how far back rates are queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Timeframe {
    /// One day.
    #[serde(rename = "1D")]
    OneDay,
    /// Five days.
    #[serde(rename = "5D")]
    FiveDays,
    /// One month (30 days).
    #[default]
    #[serde(rename = "1M")]
    OneMonth,
    /// Six months (180 days).
    #[serde(rename = "6M")]
    SixMonths,
    /// Year to date.
    #[serde(rename = "YTD")]
    YearToDate,
    /// One year (365 days).
    #[serde(rename = "1Y")]
    OneYear,
    /// Two years (730 days).
    #[serde(rename = "2Y")]
    TwoYears,
}

impl Timeframe {
    /// Returns the number of days this timeframe spans, ending at `today`.
    ///
    /// Only [`Timeframe::YearToDate`] depends on `today`: it counts whole
    /// calendar days since January 1st of `today`'s year, so January 1st
    /// yields 0 and December 31st yields 364 (365 in leap years).
    #[must_use]
    pub fn days(&self, today: NaiveDate) -> i64 {
        match self {
            Self::OneDay => 1,
            Self::FiveDays => 5,
            Self::OneMonth => 30,
            Self::SixMonths => 180,
            Self::YearToDate => i64::from(today.ordinal0()),
            Self::OneYear => 365,
            Self::TwoYears => 730,
        }
    }

    /// Returns the day count evaluated against the local wall-clock date.
    #[must_use]
    pub fn days_now(&self) -> i64 {
        self.days(Local::now().date_naive())
    }

    /// Resolves the timeframe to a concrete range ending at `now`.
    ///
    /// `end` is `now` and `start` is `now` minus [`Self::days`].
    #[must_use]
    pub fn range(&self, now: NaiveDate) -> DateRange {
        let start = now - TimeDelta::days(self.days(now));
        DateRange { start, end: now }
    }

    /// Parses a token, falling back to [`Timeframe::OneMonth`] when it is not
    /// recognized.
    #[must_use]
    pub fn parse_lenient(token: &str) -> Self {
        token.parse().unwrap_or_else(|_| {
            debug!(token, "unrecognized timeframe token, using 1M");
            Self::default()
        })
    }

    /// Returns the timeframe token (e.g. "1M").
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::FiveDays => "5D",
            Self::OneMonth => "1M",
            Self::SixMonths => "6M",
            Self::YearToDate => "YTD",
            Self::OneYear => "1Y",
            Self::TwoYears => "2Y",
        }
    }

    /// Returns all timeframes in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::OneDay,
            Self::FiveDays,
            Self::OneMonth,
            Self::SixMonths,
            Self::YearToDate,
            Self::OneYear,
            Self::TwoYears,
        ]
    }
}

/// Resolves a raw token to a day count, defaulting to [`DEFAULT_DAYS`].
///
/// This is the permissive entry point for tokens coming from storage or other
/// untyped sources.
#[must_use]
pub fn days_for_token(token: &str, today: NaiveDate) -> i64 {
    token.parse::<Timeframe>().map_or_else(
        |_| {
            debug!(token, "unrecognized timeframe token, using {DEFAULT_DAYS} days");
            DEFAULT_DAYS
        },
        |timeframe| timeframe.days(today),
    )
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = TimeframeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "1D" => Ok(Self::OneDay),
            "5D" => Ok(Self::FiveDays),
            "1M" => Ok(Self::OneMonth),
            "6M" => Ok(Self::SixMonths),
            "YTD" => Ok(Self::YearToDate),
            "1Y" => Ok(Self::OneYear),
            "2Y" => Ok(Self::TwoYears),
            _ => Err(TimeframeParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid timeframe string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeframeParseError(String);

impl std::fmt::Display for TimeframeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid timeframe '{}', expected one of: 1D, 5D, 1M, 6M, YTD, 1Y, 2Y",
            self.0
        )
    }
}

impl std::error::Error for TimeframeParseError {}
