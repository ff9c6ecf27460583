//! Percentage change between consecutive observations.

use chrono::NaiveDate;
use fxdash_types::CurrencyData;
use serde::Serialize;
use std::cmp::Reverse;

/// One grid row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlattenedRow {
    /// Pair code.
    pub code: String,
    /// Observed rate.
    pub rate: f64,
    /// Observation date.
    pub date: NaiveDate,
    /// Percent change from the previous observation of the same pair.
    ///
    /// `None` means there is no usable prior data, which is distinct from a
    /// computed change of zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_percent: Option<f64>,
}

/// Percent change from `previous` to `current`.
///
/// Returns `None` when `previous` is zero or the result is not finite.
#[must_use]
pub fn percent_change(previous: f64, current: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    let change = (current - previous) / previous * 100.0;
    change.is_finite().then_some(change)
}

/// Derives grid rows for one series.
///
/// Points are compared in the order they appear in `series`; nothing is
/// re-sorted. The first row never carries a change.
#[must_use]
pub fn with_change(series: &CurrencyData) -> Vec<FlattenedRow> {
    let mut previous: Option<f64> = None;
    series
        .rates
        .iter()
        .map(|point| {
            let change_percent = previous.and_then(|prev| percent_change(prev, point.rate));
            previous = Some(point.rate);
            FlattenedRow {
                code: series.code.clone(),
                rate: point.rate,
                date: point.date,
                change_percent,
            }
        })
        .collect()
}

/// Derives rows for every series, each independently, concatenated in input order.
#[must_use]
pub fn flatten_all(series: &[CurrencyData]) -> Vec<FlattenedRow> {
    series.iter().flat_map(with_change).collect()
}

/// Orders rows newest date first. Rows sharing a date keep their relative order.
pub fn sort_newest_first(rows: &mut [FlattenedRow]) {
    rows.sort_by_key(|row| Reverse(row.date));
}
