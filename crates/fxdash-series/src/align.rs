//! Multi-series alignment onto a shared date axis.

use chrono::NaiveDate;
use fxdash_types::CurrencyData;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// One pair's values on the chart axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    /// Pair code.
    pub code: String,
    /// Rate per label, `None` where the pair has no observation.
    pub values: Vec<Option<f64>>,
}

impl Dataset {
    /// Number of labels with an observation.
    #[must_use]
    pub fn observed(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

/// Aligned chart data.
///
/// Every dataset has exactly one value slot per label.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Chart {
    /// Distinct observation dates, ascending.
    pub labels: Vec<NaiveDate>,
    /// One dataset per input series, in input order.
    pub datasets: Vec<Dataset>,
}

impl Chart {
    /// Returns true if there is nothing to plot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.datasets.is_empty()
    }

    /// Returns the dataset for `code`, if present.
    #[must_use]
    pub fn dataset(&self, code: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.code == code)
    }
}

/// Aligns series onto the sorted union of their dates.
///
/// Labels do not depend on input order; datasets keep it. If a series holds
/// the same date more than once, its first observation is used.
#[must_use]
pub fn align(series: &[CurrencyData]) -> Chart {
    let labels: Vec<NaiveDate> = series
        .iter()
        .flat_map(|s| s.rates.iter().map(|p| p.date))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let datasets = series
        .iter()
        .map(|s| {
            let mut by_date = HashMap::with_capacity(s.rates.len());
            for point in &s.rates {
                by_date.entry(point.date).or_insert(point.rate);
            }
            Dataset {
                code: s.code.clone(),
                values: labels.iter().map(|d| by_date.get(d).copied()).collect(),
            }
        })
        .collect();

    Chart { labels, datasets }
}
