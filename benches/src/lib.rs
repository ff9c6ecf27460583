//! Benchmark utilities for fxdash.
//!
//! Generates deterministic synthetic rate series so benchmarks do not depend
//! on a live API.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use fxdash_lib::{CurrencyData, CurrencyPair, MemorySource, RatePoint};

/// Shape of a synthetic workload.
#[derive(Debug, Clone, Copy)]
pub struct SeriesConfig {
    /// Number of pairs.
    pub pairs: usize,
    /// Calendar days covered by each series.
    pub days: usize,
    /// Skip Saturdays and Sundays, leaving gaps the aligner has to fill.
    pub skip_weekends: bool,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            pairs: 5,
            days: 30,
            skip_weekends: true,
        }
    }
}

/// Pair codes used by the generator, cycled when more pairs are requested.
const BASES: &[&str] = &["EUR", "GBP", "AUD", "NZD", "CHF", "JPY", "CAD", "SEK"];
const QUOTES: &[&str] = &["USD", "CAD", "JPY", "CHF", "NOK", "SGD"];

/// First date of every generated series.
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

/// Returns `count` distinct pair codes.
pub fn pair_codes(count: usize) -> Vec<String> {
    BASES
        .iter()
        .flat_map(|base| QUOTES.iter().map(move |quote| (base, quote)))
        .filter(|(base, quote)| base != quote)
        .map(|(base, quote)| format!("{base}{quote}"))
        .take(count)
        .collect()
}

/// Builds one synthetic series per pair.
///
/// Rates follow a small deterministic oscillation around a per-pair base
/// level. Pairs with an odd index start a day later so the date sets differ.
pub fn synthetic_series(config: SeriesConfig) -> Vec<CurrencyData> {
    pair_codes(config.pairs)
        .into_iter()
        .enumerate()
        .map(|(i, code)| {
            let level = 1.0 + i as f64 * 0.1;
            let offset = (i % 2) as i64;
            let rates = (0..config.days as i64)
                .map(|d| start_date() + Duration::days(d + offset))
                .filter(|date| {
                    !config.skip_weekends || !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
                })
                .enumerate()
                .map(|(n, date)| {
                    let wobble = ((n as f64) * 0.7 + i as f64).sin() * 0.01;
                    RatePoint::new(date, level + wobble)
                })
                .collect();
            CurrencyData::new(code, rates)
        })
        .collect()
}

/// In-memory source serving [`synthetic_series`] with the parsed pairs.
///
/// The source keeps no request log, so repeated benchmark iterations do
/// not accumulate memory.
pub fn synthetic_source(config: SeriesConfig) -> (MemorySource, Vec<CurrencyPair>) {
    let series = synthetic_series(config);
    let pairs = series
        .iter()
        .filter_map(|s| CurrencyPair::new(&s.code).ok())
        .collect();
    let source = series
        .into_iter()
        .fold(MemorySource::new().without_request_log(), |source, data| {
            source.with_series(data)
        });
    (source, pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_codes_are_distinct() {
        let codes = pair_codes(20);
        assert_eq!(codes.len(), 20);
        let mut unique = codes.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 20);
        assert!(codes.iter().all(|c| c.len() == 6));
    }

    #[test]
    fn test_synthetic_series_skips_weekends() {
        let series = synthetic_series(SeriesConfig {
            pairs: 2,
            days: 14,
            skip_weekends: true,
        });
        assert_eq!(series.len(), 2);
        for data in &series {
            assert_eq!(data.len(), 10);
            assert!(
                data.rates
                    .iter()
                    .all(|p| !matches!(p.date.weekday(), Weekday::Sat | Weekday::Sun))
            );
        }
    }

    #[test]
    fn test_synthetic_source_serves_every_pair() {
        let (_, pairs) = synthetic_source(SeriesConfig::default());
        assert_eq!(pairs.len(), 5);
    }

    #[tokio::test]
    async fn test_synthetic_source_keeps_no_request_log() {
        let config = SeriesConfig::default();
        let (source, pairs) = synthetic_source(config);
        let fetcher = fxdash_lib::RateFetcher::new(source);
        let start = start_date();
        let range = fxdash_lib::DateRange::new(start, start + Duration::days(config.days as i64))
            .unwrap();

        for _ in 0..3 {
            fetcher.fetch_all(&pairs, range).await.unwrap();
        }
        assert!(fetcher.source().requests().is_empty());
    }
}
