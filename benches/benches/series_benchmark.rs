//! Benchmarks for series alignment, change derivation and concurrent fetch.
//!
//! Run with: `cargo bench --package fxdash-bench`

use chrono::Duration;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fxdash_bench::{SeriesConfig, start_date, synthetic_series, synthetic_source};
use fxdash_lib::{DateRange, GridColumn, GridSort, RateFetcher, SortDirection, align, flatten_all};

/// Workloads from a single short series up to a wide multi-year selection.
fn workloads() -> Vec<(&'static str, SeriesConfig)> {
    vec![
        (
            "1-pair-1M",
            SeriesConfig {
                pairs: 1,
                days: 30,
                skip_weekends: true,
            },
        ),
        ("5-pairs-1M", SeriesConfig::default()),
        (
            "10-pairs-1Y",
            SeriesConfig {
                pairs: 10,
                days: 365,
                skip_weekends: true,
            },
        ),
        (
            "20-pairs-2Y",
            SeriesConfig {
                pairs: 20,
                days: 730,
                skip_weekends: true,
            },
        ),
    ]
}

fn points(config: SeriesConfig) -> u64 {
    (config.pairs * config.days) as u64
}

fn align_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("align");

    for (name, config) in workloads() {
        let series = synthetic_series(config);
        group.throughput(Throughput::Elements(points(config)));
        group.bench_with_input(BenchmarkId::from_parameter(name), &series, |b, series| {
            b.iter(|| align(black_box(series)));
        });
    }

    group.finish();
}

fn grid_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");

    for (name, config) in workloads() {
        let series = synthetic_series(config);
        group.throughput(Throughput::Elements(points(config)));

        group.bench_with_input(BenchmarkId::new("flatten", name), &series, |b, series| {
            b.iter(|| flatten_all(black_box(series)));
        });

        let rows = flatten_all(&series);
        let sort = GridSort::new(GridColumn::Change, SortDirection::Descending);
        group.bench_with_input(BenchmarkId::new("sort-change", name), &rows, |b, rows| {
            b.iter(|| {
                let mut rows = rows.clone();
                sort.apply(&mut rows);
                rows
            });
        });
    }

    group.finish();
}

fn fetch_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("failed to build tokio runtime");
    let mut group = c.benchmark_group("fetch");

    for (name, config) in workloads() {
        let (source, pairs) = synthetic_source(config);
        let fetcher = RateFetcher::new(source);
        let start = start_date();
        let range = DateRange::new(start, start + Duration::days(config.days as i64))
            .expect("synthetic range is ordered");

        group.throughput(Throughput::Elements(config.pairs as u64));
        let (fetcher, pairs) = (&fetcher, pairs.as_slice());
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.to_async(&runtime).iter(move || async move {
                fetcher
                    .fetch_all(black_box(pairs), range)
                    .await
                    .expect("in-memory fetch succeeds")
            });
        });
    }

    group.finish();
}

criterion_group!(benches, align_benchmark, grid_benchmark, fetch_benchmark);
criterion_main!(benches);
