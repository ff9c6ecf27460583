//! Dashboard session state.

use chrono::NaiveDate;
use fxdash_catalog::{Page, PairCatalog, paginate};
use fxdash_fetch::{FetchError, FetchOutcome, FetchToken, RateFetcher, RateSource};
use fxdash_prefs::{PreferenceStore, Preferences, ViewTab};
use fxdash_series::{Chart, FlattenedRow, GridSort, RowFilter, align, flatten_all, sort_newest_first};
use fxdash_types::{CurrencyData, CurrencyPair, DateRange, Timeframe};
use std::sync::Arc;
use tracing::{debug, info, trace};

use crate::{FxdashError, Result};

/// What [`Dashboard::apply`] did with a fetch outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStatus {
    /// The displayed series were replaced.
    Updated,
    /// The outcome belonged to a superseded batch and was dropped.
    Superseded,
}

/// A fetch batch captured from the dashboard state, ready to run.
///
/// It owns everything it needs, so it can be awaited (or spawned) while the
/// dashboard keeps taking input. Feed the outcome back through
/// [`Dashboard::apply`].
#[derive(Debug)]
pub struct PendingRefresh<S> {
    fetcher: Arc<RateFetcher<S>>,
    token: FetchToken,
    pairs: Vec<CurrencyPair>,
    range: DateRange,
}

impl<S: RateSource> PendingRefresh<S> {
    /// Token of this batch.
    pub const fn token(&self) -> FetchToken {
        self.token
    }

    /// Pairs this batch requests.
    pub fn pairs(&self) -> &[CurrencyPair] {
        &self.pairs
    }

    /// Date range every request of this batch carries.
    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// Runs the batch.
    ///
    /// # Errors
    ///
    /// Returns the batch error if the batch was still current when it failed.
    pub async fn run(self) -> std::result::Result<FetchOutcome, FetchError> {
        self.fetcher
            .fetch_tagged(self.token, &self.pairs, self.range)
            .await
    }
}

/// One user's dashboard: selection, view preferences and the latest series.
///
/// Every preference change is persisted before the in-memory state changes.
/// Changes that alter what should be fetched (selection, timeframe)
/// supersede any batch still in flight.
#[derive(Debug)]
pub struct Dashboard<S, P> {
    fetcher: Arc<RateFetcher<S>>,
    preferences: Preferences<P>,
    catalog: PairCatalog,
    selection: Vec<CurrencyPair>,
    tab: ViewTab,
    timeframe: Timeframe,
    series: Vec<CurrencyData>,
}

impl<S: RateSource, P: PreferenceStore> Dashboard<S, P> {
    /// Builds a dashboard, restoring selection, tab and timeframe from
    /// `preferences`.
    ///
    /// Only pairs listed in `catalog` can come back selected.
    pub fn load(fetcher: RateFetcher<S>, preferences: Preferences<P>, catalog: PairCatalog) -> Self {
        let selection: Vec<CurrencyPair> = preferences
            .selection(catalog.codes())
            .into_iter()
            .filter_map(|code| match CurrencyPair::new(&code) {
                Ok(pair) => Some(pair),
                Err(e) => {
                    debug!(%code, error = %e, "ignoring malformed catalog code");
                    None
                }
            })
            .collect();
        let tab = preferences.view_tab();
        let timeframe = preferences.timeframe();

        info!(
            selected = selection.len(),
            %tab,
            %timeframe,
            "restored dashboard preferences"
        );

        Self {
            fetcher: Arc::new(fetcher),
            preferences,
            catalog,
            selection,
            tab,
            timeframe,
            series: Vec::new(),
        }
    }

    /// Loads the supported-pair listing from the rate source, then restores
    /// preferences against it.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing cannot be fetched.
    pub async fn open(fetcher: RateFetcher<S>, preferences: Preferences<P>) -> Result<Self> {
        let catalog = PairCatalog::new(fetcher.supported_pairs().await?);
        Ok(Self::load(fetcher, preferences, catalog))
    }

    /// Selects or deselects a pair.
    ///
    /// Returns `true` if the selection changed. The flag is persisted even
    /// when it already matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is malformed, not in a non-empty catalog,
    /// or the preference cannot be saved. The selection is unchanged then.
    pub fn toggle(&mut self, code: &str, selected: bool) -> Result<bool> {
        let pair = CurrencyPair::new(code)?;
        if !self.catalog.is_empty() && !self.catalog.contains(pair.code()) {
            return Err(FxdashError::UnknownPair(pair.code().to_string()));
        }

        self.preferences.set_selected(pair.code(), selected)?;

        let position = self.selection.iter().position(|p| *p == pair);
        let changed = match (position, selected) {
            (None, true) => {
                self.selection.push(pair);
                true
            }
            (Some(i), false) => {
                self.selection.remove(i);
                true
            }
            _ => false,
        };

        if changed {
            let generation = self.fetcher.supersede();
            debug!(code, selected, generation, "selection changed");
        }
        Ok(changed)
    }

    /// Switches the active view tab.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference cannot be saved.
    pub fn set_tab(&mut self, tab: ViewTab) -> Result<()> {
        self.preferences.set_tab(tab)?;
        self.tab = tab;
        Ok(())
    }

    /// Changes the timeframe.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference cannot be saved.
    pub fn set_timeframe(&mut self, timeframe: Timeframe) -> Result<()> {
        self.preferences.set_timeframe(timeframe)?;
        if self.timeframe != timeframe {
            self.timeframe = timeframe;
            let generation = self.fetcher.supersede();
            debug!(%timeframe, generation, "timeframe changed");
        }
        Ok(())
    }

    /// Captures a fetch batch for the current selection and timeframe.
    ///
    /// Starting a batch supersedes any earlier one.
    pub fn begin_refresh(&self, now: NaiveDate) -> PendingRefresh<S> {
        PendingRefresh {
            fetcher: Arc::clone(&self.fetcher),
            token: self.fetcher.issue(),
            pairs: self.selection.clone(),
            range: self.timeframe.range(now),
        }
    }

    /// Applies a finished batch.
    ///
    /// Outcomes from superseded batches leave the displayed series untouched.
    pub fn apply(&mut self, outcome: FetchOutcome) -> RefreshStatus {
        let token = outcome.token();
        match outcome {
            FetchOutcome::Current { data, .. } if self.fetcher.is_current(token) => {
                debug!(series = data.len(), generation = token.generation(), "applying fetch");
                self.series = data;
                RefreshStatus::Updated
            }
            _ => {
                trace!(generation = token.generation(), "dropping superseded fetch");
                RefreshStatus::Superseded
            }
        }
    }

    /// Fetches the current selection and applies the result.
    ///
    /// An empty selection clears the series without any request.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the displayed series are left unchanged.
    pub async fn refresh(&mut self, now: NaiveDate) -> Result<RefreshStatus> {
        let outcome = self.begin_refresh(now).run().await?;
        Ok(self.apply(outcome))
    }

    /// Chart view of the latest series.
    pub fn chart(&self) -> Chart {
        align(&self.series)
    }

    /// Grid view of the latest series, newest first.
    pub fn grid(&self) -> Vec<FlattenedRow> {
        let mut rows = flatten_all(&self.series);
        sort_newest_first(&mut rows);
        rows
    }

    /// Grid view filtered and sorted by column.
    pub fn grid_with(&self, filter: &RowFilter, sort: GridSort) -> Vec<FlattenedRow> {
        let mut rows = filter.apply(&flatten_all(&self.series));
        sort.apply(&mut rows);
        rows
    }

    /// One page of [`Self::grid_with`], `per_page` rows long.
    ///
    /// Page numbers are 1-based and clamped into range. The grid usually
    /// pages by [`fxdash_series::GRID_PAGE_SIZE`].
    pub fn grid_page(
        &self,
        filter: &RowFilter,
        sort: GridSort,
        page: usize,
        per_page: usize,
    ) -> Page<FlattenedRow> {
        paginate(&self.grid_with(filter, sort), page, per_page)
    }

    /// Selected pairs, in selection order.
    pub fn selection(&self) -> &[CurrencyPair] {
        &self.selection
    }

    /// Returns true if `code` is selected.
    pub fn is_selected(&self, code: &str) -> bool {
        self.selection.iter().any(|p| p.code().eq_ignore_ascii_case(code))
    }

    /// Active view tab.
    pub const fn tab(&self) -> ViewTab {
        self.tab
    }

    /// Active timeframe.
    pub const fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// Series of the last applied fetch.
    pub fn series(&self) -> &[CurrencyData] {
        &self.series
    }

    /// Supported pairs.
    pub const fn catalog(&self) -> &PairCatalog {
        &self.catalog
    }

    /// Preference storage.
    pub const fn preferences(&self) -> &Preferences<P> {
        &self.preferences
    }

    /// Shared fetcher.
    pub const fn fetcher(&self) -> &Arc<RateFetcher<S>> {
        &self.fetcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fxdash_fetch::MemorySource;
    use fxdash_prefs::{FileStore, MemoryStore};
    use fxdash_types::{RatePoint, SupportedPair};
    use std::time::Duration;
    use tempfile::TempDir;

    fn day(month: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, d).unwrap()
    }

    fn catalog() -> PairCatalog {
        PairCatalog::new(vec![
            SupportedPair::new("EURUSD", "Euro / US Dollar"),
            SupportedPair::new("GBPUSD", "British Pound / US Dollar"),
            SupportedPair::new("USDCAD", "US Dollar / Canadian Dollar"),
        ])
    }

    fn source() -> MemorySource {
        MemorySource::new()
            .with_series(CurrencyData::new(
                "EURUSD",
                vec![
                    RatePoint::new(day(2, 10), 1.0700),
                    RatePoint::new(day(2, 14), 1.0800),
                    RatePoint::new(day(3, 14), 1.0800),
                    RatePoint::new(day(3, 15), 1.0908),
                ],
            ))
            .with_series(CurrencyData::new(
                "USDCAD",
                vec![
                    RatePoint::new(day(2, 15), 1.3500),
                    RatePoint::new(day(3, 15), 1.3770),
                ],
            ))
            .with_series(CurrencyData::new("GBPUSD", vec![RatePoint::new(day(3, 15), 1.27)]))
    }

    fn dashboard(source: MemorySource, store: MemoryStore) -> Dashboard<MemorySource, MemoryStore> {
        Dashboard::load(RateFetcher::new(source), Preferences::new(store), catalog())
    }

    #[tokio::test]
    async fn test_end_to_end_one_month() {
        let store: MemoryStore = [
            ("currency_EURUSD", "true"),
            ("currency_USDCAD", "true"),
            ("currency_timeframe", "1M"),
        ]
        .into_iter()
        .collect();
        let mut dashboard = dashboard(source(), store);
        assert_eq!(dashboard.timeframe(), Timeframe::OneMonth);

        let status = dashboard.refresh(day(3, 15)).await.unwrap();
        assert_eq!(status, RefreshStatus::Updated);

        let expected = DateRange::new(day(2, 14), day(3, 15)).unwrap();
        let requests = dashboard.fetcher().source().requests();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r.range == expected));

        let chart = dashboard.chart();
        assert_eq!(
            chart.labels,
            vec![day(2, 14), day(2, 15), day(3, 14), day(3, 15)]
        );
        assert_eq!(chart.dataset("USDCAD").unwrap().values[0], None);

        let grid = dashboard.grid();
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0].date, day(3, 15));

        let eurusd: Vec<&FlattenedRow> = grid.iter().filter(|r| r.code == "EURUSD").collect();
        assert_relative_eq!(eurusd[0].change_percent.unwrap(), 1.0, epsilon = 1e-9);
        assert_eq!(eurusd[1].change_percent, Some(0.0));
        assert!(eurusd[2].change_percent.is_none());

        let usdcad: Vec<&FlattenedRow> = grid.iter().filter(|r| r.code == "USDCAD").collect();
        assert_relative_eq!(usdcad[0].change_percent.unwrap(), 2.0, epsilon = 1e-9);
        assert!(usdcad[1].change_percent.is_none());
    }

    #[tokio::test]
    async fn test_toggle_persists_and_supersedes() {
        let mut dashboard = dashboard(source(), MemoryStore::new());
        let pending = dashboard.begin_refresh(day(3, 15));

        assert!(dashboard.toggle("eurusd", true).unwrap());
        assert!(!dashboard.toggle("EURUSD", true).unwrap());
        assert_eq!(
            dashboard.preferences().store().get("currency_EURUSD").as_deref(),
            Some("true")
        );
        assert!(!dashboard.fetcher().is_current(pending.token()));

        let outcome = pending.run().await.unwrap();
        assert_eq!(dashboard.apply(outcome), RefreshStatus::Superseded);
        assert!(dashboard.series().is_empty());
    }

    #[tokio::test]
    async fn test_late_batch_never_overwrites_newer() {
        let slow = CurrencyPair::new("GBPUSD").unwrap();
        let store: MemoryStore = [("currency_GBPUSD", "true")].into_iter().collect();
        let mut dashboard = dashboard(
            source().with_delay(&slow, Duration::from_millis(50)),
            store,
        );

        let stale = dashboard.begin_refresh(day(3, 15));
        let stale = tokio::spawn(stale.run());

        dashboard.toggle("GBPUSD", false).unwrap();
        dashboard.toggle("EURUSD", true).unwrap();
        assert_eq!(
            dashboard.refresh(day(3, 15)).await.unwrap(),
            RefreshStatus::Updated
        );
        assert_eq!(dashboard.series()[0].code, "EURUSD");

        let outcome = stale.await.unwrap().unwrap();
        assert!(outcome.is_superseded());
        assert_eq!(dashboard.apply(outcome), RefreshStatus::Superseded);
        assert_eq!(dashboard.series().len(), 1);
        assert_eq!(dashboard.series()[0].code, "EURUSD");
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_series() {
        let failing = CurrencyPair::new("USDCAD").unwrap();
        let store: MemoryStore = [("currency_EURUSD", "true")].into_iter().collect();
        let mut dashboard = dashboard(source().with_failure(&failing), store);

        dashboard.refresh(day(3, 15)).await.unwrap();
        assert_eq!(dashboard.series().len(), 1);

        dashboard.toggle("USDCAD", true).unwrap();
        let err = dashboard.refresh(day(3, 15)).await.unwrap_err();
        assert!(matches!(err, FxdashError::Fetch(_)));
        assert_eq!(dashboard.series().len(), 1);
        assert_eq!(dashboard.series()[0].code, "EURUSD");
    }

    #[tokio::test]
    async fn test_empty_selection_clears_without_request() {
        let store: MemoryStore = [("currency_EURUSD", "true")].into_iter().collect();
        let mut dashboard = dashboard(source(), store);
        dashboard.refresh(day(3, 15)).await.unwrap();
        assert_eq!(dashboard.fetcher().source().requests().len(), 1);

        dashboard.toggle("EURUSD", false).unwrap();
        let status = dashboard.refresh(day(3, 15)).await.unwrap();
        assert_eq!(status, RefreshStatus::Updated);
        assert!(dashboard.series().is_empty());
        assert!(dashboard.chart().is_empty());
        assert_eq!(dashboard.fetcher().source().requests().len(), 1);
    }

    #[tokio::test]
    async fn test_timeframe_change_supersedes() {
        let mut dashboard = dashboard(source(), MemoryStore::new());
        let pending = dashboard.begin_refresh(day(3, 15));
        assert_eq!(pending.range().total_days(), 31);

        dashboard.set_timeframe(Timeframe::FiveDays).unwrap();
        assert!(!dashboard.fetcher().is_current(pending.token()));
        assert_eq!(
            dashboard.preferences().store().get("currency_timeframe").as_deref(),
            Some("5D")
        );

        let pending = dashboard.begin_refresh(day(3, 15));
        assert_eq!(pending.range().start, day(3, 10));
    }

    #[test]
    fn test_unknown_and_malformed_pairs() {
        let mut dashboard = dashboard(source(), MemoryStore::new());
        assert!(matches!(
            dashboard.toggle("AUDNZD", true),
            Err(FxdashError::UnknownPair(code)) if code == "AUDNZD"
        ));
        assert!(matches!(dashboard.toggle("EUR", true), Err(FxdashError::Pair(_))));
        assert!(dashboard.selection().is_empty());
        assert!(dashboard.preferences().store().entries().is_empty());
    }

    #[tokio::test]
    async fn test_grid_with_filter() {
        let store: MemoryStore = [("currency_EURUSD", "true"), ("currency_USDCAD", "true")]
            .into_iter()
            .collect();
        let mut dashboard = dashboard(source(), store);
        dashboard.refresh(day(3, 15)).await.unwrap();

        let rows = dashboard.grid_with(
            &RowFilter::new().with_code("cad"),
            GridSort::new(fxdash_series::GridColumn::Rate, fxdash_series::SortDirection::Ascending),
        );
        let rates: Vec<f64> = rows.iter().map(|r| r.rate).collect();
        assert_eq!(rates, vec![1.35, 1.377]);
    }

    #[tokio::test]
    async fn test_grid_pages() {
        let store: MemoryStore = [("currency_EURUSD", "true"), ("currency_USDCAD", "true")]
            .into_iter()
            .collect();
        let mut dashboard = dashboard(source(), store);
        dashboard.refresh(day(3, 15)).await.unwrap();

        let filter = RowFilter::new();
        let all = dashboard.grid_with(&filter, GridSort::default());
        let first = dashboard.grid_page(&filter, GridSort::default(), 1, 2);
        assert_eq!(first.total, all.len());
        assert_eq!(first.total_pages, all.len().div_ceil(2));
        assert_eq!(first.items, all[..2].to_vec());

        let last = dashboard.grid_page(&filter, GridSort::default(), 99, 2);
        assert_eq!(last.page, first.total_pages);
        assert!(!last.has_next());
        assert_eq!(last.items.last(), all.last());

        let gainers = dashboard.grid_page(
            &RowFilter::new().with_min_change(0.0),
            GridSort::default(),
            1,
            fxdash_series::GRID_PAGE_SIZE,
        );
        assert!(gainers.items.iter().all(|r| r.change_percent.is_some_and(|c| c >= 0.0)));
    }

    #[tokio::test]
    async fn test_state_restored_after_restart() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");

        {
            let store = FileStore::open(&path).unwrap();
            let mut dashboard =
                Dashboard::load(RateFetcher::new(source()), Preferences::new(store), catalog());
            dashboard.toggle("USDCAD", true).unwrap();
            dashboard.toggle("EURUSD", true).unwrap();
            dashboard.set_tab(ViewTab::Grid).unwrap();
            dashboard.set_timeframe(Timeframe::YearToDate).unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        let dashboard =
            Dashboard::load(RateFetcher::new(source()), Preferences::new(store), catalog());
        let codes: Vec<&str> = dashboard.selection().iter().map(|p| p.code()).collect();
        assert_eq!(codes, vec!["EURUSD", "USDCAD"]);
        assert_eq!(dashboard.tab(), ViewTab::Grid);
        assert_eq!(dashboard.timeframe(), Timeframe::YearToDate);
    }

    #[tokio::test]
    async fn test_open_loads_catalog() {
        let listing = vec![SupportedPair::new("EURUSD", "Euro / US Dollar")];
        let store: MemoryStore = [("currency_EURUSD", "true"), ("currency_USDCAD", "true")]
            .into_iter()
            .collect();
        let dashboard = Dashboard::open(
            RateFetcher::new(source().with_pairs(listing)),
            Preferences::new(store),
        )
        .await
        .unwrap();

        assert_eq!(dashboard.catalog().len(), 1);
        let codes: Vec<&str> = dashboard.selection().iter().map(|p| p.code()).collect();
        assert_eq!(codes, vec!["EURUSD"]);
    }
}
