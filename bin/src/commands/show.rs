//! Show command implementation.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use fxdash_lib::{
    DateRange, GRID_PAGE_SIZE, GridColumn, GridSort, OutputFormat, RefreshStatus, RowFilter,
    SortDirection, Timeframe, ViewTab,
};
use std::io::Write;
use std::path::PathBuf;

use crate::GlobalArgs;
use crate::display::open_output;
use crate::session::{open_dashboard, spinner};

/// Grid view filtering, sorting and paging.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct GridArgs {
    /// Only pairs whose code contains this text
    #[arg(long)]
    pub(crate) filter: Option<String>,

    /// Minimum rate
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) min_rate: Option<f64>,

    /// Maximum rate
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) max_rate: Option<f64>,

    /// Minimum change in percent (rows without a change are dropped)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) min_change: Option<f64>,

    /// Maximum change in percent (rows without a change are dropped)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) max_change: Option<f64>,

    /// Earliest date (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) from: Option<NaiveDate>,

    /// Latest date (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) to: Option<NaiveDate>,

    /// Sort column (code, rate, date, change)
    #[arg(long)]
    pub(crate) sort: Option<GridColumn>,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub(crate) asc: bool,

    /// Show one page of 20 rows instead of every row
    #[arg(long)]
    pub(crate) page: Option<usize>,
}

impl GridArgs {
    /// Builds the row filter from the bounds given on the command line.
    pub(crate) fn filter(&self) -> Result<RowFilter> {
        let mut filter = RowFilter::new();
        if let Some(term) = &self.filter {
            filter = filter.with_code(term);
        }
        if let Some(min) = self.min_rate {
            filter = filter.with_min_rate(min);
        }
        if let Some(max) = self.max_rate {
            filter = filter.with_max_rate(max);
        }
        if let Some(min) = self.min_change {
            filter = filter.with_min_change(min);
        }
        if let Some(max) = self.max_change {
            filter = filter.with_max_change(max);
        }
        if self.from.is_some() || self.to.is_some() {
            let start = self.from.unwrap_or(NaiveDate::MIN);
            let end = self.to.unwrap_or(NaiveDate::MAX);
            let range = DateRange::new(start, end).context("Invalid --from/--to range")?;
            filter = filter.with_dates(range);
        }
        Ok(filter)
    }

    /// Column sort, newest first when no column is given.
    pub(crate) fn sort(&self) -> GridSort {
        let column = self.sort.unwrap_or(GridSort::default().column);
        let direction = if self.asc {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };
        GridSort::new(column, direction)
    }
}

/// Fetches the selected pairs over the active timeframe and renders the active view.
pub(crate) async fn show(
    args: &GlobalArgs,
    format: OutputFormat,
    output: Option<PathBuf>,
    timeframe: Option<Timeframe>,
    grid: &GridArgs,
) -> Result<()> {
    let filter = grid.filter()?;
    let mut dashboard = open_dashboard(args).await?;

    if let Some(timeframe) = timeframe {
        dashboard
            .set_timeframe(timeframe)
            .context("Failed to save timeframe")?;
    }

    if dashboard.selection().is_empty() {
        eprintln!("No pairs selected. Use `fxdash select` to pick some.");
        return Ok(());
    }

    let today = chrono::Local::now().date_naive();
    let range = dashboard.timeframe().range(today);

    let progress = spinner(args.quiet, "Fetching rates...")?;
    let status = dashboard.refresh(today).await;
    progress.finish_and_clear();

    let status = status.with_context(|| format!("Failed to fetch rates for {range}"))?;
    if status == RefreshStatus::Superseded {
        tracing::warn!("fetch was superseded before it completed");
    }

    let mut writer = open_output(output.as_deref())?;
    let (lines, paging) = match dashboard.tab() {
        ViewTab::Chart => {
            let chart = dashboard.chart();
            format.write_chart(&chart, &mut writer)?;
            (chart.labels.len(), None)
        }
        ViewTab::Grid => match grid.page {
            Some(page) => {
                let page = dashboard.grid_page(&filter, grid.sort(), page, GRID_PAGE_SIZE);
                format.write_rows(&page.items, &mut writer)?;
                (page.items.len(), Some((page.page, page.total_pages, page.total)))
            }
            None => {
                let rows = dashboard.grid_with(&filter, grid.sort());
                format.write_rows(&rows, &mut writer)?;
                (rows.len(), None)
            }
        },
    };
    writer.flush()?;

    if !args.quiet {
        eprintln!(
            "{} view: {} pair(s), {} row(s), {} ({})",
            dashboard.tab(),
            dashboard.selection().len(),
            lines,
            dashboard.timeframe(),
            range
        );
        if let Some((page, total_pages, total)) = paging {
            eprintln!("Page {page}/{total_pages} ({total} rows)");
        }
        if let Some(path) = &output {
            eprintln!("Wrote {}", path.display());
        }
    }

    Ok(())
}
