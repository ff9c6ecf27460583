//! Exchange-rate dashboard core.
//!
//! This is a facade crate that re-exports functionality from the fxdash
//! workspace crates and adds [`Dashboard`], the session that ties them
//! together.
//!
//! # Quick Start
//!
//! ```ignore
//! use fxdash_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), FxdashError> {
//!     let client = RateClient::new(ApiConfig::new("http://localhost:8000/api/v1"))?;
//!     let preferences = Preferences::new(FileStore::open_default()?);
//!
//!     let mut dashboard = Dashboard::open(RateFetcher::new(client), preferences).await?;
//!     dashboard.toggle("EURUSD", true)?;
//!     dashboard.refresh(chrono::Local::now().date_naive()).await?;
//!
//!     for row in dashboard.grid() {
//!         println!("{} {} {:?}", row.code, row.rate, row.change_percent);
//!     }
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fxdash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dashboard;
mod error;

pub use dashboard::{Dashboard, PendingRefresh, RefreshStatus};
pub use error::{FxdashError, Result};

// Re-export core types
pub use fxdash_types::*;

// Re-export the pair catalog
pub use fxdash_catalog::{ITEMS_PER_PAGE, Page, PairCatalog, paginate};

// Re-export fetch functionality
pub use fxdash_fetch::{
    ApiConfig, FetchError, FetchOutcome, FetchToken, GenerationCounter, MemorySource,
    RateClient, RateFetcher, RateRequest, RateSource,
};
pub use fxdash_fetch::url::{DEFAULT_BASE_URL, ISO_DATE_FORMAT, JS_DATE_STRING_FORMAT};

// Re-export series derivation
pub use fxdash_series::{
    Chart, Dataset, FlattenedRow, GRID_PAGE_SIZE, GridColumn, GridColumnParseError, GridSort,
    RowFilter, SortDirection, align, flatten_all, sort_newest_first, with_change,
};

// Re-export preference storage
pub use fxdash_prefs::{
    FileStore, MemoryStore, PreferenceStore, Preferences, PrefsError, ViewTab, ViewTabParseError,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use fxdash_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, TableFormatter,
};

/// Prelude module for convenient imports.
///
/// ```
/// use fxdash_lib::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Dashboard, FxdashError, RefreshStatus};

    pub use fxdash_types::{
        CurrencyData, CurrencyPair, DateRange, RatePoint, SupportedPair, Timeframe,
    };

    pub use fxdash_catalog::PairCatalog;

    pub use fxdash_fetch::{ApiConfig, MemorySource, RateClient, RateFetcher, RateSource};

    pub use fxdash_series::{Chart, FlattenedRow, align, with_change};

    pub use fxdash_prefs::{FileStore, MemoryStore, PreferenceStore, Preferences, ViewTab};

    #[cfg(feature = "format")]
    pub use fxdash_format::{Formatter, OutputFormat};
}
