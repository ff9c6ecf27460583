//! Chart alignment and change derivation for the fxdash exchange-rate dashboard.
//!
//! Both views derive from the same raw series independently:
//!
//! - [`align`] - Multi-series chart on a shared date axis
//! - [`with_change`] / [`flatten_all`] - Grid rows with percentage change
//! - [`RowFilter`] / [`GridSort`] - Grid filtering and column sorting

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fxdash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod align;
mod change;
mod grid;

pub use align::{Chart, Dataset, align};
pub use change::{FlattenedRow, flatten_all, percent_change, sort_newest_first, with_change};
pub use grid::{
    GRID_PAGE_SIZE, GridColumn, GridColumnParseError, GridSort, RowFilter, SortDirection,
};
