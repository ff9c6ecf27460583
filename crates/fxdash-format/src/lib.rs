//! Chart and grid output formats for the fxdash exchange-rate dashboard.
//!
//! - [`TableFormatter`] - Fixed-width terminal table
//! - [`CsvFormatter`] - CSV / TSV
//! - [`JsonFormatter`] - JSON array or NDJSON

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fxdash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod table;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
pub use table::TableFormatter;

/// Decimal places used for rates and changes in text output.
pub const DECIMALS: usize = 4;
