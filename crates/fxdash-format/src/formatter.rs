//! Output format abstraction.

use fxdash_series::{Chart, FlattenedRow};
use std::io::Write;
use thiserror::Error;

use crate::{CsvFormatter, JsonFormatter, TableFormatter};

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Fixed-width terminal table.
    #[default]
    Table,
    /// CSV format.
    Csv,
    /// JSON format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
}

impl OutputFormat {
    /// Returns the format name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }

    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Table => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Table, Self::Csv, Self::Json, Self::Ndjson]
    }

    /// Writes `chart` with this format's default formatter.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_chart<W: Write + Send>(&self, chart: &Chart, writer: W) -> Result<(), FormatError> {
        match self {
            Self::Table => TableFormatter::new().write_chart(chart, writer),
            Self::Csv => CsvFormatter::new().write_chart(chart, writer),
            Self::Json => JsonFormatter::new().with_pretty(true).write_chart(chart, writer),
            Self::Ndjson => JsonFormatter::ndjson().write_chart(chart, writer),
        }
    }

    /// Writes grid `rows` with this format's default formatter.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_rows<W: Write + Send>(
        &self,
        rows: &[FlattenedRow],
        writer: W,
    ) -> Result<(), FormatError> {
        match self {
            Self::Table => TableFormatter::new().write_rows(rows, writer),
            Self::Csv => CsvFormatter::new().write_rows(rows, writer),
            Self::Json => JsonFormatter::new().with_pretty(true).write_rows(rows, writer),
            Self::Ndjson => JsonFormatter::ndjson().write_rows(rows, writer),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "txt" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders the dashboard views.
pub trait Formatter: Send + Sync {
    /// Writes the aligned chart.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_chart<W: Write + Send>(&self, chart: &Chart, writer: W) -> Result<(), FormatError>;

    /// Writes grid rows in the order given.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_rows<W: Write + Send>(
        &self,
        rows: &[FlattenedRow],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
