//! CSV output format.

use fxdash_series::{Chart, FlattenedRow};
use std::io::Write;

use crate::{DECIMALS, FormatError, Formatter};

/// CSV formatter.
///
/// Chart output has one column per pair and leaves cells empty where a pair
/// has no observation.
#[derive(Debug, Clone, Default)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

fn cell(value: Option<f64>) -> String {
    value.map_or_else(String::new, |v| format!("{v:.DECIMALS$}"))
}

impl Formatter for CsvFormatter {
    fn write_chart<W: Write + Send>(&self, chart: &Chart, mut writer: W) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            write!(writer, "date")?;
            for dataset in &chart.datasets {
                write!(writer, "{d}{}", dataset.code)?;
            }
            writeln!(writer)?;
        }

        for (i, label) in chart.labels.iter().enumerate() {
            write!(writer, "{}", label.format("%Y-%m-%d"))?;
            for dataset in &chart.datasets {
                write!(writer, "{d}{}", cell(dataset.values.get(i).copied().flatten()))?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }

    fn write_rows<W: Write + Send>(
        &self,
        rows: &[FlattenedRow],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "code{d}rate{d}date{d}change_percent")?;
        }

        for row in rows {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}",
                row.code,
                cell(Some(row.rate)),
                row.date.format("%Y-%m-%d"),
                cell(row.change_percent)
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}
