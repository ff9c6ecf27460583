//! Fixed-width terminal table.

use fxdash_series::{Chart, FlattenedRow};
use std::io::Write;

use crate::{DECIMALS, FormatError, Formatter};

const DATE_WIDTH: usize = 10;
const VALUE_WIDTH: usize = 10;
const GAP: &str = "-";

/// Terminal table formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableFormatter {
    separator: bool,
}

impl TableFormatter {
    /// Creates a table formatter with a rule under the header.
    #[must_use]
    pub const fn new() -> Self {
        Self { separator: true }
    }

    /// Sets whether a rule is drawn under the header.
    #[must_use]
    pub const fn with_separator(mut self, separator: bool) -> Self {
        self.separator = separator;
        self
    }

    fn rule<W: Write>(&self, writer: &mut W, width: usize) -> std::io::Result<()> {
        if self.separator {
            writeln!(writer, "{}", "-".repeat(width))?;
        }
        Ok(())
    }
}

impl Formatter for TableFormatter {
    fn write_chart<W: Write + Send>(&self, chart: &Chart, mut writer: W) -> Result<(), FormatError> {
        let widths: Vec<usize> = chart
            .datasets
            .iter()
            .map(|d| d.code.len().max(VALUE_WIDTH))
            .collect();

        write!(writer, "{:<DATE_WIDTH$}", "DATE")?;
        for (dataset, width) in chart.datasets.iter().zip(widths.iter().copied()) {
            write!(writer, "  {:>width$}", dataset.code)?;
        }
        writeln!(writer)?;
        self.rule(
            &mut writer,
            DATE_WIDTH + widths.iter().map(|w| w + 2).sum::<usize>(),
        )?;

        for (i, label) in chart.labels.iter().enumerate() {
            write!(writer, "{:<DATE_WIDTH$}", label.format("%Y-%m-%d").to_string())?;
            for (dataset, width) in chart.datasets.iter().zip(widths.iter().copied()) {
                match dataset.values.get(i).copied().flatten() {
                    Some(v) => write!(writer, "  {v:>width$.DECIMALS$}")?,
                    None => write!(writer, "  {GAP:>width$}")?,
                }
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
        writeln!(
            writer,
            "{:<8}  {:>VALUE_WIDTH$}  {:<DATE_WIDTH$}  {:>VALUE_WIDTH$}",
            "PAIR", "RATE", "DATE", "CHANGE %"
        )?;
        self.rule(&mut writer, 8 + VALUE_WIDTH * 2 + DATE_WIDTH + 6)?;

        for row in rows {
            let change = row
                .change_percent
                .map_or_else(|| GAP.to_string(), |c| format!("{c:+.2}%"));
            writeln!(
                writer,
                "{:<8}  {:>VALUE_WIDTH$.DECIMALS$}  {:<DATE_WIDTH$}  {:>VALUE_WIDTH$}",
                row.code,
                row.rate,
                row.date.format("%Y-%m-%d").to_string(),
                change
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}
