//! JSON output format.

use fxdash_series::{Chart, FlattenedRow};
use serde_json::{Map, Value};
use std::io::Write;

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// One JSON document.
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
///
/// In array style a chart is written as `{ labels, datasets }`. In NDJSON
/// style it is written one date per line, e.g.
/// `{"date":"2024-01-02","EURUSD":1.21,"USDCAD":null}`.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    style: JsonStyle,
    /// Only applies to array style.
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the output style.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    fn write_document<W: Write, T: serde::Serialize + ?Sized>(
        &self,
        value: &T,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_chart<W: Write + Send>(&self, chart: &Chart, mut writer: W) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => self.write_document(chart, writer),
            JsonStyle::Ndjson => {
                for (i, label) in chart.labels.iter().enumerate() {
                    let mut line = Map::with_capacity(chart.datasets.len() + 1);
                    line.insert("date".to_string(), Value::String(label.to_string()));
                    for dataset in &chart.datasets {
                        let value = dataset.values.get(i).copied().flatten();
                        line.insert(dataset.code.clone(), serde_json::to_value(value)?);
                    }
                    serde_json::to_writer(&mut writer, &line)?;
                    writeln!(writer)?;
                }
                Ok(())
            }
        }
    }

    fn write_rows<W: Write + Send>(
        &self,
        rows: &[FlattenedRow],
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => self.write_document(rows, writer),
            JsonStyle::Ndjson => {
                for row in rows {
                    serde_json::to_writer(&mut writer, row)?;
                    writeln!(writer)?;
                }
                Ok(())
            }
        }
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}
