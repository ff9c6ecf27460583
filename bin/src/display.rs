//! Display utilities and output formatting for the fxdash CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use fxdash_lib::{OutputFormat, Page, SupportedPair, ViewTab};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output format for rendered views.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Table,
    Csv,
    Json,
    Ndjson,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Table => Self::Table,
            Format::Csv => Self::Csv,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
        }
    }
}

/// Dashboard view.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum View {
    Chart,
    Grid,
}

impl From<View> for ViewTab {
    fn from(view: View) -> Self {
        match view {
            View::Chart => Self::Chart,
            View::Grid => Self::Grid,
        }
    }
}

/// Opens `path` for writing, or stdout when no path is given.
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout()))),
    }
}

/// Prints one page of the pair listing, marking selected pairs.
pub(crate) fn print_pairs_page(page: &Page<&SupportedPair>, is_selected: impl Fn(&str) -> bool) {
    if page.total == 0 {
        println!("No pairs found.");
        return;
    }

    println!("{:<3} {:<8} {:<40}", "", "CODE", "NAME");
    println!("{}", "-".repeat(52));

    for pair in &page.items {
        let marker = if is_selected(&pair.code) { "[x]" } else { "[ ]" };
        println!("{:<3} {:<8} {:<40}", marker, pair.code, pair.name);
    }

    println!(
        "\nPage {}/{} ({} pairs)",
        page.page, page.total_pages, page.total
    );
}
