//! Builds the API client, preference store and dashboard from CLI options.

use anyhow::{Context, Result};
use fxdash_lib::{ApiConfig, Dashboard, FileStore, Preferences, RateClient, RateFetcher};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::GlobalArgs;

/// Dashboard backed by the HTTP API and the preference file.
pub(crate) type CliDashboard = Dashboard<RateClient, FileStore>;

/// Opens the preference file selected by `--prefs` or the default location.
pub(crate) fn preferences(args: &GlobalArgs) -> Result<Preferences<FileStore>> {
    let path = args.prefs.clone().unwrap_or_else(FileStore::default_path);
    let store = FileStore::open(&path)
        .with_context(|| format!("Failed to open preferences at {}", path.display()))?;
    Ok(Preferences::new(store))
}

/// Creates the rate API client.
pub(crate) fn client(args: &GlobalArgs) -> Result<RateClient> {
    let config = ApiConfig::new(&args.api_url).with_api_key(args.api_key.clone());
    tracing::debug!(?config, "rate API configuration");
    RateClient::new(config).context("Failed to create HTTP client")
}

/// Loads the supported pairs and restores the saved dashboard state.
pub(crate) async fn open_dashboard(args: &GlobalArgs) -> Result<CliDashboard> {
    let fetcher = RateFetcher::new(client(args)?);
    let preferences = preferences(args)?;

    let progress = spinner(args.quiet, "Loading supported pairs...")?;
    let dashboard = Dashboard::open(fetcher, preferences).await;
    progress.finish_and_clear();

    dashboard.with_context(|| format!("Failed to load supported pairs from {}", args.api_url))
}

/// Creates a spinner, hidden in quiet mode.
pub(crate) fn spinner(quiet: bool, message: &'static str) -> Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")?);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}
