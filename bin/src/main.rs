//! fxdash CLI - Terminal dashboard for historical currency exchange rates.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use fxdash_lib::{DEFAULT_BASE_URL, Timeframe};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod display;
mod session;

use commands::show::GridArgs;
use display::{Format, View};

#[derive(Parser)]
#[command(name = "fxdash")]
#[command(about = "Terminal dashboard for historical currency exchange rates", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalArgs,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub(crate) struct GlobalArgs {
    /// Base URL of the exchange-rate API
    #[arg(
        long,
        env = "FXDASH_API_URL",
        default_value = DEFAULT_BASE_URL,
        global = true
    )]
    pub(crate) api_url: String,

    /// API key sent in the X-API-Key header
    #[arg(long, env = "FXDASH_API_KEY", hide_env_values = true, global = true)]
    pub(crate) api_key: Option<String>,

    /// Preference file (defaults to the platform data directory)
    #[arg(long, env = "FXDASH_PREFS", global = true)]
    pub(crate) prefs: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub(crate) verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported currency pairs, selected first
    Pairs {
        /// Search by code or name
        #[arg(short, long)]
        search: Option<String>,

        /// Page number (10 pairs per page)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Select currency pairs (interactive picker when no codes are given)
    Select {
        /// Pair codes (e.g., EURUSD USDCAD)
        codes: Vec<String>,
    },

    /// Deselect currency pairs
    Deselect {
        /// Pair codes
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// Set the timeframe (1D, 5D, 1M, 6M, YTD, 1Y, 2Y)
    Timeframe {
        /// Timeframe token
        timeframe: Timeframe,
    },

    /// Set the active view
    View {
        /// View to show
        #[arg(value_enum)]
        view: View,
    },

    /// Fetch the selected pairs and render the active view
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Switch to this timeframe before fetching (saved)
        #[arg(short, long)]
        timeframe: Option<Timeframe>,

        #[command(flatten, next_help_heading = "Grid view")]
        grid: GridArgs,
    },

    /// Show saved preferences
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose, cli.global.quiet)?;

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let global = cli.global;
    match command {
        Commands::Pairs { search, page } => {
            commands::pairs::list_pairs(&global, search.as_deref(), page).await
        }
        Commands::Select { codes } => commands::select::select(&global, &codes).await,
        Commands::Deselect { codes } => commands::select::deselect(&global, &codes).await,
        Commands::Timeframe { timeframe } => commands::prefs::set_timeframe(&global, timeframe),
        Commands::View { view } => commands::prefs::set_view(&global, view.into()),
        Commands::Show {
            format,
            output,
            timeframe,
            grid,
        } => commands::show::show(&global, format.into(), output, timeframe, &grid).await,
        Commands::Status => commands::prefs::status(&global),
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the `-v` count.
fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},hyper=warn,reqwest=warn")));

    let subscriber = SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxdash_lib::ViewTab;
    use tempfile::TempDir;

    fn global(prefs: PathBuf) -> GlobalArgs {
        GlobalArgs {
            api_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            prefs: Some(prefs),
            verbose: 0,
            quiet: true,
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_options() {
        let cli = Cli::try_parse_from([
            "fxdash",
            "show",
            "--format",
            "csv",
            "--timeframe",
            "ytd",
            "--sort",
            "change",
            "--asc",
            "--min-change",
            "-1.5",
            "--max-rate",
            "1.4",
            "--from",
            "2024-03-01",
            "--page",
            "2",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Show {
                format,
                timeframe,
                grid,
                ..
            }) => {
                assert_eq!(fxdash_lib::OutputFormat::from(format), fxdash_lib::OutputFormat::Csv);
                assert_eq!(timeframe, Some(Timeframe::YearToDate));
                assert_eq!(grid.sort, Some(fxdash_lib::GridColumn::Change));
                assert!(grid.asc);
                assert_eq!(grid.min_change, Some(-1.5));
                assert_eq!(grid.max_rate, Some(1.4));
                assert_eq!(grid.from, chrono::NaiveDate::from_ymd_opt(2024, 3, 1));
                assert_eq!(grid.page, Some(2));
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn test_rejects_unknown_timeframe() {
        assert!(Cli::try_parse_from(["fxdash", "timeframe", "3W"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_sort_column() {
        assert!(Cli::try_parse_from(["fxdash", "show", "--sort", "volume"]).is_err());
    }

    #[test]
    fn test_deselect_requires_codes() {
        assert!(Cli::try_parse_from(["fxdash", "deselect"]).is_err());
    }

    #[test]
    fn test_preference_commands_persist() {
        let dir = TempDir::new().unwrap();
        let args = global(dir.path().join("prefs.json"));

        commands::prefs::set_timeframe(&args, Timeframe::SixMonths).unwrap();
        commands::prefs::set_view(&args, ViewTab::Grid).unwrap();
        commands::prefs::status(&args).unwrap();

        let prefs = session::preferences(&args).unwrap();
        assert_eq!(prefs.timeframe(), Timeframe::SixMonths);
        assert_eq!(prefs.view_tab(), ViewTab::Grid);
    }
}
