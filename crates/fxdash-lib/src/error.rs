//! Workspace-wide error type.

use fxdash_fetch::FetchError;
use fxdash_prefs::PrefsError;
use fxdash_types::PairCodeError;
use thiserror::Error;

/// Any error the dashboard core can report.
#[derive(Error, Debug)]
pub enum FxdashError {
    /// Fetching rates or the pair listing failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Preferences could not be loaded or saved.
    #[error(transparent)]
    Prefs(#[from] PrefsError),

    /// A pair code is malformed.
    #[error(transparent)]
    Pair(#[from] PairCodeError),

    /// A well-formed pair code the rate API does not support.
    #[error("Unsupported currency pair: {0}")]
    UnknownPair(String),

    /// Rendering output failed.
    #[cfg(feature = "format")]
    #[error(transparent)]
    Format(#[from] fxdash_format::FormatError),
}

/// Result type using [`FxdashError`].
pub type Result<T> = std::result::Result<T, FxdashError>;
