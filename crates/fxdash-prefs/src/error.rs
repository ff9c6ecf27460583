//! Preference storage errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving preferences.
#[derive(Error, Debug)]
pub enum PrefsError {
    /// Failed to create the preference directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read the preference file.
    #[error("Failed to read preferences '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write the preference file.
    #[error("Failed to write preferences '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The preference file is not valid JSON of a known shape.
    #[error("Failed to parse preferences '{path}': {source}")]
    ParseJson {
        /// The path that could not be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The file was written by a newer format version.
    #[error("Unsupported preference file version {found} in '{path}'")]
    UnsupportedVersion {
        /// The offending file.
        path: PathBuf,
        /// Version found in the file.
        found: u32,
    },

    /// Failed to serialize preferences.
    #[error("Failed to serialize preferences: {0}")]
    SerializeJson(#[from] serde_json::Error),
}

/// Error returned when parsing an unknown view name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown view '{0}', expected chart or grid")]
pub struct ViewTabParseError(pub(crate) String);

/// Result type for preference operations.
pub type Result<T> = std::result::Result<T, PrefsError>;
