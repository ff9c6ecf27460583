//! Durable user preferences for the fxdash exchange-rate dashboard.
//!
//! - [`PreferenceStore`] - String key/value storage
//! - [`FileStore`] - Write-through JSON file store
//! - [`MemoryStore`] - In-memory store
//! - [`Preferences`] - Typed view over a store

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fxdash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod file;
pub mod keys;
mod preferences;
mod store;

pub use error::{PrefsError, Result, ViewTabParseError};
pub use file::{FORMAT_VERSION, FileStore};
pub use preferences::{Preferences, ViewTab};
pub use store::{MemoryStore, PreferenceStore};
