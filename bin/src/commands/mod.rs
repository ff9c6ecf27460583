//! CLI command implementations.

pub(crate) mod pairs;
pub(crate) mod prefs;
pub(crate) mod select;
pub(crate) mod show;
