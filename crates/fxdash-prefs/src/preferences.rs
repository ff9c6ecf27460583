//! Typed preferences over a [`PreferenceStore`].

use fxdash_types::Timeframe;
use std::str::FromStr;
use tracing::debug;

use crate::{PreferenceStore, Result, ViewTabParseError, keys};

/// Dashboard view tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewTab {
    /// Line chart of aligned series.
    #[default]
    Chart,
    /// Data grid with change column.
    Grid,
}

impl ViewTab {
    /// Stored index of the tab.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Chart => 0,
            Self::Grid => 1,
        }
    }

    /// Tab for a stored index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Chart),
            1 => Some(Self::Grid),
            _ => None,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chart => "chart",
            Self::Grid => "grid",
        }
    }
}

impl std::fmt::Display for ViewTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewTab {
    type Err = ViewTabParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chart" | "0" => Ok(Self::Chart),
            "grid" | "1" => Ok(Self::Grid),
            _ => Err(ViewTabParseError(s.to_string())),
        }
    }
}

/// Typed access to dashboard preferences.
///
/// Reads never fail: missing or malformed values fall back to defaults.
/// Writes go straight to the underlying store.
#[derive(Debug, Clone, Default)]
pub struct Preferences<S> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    /// Wraps a store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Unwraps the store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Returns true if `code` is flagged as selected.
    pub fn is_selected(&self, code: &str) -> bool {
        self.store.get(&keys::currency(code)).as_deref() == Some("true")
    }

    /// Rebuilds the selection from the flags of `known_codes`.
    ///
    /// Codes come back in the order given; codes without a flag are not
    /// selected.
    pub fn selection<I, C>(&self, known_codes: I) -> Vec<String>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<str>,
    {
        known_codes
            .into_iter()
            .filter(|code| self.is_selected(code.as_ref()))
            .map(|code| code.as_ref().to_ascii_uppercase())
            .collect()
    }

    /// Stored tab index, `0` when absent or not a number.
    pub fn tab(&self) -> usize {
        let Some(raw) = self.store.get(keys::TAB_SELECTION) else {
            return 0;
        };
        raw.trim().parse().unwrap_or_else(|_| {
            debug!(value = %raw, "malformed tab preference, using 0");
            0
        })
    }

    /// Stored tab, [`ViewTab::Chart`] for unknown indices.
    pub fn view_tab(&self) -> ViewTab {
        ViewTab::from_index(self.tab()).unwrap_or_default()
    }

    /// Stored timeframe, [`Timeframe::OneMonth`] when absent or unrecognized.
    pub fn timeframe(&self) -> Timeframe {
        self.store
            .get(keys::TIMEFRAME)
            .map_or_else(Timeframe::default, |token| Timeframe::parse_lenient(&token))
    }

    /// Flags `code` as selected or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot persist the value.
    pub fn set_selected(&mut self, code: &str, selected: bool) -> Result<()> {
        let value = if selected { "true" } else { "false" };
        self.store.set(&keys::currency(code), value)
    }

    /// Stores the active tab.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot persist the value.
    pub fn set_tab(&mut self, tab: ViewTab) -> Result<()> {
        self.store.set(keys::TAB_SELECTION, &tab.index().to_string())
    }

    /// Stores the timeframe.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot persist the value.
    pub fn set_timeframe(&mut self, timeframe: Timeframe) -> Result<()> {
        self.store.set(keys::TIMEFRAME, timeframe.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileStore, MemoryStore};
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_empty() {
        let prefs = Preferences::new(MemoryStore::new());
        assert!(prefs.selection(["EURUSD", "USDCAD"]).is_empty());
        assert_eq!(prefs.tab(), 0);
        assert_eq!(prefs.view_tab(), ViewTab::Chart);
        assert_eq!(prefs.timeframe(), Timeframe::OneMonth);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let store: MemoryStore = [
            ("currency_tab_selection", "grid"),
            ("currency_timeframe", "10Y"),
            ("currency_EURUSD", "yes"),
        ]
        .into_iter()
        .collect();
        let prefs = Preferences::new(store);

        assert_eq!(prefs.tab(), 0);
        assert_eq!(prefs.timeframe(), Timeframe::OneMonth);
        assert!(prefs.selection(["EURUSD"]).is_empty());
    }

    #[test]
    fn test_unknown_tab_index() {
        let store: MemoryStore = [("currency_tab_selection", "4")].into_iter().collect();
        let prefs = Preferences::new(store);
        assert_eq!(prefs.tab(), 4);
        assert_eq!(prefs.view_tab(), ViewTab::Chart);
    }

    #[test]
    fn test_selection_follows_known_order() {
        let mut prefs = Preferences::new(MemoryStore::new());
        prefs.set_selected("USDCAD", true).unwrap();
        prefs.set_selected("eurusd", true).unwrap();
        prefs.set_selected("GBPUSD", false).unwrap();

        let selection = prefs.selection(["EURUSD", "GBPUSD", "USDCAD"]);
        assert_eq!(selection, vec!["EURUSD".to_string(), "USDCAD".to_string()]);

        // Flags for codes the catalog no longer lists are ignored.
        assert!(prefs.selection(["AUDNZD"]).is_empty());
    }

    #[test]
    fn test_stored_values() {
        let mut prefs = Preferences::new(MemoryStore::new());
        prefs.set_tab(ViewTab::Grid).unwrap();
        prefs.set_timeframe(Timeframe::YearToDate).unwrap();

        assert_eq!(prefs.store().get("currency_tab_selection").as_deref(), Some("1"));
        assert_eq!(prefs.store().get("currency_timeframe").as_deref(), Some("YTD"));
        assert_eq!(prefs.view_tab(), ViewTab::Grid);
        assert_eq!(prefs.timeframe(), Timeframe::YearToDate);
    }

    #[test]
    fn test_selection_survives_restart() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");
        let known = ["EURUSD", "USDCAD"];

        let mut prefs = Preferences::new(FileStore::open(&path).unwrap());
        prefs.set_selected("EURUSD", true).unwrap();
        drop(prefs);

        let prefs = Preferences::new(FileStore::open(&path).unwrap());
        assert_eq!(prefs.selection(known), vec!["EURUSD".to_string()]);

        let mut prefs = prefs;
        prefs.set_selected("EURUSD", false).unwrap();
        drop(prefs);

        let prefs = Preferences::new(FileStore::open(&path).unwrap());
        assert!(prefs.selection(known).is_empty());
    }

    #[test]
    fn test_view_tab_parse() {
        assert_eq!("Grid".parse::<ViewTab>(), Ok(ViewTab::Grid));
        assert_eq!("0".parse::<ViewTab>(), Ok(ViewTab::Chart));
        assert_eq!(
            "table".parse::<ViewTab>(),
            Err(ViewTabParseError("table".to_string()))
        );
        assert_eq!(
            "table".parse::<ViewTab>().unwrap_err().to_string(),
            "unknown view 'table', expected chart or grid"
        );
        assert_eq!(ViewTab::Grid.to_string(), "grid");
    }
}
