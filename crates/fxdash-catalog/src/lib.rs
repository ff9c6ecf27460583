//! Supported currency pair catalog for the fxdash exchange-rate dashboard.
//!
//! The catalog is built from the rate API's supported-currencies response and
//! answers the questions a pair picker asks:
//!
//! - [`PairCatalog::get`] - Lookup by code (case-insensitive)
//! - [`PairCatalog::search`] - Substring search over code and name
//! - [`PairCatalog::ordered_for_selection`] - Selected pairs first, then by code
//! - [`paginate`] - Fixed-size pages over any list
//!
//! # Example
//!
//! ```
//! use fxdash_catalog::{ITEMS_PER_PAGE, PairCatalog, paginate};
//! use fxdash_types::SupportedPair;
//!
//! let catalog = PairCatalog::new(vec![
//!     SupportedPair::new("USDCAD", "US Dollar / Canadian Dollar"),
//!     SupportedPair::new("EURUSD", "Euro / US Dollar"),
//! ]);
//!
//! let ordered = catalog.ordered_for_selection(&["USDCAD"]);
//! let page = paginate(&ordered, 1, ITEMS_PER_PAGE);
//! assert_eq!(page.items[0].code, "USDCAD");
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fxdash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod page;

pub use page::{ITEMS_PER_PAGE, Page, paginate};

use std::collections::HashMap;

use fxdash_types::SupportedPair;

/// Catalog of the pairs the rate API advertises.
///
/// Pairs keep the order the API listed them in; that order is what
/// [`PairCatalog::codes`] and [`PairCatalog::all`] report.
#[derive(Debug, Clone, Default)]
pub struct PairCatalog {
    pairs: Vec<SupportedPair>,
    index: HashMap<String, usize>,
}

impl PairCatalog {
    /// Builds a catalog, dropping later duplicates of the same code.
    #[must_use]
    pub fn new(pairs: Vec<SupportedPair>) -> Self {
        let mut unique = Vec::with_capacity(pairs.len());
        let mut index = HashMap::with_capacity(pairs.len());

        for pair in pairs {
            let key = pair.code.to_uppercase();
            if index.contains_key(&key) {
                continue;
            }
            index.insert(key, unique.len());
            unique.push(pair);
        }

        Self {
            pairs: unique,
            index,
        }
    }

    /// Looks up a pair by code (case-insensitive).
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&SupportedPair> {
        self.index
            .get(&code.to_uppercase())
            .map(|&i| &self.pairs[i])
    }

    /// Returns true if the catalog lists the given code.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Returns all pairs in API order.
    pub fn all(&self) -> impl Iterator<Item = &SupportedPair> {
        self.pairs.iter()
    }

    /// Returns all codes in API order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|p| p.code.as_str())
    }

    /// Returns the total number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Searches pairs by code or name (case-insensitive).
    ///
    /// An empty or blank term matches every pair.
    pub fn search(&self, term: &str) -> Vec<&SupportedPair> {
        let term = term.trim().to_lowercase();
        self.pairs
            .iter()
            .filter(|p| {
                term.is_empty()
                    || p.code.to_lowercase().contains(&term)
                    || p.name.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Returns all pairs with the selected ones first, each group sorted by code.
    pub fn ordered_for_selection<S: AsRef<str>>(&self, selected: &[S]) -> Vec<&SupportedPair> {
        let is_selected = |code: &str| selected.iter().any(|s| s.as_ref().eq_ignore_ascii_case(code));

        let mut ordered: Vec<&SupportedPair> = self.pairs.iter().collect();
        ordered.sort_by(|a, b| {
            is_selected(&b.code)
                .cmp(&is_selected(&a.code))
                .then_with(|| a.code.cmp(&b.code))
        });
        ordered
    }

    /// Orders pairs for selection, then narrows them with a search term.
    ///
    /// Filtering never re-sorts, so selected pairs stay on top.
    pub fn filtered_for_selection<S: AsRef<str>>(
        &self,
        selected: &[S],
        term: &str,
    ) -> Vec<&SupportedPair> {
        let term = term.trim().to_lowercase();
        self.ordered_for_selection(selected)
            .into_iter()
            .filter(|p| {
                term.is_empty()
                    || p.code.to_lowercase().contains(&term)
                    || p.name.to_lowercase().contains(&term)
            })
            .collect()
    }
}

impl FromIterator<SupportedPair> for PairCatalog {
    fn from_iter<I: IntoIterator<Item = SupportedPair>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
