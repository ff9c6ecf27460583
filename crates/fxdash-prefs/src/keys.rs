//! Storage keys.

/// Active view tab index.
pub const TAB_SELECTION: &str = "currency_tab_selection";

/// Timeframe token.
pub const TIMEFRAME: &str = "currency_timeframe";

const CURRENCY_PREFIX: &str = "currency_";

/// Selection flag key for a pair (`currency_EURUSD`).
#[must_use]
pub fn currency(code: &str) -> String {
    format!("{CURRENCY_PREFIX}{}", code.to_ascii_uppercase())
}

/// Pair code of a selection flag key, if `key` is one.
#[must_use]
pub fn currency_code(key: &str) -> Option<&str> {
    key.strip_prefix(CURRENCY_PREFIX)
        .filter(|code| code.len() == 6 && code.chars().all(|c| c.is_ascii_alphabetic()))
}
