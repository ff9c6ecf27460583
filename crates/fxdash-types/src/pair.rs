//! Currency pair definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::PairCodeError;

/// Length of a single ISO currency code.
const CURRENCY_CODE_LEN: usize = 3;

/// A base/target currency pair identified by its six-letter code.
///
/// The code is the concatenation of two three-letter ISO codes, base first
/// (`EURUSD` quotes EUR in USD). Codes are normalized to upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyPair {
    code: String,
}

impl CurrencyPair {
    /// Creates a pair from its six-letter code.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is not exactly six ASCII letters.
    pub fn new(code: impl AsRef<str>) -> Result<Self, PairCodeError> {
        let raw = code.as_ref().trim();
        if raw.chars().count() != CURRENCY_CODE_LEN * 2 {
            return Err(PairCodeError::Length(raw.to_string()));
        }
        if !raw.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PairCodeError::Characters(raw.to_string()));
        }
        Ok(Self {
            code: raw.to_ascii_uppercase(),
        })
    }

    /// Returns the full six-letter code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the base currency code (first three letters).
    #[must_use]
    pub fn base(&self) -> &str {
        &self.code[..CURRENCY_CODE_LEN]
    }

    /// Returns the target currency code (last three letters).
    #[must_use]
    pub fn target(&self) -> &str {
        &self.code[CURRENCY_CODE_LEN..]
    }
}

impl std::fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for CurrencyPair {
    type Err = PairCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyPair {
    type Error = PairCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CurrencyPair> for String {
    fn from(pair: CurrencyPair) -> Self {
        pair.code
    }
}

/// A pair advertised by the rate API's supported-currencies endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedPair {
    /// Six-letter pair code as returned by the API.
    pub code: String,
    /// Human-readable name (e.g. "Euro / US Dollar").
    pub name: String,
}

impl SupportedPair {
    /// Creates a new supported pair entry.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Returns the validated pair for this entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the advertised code is malformed.
    pub fn pair(&self) -> Result<CurrencyPair, PairCodeError> {
        CurrencyPair::new(&self.code)
    }
}

impl std::fmt::Display for SupportedPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
