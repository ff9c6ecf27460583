//! Exchange-rate observations and per-pair series.

use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// A single exchange-rate observation.
///
/// The API sends rates as decimal strings; they are parsed once here so the
/// rest of the pipeline works with `f64`. Plain JSON numbers are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Exchange rate (units of target per unit of base).
    #[serde(
        serialize_with = "serialize_rate",
        deserialize_with = "deserialize_rate"
    )]
    pub rate: f64,
}

impl RatePoint {
    /// Creates a new observation.
    #[must_use]
    pub const fn new(date: NaiveDate, rate: f64) -> Self {
        Self { date, rate }
    }
}

/// One pair's series for a requested range.
///
/// Points keep the order the API returned them in; nothing here sorts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyData {
    /// Pair code the series belongs to (e.g. "EURUSD").
    pub code: String,
    /// Observations in fetch-return order.
    pub rates: Vec<RatePoint>,
}

impl CurrencyData {
    /// Creates a new series.
    #[must_use]
    pub fn new(code: impl Into<String>, rates: Vec<RatePoint>) -> Self {
        Self {
            code: code.into(),
            rates,
        }
    }

    /// Returns true if the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns the first observation with the given date, if any.
    #[must_use]
    pub fn rate_on(&self, date: NaiveDate) -> Option<f64> {
        self.rates.iter().find(|p| p.date == date).map(|p| p.rate)
    }
}

fn serialize_rate<S: Serializer>(rate: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(rate)
}

fn deserialize_rate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRate {
        Text(String),
        Number(f64),
    }

    let value = match RawRate::deserialize(deserializer)? {
        RawRate::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid decimal rate '{text}'")))?,
        RawRate::Number(number) => number,
    };

    if !value.is_finite() {
        return Err(de::Error::custom("rate must be a finite number"));
    }
    Ok(value)
}
