//! Rate provider abstraction and API response shapes.

use async_trait::async_trait;
use fxdash_types::{CurrencyData, CurrencyPair, DateRange, SupportedPair};
use serde::{Deserialize, Serialize};

use crate::FetchError;

/// One pair's history request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRequest {
    /// The pair to query; base and target come from its code.
    pub pair: CurrencyPair,
    /// Inclusive date range to query.
    pub range: DateRange,
}

impl RateRequest {
    /// Creates a new request.
    #[must_use]
    pub const fn new(pair: CurrencyPair, range: DateRange) -> Self {
        Self { pair, range }
    }
}

/// Body of `GET /exchange-rates/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateResponse {
    /// Series returned for the request (normally exactly one).
    pub data: Vec<CurrencyData>,
}

/// Body of `GET /supported-currencies/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedCurrenciesResponse {
    /// Response payload.
    pub data: SupportedPairs,
}

/// Payload of [`SupportedCurrenciesResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedPairs {
    /// Supported pairs in API order.
    pub pairs: Vec<SupportedPair>,
}

/// A provider of exchange-rate history.
///
/// [`crate::RateClient`] implements this against the HTTP API;
/// [`crate::MemorySource`] serves canned data.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetches the history of one pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    async fn exchange_rates(&self, request: &RateRequest) -> Result<Vec<CurrencyData>, FetchError>;

    /// Fetches the list of pairs the provider supports.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    async fn supported_pairs(&self) -> Result<Vec<SupportedPair>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_exchange_rates() {
        let json = r#"{"data":[{"code":"EURUSD","rates":[
            {"date":"2024-01-01","rate":"1.10"},
            {"date":"2024-01-02","rate":"1.21"}
        ]}]}"#;
        let response: ExchangeRateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].code, "EURUSD");
        assert_eq!(response.data[0].rates.len(), 2);
    }

    #[test]
    fn test_decode_supported_currencies() {
        let json = r#"{"data":{"pairs":[
            {"code":"EURUSD","name":"Euro / US Dollar"},
            {"code":"USDCAD","name":"US Dollar / Canadian Dollar"}
        ]}}"#;
        let response: SupportedCurrenciesResponse = serde_json::from_str(json).unwrap();
        let crate::SupportedPairs { pairs } = response.data;
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].code, "USDCAD");
    }
}
