//! HTTP client for the remote rate API.

use async_trait::async_trait;
use fxdash_types::{CurrencyData, SupportedPair};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace};

use crate::url::{exchange_rates_url, supported_currencies_url};
use crate::{
    ApiConfig, ExchangeRateResponse, FetchError, RateRequest, RateSource,
    SupportedCurrenciesResponse,
};

/// Header carrying the API key, when one is configured.
pub const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for the exchange-rate API.
///
/// Requests are never retried; a failure is reported once.
#[derive(Debug, Clone)]
pub struct RateClient {
    client: Client,
    config: ApiConfig,
}

impl RateClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not a valid header value or the
    /// HTTP client cannot be created.
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .default_headers(default_headers(&config)?)
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true);
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(ApiConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issues a GET request and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        trace!(%url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            debug!(status = status.as_u16(), "rate API rejected request");
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl RateSource for RateClient {
    async fn exchange_rates(&self, request: &RateRequest) -> Result<Vec<CurrencyData>, FetchError> {
        let url = exchange_rates_url(&self.config.base_url, request, &self.config.date_format)?;
        let response: ExchangeRateResponse = self.get_json(url).await?;
        Ok(response.data)
    }

    async fn supported_pairs(&self) -> Result<Vec<SupportedPair>, FetchError> {
        let url = supported_currencies_url(&self.config.base_url)?;
        let response: SupportedCurrenciesResponse = self.get_json(url).await?;
        Ok(response.data.pairs)
    }
}

/// Headers sent with every request.
fn default_headers(config: &ApiConfig) -> Result<HeaderMap, FetchError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(key) = &config.api_key {
        let mut value = HeaderValue::from_str(key).map_err(|_| FetchError::InvalidApiKey)?;
        value.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
    }

    Ok(headers)
}
