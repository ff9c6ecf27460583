//! Rate API URL construction.

use reqwest::Url;

use crate::{FetchError, RateRequest};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// ISO calendar date (`2024-03-15`), the default query date format.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// JavaScript `Date.toDateString()` layout (`Fri Mar 15 2024`), accepted by
/// the reference backend.
pub const JS_DATE_STRING_FORMAT: &str = "%a %b %d %Y";

/// Builds the URL for one pair's exchange-rate history.
///
/// URL format: `{base}/exchange-rates/?base_currency_code=..&target_currency_code=..&start_date=..&end_date=..`
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use fxdash_fetch::RateRequest;
/// use fxdash_fetch::url::{ISO_DATE_FORMAT, exchange_rates_url};
/// use fxdash_types::{CurrencyPair, DateRange};
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
/// )
/// .unwrap();
/// let request = RateRequest::new(CurrencyPair::new("EURUSD").unwrap(), range);
/// let url = exchange_rates_url("http://api.test/v1", &request, ISO_DATE_FORMAT).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "http://api.test/v1/exchange-rates/?base_currency_code=EUR&target_currency_code=USD&start_date=2024-02-14&end_date=2024-03-15"
/// );
/// ```
///
/// # Errors
///
/// Returns an error if the base URL is not a valid absolute URL.
pub fn exchange_rates_url(
    base_url: &str,
    request: &RateRequest,
    date_format: &str,
) -> Result<Url, FetchError> {
    let start = request.range.start.format(date_format).to_string();
    let end = request.range.end.format(date_format).to_string();

    Url::parse_with_params(
        &endpoint(base_url, "exchange-rates/"),
        &[
            ("base_currency_code", request.pair.base()),
            ("target_currency_code", request.pair.target()),
            ("start_date", start.as_str()),
            ("end_date", end.as_str()),
        ],
    )
    .map_err(|e| FetchError::InvalidUrl(e.to_string()))
}

/// Builds the URL of the supported-currencies listing.
///
/// # Errors
///
/// Returns an error if the base URL is not a valid absolute URL.
pub fn supported_currencies_url(base_url: &str) -> Result<Url, FetchError> {
    Url::parse(&endpoint(base_url, "supported-currencies/"))
        .map_err(|e| FetchError::InvalidUrl(e.to_string()))
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}
