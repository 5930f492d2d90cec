//! TTFund provider for intraday NAV estimates.
//!
//! The `fundgz.1234567.com.cn/js/{code}.js` endpoint returns a JSONP
//! payload of the form `jsonpgz({...});` with all fields encoded as
//! strings.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::NavEstimate;
use crate::provider::NavProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "TTFUND";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const ESTIMATE_URL: &str = "https://fundgz.1234567.com.cn/js";

lazy_static! {
    /// Unwraps the `jsonpgz(...)` callback around the JSON payload.
    static ref JSONP_WRAPPER: Regex =
        Regex::new(r"jsonpgz\((.*)\);?").expect("valid jsonp regex");
}

/// Estimate payload; the endpoint encodes every field as a string.
#[derive(Debug, Deserialize)]
struct EstimatePayload {
    /// Fund code
    fundcode: String,
    /// Fund name
    name: String,
    /// Date of the last published NAV
    jzrq: String,
    /// Estimated NAV
    gsz: String,
    /// Estimated growth rate in percent
    gszzl: String,
    /// Estimate timestamp
    gztime: String,
}

fn malformed(message: impl Into<String>) -> MarketDataError {
    MarketDataError::MalformedResponse {
        provider: PROVIDER_ID.to_string(),
        message: message.into(),
    }
}

/// Decode a `jsonpgz(...)` body into a [`NavEstimate`].
fn parse_estimate(code: &str, body: &str) -> Result<NavEstimate, MarketDataError> {
    let json = JSONP_WRAPPER
        .captures(body)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| malformed("missing jsonpgz wrapper"))?
        .as_str();

    // An empty payload means the endpoint does not know the code.
    if json.trim().is_empty() {
        return Err(MarketDataError::SymbolNotFound(code.to_string()));
    }

    let payload: EstimatePayload =
        serde_json::from_str(json).map_err(|e| malformed(format!("bad estimate JSON: {}", e)))?;

    let nav: Decimal = payload
        .gsz
        .parse()
        .map_err(|_| malformed(format!("bad estimated NAV '{}'", payload.gsz)))?;
    let growth_rate: Decimal = payload
        .gszzl
        .parse()
        .map_err(|_| malformed(format!("bad estimated growth '{}'", payload.gszzl)))?;
    let nav_date = NaiveDate::parse_from_str(&payload.jzrq, "%Y-%m-%d")
        .map_err(|e| malformed(format!("bad NAV date '{}': {}", payload.jzrq, e)))?;

    Ok(NavEstimate {
        code: payload.fundcode,
        name: payload.name,
        nav,
        growth_rate,
        nav_date,
        estimate_time: payload.gztime,
    })
}

/// TTFund intraday estimate provider.
pub struct TtFundProvider {
    client: Client,
}

impl TtFundProvider {
    /// Create a new TTFund provider with a bounded request timeout.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }
}

impl Default for TtFundProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NavProvider for TtFundProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_estimate(&self, code: &str) -> Result<NavEstimate, MarketDataError> {
        let url = format!("{}/{}.js", ESTIMATE_URL, code);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MarketDataError::from_transport(PROVIDER_ID, e))?;

        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::from_transport(PROVIDER_ID, e))?;

        parse_estimate(code, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = r#"jsonpgz({"fundcode":"163406","name":"Fund A","jzrq":"2026-02-03","dwjz":"2.2131","gsz":"2.1843","gszzl":"-1.30","gztime":"2026-02-04 15:00"});"#;

    #[test]
    fn test_parse_estimate() {
        let estimate = parse_estimate("163406", SAMPLE).unwrap();

        assert_eq!(estimate.code, "163406");
        assert_eq!(estimate.name, "Fund A");
        assert_eq!(estimate.nav, dec!(2.1843));
        assert_eq!(estimate.growth_rate, dec!(-1.30));
        assert_eq!(
            estimate.nav_date,
            NaiveDate::from_ymd_opt(2026, 2, 3).unwrap()
        );
        assert_eq!(estimate.estimate_time, "2026-02-04 15:00");
    }

    #[test]
    fn test_parse_estimate_missing_wrapper() {
        let result = parse_estimate("163406", r#"{"fundcode":"163406"}"#);
        assert!(matches!(
            result,
            Err(MarketDataError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_parse_estimate_empty_payload_is_not_found() {
        let result = parse_estimate("000000", "jsonpgz();");
        assert!(matches!(result, Err(MarketDataError::SymbolNotFound(_))));
    }

    #[test]
    fn test_parse_estimate_bad_number() {
        let body = r#"jsonpgz({"fundcode":"163406","name":"Fund A","jzrq":"2026-02-03","dwjz":"2.2131","gsz":"n/a","gszzl":"-1.30","gztime":"2026-02-04 15:00"});"#;
        let result = parse_estimate("163406", body);
        assert!(matches!(
            result,
            Err(MarketDataError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_provider_id() {
        assert_eq!(TtFundProvider::new().id(), "TTFUND");
    }

    #[tokio::test]
    async fn test_fetch_nav_not_supported() {
        let provider = TtFundProvider::new();
        let result = provider.fetch_nav("163406").await;
        assert!(matches!(result, Err(MarketDataError::NotSupported { .. })));
    }
}
