//! EastMoney provider for index quotes and fund NAV history.
//!
//! Two endpoint families are covered:
//! - `push2.eastmoney.com/api/qt/stock/get` — index quotes. Prices come
//!   back as integers scaled by 100.
//! - `fund.eastmoney.com/f10/F10DataApi.aspx` (type `lsjz`) — published
//!   NAV history, returned as an HTML table inside a `var apidata={...}`
//!   JavaScript wrapper. The first row is the latest trading day, the
//!   second the day before.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;
use rust_decimal::Decimal;
use scraper::{Html, Selector};
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::{IndexQuote, NavRecord};
use crate::provider::NavProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "EASTMONEY";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The F10 endpoint rejects the default client identification string.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

const INDEX_QUOTE_URL: &str = "https://push2.eastmoney.com/api/qt/stock/get";
const NAV_HISTORY_URL: &str = "https://fund.eastmoney.com/f10/F10DataApi.aspx";

/// Fields requested from the push2 endpoint:
/// f43 last, f51 high, f52 low, f58 name, f60 previous close.
const INDEX_QUOTE_FIELDS: &str = "f43,f51,f52,f58,f60";

lazy_static! {
    /// Extracts the HTML blob from the `var apidata={ content:"...",records:...}` wrapper.
    static ref APIDATA_CONTENT: Regex =
        Regex::new(r#"content:"(?s)(.*?)",records"#).expect("valid apidata regex");
    static ref ROW_SELECTOR: Selector = Selector::parse("tbody tr").expect("valid row selector");
    static ref CELL_SELECTOR: Selector = Selector::parse("td").expect("valid cell selector");
}

/// Envelope returned by the push2 quote endpoint.
#[derive(Debug, Deserialize)]
struct IndexResponse {
    rc: i32,
    data: Option<IndexPayload>,
}

/// Quote payload with prices scaled by 100.
#[derive(Debug, Deserialize)]
struct IndexPayload {
    f43: i64,
    f51: i64,
    f52: i64,
    f58: String,
    f60: i64,
}

/// Convert a push2 scaled integer price to its decimal value.
fn scaled(raw: i64) -> Decimal {
    Decimal::new(raw, 2)
}

fn malformed(message: impl Into<String>) -> MarketDataError {
    MarketDataError::MalformedResponse {
        provider: PROVIDER_ID.to_string(),
        message: message.into(),
    }
}

/// Decode a push2 envelope into an [`IndexQuote`].
fn parse_index_response(code: &str, response: IndexResponse) -> Result<IndexQuote, MarketDataError> {
    if response.rc != 0 {
        return Err(MarketDataError::SymbolNotFound(code.to_string()));
    }
    let payload = response
        .data
        .ok_or_else(|| MarketDataError::SymbolNotFound(code.to_string()))?;

    let last = scaled(payload.f43);
    let prev_close = scaled(payload.f60);
    let change = last - prev_close;
    let change_percent = if prev_close.is_zero() {
        None
    } else {
        Some(change / prev_close * Decimal::ONE_HUNDRED)
    };

    Ok(IndexQuote {
        code: code.to_string(),
        name: payload.f58,
        last,
        prev_close,
        change,
        change_percent,
        high: scaled(payload.f51),
        low: scaled(payload.f52),
        is_positive: last >= prev_close,
    })
}

/// Parse the `lsjz` NAV-history body into a [`NavRecord`].
///
/// Requires at least two history rows. The second row's NAV falls back
/// to the latest NAV when its cell does not parse (funds younger than
/// two valuation days publish a placeholder there).
fn parse_nav_history(code: &str, body: &str) -> Result<NavRecord, MarketDataError> {
    let content = APIDATA_CONTENT
        .captures(body)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| malformed("missing apidata content blob"))?
        .as_str();

    let document = Html::parse_fragment(content);
    let rows: Vec<_> = document.select(&ROW_SELECTOR).collect();
    if rows.len() < 2 {
        return Err(malformed(format!(
            "expected 2 history rows, got {}",
            rows.len()
        )));
    }

    let (date_text, nav_text) =
        row_cells(&rows[0]).ok_or_else(|| malformed("latest history row has too few cells"))?;
    let date = NaiveDate::parse_from_str(date_text.trim(), "%Y-%m-%d")
        .map_err(|e| malformed(format!("bad NAV date '{}': {}", date_text.trim(), e)))?;
    let nav: Decimal = nav_text
        .trim()
        .parse()
        .map_err(|_| malformed(format!("bad NAV value '{}'", nav_text.trim())))?;

    let yesterday_nav = row_cells(&rows[1])
        .and_then(|(_, text)| text.trim().parse::<Decimal>().ok())
        .unwrap_or(nav);

    Ok(NavRecord {
        code: code.to_string(),
        nav,
        yesterday_nav,
        date,
    })
}

/// Extract the date and unit-NAV cells from a history row.
fn row_cells(row: &scraper::ElementRef<'_>) -> Option<(String, String)> {
    let mut cells = row.select(&CELL_SELECTOR);
    let date = cells.next()?.text().collect::<String>();
    let nav = cells.next()?.text().collect::<String>();
    Some((date, nav))
}

/// EastMoney data provider.
pub struct EastMoneyProvider {
    client: Client,
}

impl EastMoneyProvider {
    /// Create a new EastMoney provider with a bounded request timeout.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }
}

impl Default for EastMoneyProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NavProvider for EastMoneyProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_nav(&self, code: &str) -> Result<NavRecord, MarketDataError> {
        let response = self
            .client
            .get(NAV_HISTORY_URL)
            .query(&[("type", "lsjz"), ("code", code), ("page", "1"), ("per", "2")])
            .send()
            .await
            .map_err(|e| MarketDataError::from_transport(PROVIDER_ID, e))?;

        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::from_transport(PROVIDER_ID, e))?;

        parse_nav_history(code, &body)
    }

    async fn fetch_index_quote(&self, code: &str) -> Result<IndexQuote, MarketDataError> {
        let response = self
            .client
            .get(INDEX_QUOTE_URL)
            .query(&[("secid", code), ("fields", INDEX_QUOTE_FIELDS)])
            .send()
            .await
            .map_err(|e| MarketDataError::from_transport(PROVIDER_ID, e))?;

        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::from_transport(PROVIDER_ID, e))?;

        let envelope: IndexResponse =
            serde_json::from_str(&body).map_err(|e| malformed(format!("bad quote JSON: {}", e)))?;

        parse_index_response(code, envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn nav_body(rows: &str) -> String {
        format!(
            r#"var apidata={{ content:"<table class='w782 comm lsjz'><thead><tr><th>date</th><th>nav</th><th>acc</th><th>growth</th></tr></thead><tbody>{}</tbody></table>",records:2102,pages:1051,curpage:1}};"#,
            rows
        )
    }

    fn nav_row(date: &str, nav: &str) -> String {
        format!(
            "<tr><td>{}</td><td class='tor bold'>{}</td><td class='tor bold'>8.3381</td><td class='tor bold grn'>-0.93%</td></tr>",
            date, nav
        )
    }

    #[test]
    fn test_parse_nav_history_two_rows() {
        let rows = format!("{}{}", nav_row("2026-02-04", "2.1925"), nav_row("2026-02-03", "2.2131"));
        let record = parse_nav_history("163406", &nav_body(&rows)).unwrap();

        assert_eq!(record.code, "163406");
        assert_eq!(record.nav, dec!(2.1925));
        assert_eq!(record.yesterday_nav, dec!(2.2131));
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2026, 2, 4).unwrap());
    }

    #[test]
    fn test_parse_nav_history_single_row_is_malformed() {
        let result = parse_nav_history("163406", &nav_body(&nav_row("2026-02-04", "2.1925")));
        assert!(matches!(
            result,
            Err(MarketDataError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_parse_nav_history_bad_yesterday_falls_back_to_latest() {
        let rows = format!("{}{}", nav_row("2026-02-04", "2.1925"), nav_row("2026-02-03", "--"));
        let record = parse_nav_history("163406", &nav_body(&rows)).unwrap();

        assert_eq!(record.yesterday_nav, dec!(2.1925));
    }

    #[test]
    fn test_parse_nav_history_missing_wrapper() {
        let result = parse_nav_history("163406", "<html>not the endpoint</html>");
        assert!(matches!(
            result,
            Err(MarketDataError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_parse_nav_history_bad_date() {
        let rows = format!("{}{}", nav_row("02/04/2026", "2.1925"), nav_row("2026-02-03", "2.2131"));
        let result = parse_nav_history("163406", &nav_body(&rows));
        assert!(matches!(
            result,
            Err(MarketDataError::MalformedResponse { .. })
        ));
    }

    fn index_response(rc: i32, data: Option<IndexPayload>) -> IndexResponse {
        IndexResponse { rc, data }
    }

    fn index_payload(f43: i64, f60: i64) -> IndexPayload {
        IndexPayload {
            f43,
            f51: 2396000,
            f52: 2278600,
            f58: "NASDAQ 100".to_string(),
            f60,
        }
    }

    #[test]
    fn test_parse_index_response_scales_prices() {
        let quote =
            parse_index_response("100.NDX", index_response(0, Some(index_payload(2290458, 2325642))))
                .unwrap();

        assert_eq!(quote.last, dec!(22904.58));
        assert_eq!(quote.prev_close, dec!(23256.42));
        assert_eq!(quote.change, dec!(-351.84));
        assert_eq!(quote.high, dec!(23960.00));
        assert_eq!(quote.low, dec!(22786.00));
        assert!(!quote.is_positive);
    }

    #[test]
    fn test_parse_index_response_change_percent() {
        let quote =
            parse_index_response("1.000300", index_response(0, Some(index_payload(10500, 10000))))
                .unwrap();

        assert_eq!(quote.change_percent, Some(dec!(5)));
        assert!(quote.is_positive);
    }

    #[test]
    fn test_parse_index_response_flat_is_positive() {
        let quote =
            parse_index_response("1.000300", index_response(0, Some(index_payload(10000, 10000))))
                .unwrap();

        assert!(quote.is_positive);
        assert_eq!(quote.change, Decimal::ZERO);
    }

    #[test]
    fn test_parse_index_response_zero_prev_close_has_no_percent() {
        let quote =
            parse_index_response("1.000300", index_response(0, Some(index_payload(10000, 0))))
                .unwrap();

        assert_eq!(quote.change_percent, None);
    }

    #[test]
    fn test_parse_index_response_no_data_is_not_found() {
        let result = parse_index_response("0.BAD", index_response(0, None));
        assert!(matches!(result, Err(MarketDataError::SymbolNotFound(_))));

        let result = parse_index_response("0.BAD", index_response(1, Some(index_payload(1, 1))));
        assert!(matches!(result, Err(MarketDataError::SymbolNotFound(_))));
    }

    #[test]
    fn test_provider_id() {
        assert_eq!(EastMoneyProvider::new().id(), "EASTMONEY");
    }
}
