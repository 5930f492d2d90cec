use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An intraday NAV estimate for a fund.
///
/// Estimates are computed by the data vendor from the fund's published
/// holdings; the authoritative figure remains the end-of-day
/// [`NavRecord`](crate::models::NavRecord).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavEstimate {
    /// Fund code
    pub code: String,

    /// Fund display name
    pub name: String,

    /// Estimated NAV per unit
    pub nav: Decimal,

    /// Estimated growth rate against the last published NAV, in percent
    pub growth_rate: Decimal,

    /// Date of the last published NAV the estimate is relative to
    pub nav_date: NaiveDate,

    /// Vendor timestamp of the estimate (e.g. "2026-02-04 15:00")
    pub estimate_time: String,
}
