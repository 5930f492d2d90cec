use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fund's published net asset value for its latest trading day,
/// paired with the prior day's value.
///
/// Records are ephemeral: one is fetched per fund per aggregation pass,
/// consumed by the valuation engine, and discarded. They are correlated
/// to holdings by `code` only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavRecord {
    /// Fund code (e.g. "163406")
    pub code: String,

    /// Latest published NAV per unit
    pub nav: Decimal,

    /// Prior trading day's NAV per unit
    pub yesterday_nav: Decimal,

    /// Date the latest NAV was published for
    pub date: NaiveDate,
}
