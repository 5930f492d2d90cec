use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A market index quote (latest price against the previous close).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexQuote {
    /// Index code in endpoint form (e.g. "100.NDX", "1.000300")
    pub code: String,

    /// Display name reported by the endpoint
    pub name: String,

    /// Latest price
    pub last: Decimal,

    /// Previous session close
    pub prev_close: Decimal,

    /// Point change against the previous close
    pub change: Decimal,

    /// Percentage change against the previous close.
    /// `None` when the previous close is zero.
    pub change_percent: Option<Decimal>,

    /// Session high
    pub high: Decimal,

    /// Session low
    pub low: Decimal,

    /// Whether the index is at or above the previous close
    pub is_positive: bool,
}
