use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GOAL_MONTHS, DEFAULT_TOTAL_GOAL};

/// A held fund position.
///
/// Owned by exactly one [`Sector`]. `share` is the held unit count and
/// `cost_nav` the cost-basis NAV per unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    pub code: String,
    pub name: String,
    pub share: Decimal,
    pub cost_nav: Decimal,
}

/// A user-defined grouping of funds sharing a target allocation ratio.
///
/// A sector with no funds is valid; it simply contributes nothing to
/// valuation. Fund codes are not required to be unique across sectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    pub id: u32,
    pub name: String,
    /// Display color, e.g. "#1890ff"
    pub color: String,
    /// Target allocation in percent (0..100)
    pub target_ratio: Decimal,
    pub funds: Vec<Fund>,
}

/// Root aggregate: savings goal plus the sector tree.
///
/// The whole document is persisted as one JSON value; aggregation never
/// mutates it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub total_goal: Decimal,
    pub months: u32,
    pub sectors: Vec<Sector>,
}

impl Portfolio {
    /// Iterate every fund across all sectors, in sector order.
    pub fn funds(&self) -> impl Iterator<Item = &Fund> {
        self.sectors.iter().flat_map(|sector| sector.funds.iter())
    }

    /// Fund codes to fetch, deduplicated in first-seen order.
    ///
    /// The same code may appear in several sectors but only needs one
    /// NAV fetch per pass.
    pub fn fund_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = Vec::new();
        for fund in self.funds() {
            if !codes.contains(&fund.code) {
                codes.push(fund.code.clone());
            }
        }
        codes
    }

    /// Whether any sector holds at least one fund.
    pub fn has_holdings(&self) -> bool {
        self.funds().next().is_some()
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            total_goal: Decimal::from(DEFAULT_TOTAL_GOAL),
            months: DEFAULT_GOAL_MONTHS,
            sectors: Vec::new(),
        }
    }
}
