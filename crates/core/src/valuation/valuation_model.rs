use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sign classification for a profit figure.
///
/// A presentation hint derived deterministically from the numeric
/// sign: strictly positive is a gain, strictly negative a loss, zero
/// is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfitSign {
    Gain,
    Loss,
    Flat,
}

impl ProfitSign {
    /// Classify a value by its sign.
    pub fn of(value: Decimal) -> Self {
        if value > Decimal::ZERO {
            ProfitSign::Gain
        } else if value < Decimal::ZERO {
            ProfitSign::Loss
        } else {
            ProfitSign::Flat
        }
    }

    /// Style class used by renderers.
    pub fn class_name(&self) -> &'static str {
        match self {
            ProfitSign::Gain => "gain",
            ProfitSign::Loss => "loss",
            ProfitSign::Flat => "flat",
        }
    }
}

/// Valuation of a single fund for one NAV pair.
///
/// Constructed fresh on every aggregation pass and never mutated in
/// place. Rate fields are `None` when their denominator is zero - the
/// metric is unavailable, not infinite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundValuation {
    pub code: String,
    pub name: String,
    pub share: Decimal,
    pub cost_nav: Decimal,

    /// Latest published NAV
    pub today_nav: Decimal,
    /// Prior trading day's NAV
    pub yesterday_nav: Decimal,
    /// Date the latest NAV was published for
    pub date: NaiveDate,

    /// Day-over-day NAV growth in percent; `None` when yesterday's NAV
    /// is zero.
    pub growth_rate: Option<Decimal>,
    /// Profit attributable to one day's NAV change at current shares
    pub daily_profit: Decimal,

    /// Current market value (`share * today_nav`)
    pub market_value: Decimal,
    /// Cost basis value (`share * cost_nav`)
    pub cost_value: Decimal,
    /// Cumulative unrealized profit since cost basis
    pub holding_profit: Decimal,
    /// Holding profit in percent of cost; `None` when the cost value
    /// is zero (zero shares or zero cost NAV).
    pub holding_profit_rate: Option<Decimal>,
}

impl FundValuation {
    /// Sign class of the daily profit.
    pub fn daily_sign(&self) -> ProfitSign {
        ProfitSign::of(self.daily_profit)
    }

    /// Sign class of the holding profit.
    pub fn holding_sign(&self) -> ProfitSign {
        ProfitSign::of(self.holding_profit)
    }
}

/// Aggregate valuation of one sector.
///
/// Only produced for sectors where at least one fund has a NAV record;
/// funds without a record contribute nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorValuation {
    pub sector_id: u32,
    pub name: String,
    pub color: String,
    pub target_ratio: Decimal,

    /// Sum of daily profit over valued funds
    pub daily_profit: Decimal,
    /// Sum of market value over valued funds
    pub total_asset: Decimal,
    /// Sum of cost value over valued funds
    pub total_cost: Decimal,
    pub holding_profit: Decimal,
    /// `None` when the sector's cost value is zero
    pub holding_profit_rate: Option<Decimal>,

    pub funds: Vec<FundValuation>,
}

impl SectorValuation {
    /// Sign class of the sector's daily profit.
    pub fn daily_sign(&self) -> ProfitSign {
        ProfitSign::of(self.daily_profit)
    }
}

/// Portfolio-wide aggregate over every valued fund, flat across
/// sectors.
///
/// The two rates deliberately use different denominators: the daily
/// rate is against current assets, the float rate against cost. This
/// matches the tracker's historical reporting and must not be
/// "normalized".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    /// Sum of daily profit over all valued funds
    pub daily_profit: Decimal,
    /// Daily profit in percent of total assets; `None` when total
    /// assets are zero.
    pub daily_profit_rate: Option<Decimal>,

    /// Number of valued funds with a strictly positive daily profit
    pub profit_count: usize,
    /// Number of valued funds with a strictly negative daily profit
    pub loss_count: usize,
    /// Number of funds that had a NAV record this pass
    pub fund_count: usize,

    pub total_asset: Decimal,
    pub total_cost: Decimal,
    /// Unrealized profit (`total_asset - total_cost`)
    pub float_profit: Decimal,
    /// Float profit in percent of total cost; `None` when the cost is
    /// zero.
    pub float_profit_rate: Option<Decimal>,

    pub sectors: Vec<SectorValuation>,
}

impl PortfolioValuation {
    /// Sign class of the portfolio's daily profit.
    pub fn daily_sign(&self) -> ProfitSign {
        ProfitSign::of(self.daily_profit)
    }

    /// Sign class of the portfolio's float profit.
    pub fn float_sign(&self) -> ProfitSign {
        ProfitSign::of(self.float_profit)
    }
}
