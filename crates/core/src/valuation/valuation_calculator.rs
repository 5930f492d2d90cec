//! Pure aggregation functions over the portfolio tree and a batch of
//! fetched NAV records.
//!
//! The engine is a pure function of its inputs: the portfolio is taken
//! by reference and never mutated, and results are built fresh on
//! every pass. Funds without a NAV record (a failed fetch) are omitted
//! from every aggregation level - they are absent, not zero.

use std::collections::HashMap;

use rust_decimal::Decimal;

use fundfolio_market_data::NavRecord;

use crate::portfolio::{Fund, Portfolio, Sector};
use crate::valuation::{FundValuation, PortfolioValuation, SectorValuation};

/// Percentage of `numerator` against `denominator`, unavailable when
/// the denominator is zero.
fn percent_of(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator.is_zero() {
        None
    } else {
        Some(numerator / denominator * Decimal::ONE_HUNDRED)
    }
}

/// Value one fund against its fetched NAV pair.
pub fn compute_fund_valuation(fund: &Fund, record: &NavRecord) -> FundValuation {
    let day_change = record.nav - record.yesterday_nav;
    let market_value = fund.share * record.nav;
    let cost_value = fund.share * fund.cost_nav;
    let holding_profit = market_value - cost_value;

    FundValuation {
        code: fund.code.clone(),
        name: fund.name.clone(),
        share: fund.share,
        cost_nav: fund.cost_nav,
        today_nav: record.nav,
        yesterday_nav: record.yesterday_nav,
        date: record.date,
        growth_rate: percent_of(day_change, record.yesterday_nav),
        daily_profit: fund.share * day_change,
        market_value,
        cost_value,
        holding_profit,
        holding_profit_rate: percent_of(holding_profit, cost_value),
    }
}

/// Aggregate one sector over the funds that have a NAV record.
///
/// Returns `None` when no fund in the sector contributed - the sector
/// is excluded from the result set rather than rendered with zeros.
pub fn aggregate_sector(
    sector: &Sector,
    records: &HashMap<String, NavRecord>,
) -> Option<SectorValuation> {
    let funds: Vec<FundValuation> = sector
        .funds
        .iter()
        .filter_map(|fund| {
            records
                .get(&fund.code)
                .map(|record| compute_fund_valuation(fund, record))
        })
        .collect();

    if funds.is_empty() {
        return None;
    }

    let daily_profit: Decimal = funds.iter().map(|f| f.daily_profit).sum();
    let total_asset: Decimal = funds.iter().map(|f| f.market_value).sum();
    let total_cost: Decimal = funds.iter().map(|f| f.cost_value).sum();
    let holding_profit = total_asset - total_cost;

    Some(SectorValuation {
        sector_id: sector.id,
        name: sector.name.clone(),
        color: sector.color.clone(),
        target_ratio: sector.target_ratio,
        daily_profit,
        total_asset,
        total_cost,
        holding_profit,
        holding_profit_rate: percent_of(holding_profit, total_cost),
        funds,
    })
}

/// Aggregate the whole portfolio over the funds that have a NAV record.
///
/// Portfolio totals are flat sums across sectors; the per-sector
/// breakdown is carried alongside. Returns `None` when no fund has a
/// record, so an empty fetch pass is distinguishable from a pass where
/// every fund broke even.
pub fn aggregate_portfolio(
    portfolio: &Portfolio,
    records: &HashMap<String, NavRecord>,
) -> Option<PortfolioValuation> {
    let sectors: Vec<SectorValuation> = portfolio
        .sectors
        .iter()
        .filter_map(|sector| aggregate_sector(sector, records))
        .collect();

    if sectors.is_empty() {
        return None;
    }

    let valued = sectors.iter().flat_map(|s| s.funds.iter());

    let mut daily_profit = Decimal::ZERO;
    let mut total_asset = Decimal::ZERO;
    let mut total_cost = Decimal::ZERO;
    let mut profit_count = 0;
    let mut loss_count = 0;
    let mut fund_count = 0;

    for fund in valued {
        daily_profit += fund.daily_profit;
        total_asset += fund.market_value;
        total_cost += fund.cost_value;
        fund_count += 1;
        if fund.daily_profit > Decimal::ZERO {
            profit_count += 1;
        } else if fund.daily_profit < Decimal::ZERO {
            loss_count += 1;
        }
    }

    let float_profit = total_asset - total_cost;

    Some(PortfolioValuation {
        daily_profit,
        // Daily rate is against current assets, float rate against
        // cost. Historical reporting behavior; keep the asymmetry.
        daily_profit_rate: percent_of(daily_profit, total_asset),
        profit_count,
        loss_count,
        fund_count,
        total_asset,
        total_cost,
        float_profit,
        float_profit_rate: percent_of(float_profit, total_cost),
        sectors,
    })
}
