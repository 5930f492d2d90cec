//! Valuation engine - per-fund, per-sector, and portfolio-wide
//! profit/loss aggregation.

mod valuation_calculator;
mod valuation_model;

pub use valuation_calculator::{aggregate_portfolio, aggregate_sector, compute_fund_valuation};
pub use valuation_model::{FundValuation, PortfolioValuation, ProfitSign, SectorValuation};
