//! Fundfolio Market Data Crate
//!
//! Fetches fund and index data from third-party endpoints for the
//! portfolio tracker.
//!
//! # Overview
//!
//! Three data shapes are supported:
//! - [`NavRecord`] - a fund's latest published NAV paired with the
//!   prior day's value (EastMoney F10 history)
//! - [`IndexQuote`] - a market index quote (EastMoney push2)
//! - [`NavEstimate`] - an intraday NAV estimate (TTFund)
//!
//! # Fetch model
//!
//! Endpoints are polled strictly sequentially with a fixed inter-call
//! spacing ([`RateLimiter`]) and a bounded per-request timeout. A
//! failed fetch is a per-item event: batch helpers on [`NavClient`]
//! log the failure and omit the item, and the batch continues. There
//! is no retry, caching, or concurrent dispatch.

pub mod client;
pub mod errors;
pub mod models;
pub mod provider;
pub mod registry;

pub use client::NavClient;
pub use errors::MarketDataError;
pub use models::{IndexQuote, NavEstimate, NavRecord};
pub use provider::{EastMoneyProvider, NavProvider, TtFundProvider};
pub use registry::RateLimiter;
