//! Portfolio persistence - local cache, remote table, and the ranked
//! composite that chains them.

mod local_store;
mod ranked_store;
mod remote_store;
mod store_traits;

pub use local_store::LocalPortfolioStore;
pub use ranked_store::RankedPortfolioStore;
pub use remote_store::RemotePortfolioStore;
pub use store_traits::PortfolioStore;

#[cfg(test)]
mod ranked_store_tests;
