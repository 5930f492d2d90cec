//! Data models for quote and NAV fetching.

mod estimate;
mod index;
mod nav;

pub use estimate::NavEstimate;
pub use index::IndexQuote;
pub use nav::NavRecord;
