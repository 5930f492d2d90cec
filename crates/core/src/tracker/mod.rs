//! Tracker orchestration - store, fetch, valuate.

mod nav_source;
mod tracker_service;
mod tracker_traits;

pub use nav_source::MarketDataNavSource;
pub use tracker_service::TrackerService;
pub use tracker_traits::NavSourceTrait;
