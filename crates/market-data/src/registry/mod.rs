//! Request pacing for data endpoints.

mod rate_limiter;

pub use rate_limiter::RateLimiter;
