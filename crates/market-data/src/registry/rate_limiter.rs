//! Minimum-interval rate limiter for data endpoints.
//!
//! The third-party endpoints are polled strictly sequentially with a
//! fixed spacing between calls. The limiter tracks the last call per
//! key and sleeps until the configured interval has elapsed.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use log::{debug, warn};

/// Minimum-interval rate limiter keyed by endpoint.
///
/// Thread-safe; entries are created on first acquisition. Keys are
/// arbitrary strings — callers key by provider and operation (e.g.
/// "EASTMONEY:nav") so operations with different spacing requirements
/// do not interfere.
pub struct RateLimiter {
    /// Last successful acquisition per key.
    last_call: Mutex<HashMap<String, Instant>>,
}

impl RateLimiter {
    /// Create a new rate limiter with no recorded calls.
    pub fn new() -> Self {
        Self {
            last_call: Mutex::new(HashMap::new()),
        }
    }

    /// Lock the map, recovering from poison if necessary.
    ///
    /// Worst case after recovery is slightly incorrect pacing, which is
    /// preferable to panicking.
    fn lock_last_call(&self) -> MutexGuard<'_, HashMap<String, Instant>> {
        self.last_call.lock().unwrap_or_else(|poisoned| {
            warn!("Rate limiter mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Acquire a slot for the given key, waiting (asynchronously) until
    /// at least `min_delay` has elapsed since the previous acquisition.
    ///
    /// The first acquisition for a key returns immediately.
    pub async fn acquire(&self, key: &str, min_delay: Duration) {
        loop {
            let wait_time = {
                let mut last_call = self.lock_last_call();
                let now = Instant::now();

                match last_call.get(key) {
                    Some(previous) if now.duration_since(*previous) < min_delay => {
                        min_delay - now.duration_since(*previous)
                    }
                    _ => {
                        last_call.insert(key.to_string(), now);
                        debug!("Rate limiter: acquired slot for '{}'", key);
                        return;
                    }
                }
            };

            debug!("Rate limiter: waiting {:?} for '{}'", wait_time, key);
            tokio::time::sleep(wait_time).await;
        }
    }

    /// Forget the pacing state for a key.
    pub fn reset(&self, key: &str) {
        let mut last_call = self.lock_last_call();
        last_call.remove(key);
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
