//! Crate-wide constants.

/// File name of the local portfolio cache (fixed key - one document,
/// whichever user last loaded).
pub const PORTFOLIO_CACHE_FILE: &str = "portfolio.json";

/// File name of the local settings document.
pub const SETTINGS_FILE: &str = "settings.json";

/// Remote table holding one portfolio document per user.
pub const REMOTE_TABLE: &str = "fund_data";

/// Settings key under which the user id is stored.
pub const USER_ID_KEY: &str = "userId";

/// Prefix for client-generated user ids.
pub const USER_ID_PREFIX: &str = "user_";

/// Default savings goal for a fresh portfolio.
pub const DEFAULT_TOTAL_GOAL: i64 = 700_000;

/// Default savings horizon in months for a fresh portfolio.
pub const DEFAULT_GOAL_MONTHS: u32 = 24;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
