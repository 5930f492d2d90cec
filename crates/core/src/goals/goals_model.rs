use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::Portfolio;

/// Progress against the portfolio's savings goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub total_goal: Decimal,
    pub months: u32,

    /// Amount to put aside per month to reach the goal; `None` when
    /// the horizon is zero months.
    pub monthly_target: Option<Decimal>,

    /// Current total asset value used for the computation
    pub current_asset: Decimal,

    /// Current assets in percent of the goal; `None` when the goal is
    /// zero.
    pub progress_percent: Option<Decimal>,

    /// Amount still missing (negative once the goal is exceeded)
    pub remaining: Decimal,
}

impl GoalProgress {
    /// Compute goal progress for a portfolio at the given asset value.
    pub fn compute(portfolio: &Portfolio, current_asset: Decimal) -> Self {
        let monthly_target = if portfolio.months == 0 {
            None
        } else {
            Some(portfolio.total_goal / Decimal::from(portfolio.months))
        };
        let progress_percent = if portfolio.total_goal.is_zero() {
            None
        } else {
            Some(current_asset / portfolio.total_goal * Decimal::ONE_HUNDRED)
        };

        Self {
            total_goal: portfolio.total_goal,
            months: portfolio.months,
            monthly_target,
            current_asset,
            progress_percent,
            remaining: portfolio.total_goal - current_asset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn portfolio(total_goal: Decimal, months: u32) -> Portfolio {
        Portfolio {
            total_goal,
            months,
            sectors: Vec::new(),
        }
    }

    #[test]
    fn test_goal_progress() {
        let progress = GoalProgress::compute(&portfolio(dec!(700000), 24), dec!(175000));

        assert_eq!(progress.monthly_target, Some(dec!(700000) / dec!(24)));
        assert_eq!(progress.progress_percent, Some(dec!(25)));
        assert_eq!(progress.remaining, dec!(525000));
    }

    #[test]
    fn test_zero_months_has_no_monthly_target() {
        let progress = GoalProgress::compute(&portfolio(dec!(700000), 0), dec!(0));
        assert_eq!(progress.monthly_target, None);
    }

    #[test]
    fn test_zero_goal_has_no_progress_percent() {
        let progress = GoalProgress::compute(&portfolio(dec!(0), 24), dec!(1000));
        assert_eq!(progress.progress_percent, None);
        assert_eq!(progress.remaining, dec!(-1000));
    }
}
