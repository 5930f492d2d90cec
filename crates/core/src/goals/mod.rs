//! Savings goal progress.

mod goals_model;

pub use goals_model::GoalProgress;
