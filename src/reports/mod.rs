//! Reports module for BudgetPro
//!
//! Derived views over the session: budget vs actual reconciliation, goal
//! progress and the dashboard summary. Nothing here is cached; every report
//! is recomputed from the current transactions and configuration.

pub mod goal_progress;
pub mod reconciliation;
pub mod summary;

pub use goal_progress::{
    budget_goal_progress, evaluate_budget_goals, savings_goal_progress, BudgetGoalProgress,
    DeadlineStatus, GoalProgressReport, SavingsGoalProgress, Urgency,
};
pub use reconciliation::{
    monthly_spending, reconcile, ReconciliationReport, ReconciliationRow, ReconciliationTotals,
};
pub use summary::{
    expense_by_category, income_by_category, monthly_overview, summary_totals, CategoryTotal,
    MonthlyBucket, SummaryReport, SummaryTotals,
};
