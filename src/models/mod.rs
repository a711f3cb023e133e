//! Core data models for BudgetPro
//!
//! This module contains the data structures of the finance domain:
//! transactions, budget categories, budget and savings goals, and the money,
//! calendar and colour primitives they are built from.

pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod palette;
pub mod period;
pub mod transaction;

pub use category::{
    BudgetCategory, CategoryField, DEFAULT_INCOME_CATEGORIES, SAVINGS_GOAL_CATEGORIES,
};
pub use goal::{BudgetGoal, SavingsGoal};
pub use ids::{BudgetGoalId, CategoryId, SavingsGoalId, TransactionId};
pub use money::{percent_of, Money};
pub use period::{format_calendar_date, parse_calendar_date, today, Month};
pub use transaction::{NewTransaction, Transaction, TransactionKind, FALLBACK_CATEGORY};
