//! Service layer for BudgetPro
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, defaults and cross-entity operations.

pub mod category;
pub mod goal;
pub mod import;
pub mod insight;
pub mod transaction;

pub use category::{AllocationBreakdown, AllocationShare, CategoryService};
pub use goal::{CreateSavingsGoalInput, GoalService};
pub use import::{ImportResult, ImportService};
pub use insight::{bullets, InsightPayload, InsightProvider, InsightService, InsightState};
pub use transaction::{
    CreateTransactionInput, SortDirection, SortKey, TransactionQuery, TransactionService,
};
