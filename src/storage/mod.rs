//! Storage layer for BudgetPro
//!
//! All state lives in memory for the lifetime of the session. Each collection
//! sits behind its own lock inside a repository, and the [`Storage`]
//! coordinator owns every repository. Services borrow the coordinator and
//! recompute derived figures from it on demand.

pub mod categories;
pub mod goals;
pub mod income;
pub mod transactions;

pub use categories::CategoryRepository;
pub use goals::GoalRepository;
pub use income::IncomeRepository;
pub use transactions::TransactionRepository;

use std::fmt::Display;

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};

pub(crate) fn read_poisoned<E: Display>(e: E) -> BudgetError {
    BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
}

pub(crate) fn write_poisoned<E: Display>(e: E) -> BudgetError {
    BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
}

/// Main storage coordinator that provides access to all repositories
#[derive(Debug, Default)]
pub struct Storage {
    pub transactions: TransactionRepository,
    pub categories: CategoryRepository,
    pub goals: GoalRepository,
    pub income: IncomeRepository,
}

impl Storage {
    /// Create an empty session: no transactions, only the "Other" category,
    /// zero income and the default income categories
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session seeded from user settings
    pub fn from_settings(settings: &Settings) -> BudgetResult<Self> {
        let storage = Self::new();
        storage.income.set_monthly_income(settings.monthly_income)?;
        storage
            .income
            .set_categories(settings.income_categories.clone())?;
        storage.categories.load(settings.budget.clone())?;
        storage
            .goals
            .load(settings.budget_goals.clone(), settings.savings_goals.clone())?;

        log::debug!(
            "Seeded session with {} budget categor(ies) and {} savings goal(s)",
            settings.budget.len(),
            settings.savings_goals.len()
        );
        Ok(storage)
    }

    /// Write the session's configuration back into a settings value
    ///
    /// Transactions are not part of settings.
    pub fn apply_to_settings(&self, settings: &mut Settings) -> BudgetResult<()> {
        settings.monthly_income = self.income.monthly_income()?;
        settings.income_categories = self.income.categories()?;
        settings.budget = self.categories.get_all()?;
        settings.budget_goals = self.goals.get_budget_goals()?;
        settings.savings_goals = self.goals.get_savings_goals()?;
        Ok(())
    }
}
