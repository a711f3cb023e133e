//! Income profile store
//!
//! Holds the expected monthly income and the list of income category names.
//! Income categories have no allocation or colour; they only steer category
//! matching for income transactions.

use std::sync::RwLock;

use crate::error::BudgetResult;
use crate::models::{Money, DEFAULT_INCOME_CATEGORIES};

use super::{read_poisoned, write_poisoned};

/// Repository for the income profile
#[derive(Debug)]
pub struct IncomeRepository {
    monthly_income: RwLock<Money>,
    categories: RwLock<Vec<String>>,
}

impl Default for IncomeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl IncomeRepository {
    /// Create a profile with zero income and the default income categories
    pub fn new() -> Self {
        Self {
            monthly_income: RwLock::new(Money::zero()),
            categories: RwLock::new(
                DEFAULT_INCOME_CATEGORIES
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
        }
    }

    pub fn monthly_income(&self) -> BudgetResult<Money> {
        let income = self.monthly_income.read().map_err(read_poisoned)?;
        Ok(*income)
    }

    pub fn set_monthly_income(&self, amount: Money) -> BudgetResult<()> {
        let mut income = self.monthly_income.write().map_err(write_poisoned)?;
        *income = amount;
        Ok(())
    }

    pub fn categories(&self) -> BudgetResult<Vec<String>> {
        let categories = self.categories.read().map_err(read_poisoned)?;
        Ok(categories.clone())
    }

    pub fn set_categories(&self, names: Vec<String>) -> BudgetResult<()> {
        let mut categories = self.categories.write().map_err(write_poisoned)?;
        *categories = names;
        Ok(())
    }

    /// Add an income category name unless an identical one exists
    pub fn add_category(&self, name: &str) -> BudgetResult<bool> {
        let mut categories = self.categories.write().map_err(write_poisoned)?;
        if categories.iter().any(|c| c == name) {
            return Ok(false);
        }
        categories.push(name.to_string());
        Ok(true)
    }
}
