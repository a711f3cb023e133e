//! Category service
//!
//! Provides business logic for budget categories and the income profile.
//! The "Other" category is protected: renaming or deleting it is a no-op
//! that reports `false` rather than an error.

use crate::error::{BudgetError, BudgetResult};
use crate::models::palette::color_for_index;
use crate::models::{percent_of, BudgetCategory, CategoryField, CategoryId, Money};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

/// One category's share of the total budget
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationShare {
    pub name: String,
    pub amount: Money,
    pub color: String,
    /// Percentage of the total budget, 0 when the total is 0
    pub percent: f64,
}

/// How the monthly income is split across the budget
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationBreakdown {
    pub monthly_income: Money,
    pub total_budget: Money,
    /// Income left unallocated; negative when over-allocated
    pub remaining: Money,
    pub shares: Vec<AllocationShare>,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List all budget categories in budget order
    pub fn list(&self) -> BudgetResult<Vec<BudgetCategory>> {
        self.storage.categories.get_all()
    }

    pub fn get(&self, id: &CategoryId) -> BudgetResult<Option<BudgetCategory>> {
        self.storage.categories.get(id)
    }

    /// Find a category by ID, then by exact name
    pub fn find(&self, key: &str) -> BudgetResult<Option<BudgetCategory>> {
        if let Some(category) = self.get(&CategoryId::from(key))? {
            return Ok(Some(category));
        }
        self.storage.categories.get_by_name(key)
    }

    /// Colour suggested for the next new category
    pub fn next_color(&self) -> BudgetResult<&'static str> {
        Ok(color_for_index(self.storage.categories.count()?))
    }

    /// Add a budget category
    ///
    /// Returns `Ok(None)` without changing anything when the name is blank or
    /// the amount is not positive. Without an explicit colour the next
    /// palette colour is used.
    pub fn add(&self, name: &str, amount: Money, color: Option<&str>) -> BudgetResult<Option<BudgetCategory>> {
        let name = name.trim();
        if name.is_empty() || !amount.is_positive() {
            log::debug!("Ignoring category add: name={:?} amount={}", name, amount);
            return Ok(None);
        }

        let color = match color {
            Some(c) => c.to_string(),
            None => self.next_color()?.to_string(),
        };

        let category = BudgetCategory::new(name, amount, color);
        self.storage.categories.insert(category.clone())?;
        Ok(Some(category))
    }

    /// Update one field of a category
    ///
    /// Returns `Ok(false)` when renaming the protected "Other" category.
    /// Existing transactions keep their category string; renames do not
    /// cascade.
    pub fn update(&self, id: &CategoryId, field: CategoryField) -> BudgetResult<bool> {
        let mut category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| BudgetError::category_not_found(id.as_str()))?;

        match field {
            CategoryField::Name(_) if category.is_protected() => return Ok(false),
            CategoryField::Name(name) => category.name = name,
            CategoryField::Amount(amount) => category.amount = amount,
            CategoryField::Color(color) => category.color = color,
        }

        self.storage.categories.replace(category)?;
        Ok(true)
    }

    /// Delete a category
    ///
    /// Returns `Ok(false)` for the protected "Other" category. Goals that
    /// referenced the category are left in place.
    pub fn delete(&self, id: &CategoryId) -> BudgetResult<bool> {
        if id.is_default_other() {
            return Ok(false);
        }
        if !self.storage.categories.delete(id)? {
            return Err(BudgetError::category_not_found(id.as_str()));
        }
        Ok(true)
    }

    /// Names used to match expense transactions
    pub fn expense_category_names(&self) -> BudgetResult<Vec<String>> {
        Ok(self.list()?.into_iter().map(|c| c.name).collect())
    }

    /// Names used to match income transactions
    pub fn income_category_names(&self) -> BudgetResult<Vec<String>> {
        self.storage.income.categories()
    }

    /// Add an income category name
    pub fn add_income_category(&self, name: &str) -> BudgetResult<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(false);
        }
        self.storage.income.add_category(name)
    }

    pub fn monthly_income(&self) -> BudgetResult<Money> {
        self.storage.income.monthly_income()
    }

    pub fn set_monthly_income(&self, amount: Money) -> BudgetResult<()> {
        if amount.is_negative() {
            return Err(BudgetError::Validation(
                "Monthly income cannot be negative".into(),
            ));
        }
        self.storage.income.set_monthly_income(amount)
    }

    /// Split of the monthly income across the budget
    pub fn allocation_breakdown(&self) -> BudgetResult<AllocationBreakdown> {
        let categories = self.list()?;
        let monthly_income = self.monthly_income()?;
        let total_budget: Money = categories.iter().map(|c| c.amount).sum();

        let shares = categories
            .into_iter()
            .map(|c| AllocationShare {
                percent: percent_of(c.amount, total_budget),
                name: c.name,
                amount: c.amount,
                color: c.color,
            })
            .collect();

        Ok(AllocationBreakdown {
            monthly_income,
            total_budget,
            remaining: monthly_income - total_budget,
            shares,
        })
    }
}
