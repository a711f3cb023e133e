//! In-memory budget category store
//!
//! The list always contains the protected "Other" category; it is seeded on
//! creation and restored if a loaded list lacks it.

use std::sync::RwLock;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetCategory, CategoryId};

use super::{read_poisoned, write_poisoned};

/// Repository for budget categories, in insertion order
#[derive(Debug)]
pub struct CategoryRepository {
    data: RwLock<Vec<BudgetCategory>>,
}

impl Default for CategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryRepository {
    /// Create a repository holding only the "Other" category
    pub fn new() -> Self {
        Self {
            data: RwLock::new(vec![BudgetCategory::default_other()]),
        }
    }

    /// Replace the contents, making sure "Other" is present
    pub fn load(&self, categories: Vec<BudgetCategory>) -> BudgetResult<()> {
        let mut data = self.data.write().map_err(write_poisoned)?;
        *data = categories;
        if !data.iter().any(BudgetCategory::is_protected) {
            data.push(BudgetCategory::default_other());
        }
        Ok(())
    }

    pub fn get(&self, id: &CategoryId) -> BudgetResult<Option<BudgetCategory>> {
        let data = self.data.read().map_err(read_poisoned)?;
        Ok(data.iter().find(|c| &c.id == id).cloned())
    }

    /// Find the first category with this exact name
    pub fn get_by_name(&self, name: &str) -> BudgetResult<Option<BudgetCategory>> {
        let data = self.data.read().map_err(read_poisoned)?;
        Ok(data.iter().find(|c| c.name == name).cloned())
    }

    pub fn get_all(&self) -> BudgetResult<Vec<BudgetCategory>> {
        let data = self.data.read().map_err(read_poisoned)?;
        Ok(data.clone())
    }

    /// Append a category
    pub fn insert(&self, category: BudgetCategory) -> BudgetResult<()> {
        let mut data = self.data.write().map_err(write_poisoned)?;
        data.push(category);
        Ok(())
    }

    /// Replace the category with the same ID
    pub fn replace(&self, category: BudgetCategory) -> BudgetResult<()> {
        let mut data = self.data.write().map_err(write_poisoned)?;
        let slot = data
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or_else(|| BudgetError::category_not_found(category.id.as_str()))?;
        *slot = category;
        Ok(())
    }

    /// Remove a category, returning whether it existed
    pub fn delete(&self, id: &CategoryId) -> BudgetResult<bool> {
        let mut data = self.data.write().map_err(write_poisoned)?;
        let before = data.len();
        data.retain(|c| &c.id != id);
        Ok(data.len() != before)
    }

    pub fn count(&self) -> BudgetResult<usize> {
        let data = self.data.read().map_err(read_poisoned)?;
        Ok(data.len())
    }
}
