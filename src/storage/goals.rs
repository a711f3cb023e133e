//! In-memory goal store
//!
//! Holds budget goals and savings goals side by side, each in insertion
//! order.

use std::sync::RwLock;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetGoal, BudgetGoalId, SavingsGoal, SavingsGoalId};

use super::{read_poisoned, write_poisoned};

/// Repository for budget and savings goals
#[derive(Debug, Default)]
pub struct GoalRepository {
    budget_goals: RwLock<Vec<BudgetGoal>>,
    savings_goals: RwLock<Vec<SavingsGoal>>,
}

impl GoalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents of both lists
    pub fn load(&self, budget_goals: Vec<BudgetGoal>, savings_goals: Vec<SavingsGoal>) -> BudgetResult<()> {
        *self.budget_goals.write().map_err(write_poisoned)? = budget_goals;
        *self.savings_goals.write().map_err(write_poisoned)? = savings_goals;
        Ok(())
    }

    // Budget goals

    pub fn get_budget_goals(&self) -> BudgetResult<Vec<BudgetGoal>> {
        let data = self.budget_goals.read().map_err(read_poisoned)?;
        Ok(data.clone())
    }

    pub fn get_budget_goal(&self, id: &BudgetGoalId) -> BudgetResult<Option<BudgetGoal>> {
        let data = self.budget_goals.read().map_err(read_poisoned)?;
        Ok(data.iter().find(|g| &g.id == id).cloned())
    }

    pub fn insert_budget_goal(&self, goal: BudgetGoal) -> BudgetResult<()> {
        let mut data = self.budget_goals.write().map_err(write_poisoned)?;
        data.push(goal);
        Ok(())
    }

    pub fn replace_budget_goal(&self, goal: BudgetGoal) -> BudgetResult<()> {
        let mut data = self.budget_goals.write().map_err(write_poisoned)?;
        let slot = data
            .iter_mut()
            .find(|g| g.id == goal.id)
            .ok_or_else(|| BudgetError::goal_not_found(goal.id.as_str()))?;
        *slot = goal;
        Ok(())
    }

    pub fn delete_budget_goal(&self, id: &BudgetGoalId) -> BudgetResult<bool> {
        let mut data = self.budget_goals.write().map_err(write_poisoned)?;
        let before = data.len();
        data.retain(|g| &g.id != id);
        Ok(data.len() != before)
    }

    // Savings goals

    pub fn get_savings_goals(&self) -> BudgetResult<Vec<SavingsGoal>> {
        let data = self.savings_goals.read().map_err(read_poisoned)?;
        Ok(data.clone())
    }

    pub fn get_savings_goal(&self, id: &SavingsGoalId) -> BudgetResult<Option<SavingsGoal>> {
        let data = self.savings_goals.read().map_err(read_poisoned)?;
        Ok(data.iter().find(|g| &g.id == id).cloned())
    }

    pub fn savings_goal_count(&self) -> BudgetResult<usize> {
        let data = self.savings_goals.read().map_err(read_poisoned)?;
        Ok(data.len())
    }

    pub fn insert_savings_goal(&self, goal: SavingsGoal) -> BudgetResult<()> {
        let mut data = self.savings_goals.write().map_err(write_poisoned)?;
        data.push(goal);
        Ok(())
    }

    pub fn replace_savings_goal(&self, goal: SavingsGoal) -> BudgetResult<()> {
        let mut data = self.savings_goals.write().map_err(write_poisoned)?;
        let slot = data
            .iter_mut()
            .find(|g| g.id == goal.id)
            .ok_or_else(|| BudgetError::goal_not_found(goal.id.as_str()))?;
        *slot = goal;
        Ok(())
    }

    pub fn delete_savings_goal(&self, id: &SavingsGoalId) -> BudgetResult<bool> {
        let mut data = self.savings_goals.write().map_err(write_poisoned)?;
        let before = data.len();
        data.retain(|g| &g.id != id);
        Ok(data.len() != before)
    }
}
