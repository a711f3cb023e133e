//! Goal service
//!
//! CRUD for budget goals and savings goals. New savings goals take the next
//! palette colour by current goal count.

use crate::error::{BudgetError, BudgetResult};
use crate::models::palette::color_for_index;
use crate::models::{BudgetGoal, BudgetGoalId, CategoryId, Money, SavingsGoal, SavingsGoalId};
use crate::storage::Storage;

/// Service for goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

/// Input for a new savings goal; the colour is assigned
#[derive(Debug, Clone)]
pub struct CreateSavingsGoalInput {
    pub title: String,
    pub category: String,
    pub current_amount: Money,
    pub target_amount: Money,
    pub deadline: String,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    // === Budget goals ===

    /// Add a spending goal for an existing category
    pub fn add_budget_goal(
        &self,
        category_id: &CategoryId,
        title: &str,
        target_amount: Money,
        deadline: &str,
    ) -> BudgetResult<BudgetGoal> {
        if self.storage.categories.get(category_id)?.is_none() {
            return Err(BudgetError::category_not_found(category_id.as_str()));
        }

        let goal = BudgetGoal::new(category_id.clone(), title.trim(), target_amount, deadline.trim());
        goal.validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        self.storage.goals.insert_budget_goal(goal.clone())?;
        Ok(goal)
    }

    pub fn list_budget_goals(&self) -> BudgetResult<Vec<BudgetGoal>> {
        self.storage.goals.get_budget_goals()
    }

    /// Budget goals attached to one category
    pub fn list_budget_goals_for(&self, category_id: &CategoryId) -> BudgetResult<Vec<BudgetGoal>> {
        Ok(self
            .list_budget_goals()?
            .into_iter()
            .filter(|g| &g.category_id == category_id)
            .collect())
    }

    pub fn update_budget_goal(&self, goal: BudgetGoal) -> BudgetResult<BudgetGoal> {
        goal.validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;
        self.storage.goals.replace_budget_goal(goal.clone())?;
        Ok(goal)
    }

    pub fn delete_budget_goal(&self, id: &BudgetGoalId) -> BudgetResult<()> {
        if !self.storage.goals.delete_budget_goal(id)? {
            return Err(BudgetError::goal_not_found(id.as_str()));
        }
        Ok(())
    }

    // === Savings goals ===

    /// Add a savings goal, assigning the next palette colour
    pub fn add_savings_goal(&self, input: CreateSavingsGoalInput) -> BudgetResult<SavingsGoal> {
        let color = color_for_index(self.storage.goals.savings_goal_count()?);
        let goal = SavingsGoal::new(
            input.title.trim(),
            input.category.trim(),
            input.current_amount,
            input.target_amount,
            input.deadline.trim(),
            color,
        );
        goal.validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        self.storage.goals.insert_savings_goal(goal.clone())?;
        Ok(goal)
    }

    pub fn list_savings_goals(&self) -> BudgetResult<Vec<SavingsGoal>> {
        self.storage.goals.get_savings_goals()
    }

    pub fn get_savings_goal(&self, id: &SavingsGoalId) -> BudgetResult<Option<SavingsGoal>> {
        self.storage.goals.get_savings_goal(id)
    }

    pub fn update_savings_goal(&self, goal: SavingsGoal) -> BudgetResult<SavingsGoal> {
        goal.validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;
        self.storage.goals.replace_savings_goal(goal.clone())?;
        Ok(goal)
    }

    pub fn delete_savings_goal(&self, id: &SavingsGoalId) -> BudgetResult<()> {
        if !self.storage.goals.delete_savings_goal(id)? {
            return Err(BudgetError::goal_not_found(id.as_str()));
        }
        Ok(())
    }
}
