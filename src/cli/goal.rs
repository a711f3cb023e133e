//! CLI commands for budget goals and savings goals

use clap::Subcommand;

use super::category::parse_amount;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetGoalId, SavingsGoalId, FALLBACK_CATEGORY, SAVINGS_GOAL_CATEGORIES};
use crate::services::{CategoryService, CreateSavingsGoalInput, GoalService};
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// List goals with their IDs
    List,
    /// Add a spending goal to a budget category
    AddSpending {
        /// Category name or ID
        category: String,
        title: String,
        /// Spending limit for the deadline's month
        target: String,
        /// Deadline (YYYY-MM-DD)
        #[arg(short, long, default_value = "")]
        deadline: String,
    },
    /// Add a savings goal
    AddSavings {
        title: String,
        /// Amount to save
        target: String,
        /// Amount already saved
        #[arg(long, default_value = "0")]
        current: String,
        /// Goal category (Emergency, Travel, Transportation, Home, Investment, Other)
        #[arg(short, long, default_value = FALLBACK_CATEGORY)]
        category: String,
        /// Deadline (YYYY-MM-DD)
        #[arg(short, long, default_value = "")]
        deadline: String,
    },
    /// Add money to a savings goal
    Contribute {
        /// Savings goal ID
        id: String,
        amount: String,
    },
    /// Delete a goal
    Remove {
        /// Goal ID
        id: String,
    },
}

/// Handle a goal command
///
/// Returns whether any goal changed.
pub fn handle_goal_command(storage: &Storage, cmd: GoalCommands) -> BudgetResult<bool> {
    let service = GoalService::new(storage);

    match cmd {
        GoalCommands::List => {
            println!("Spending goals:");
            for goal in service.list_budget_goals()? {
                println!("  {}  {}", goal.id, goal);
            }
            println!("Savings goals:");
            for goal in service.list_savings_goals()? {
                println!("  {}  {}", goal.id, goal);
            }
            Ok(false)
        }
        GoalCommands::AddSpending {
            category,
            title,
            target,
            deadline,
        } => {
            let category = CategoryService::new(storage)
                .find(&category)?
                .ok_or_else(|| BudgetError::category_not_found(&category))?;
            let goal =
                service.add_budget_goal(&category.id, &title, parse_amount(&target)?, &deadline)?;
            println!("Added spending goal '{}' ({}) for {}", goal.title, goal.id, category.name);
            Ok(true)
        }
        GoalCommands::AddSavings {
            title,
            target,
            current,
            category,
            deadline,
        } => {
            if !SAVINGS_GOAL_CATEGORIES.contains(&category.as_str()) {
                log::warn!("Unusual savings goal category '{}'", category);
            }
            let goal = service.add_savings_goal(CreateSavingsGoalInput {
                title,
                category,
                current_amount: parse_amount(&current)?,
                target_amount: parse_amount(&target)?,
                deadline,
            })?;
            println!("Added savings goal '{}' ({})", goal.title, goal.id);
            Ok(true)
        }
        GoalCommands::Contribute { id, amount } => {
            let amount = parse_amount(&amount)?;
            let id = SavingsGoalId::from(id.as_str());
            let mut goal = service
                .get_savings_goal(&id)?
                .ok_or_else(|| BudgetError::goal_not_found(id.as_str()))?;
            goal.current_amount += amount;
            let goal = service.update_savings_goal(goal)?;
            println!("'{}' now at {} of {}", goal.title, goal.current_amount, goal.target_amount);
            Ok(true)
        }
        GoalCommands::Remove { id } => {
            match service.delete_budget_goal(&BudgetGoalId::from(id.as_str())) {
                Ok(()) => {}
                Err(e) if e.is_not_found() => {
                    service.delete_savings_goal(&SavingsGoalId::from(id.as_str()))?
                }
                Err(e) => return Err(e),
            }
            println!("Removed goal {}", id);
            Ok(true)
        }
    }
}
