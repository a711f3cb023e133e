//! Budget goals and savings goals
//!
//! A budget goal is a spending limit for one category, scoped to the calendar
//! month of its deadline. A savings goal is an independent accumulation
//! target with a running current amount.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetGoalId, CategoryId, SavingsGoalId};
use super::money::Money;
use super::period::parse_calendar_date;

/// A spending-limit target for one budget category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetGoal {
    pub id: BudgetGoalId,

    /// Non-owning reference to a budget category
    pub category_id: CategoryId,

    pub title: String,

    pub target_amount: Money,

    /// Deadline date string; empty means no deadline
    #[serde(default)]
    pub deadline: String,
}

impl BudgetGoal {
    pub fn new(
        category_id: CategoryId,
        title: impl Into<String>,
        target_amount: Money,
        deadline: impl Into<String>,
    ) -> Self {
        Self {
            id: BudgetGoalId::new(),
            category_id,
            title: title.into(),
            target_amount,
            deadline: deadline.into(),
        }
    }

    /// The deadline as a calendar date
    ///
    /// Blank and unparseable deadlines both yield `None`.
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.deadline)
    }

    pub fn validate(&self) -> Result<(), GoalValidationError> {
        validate_common(&self.title, self.target_amount)
    }
}

impl fmt::Display for BudgetGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.target_amount)
    }
}

/// An accumulation target independent of the budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: SavingsGoalId,

    pub title: String,

    /// Free-text label, e.g. "Travel"
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub current_amount: Money,

    pub target_amount: Money,

    #[serde(default)]
    pub deadline: String,

    /// Display colour token
    #[serde(default)]
    pub color: String,
}

impl SavingsGoal {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        current_amount: Money,
        target_amount: Money,
        deadline: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: SavingsGoalId::new(),
            title: title.into(),
            category: category.into(),
            current_amount,
            target_amount,
            deadline: deadline.into(),
            color: color.into(),
        }
    }

    pub fn deadline_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.deadline)
    }

    /// Amount still needed to reach the target (never negative)
    pub fn remaining(&self) -> Money {
        let remaining = self.target_amount - self.current_amount;
        if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        }
    }

    pub fn validate(&self) -> Result<(), GoalValidationError> {
        validate_common(&self.title, self.target_amount)?;
        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeAmount);
        }
        Ok(())
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} of {})",
            self.title, self.current_amount, self.target_amount
        )
    }
}

fn validate_common(title: &str, target: Money) -> Result<(), GoalValidationError> {
    if title.trim().is_empty() {
        return Err(GoalValidationError::EmptyTitle);
    }
    if target.is_negative() {
        return Err(GoalValidationError::NegativeAmount);
    }
    Ok(())
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyTitle,
    NegativeAmount,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Goal title cannot be empty"),
            Self::NegativeAmount => write!(f, "Goal amounts cannot be negative"),
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_parsing() {
        let goal = BudgetGoal::new(
            CategoryId::from("c1"),
            "Eat in",
            Money::from_dollars(200),
            "2024-06-30",
        );
        assert_eq!(goal.deadline_date(), NaiveDate::from_ymd_opt(2024, 6, 30));

        let open = BudgetGoal::new(CategoryId::from("c1"), "Open", Money::zero(), "");
        assert_eq!(open.deadline_date(), None);

        let junk = BudgetGoal::new(CategoryId::from("c1"), "Junk", Money::zero(), "soon");
        assert_eq!(junk.deadline_date(), None);
    }

    #[test]
    fn test_savings_remaining() {
        let mut goal = SavingsGoal::new(
            "Trip",
            "Travel",
            Money::from_dollars(40),
            Money::from_dollars(100),
            "",
            "#16a34a",
        );
        assert_eq!(goal.remaining(), Money::from_dollars(60));

        goal.current_amount = Money::from_dollars(150);
        assert_eq!(goal.remaining(), Money::zero());
    }

    #[test]
    fn test_validation() {
        let goal = SavingsGoal::new("", "Home", Money::zero(), Money::from_dollars(1), "", "");
        assert_eq!(goal.validate(), Err(GoalValidationError::EmptyTitle));

        let goal = SavingsGoal::new(
            "Car",
            "Transportation",
            Money::from_cents(-5),
            Money::from_dollars(1),
            "",
            "",
        );
        assert_eq!(goal.validate(), Err(GoalValidationError::NegativeAmount));
    }
}
