//! Budget category model
//!
//! A budget category is a named monthly spending allocation with a display
//! colour. Transactions refer to categories by name, not by ID.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;
use super::palette::NEUTRAL_COLOR;
use super::transaction::FALLBACK_CATEGORY;

/// Default income category names
pub const DEFAULT_INCOME_CATEGORIES: [&str; 5] =
    ["Salary", "Freelance", "Investment", "Gifts", "Other"];

/// Suggested labels for savings goals
pub const SAVINGS_GOAL_CATEGORIES: [&str; 6] = [
    "Emergency",
    "Travel",
    "Transportation",
    "Home",
    "Investment",
    "Other",
];

/// A monthly budget allocation for a named category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name, the join key for transactions
    pub name: String,

    /// Monthly allocation
    #[serde(default)]
    pub amount: Money,

    /// Display colour token
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    NEUTRAL_COLOR.to_string()
}

impl BudgetCategory {
    /// Create a new category
    pub fn new(name: impl Into<String>, amount: Money, color: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            amount,
            color: color.into(),
        }
    }

    /// The permanent catch-all category
    pub fn default_other() -> Self {
        Self {
            id: CategoryId::default_other(),
            name: FALLBACK_CATEGORY.to_string(),
            amount: Money::zero(),
            color: NEUTRAL_COLOR.to_string(),
        }
    }

    /// Check if this is the protected "Other" category
    pub fn is_protected(&self) -> bool {
        self.id.is_default_other()
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.amount.is_negative() {
            return Err(CategoryValidationError::NegativeAmount);
        }

        Ok(())
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A partial update to a budget category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryField {
    Name(String),
    Amount(Money),
    Color(String),
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NegativeAmount,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NegativeAmount => write!(f, "Category amount cannot be negative"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_other() {
        let other = BudgetCategory::default_other();
        assert!(other.is_protected());
        assert_eq!(other.name, "Other");
        assert_eq!(other.amount, Money::zero());
        assert_eq!(other.color, "#6b7280");
    }

    #[test]
    fn test_new_category_is_not_protected() {
        let food = BudgetCategory::new("Food", Money::from_dollars(300), "#16a34a");
        assert!(!food.is_protected());
        assert!(food.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut cat = BudgetCategory::new("  ", Money::zero(), "#000");
        assert_eq!(cat.validate(), Err(CategoryValidationError::EmptyName));

        cat.name = "Rent".into();
        cat.amount = Money::from_cents(-1);
        assert_eq!(cat.validate(), Err(CategoryValidationError::NegativeAmount));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let cat: BudgetCategory =
            serde_json::from_str(r#"{"id":"c1","name":"Fun"}"#).unwrap();
        assert_eq!(cat.amount, Money::zero());
        assert_eq!(cat.color, "#6b7280");
    }
}
