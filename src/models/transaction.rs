//! Transaction model
//!
//! A transaction is a single dated income or expense record. The amount is
//! always non-negative; the direction is carried by [`TransactionKind`].
//! The category is a free-text soft reference to a budget category name.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use super::period::parse_calendar_date;

/// Category name used when none is given
pub const FALLBACK_CATEGORY: &str = "Other";

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    /// Case-sensitive: only "Income" and "Expense" are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            other => Err(format!("Invalid transaction type \"{}\"", other)),
        }
    }
}

/// A transaction that has been validated but not yet assigned an ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub description: String,
    pub amount: Money,
    pub category: String,
    /// Calendar date string, nominally `YYYY-MM-DD`
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeSet<String>>,
}

impl NewTransaction {
    /// Attach a fresh ID, producing a storable transaction
    pub fn into_transaction(self) -> Transaction {
        self.with_id(TransactionId::new())
    }

    pub fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            description: self.description,
            amount: self.amount,
            category: self.category,
            date: self.date,
            tags: self.tags,
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    #[serde(default)]
    pub description: String,

    /// Amount, never negative
    pub amount: Money,

    /// Category name (matched against budget categories by exact string)
    pub category: String,

    /// Calendar date string, nominally `YYYY-MM-DD`
    pub date: String,

    /// Optional free-form tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeSet<String>>,
}

impl Transaction {
    /// Create a transaction with a fresh ID
    pub fn new(
        kind: TransactionKind,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        NewTransaction {
            kind,
            description: description.into(),
            amount,
            category: category.into(),
            date: date.into(),
            tags: None,
        }
        .into_transaction()
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The transaction date as a calendar date, if it parses
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }

    /// Validate the model invariants
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_income() { "+" } else { "-" };
        write!(
            f,
            "{} {} {} {} [{}]",
            self.date, self.description, sign, self.amount, self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative ({})", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_is_case_sensitive() {
        assert_eq!("Income".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!("Expense".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
        assert!("income".parse::<TransactionKind>().is_err());
        assert!("EXPENSE".parse::<TransactionKind>().is_err());
        assert!("Transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            TransactionKind::Expense,
            "Groceries",
            Money::from_cents(4250),
            "Food",
            "2024-06-15",
        );
        assert!(txn.is_expense());
        assert!(!txn.is_income());
        assert_eq!(
            txn.calendar_date(),
            NaiveDate::from_ymd_opt(2024, 6, 15)
        );
    }

    #[test]
    fn test_unparseable_date() {
        let txn = Transaction::new(
            TransactionKind::Income,
            "Pay",
            Money::from_cents(100),
            "Salary",
            "sometime",
        );
        assert_eq!(txn.calendar_date(), None);
    }

    #[test]
    fn test_validation() {
        let mut txn = Transaction::new(
            TransactionKind::Expense,
            "Refund?",
            Money::from_cents(100),
            "Other",
            "2024-01-01",
        );
        assert!(txn.validate().is_ok());
        txn.amount = Money::from_cents(-100);
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_serialization_uses_type_field() {
        let txn = Transaction::new(
            TransactionKind::Expense,
            "Coffee",
            Money::from_cents(350),
            "Food",
            "2024-06-15",
        );
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], "Expense");
        assert_eq!(json["amount"], 350);
        assert!(json.get("tags").is_none());

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, txn);
    }
}
