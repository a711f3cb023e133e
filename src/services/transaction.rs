//! Transaction service
//!
//! Provides business logic for transaction management: manual entry, batch
//! insertion, edit-by-id, delete-by-id, and filtered/sorted listing.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::import::normalizer::resolve_category;
use crate::models::period::format_calendar_date;
use crate::models::{Money, NewTransaction, Transaction, TransactionId, TransactionKind};
use crate::storage::Storage;

use super::CategoryService;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for creating a transaction by hand
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionKind,
    pub description: String,
    pub amount: Money,
    pub category: String,
    /// Defaults to today when `None` or blank
    pub date: Option<String>,
    pub tags: Option<BTreeSet<String>>,
}

/// Column to sort a transaction listing by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Date,
    Description,
    Category,
    Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Filter and sort options for listing transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Case-insensitive substring of the description
    pub filter: Option<String>,
    pub sort: SortKey,
    pub direction: SortDirection,
    pub limit: Option<usize>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a transaction from manual entry
    ///
    /// Category matching and defaults follow the import rules. The entry is
    /// inserted at the front of the store.
    pub fn create(&self, input: CreateTransactionInput, today: NaiveDate) -> BudgetResult<Transaction> {
        if input.amount.is_negative() {
            return Err(BudgetError::Validation(format!(
                "Amount cannot be negative ({})",
                input.amount
            )));
        }

        let categories = CategoryService::new(self.storage);
        let known = match input.kind {
            TransactionKind::Income => categories.income_category_names()?,
            TransactionKind::Expense => categories.expense_category_names()?,
        };

        let date = match input.date.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => strip_time(d).to_string(),
            _ => format_calendar_date(today),
        };

        let new = NewTransaction {
            kind: input.kind,
            description: input.description.trim().to_string(),
            amount: input.amount,
            category: resolve_category(&input.category, &known),
            date,
            tags: input.tags,
        };

        let txn = self.storage.transactions.insert(new)?;
        log::debug!("Created transaction {}", txn.id);
        Ok(txn)
    }

    /// Insert already-normalized transactions ahead of existing ones
    pub fn add_batch(&self, batch: Vec<NewTransaction>) -> BudgetResult<Vec<TransactionId>> {
        self.storage.transactions.insert_batch(batch)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: &TransactionId) -> BudgetResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Replace a transaction wholesale
    ///
    /// A time-of-day suffix on the date is dropped.
    pub fn update(&self, mut txn: Transaction) -> BudgetResult<Transaction> {
        txn.validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;
        txn.date = strip_time(txn.date.trim()).to_string();
        self.storage.transactions.replace(txn.clone())?;
        Ok(txn)
    }

    /// Delete a transaction
    pub fn delete(&self, id: &TransactionId) -> BudgetResult<()> {
        if !self.storage.transactions.delete(id)? {
            return Err(BudgetError::transaction_not_found(id.as_str()));
        }
        Ok(())
    }

    /// List all transactions in store order
    pub fn list_all(&self) -> BudgetResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// List transactions with filtering and sorting
    pub fn list(&self, query: &TransactionQuery) -> BudgetResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions.get_all()?;

        if let Some(filter) = query.filter.as_deref() {
            let needle = filter.to_lowercase();
            transactions.retain(|t| t.description.to_lowercase().contains(&needle));
        }

        transactions.sort_by(|a, b| {
            let ordering = compare(a, b, query.sort);
            match query.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        if let Some(limit) = query.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }
}

fn strip_time(date: &str) -> &str {
    date.split('T').next().unwrap_or(date)
}

/// Transactions with unparseable dates sort as if dated at the epoch
fn sort_date(txn: &Transaction) -> NaiveDate {
    txn.calendar_date()
        .or_else(|| NaiveDate::from_ymd_opt(1970, 1, 1))
        .unwrap_or(NaiveDate::MIN)
}

fn compare(a: &Transaction, b: &Transaction, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => sort_date(a).cmp(&sort_date(b)),
        SortKey::Amount => a.amount.cmp(&b.amount),
        SortKey::Description => a
            .description
            .to_lowercase()
            .cmp(&b.description.to_lowercase()),
        SortKey::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetCategory;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn input(kind: TransactionKind, description: &str, cents: i64, category: &str, date: &str) -> CreateTransactionInput {
        CreateTransactionInput {
            kind,
            description: description.to_string(),
            amount: Money::from_cents(cents),
            category: category.to_string(),
            date: Some(date.to_string()),
            tags: None,
        }
    }

    fn storage_with_food() -> Storage {
        let storage = Storage::new();
        storage
            .categories
            .insert(BudgetCategory::new("Food", Money::from_dollars(300), "#16a34a"))
            .unwrap();
        storage
    }

    #[test]
    fn test_create_uses_canonical_category() {
        let storage = storage_with_food();
        let service = TransactionService::new(&storage);

        let txn = service
            .create(input(TransactionKind::Expense, " Lunch ", 1250, "FOOD", "2024-06-01"), today())
            .unwrap();
        assert_eq!(txn.category, "Food");
        assert_eq!(txn.description, "Lunch");

        let txn = service
            .create(input(TransactionKind::Income, "Paycheck", 100000, "salary", ""), today())
            .unwrap();
        assert_eq!(txn.category, "Salary");
        assert_eq!(txn.date, "2024-06-15");
    }

    #[test]
    fn test_create_follows_category_service_names() {
        let storage = storage_with_food();
        let categories = CategoryService::new(&storage);
        let food = categories.find("Food").unwrap().unwrap();
        categories
            .update(&food.id, crate::models::CategoryField::Name("Groceries".into()))
            .unwrap();
        categories.add_income_category("Rental").unwrap();

        let service = TransactionService::new(&storage);
        let txn = service
            .create(input(TransactionKind::Expense, "Milk", 300, "groceries", "2024-06-01"), today())
            .unwrap();
        assert_eq!(txn.category, "Groceries");

        let txn = service
            .create(input(TransactionKind::Income, "Rent in", 90000, "RENTAL", "2024-06-01"), today())
            .unwrap();
        assert_eq!(txn.category, "Rental");
    }

    #[test]
    fn test_create_rejects_negative_amount() {
        let storage = Storage::new();
        let service = TransactionService::new(&storage);
        let err = service
            .create(input(TransactionKind::Expense, "x", -1, "", "2024-06-01"), today())
            .unwrap_err();
        assert!(matches!(err, BudgetError::Validation(_)));
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_update_strips_time_suffix() {
        let storage = Storage::new();
        let service = TransactionService::new(&storage);
        let mut txn = service
            .create(input(TransactionKind::Expense, "Bus", 275, "Transport", "2024-06-01"), today())
            .unwrap();

        txn.date = "2024-06-02T08:15:00.000Z".to_string();
        txn.amount = Money::from_cents(300);
        service.update(txn.clone()).unwrap();

        let stored = service.get(&txn.id).unwrap().unwrap();
        assert_eq!(stored.date, "2024-06-02");
        assert_eq!(stored.amount, Money::from_cents(300));
    }

    #[test]
    fn test_update_and_delete_unknown() {
        let storage = Storage::new();
        let service = TransactionService::new(&storage);
        let ghost = Transaction::new(TransactionKind::Expense, "ghost", Money::zero(), "Other", "2024-01-01");

        assert!(service.update(ghost.clone()).unwrap_err().is_not_found());
        assert!(service.delete(&ghost.id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_filter_and_sort() {
        let storage = Storage::new();
        let service = TransactionService::new(&storage);
        service
            .create(input(TransactionKind::Expense, "Coffee beans", 1800, "Food", "2024-06-03"), today())
            .unwrap();
        service
            .create(input(TransactionKind::Expense, "coffee shop", 450, "Food", "2024-06-01"), today())
            .unwrap();
        service
            .create(input(TransactionKind::Expense, "Gym", 3000, "Health", "not a date"), today())
            .unwrap();

        let query = TransactionQuery {
            filter: Some("COFFEE".into()),
            sort: SortKey::Amount,
            direction: SortDirection::Asc,
            limit: None,
        };
        let listed = service.list(&query).unwrap();
        let amounts: Vec<_> = listed.iter().map(|t| t.amount.cents()).collect();
        assert_eq!(amounts, vec![450, 1800]);

        // Default: newest date first, unparseable dates last
        let listed = service.list(&TransactionQuery::default()).unwrap();
        let descriptions: Vec<_> = listed.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Coffee beans", "coffee shop", "Gym"]);
    }

    #[test]
    fn test_list_limit_and_description_sort() {
        let storage = Storage::new();
        let service = TransactionService::new(&storage);
        for name in ["banana", "Apple", "cherry"] {
            service
                .create(input(TransactionKind::Expense, name, 100, "Food", "2024-06-01"), today())
                .unwrap();
        }

        let query = TransactionQuery {
            sort: SortKey::Description,
            direction: SortDirection::Asc,
            limit: Some(2),
            ..Default::default()
        };
        let listed = service.list(&query).unwrap();
        let descriptions: Vec<_> = listed.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Apple", "banana"]);
    }
}
