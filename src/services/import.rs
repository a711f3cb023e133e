//! CSV Import service
//!
//! Runs a document through the decoder and normalizer and inserts the
//! accepted rows as one batch. A malformed document inserts nothing.

use chrono::NaiveDate;

use crate::error::BudgetResult;
use crate::import::{decode, normalize, CategoryNames, RowRejection};
use crate::models::TransactionId;
use crate::services::{CategoryService, TransactionService};
use crate::storage::Storage;

/// Result of a completed import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResult {
    /// Number of transactions imported
    pub imported: usize,
    /// IDs of imported transactions, in file order
    pub imported_ids: Vec<TransactionId>,
    /// Rows that were dropped, with reasons
    pub rejections: Vec<RowRejection>,
}

impl ImportResult {
    pub fn rejected(&self) -> usize {
        self.rejections.len()
    }
}

/// Service for CSV import
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Import a CSV document
    ///
    /// # Errors
    ///
    /// Fails with `MalformedInput` when the document lacks a header, data
    /// rows, or a required column. Individual bad rows are reported in the
    /// result instead.
    pub fn import_csv(&self, text: &str, today: NaiveDate) -> BudgetResult<ImportResult> {
        let document = decode(text)?;

        let categories = CategoryService::new(self.storage);
        let expense = categories.expense_category_names()?;
        let income = categories.income_category_names()?;

        let batch = normalize(&document.rows, CategoryNames::new(&expense, &income), today);
        let imported = batch.accepted.len();

        let imported_ids = TransactionService::new(self.storage).add_batch(batch.accepted)?;

        log::info!(
            "Imported {} transaction(s), rejected {} row(s)",
            imported,
            batch.rejections.len()
        );

        Ok(ImportResult {
            imported,
            imported_ids,
            rejections: batch.rejections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetCategory, Money};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_import_partial_failure() {
        let storage = Storage::new();
        let service = ImportService::new(&storage);
        let text = "type,description,amount,category,date\n\
                    Expense,Rent,900,Housing,2024-06-01\n\
                    Income,Salary,3000,salary,2024-06-01\n\
                    Bogus,Nope,1,Other,2024-06-02\n\
                    Expense,Snacks,4.5,,2024-06-03\n\
                    Expense,Movie,12,Fun,2024-06-04\n\
                    INCOME,Nope,1,Other,2024-06-05\n\
                    Expense,Taxi,20,Transport,\n";

        let result = service.import_csv(text, today()).unwrap();
        assert_eq!(result.imported, 5);
        assert_eq!(result.rejected(), 2);
        assert_eq!(storage.transactions.count().unwrap(), 5);

        let all = storage.transactions.get_all().unwrap();
        assert_eq!(all[0].description, "Rent");
        assert_eq!(all[1].category, "Salary");
        assert_eq!(all[2].category, "Other");
        assert_eq!(all[4].date, "2024-06-15");
    }

    #[test]
    fn test_malformed_document_inserts_nothing() {
        let storage = Storage::new();
        let service = ImportService::new(&storage);
        let text = "type,description,category,date\nExpense,Lunch,Food,2024-06-01\n";

        let err = service.import_csv(text, today()).unwrap_err();
        assert!(err.is_malformed_input());
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_import_lands_ahead_of_existing() {
        let storage = Storage::new();
        storage
            .categories
            .insert(BudgetCategory::new("Food", Money::from_dollars(300), "#16a34a"))
            .unwrap();
        let service = ImportService::new(&storage);

        service
            .import_csv("type,description,amount,category,date\nExpense,old,1,food,2024-05-01\n", today())
            .unwrap();
        let result = service
            .import_csv(
                "type,description,amount,category,date\nExpense,new1,1,FOOD,2024-06-01\nExpense,new2,2,Food,2024-06-02\n",
                today(),
            )
            .unwrap();

        let all = storage.transactions.get_all().unwrap();
        let descriptions: Vec<_> = all.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["new1", "new2", "old"]);
        assert!(all.iter().all(|t| t.category == "Food"));
        assert_eq!(result.imported_ids[0], all[0].id);
    }
}
