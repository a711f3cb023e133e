//! Budget vs Actual Report
//!
//! Compares each category's monthly allocation with the expenses recorded
//! against it in one calendar month. Categories with spending but no budget
//! still get a row, with a budget of zero.

use std::collections::HashMap;

use crate::error::BudgetResult;
use crate::models::palette::NEUTRAL_COLOR;
use crate::models::{BudgetCategory, Money, Month, Transaction};
use crate::storage::Storage;

/// A row in the reconciliation report for one category name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationRow {
    pub category: String,
    /// Monthly allocation, zero when the category is not budgeted
    pub budgeted: Money,
    /// Expenses in the month
    pub actual: Money,
    /// `budgeted - actual`
    pub variance: Money,
    pub color: String,
    pub is_budgeted: bool,
}

impl ReconciliationRow {
    /// Check if spending exceeded the allocation
    pub fn is_over(&self) -> bool {
        self.variance.is_negative()
    }
}

/// Column sums across all rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconciliationTotals {
    pub budgeted: Money,
    pub actual: Money,
    pub variance: Money,
}

/// Budget vs Actual Report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationReport {
    pub month: Month,
    /// Rows ordered by budgeted amount, largest first
    pub rows: Vec<ReconciliationRow>,
    pub totals: ReconciliationTotals,
}

/// Sum expenses per category name for one month, in first-seen order
pub fn monthly_spending(transactions: &[Transaction], month: Month) -> Vec<(String, Money)> {
    let mut order: Vec<(String, Money)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for txn in transactions {
        if !txn.is_expense() {
            continue;
        }
        let in_month = txn.calendar_date().map(|d| month.contains(d)).unwrap_or(false);
        if !in_month {
            continue;
        }

        match index.get(&txn.category) {
            Some(&i) => order[i].1 += txn.amount,
            None => {
                index.insert(txn.category.clone(), order.len());
                order.push((txn.category.clone(), txn.amount));
            }
        }
    }

    order
}

/// Reconcile transactions against the budget for one month
///
/// Category names are matched exactly. When several budget entries share a
/// name, the first one wins.
pub fn reconcile(
    transactions: &[Transaction],
    categories: &[BudgetCategory],
    month: Month,
) -> ReconciliationReport {
    let spending = monthly_spending(transactions, month);

    let mut names: Vec<&str> = Vec::new();
    for name in categories
        .iter()
        .map(|c| c.name.as_str())
        .chain(spending.iter().map(|(name, _)| name.as_str()))
    {
        if !names.contains(&name) {
            names.push(name);
        }
    }

    let mut rows: Vec<ReconciliationRow> = names
        .into_iter()
        .map(|name| {
            let category = categories.iter().find(|c| c.name == name);
            let budgeted = category.map(|c| c.amount).unwrap_or_default();
            let actual = spending
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, amount)| *amount)
                .unwrap_or_default();

            ReconciliationRow {
                category: name.to_string(),
                budgeted,
                actual,
                variance: budgeted - actual,
                color: category
                    .map(|c| c.color.clone())
                    .unwrap_or_else(|| NEUTRAL_COLOR.to_string()),
                is_budgeted: category.is_some(),
            }
        })
        .collect();

    // Stable: equal budgets keep encounter order
    rows.sort_by(|a, b| b.budgeted.cmp(&a.budgeted));

    let totals = rows.iter().fold(ReconciliationTotals::default(), |mut acc, row| {
        acc.budgeted += row.budgeted;
        acc.actual += row.actual;
        acc.variance += row.variance;
        acc
    });

    ReconciliationReport {
        month,
        rows,
        totals,
    }
}

impl ReconciliationReport {
    /// Generate the report for a month from the current session
    pub fn generate(storage: &Storage, month: Month) -> BudgetResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let categories = storage.categories.get_all()?;
        log::debug!(
            "Reconciling {} transaction(s) against {} categor(ies) for {}",
            transactions.len(),
            categories.len(),
            month
        );
        Ok(reconcile(&transactions, &categories, month))
    }

    /// Find a row by category name
    pub fn row(&self, category: &str) -> Option<&ReconciliationRow> {
        self.rows.iter().find(|r| r.category == category)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Budget vs Actual - {}\n", self.month));
        output.push_str(&"=".repeat(70));
        output.push('\n');

        output.push_str(&format!(
            "{:<28} {:>12} {:>12} {:>12}\n",
            "Category", "Budgeted", "Actual", "Variance"
        ));
        output.push_str(&"-".repeat(70));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No budget categories or spending this month.\n");
        }

        for row in &self.rows {
            let marker = if row.is_over() { " *" } else { "" };
            let name = if row.is_budgeted {
                row.category.clone()
            } else {
                format!("{} (unbudgeted)", row.category)
            };
            output.push_str(&format!(
                "{:<28} {:>12} {:>12} {:>12}{}\n",
                name, row.budgeted, row.actual, row.variance, marker
            ));
        }

        output.push_str(&"-".repeat(70));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>12} {:>12} {:>12}\n",
            "TOTAL", self.totals.budgeted, self.totals.actual, self.totals.variance
        ));

        if self.rows.iter().any(ReconciliationRow::is_over) {
            output.push_str("\n* Over budget\n");
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn june() -> Month {
        Month::new(2024, 6).unwrap()
    }

    fn expense(category: &str, dollars: i64, date: &str) -> Transaction {
        Transaction::new(
            TransactionKind::Expense,
            "x",
            Money::from_dollars(dollars),
            category,
            date,
        )
    }

    #[test]
    fn test_unbudgeted_spending_surfaces() {
        let budget = vec![BudgetCategory::new("Food", Money::from_dollars(300), "#16a34a")];
        let txns = vec![
            expense("Food", 120, "2024-06-03"),
            expense("Fun", 50, "2024-06-10"),
        ];

        let report = reconcile(&txns, &budget, june());
        assert_eq!(report.rows.len(), 2);

        let food = report.row("Food").unwrap();
        assert_eq!(food.budgeted, Money::from_dollars(300));
        assert_eq!(food.actual, Money::from_dollars(120));
        assert_eq!(food.variance, Money::from_dollars(180));

        let fun = report.row("Fun").unwrap();
        assert_eq!(fun.budgeted, Money::zero());
        assert_eq!(fun.actual, Money::from_dollars(50));
        assert_eq!(fun.variance, Money::from_dollars(-50));
        assert!(fun.is_over());
        assert!(!fun.is_budgeted);
        assert_eq!(fun.color, NEUTRAL_COLOR);

        assert_eq!(report.totals.budgeted, Money::from_dollars(300));
        assert_eq!(report.totals.actual, Money::from_dollars(170));
        assert_eq!(report.totals.variance, Money::from_dollars(130));
    }

    #[test]
    fn test_only_expenses_in_month_count() {
        let budget = vec![BudgetCategory::new("Food", Money::from_dollars(300), "#16a34a")];
        let txns = vec![
            expense("Food", 10, "2024-06-30"),
            expense("Food", 20, "2024-07-01"),
            expense("Food", 40, "2023-06-15"),
            expense("Food", 80, "garbage"),
            Transaction::new(
                TransactionKind::Income,
                "refund",
                Money::from_dollars(5),
                "Food",
                "2024-06-05",
            ),
        ];

        let report = reconcile(&txns, &budget, june());
        assert_eq!(report.row("Food").unwrap().actual, Money::from_dollars(10));
        assert_eq!(report.rows.len(), 1);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let budget = vec![BudgetCategory::new("Food", Money::from_dollars(300), "#16a34a")];
        let txns = vec![expense("food", 25, "2024-06-03")];

        let report = reconcile(&txns, &budget, june());
        assert_eq!(report.row("Food").unwrap().actual, Money::zero());
        assert_eq!(report.row("food").unwrap().actual, Money::from_dollars(25));
    }

    #[test]
    fn test_sorted_by_budget_descending_stable() {
        let budget = vec![
            BudgetCategory::new("Small", Money::from_dollars(10), "#1"),
            BudgetCategory::new("Big", Money::from_dollars(500), "#2"),
            BudgetCategory::new("TieA", Money::from_dollars(50), "#3"),
            BudgetCategory::new("TieB", Money::from_dollars(50), "#4"),
        ];
        let txns = vec![expense("Zed", 1, "2024-06-01"), expense("Alpha", 1, "2024-06-01")];

        let report = reconcile(&txns, &budget, june());
        let names: Vec<_> = report.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, vec!["Big", "TieA", "TieB", "Small", "Zed", "Alpha"]);
    }

    #[test]
    fn test_duplicate_names_use_first() {
        let budget = vec![
            BudgetCategory::new("Food", Money::from_dollars(100), "#1"),
            BudgetCategory::new("Food", Money::from_dollars(900), "#2"),
        ];
        let report = reconcile(&[], &budget, june());
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].budgeted, Money::from_dollars(100));
    }

    #[test]
    fn test_generate_and_format() {
        let storage = Storage::new();
        storage
            .categories
            .insert(BudgetCategory::new("Food", Money::from_dollars(300), "#16a34a"))
            .unwrap();
        storage
            .transactions
            .insert_batch(vec![crate::models::NewTransaction {
                kind: TransactionKind::Expense,
                description: "Arcade".into(),
                amount: Money::from_dollars(50),
                category: "Fun".into(),
                date: "2024-06-10".into(),
                tags: None,
            }])
            .unwrap();

        let report = ReconciliationReport::generate(&storage, june()).unwrap();
        let text = report.format_terminal();
        assert!(text.contains("Budget vs Actual - 2024-06"));
        assert!(text.contains("Fun (unbudgeted)"));
        assert!(text.contains("-$50.00 *"));
        assert!(text.contains("TOTAL"));
    }
}
