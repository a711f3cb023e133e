//! Dashboard Summary Report
//!
//! All-time income and expense totals, the remaining budget, overall savings
//! progress, per-category breakdowns and a month-by-month overview.

use std::collections::HashMap;

use crate::error::BudgetResult;
use crate::models::palette::{color_for_index, UNBUDGETED_SLICE_COLOR};
use crate::models::{
    percent_of, BudgetCategory, Money, Month, SavingsGoal, Transaction, TransactionKind,
};
use crate::storage::Storage;

/// Headline figures
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SummaryTotals {
    pub total_income: Money,
    pub total_expenses: Money,
    /// Monthly income minus all-time expenses
    pub remaining_budget: Money,
    pub savings_progress: f64,
}

/// One slice of a category breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub name: String,
    pub amount: Money,
    pub color: String,
}

/// Income and expenses for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyBucket {
    pub month: Month,
    /// Chart label, e.g. "Jan '24"
    pub label: String,
    pub income: Money,
    pub expenses: Money,
}

/// Dashboard Summary Report
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub totals: SummaryTotals,
    pub expense_by_category: Vec<CategoryTotal>,
    pub income_by_category: Vec<CategoryTotal>,
    pub monthly_overview: Vec<MonthlyBucket>,
}

/// Sum amounts of one kind per category, in first-seen order
fn group_by_category<'a>(
    transactions: impl Iterator<Item = &'a Transaction>,
) -> Vec<(String, Money)> {
    let mut groups: Vec<(String, Money)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for txn in transactions {
        match index.get(txn.category.as_str()) {
            Some(&i) => groups[i].1 += txn.amount,
            None => {
                index.insert(txn.category.as_str(), groups.len());
                groups.push((txn.category.clone(), txn.amount));
            }
        }
    }

    groups
}

/// Compute the headline figures
pub fn summary_totals(
    transactions: &[Transaction],
    savings_goals: &[SavingsGoal],
    monthly_income: Money,
) -> SummaryTotals {
    let total_income: Money = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();
    let total_expenses: Money = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();

    let saved: Money = savings_goals.iter().map(|g| g.current_amount).sum();
    let target: Money = savings_goals.iter().map(|g| g.target_amount).sum();

    SummaryTotals {
        total_income,
        total_expenses,
        remaining_budget: monthly_income - total_expenses,
        savings_progress: percent_of(saved, target),
    }
}

/// Expenses per category, coloured from the budget
pub fn expense_by_category(
    transactions: &[Transaction],
    budget: &[BudgetCategory],
) -> Vec<CategoryTotal> {
    group_by_category(transactions.iter().filter(|t| t.is_expense()))
        .into_iter()
        .map(|(name, amount)| {
            let color = budget
                .iter()
                .find(|c| c.name == name)
                .map(|c| c.color.clone())
                .unwrap_or_else(|| UNBUDGETED_SLICE_COLOR.to_string());
            CategoryTotal { name, amount, color }
        })
        .collect()
}

/// Income per category, coloured by first-seen position
///
/// Income with a blank category is left out.
pub fn income_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    group_by_category(
        transactions
            .iter()
            .filter(|t| t.is_income() && !t.category.is_empty()),
    )
    .into_iter()
    .enumerate()
    .map(|(i, (name, amount))| CategoryTotal {
        name,
        amount,
        color: color_for_index(i).to_string(),
    })
    .collect()
}

/// Income and expenses per calendar month, oldest first
///
/// Transactions whose date does not parse are skipped.
pub fn monthly_overview(transactions: &[Transaction]) -> Vec<MonthlyBucket> {
    let mut buckets: HashMap<Month, (Money, Money)> = HashMap::new();

    for txn in transactions {
        let Some(date) = txn.calendar_date() else {
            log::debug!("Skipping transaction {} with date {:?}", txn.id, txn.date);
            continue;
        };
        let entry = buckets.entry(Month::of(date)).or_default();
        match txn.kind {
            TransactionKind::Income => entry.0 += txn.amount,
            TransactionKind::Expense => entry.1 += txn.amount,
        }
    }

    let mut overview: Vec<MonthlyBucket> = buckets
        .into_iter()
        .map(|(month, (income, expenses))| MonthlyBucket {
            label: month.short_label(),
            month,
            income,
            expenses,
        })
        .collect();
    overview.sort_by_key(|b| b.month);
    overview
}

impl SummaryReport {
    /// Build the report from slices
    pub fn build(
        transactions: &[Transaction],
        budget: &[BudgetCategory],
        savings_goals: &[SavingsGoal],
        monthly_income: Money,
    ) -> Self {
        Self {
            totals: summary_totals(transactions, savings_goals, monthly_income),
            expense_by_category: expense_by_category(transactions, budget),
            income_by_category: income_by_category(transactions),
            monthly_overview: monthly_overview(transactions),
        }
    }

    /// Generate the report from the current session
    pub fn generate(storage: &Storage) -> BudgetResult<Self> {
        let transactions = storage.transactions.get_all()?;
        log::debug!("Summarising {} transaction(s)", transactions.len());

        Ok(Self::build(
            &transactions,
            &storage.categories.get_all()?,
            &storage.goals.get_savings_goals()?,
            storage.income.monthly_income()?,
        ))
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Dashboard Summary\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');

        output.push_str(&format!("{:<24} {:>14}\n", "Total Income", self.totals.total_income));
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Total Expenses", self.totals.total_expenses
        ));
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Remaining Budget", self.totals.remaining_budget
        ));
        output.push_str(&format!(
            "{:<24} {:>13.1}%\n",
            "Savings Progress", self.totals.savings_progress
        ));

        output.push_str("\nEXPENSES BY CATEGORY\n");
        if self.expense_by_category.is_empty() {
            output.push_str("  No expenses recorded.\n");
        }
        for slice in &self.expense_by_category {
            output.push_str(&format!("  {:<22} {:>14}\n", slice.name, slice.amount));
        }

        output.push_str("\nINCOME BY CATEGORY\n");
        if self.income_by_category.is_empty() {
            output.push_str("  No categorized income this period.\n");
        }
        for slice in &self.income_by_category {
            output.push_str(&format!("  {:<22} {:>14}\n", slice.name, slice.amount));
        }

        output.push_str("\nMONTHLY OVERVIEW\n");
        output.push_str(&format!("  {:<10} {:>14} {:>14}\n", "Month", "Income", "Expenses"));
        for bucket in &self.monthly_overview {
            output.push_str(&format!(
                "  {:<10} {:>14} {:>14}\n",
                bucket.label, bucket.income, bucket.expenses
            ));
        }

        output
    }
}
