//! Transaction display formatting
//!
//! Transaction listings are rendered as tables with `tabled`.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::Transaction;

const DESCRIPTION_WIDTH: usize = 32;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date.clone(),
            kind: txn.kind.to_string(),
            // Keep each row on one line
            description: truncate(&txn.description.replace(['\r', '\n'], " "), DESCRIPTION_WIDTH),
            category: txn.category.clone(),
            amount: txn.amount.to_string(),
        }
    }
}

/// Format transactions as a table
pub fn format_transaction_table(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions.iter().map(TransactionRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!("{}\n{} transaction(s)\n", table, transactions.len())
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Date:        {}\n", txn.date));
    output.push_str(&format!("Amount:      {}\n", txn.amount));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    if let Some(tags) = txn.tags.as_ref().filter(|t| !t.is_empty()) {
        let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
        output.push_str(&format!("Tags:        {}\n", tags.join(", ")));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};

    #[test]
    fn test_format_transaction_table() {
        let txns = vec![
            Transaction::new(
                TransactionKind::Expense,
                "Corner store",
                Money::from_cents(5000),
                "Food",
                "2025-01-15",
            ),
            Transaction::new(
                TransactionKind::Income,
                "Paycheck",
                Money::from_dollars(2000),
                "Salary",
                "2025-01-01",
            ),
        ];

        let formatted = format_transaction_table(&txns);
        assert!(formatted.contains("Description"));
        assert!(formatted.contains("2025-01-15"));
        assert!(formatted.contains("Corner store"));
        assert!(formatted.contains("$50.00"));
        assert!(formatted.contains("2 transaction(s)"));
    }

    #[test]
    fn test_format_empty_table() {
        assert!(format_transaction_table(&[]).contains("No transactions found"));
    }

    #[test]
    fn test_format_transaction_details() {
        let mut txn = Transaction::new(
            TransactionKind::Expense,
            "Test Store",
            Money::from_cents(5000),
            "Groceries",
            "2025-01-15",
        );
        txn.tags = Some(["weekly".to_string(), "food".to_string()].into_iter().collect());

        let formatted = format_transaction_details(&txn);
        assert!(formatted.contains("Test Store"));
        assert!(formatted.contains("Groceries"));
        assert!(formatted.contains("Tags:        food, weekly"));
    }
}
