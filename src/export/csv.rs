//! CSV Export functionality
//!
//! Writes transactions back out in the import format, prefixed with an `id`
//! column. Rows follow store order (most recently added first).

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Transaction;
use crate::storage::Storage;

/// Header row of an exported transaction file
pub const EXPORT_HEADER: &str = "id,type,description,amount,category,date";

/// Default file name for exported transactions
pub const DEFAULT_EXPORT_FILE: &str = "transactions.csv";

/// Write transactions as CSV
pub fn write_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> BudgetResult<()> {
    writeln!(writer, "{}", EXPORT_HEADER).map_err(|e| BudgetError::Export(e.to_string()))?;

    for txn in transactions {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            escape_csv(txn.id.as_str()),
            txn.kind,
            escape_csv(&txn.description),
            txn.amount.to_plain_string(),
            escape_csv(&txn.category),
            escape_csv(&txn.date),
        )
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Encode transactions as CSV text
pub fn encode_transactions(transactions: &[Transaction]) -> BudgetResult<String> {
    let mut buffer = Vec::new();
    write_transactions_csv(transactions, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| BudgetError::Export(e.to_string()))
}

/// Export all stored transactions to CSV
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: &mut W) -> BudgetResult<()> {
    let transactions = storage.transactions.get_all()?;
    log::debug!("Exporting {} transaction(s)", transactions.len());
    write_transactions_csv(&transactions, writer)
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
