//! CLI command for transaction export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_transactions_csv, DEFAULT_EXPORT_FILE};
use crate::storage::Storage;

/// Write the session's transactions to a CSV file
///
/// Without an explicit path the file is `transactions.csv` in the current
/// directory.
pub fn handle_export_command(storage: &Storage, output: Option<PathBuf>) -> BudgetResult<PathBuf> {
    let path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));
    write_export(storage, &path)?;

    println!(
        "Exported {} transaction(s) to: {}",
        storage.transactions.count()?,
        path.display()
    );
    Ok(path)
}

fn write_export(storage: &Storage, path: &Path) -> BudgetResult<()> {
    let file = File::create(path).map_err(|e| {
        BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    export_transactions_csv(storage, &mut writer)?;
    writer
        .flush()
        .map_err(|e| BudgetError::Export(format!("Failed to write {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction, TransactionKind};
    use tempfile::TempDir;

    #[test]
    fn test_export_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let storage = Storage::new();
        storage
            .transactions
            .insert(NewTransaction {
                kind: TransactionKind::Expense,
                description: "Lunch, with tip".into(),
                amount: Money::from_cents(1250),
                category: "Food".into(),
                date: "2024-06-01".into(),
                tags: None,
            })
            .unwrap();

        handle_export_command(&storage, Some(path.clone())).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("id,type,description,amount,category,date"));
        assert!(written.contains(",Expense,\"Lunch, with tip\",12.50,Food,2024-06-01"));
    }
}
