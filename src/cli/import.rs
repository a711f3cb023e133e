//! CLI command handler for CSV import
//!
//! Every command that reads transactions starts from a fresh session and
//! imports the CSV files named on the command line, in order.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::services::{ImportResult, ImportService};
use crate::storage::Storage;

/// Read and import one CSV file
pub fn import_file(storage: &Storage, path: &Path, today: NaiveDate) -> BudgetResult<ImportResult> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        BudgetError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;

    ImportService::new(storage)
        .import_csv(&content, today)
        .map_err(|e| match e {
            BudgetError::MalformedInput(msg) => {
                BudgetError::MalformedInput(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
}

/// Import every file, stopping at the first malformed document
pub fn load_transactions(
    storage: &Storage,
    files: &[PathBuf],
    today: NaiveDate,
) -> BudgetResult<Vec<ImportResult>> {
    files
        .iter()
        .map(|path| import_file(storage, path, today))
        .collect()
}

/// Handle the import command
pub fn handle_import_command(
    storage: &Storage,
    files: &[PathBuf],
    today: NaiveDate,
) -> BudgetResult<()> {
    let mut total_imported = 0;
    let mut total_rejected = 0;

    for path in files {
        let result = import_file(storage, path, today)?;
        total_imported += result.imported;
        total_rejected += result.rejected();

        println!("{}", path.display());
        println!("  Imported:  {}", result.imported);
        println!("  Skipped:   {}", result.rejected());
        for rejection in &result.rejections {
            println!("    {}", rejection);
        }
    }

    if files.len() > 1 {
        println!();
        println!(
            "Total: {} imported, {} skipped",
            total_imported, total_rejected
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_multiple_files() {
        let a = csv_file("type,description,amount,category,date\nExpense,A,1,Other,2024-06-01\n");
        let b = csv_file("type,description,amount,category,date\nExpense,B,2,Other,2024-06-02\n");
        let storage = Storage::new();

        let results = load_transactions(
            &storage,
            &[a.path().to_path_buf(), b.path().to_path_buf()],
            today(),
        )
        .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(storage.transactions.count().unwrap(), 2);
        // Later files land in front
        assert_eq!(storage.transactions.get_all().unwrap()[0].description, "B");
    }

    #[test]
    fn test_malformed_file_names_path() {
        let bad = csv_file("type,description\nExpense,A\n");
        let storage = Storage::new();

        let err = import_file(&storage, bad.path(), today()).unwrap_err();
        assert!(err.is_malformed_input());
        assert!(err.to_string().contains(&bad.path().display().to_string()));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let storage = Storage::new();
        let err = import_file(&storage, Path::new("/nonexistent/budgetpro.csv"), today()).unwrap_err();
        assert!(matches!(err, BudgetError::Io(_)));
    }
}
