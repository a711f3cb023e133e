//! CLI commands for the income profile

use clap::Subcommand;

use super::category::parse_amount;
use crate::error::BudgetResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand, Debug)]
pub enum IncomeCommands {
    /// Show monthly income and income categories
    Show,
    /// Set the expected monthly income
    Set {
        /// Amount (e.g., "4200")
        amount: String,
    },
    /// Add an income category name
    AddCategory {
        name: String,
    },
}

/// Handle an income command
///
/// Returns whether the income profile changed.
pub fn handle_income_command(storage: &Storage, cmd: IncomeCommands) -> BudgetResult<bool> {
    let service = CategoryService::new(storage);

    match cmd {
        IncomeCommands::Show => {
            println!("Monthly income: {}", service.monthly_income()?);
            println!("Income categories:");
            for name in service.income_category_names()? {
                println!("  {}", name);
            }
            Ok(false)
        }
        IncomeCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            service.set_monthly_income(amount)?;
            println!("Monthly income set to {}", amount);
            Ok(true)
        }
        IncomeCommands::AddCategory { name } => {
            let added = service.add_income_category(&name)?;
            if added {
                println!("Added income category '{}'", name.trim());
            } else {
                println!("Income category '{}' not added", name.trim());
            }
            Ok(added)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_set_income() {
        let storage = Storage::new();
        assert!(handle_income_command(&storage, IncomeCommands::Set { amount: "4200".into() }).unwrap());
        assert_eq!(storage.income.monthly_income().unwrap(), Money::from_dollars(4200));
        assert!(handle_income_command(&storage, IncomeCommands::Set { amount: "-1".into() }).is_err());
    }

    #[test]
    fn test_add_duplicate_category() {
        let storage = Storage::new();
        let cmd = || IncomeCommands::AddCategory { name: "Salary".into() };
        assert!(!handle_income_command(&storage, cmd()).unwrap());
    }
}
