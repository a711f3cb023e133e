//! CLI commands for budget category management
//!
//! Changes are made to the session and written back to the settings file by
//! the caller when a handler reports that something changed.

use clap::Subcommand;

use crate::display::{format_allocation_breakdown, format_category_list};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetCategory, CategoryField, Money};
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List budget categories
    List,
    /// Show how the monthly income is allocated
    Allocation,
    /// Add a budget category
    Add {
        /// Category name
        name: String,
        /// Monthly allocation (e.g., "250" or "99.50")
        amount: String,
        /// Display colour; defaults to the next palette colour
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Change a category's monthly allocation
    SetAmount {
        /// Category name or ID
        category: String,
        /// New allocation
        amount: String,
    },
    /// Rename a category
    Rename {
        /// Category name or ID
        category: String,
        /// New name
        name: String,
    },
    /// Change a category's display colour
    SetColor {
        /// Category name or ID
        category: String,
        color: String,
    },
    /// Delete a category
    Remove {
        /// Category name or ID
        category: String,
    },
}

/// Parse a money argument
pub fn parse_amount(s: &str) -> BudgetResult<Money> {
    Money::parse(s).map_err(|e| {
        BudgetError::Validation(format!(
            "Invalid amount '{}': {}. Use a plain number like '50' or '12.34'",
            s, e
        ))
    })
}

fn find(service: &CategoryService<'_>, key: &str) -> BudgetResult<BudgetCategory> {
    service
        .find(key)?
        .ok_or_else(|| BudgetError::category_not_found(key))
}

/// Handle a category command
///
/// Returns whether the budget changed.
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> BudgetResult<bool> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(&service.list()?));
            Ok(false)
        }
        CategoryCommands::Allocation => {
            print!("{}", format_allocation_breakdown(&service.allocation_breakdown()?));
            Ok(false)
        }
        CategoryCommands::Add {
            name,
            amount,
            color,
        } => {
            let amount = parse_amount(&amount)?;
            match service.add(&name, amount, color.as_deref())? {
                Some(category) => {
                    println!("Added category '{}' ({}) with {}", category.name, category.id, category.amount);
                    Ok(true)
                }
                None => Err(BudgetError::Validation(
                    "A category needs a name and an amount greater than zero".into(),
                )),
            }
        }
        CategoryCommands::SetAmount { category, amount } => {
            let amount = parse_amount(&amount)?;
            if amount.is_negative() {
                return Err(BudgetError::Validation("Allocation cannot be negative".into()));
            }
            let target = find(&service, &category)?;
            service.update(&target.id, CategoryField::Amount(amount))?;
            println!("'{}' now allocated {}", target.name, amount);
            Ok(true)
        }
        CategoryCommands::Rename { category, name } => {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(BudgetError::Validation("Category name cannot be empty".into()));
            }
            let target = find(&service, &category)?;
            if service.update(&target.id, CategoryField::Name(name.clone()))? {
                println!("Renamed '{}' to '{}'", target.name, name);
                Ok(true)
            } else {
                println!("'{}' cannot be renamed", target.name);
                Ok(false)
            }
        }
        CategoryCommands::SetColor { category, color } => {
            let target = find(&service, &category)?;
            service.update(&target.id, CategoryField::Color(color.clone()))?;
            println!("'{}' colour set to {}", target.name, color);
            Ok(true)
        }
        CategoryCommands::Remove { category } => {
            let target = find(&service, &category)?;
            if service.delete(&target.id)? {
                println!("Removed category '{}'", target.name);
                Ok(true)
            } else {
                println!("'{}' cannot be removed", target.name);
                Ok(false)
            }
        }
    }
}
