//! Transaction listing command

use clap::{Args, ValueEnum};

use crate::display::transaction::format_transaction_table;
use crate::error::BudgetResult;
use crate::services::{SortDirection, SortKey, TransactionQuery, TransactionService};
use crate::storage::Storage;

/// Column to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortColumn {
    Date,
    Description,
    Category,
    Amount,
}

impl From<SortColumn> for SortKey {
    fn from(column: SortColumn) -> Self {
        match column {
            SortColumn::Date => SortKey::Date,
            SortColumn::Description => SortKey::Description,
            SortColumn::Category => SortKey::Category,
            SortColumn::Amount => SortKey::Amount,
        }
    }
}

/// Options for the list command
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Only show transactions whose description contains this text
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Sort column
    #[arg(short, long, value_enum, default_value = "date")]
    pub sort: SortColumn,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub asc: bool,

    /// Number of transactions to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl ListArgs {
    pub fn to_query(&self) -> TransactionQuery {
        TransactionQuery {
            filter: self.filter.clone(),
            sort: self.sort.into(),
            direction: if self.asc {
                SortDirection::Asc
            } else {
                SortDirection::Desc
            },
            limit: self.limit,
        }
    }
}

/// Handle the list command
pub fn handle_list_command(storage: &Storage, args: &ListArgs) -> BudgetResult<()> {
    let transactions = TransactionService::new(storage).list(&args.to_query())?;
    print!("{}", format_transaction_table(&transactions));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_query() {
        let args = ListArgs {
            filter: Some("coffee".into()),
            sort: SortColumn::Amount,
            asc: true,
            limit: Some(5),
        };
        let query = args.to_query();

        assert_eq!(query.filter.as_deref(), Some("coffee"));
        assert_eq!(query.sort, SortKey::Amount);
        assert_eq!(query.direction, SortDirection::Asc);
        assert_eq!(query.limit, Some(5));
    }
}
