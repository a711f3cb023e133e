//! Export module for BudgetPro
//!
//! Transactions are exported as CSV in the same layout the importer reads,
//! so an export can be re-imported into a new session.

pub mod csv;

pub use csv::{
    encode_transactions, export_transactions_csv, write_transactions_csv, DEFAULT_EXPORT_FILE,
    EXPORT_HEADER,
};
