//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables, progress bars and percentage strings.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::{format_allocation_breakdown, format_category_list};
pub use report::{format_bar, format_percentage, separator, truncate};
pub use transaction::{format_transaction_details, format_transaction_table};
