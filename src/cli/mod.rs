//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod export;
pub mod goal;
pub mod import;
pub mod income;
pub mod insight;
pub mod report;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use export::handle_export_command;
pub use goal::{handle_goal_command, GoalCommands};
pub use import::{handle_import_command, load_transactions};
pub use income::{handle_income_command, IncomeCommands};
pub use insight::handle_insights_command;
pub use report::{
    handle_goals_command, handle_report_command, handle_summary_command, parse_date_arg,
    parse_month_arg,
};
pub use transaction::{handle_list_command, ListArgs};
