//! BudgetPro - personal finance tracking from the command line
//!
//! This library provides the core functionality for BudgetPro: importing
//! transactions from CSV, reconciling spending against a monthly budget,
//! tracking spending and savings goals, and summarising it all.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings file and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, goals, money)
//! - `import`: CSV decoding and transaction normalization
//! - `export`: CSV encoding
//! - `storage`: In-memory session state
//! - `services`: Business logic layer
//! - `reports`: Reconciliation, goal progress and summary reports
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use budgetpro::config::{BudgetPaths, Settings};
//! use budgetpro::services::ImportService;
//! use budgetpro::storage::Storage;
//!
//! let paths = BudgetPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::from_settings(&settings)?;
//! let result = ImportService::new(&storage).import_csv(&text, budgetpro::models::today())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
