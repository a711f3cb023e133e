//! Configuration module for BudgetPro
//!
//! This module provides configuration management including:
//! - config directory resolution
//! - settings persistence (JSON or YAML)

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::{Settings, SettingsFormat};
