//! Path management for BudgetPro
//!
//! ## Path Resolution Order
//!
//! 1. An explicit settings file (the CLI `--config` flag)
//! 2. `BUDGETPRO_CONFIG_DIR` environment variable (if set)
//! 3. The platform config directory from `directories`
//!    (e.g. `~/.config/budgetpro` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{BudgetError, BudgetResult};

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "BUDGETPRO_CONFIG_DIR";

/// Default settings file name
pub const SETTINGS_FILE_NAME: &str = "config.json";

/// Manages all paths used by BudgetPro
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Base directory for BudgetPro configuration
    base_dir: PathBuf,
    /// Explicit settings file, overriding `base_dir/config.json`
    settings_override: Option<PathBuf>,
}

impl BudgetPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> BudgetResult<Self> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self {
            base_dir,
            settings_override: None,
        })
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            settings_override: None,
        }
    }

    /// Use an explicit settings file; its parent becomes the base directory
    pub fn with_settings_file(file: PathBuf) -> Self {
        let base_dir = file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            base_dir,
            settings_override: Some(file),
        }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.settings_override
            .clone()
            .unwrap_or_else(|| self.base_dir.join(SETTINGS_FILE_NAME))
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> BudgetResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if BudgetPro has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> BudgetResult<PathBuf> {
    ProjectDirs::from("", "", "budgetpro")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BudgetError::Config("Could not determine a config directory".into()))
}
