//! User settings for BudgetPro
//!
//! Settings carry everything that configures a session: monthly income, the
//! budget, income categories and goals. The file is JSON unless its
//! extension is `.yaml` or `.yml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetCategory, BudgetGoal, Money, SavingsGoal, DEFAULT_INCOME_CATEGORIES};

/// On-disk format of a settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Json,
    Yaml,
}

impl SettingsFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// User settings for BudgetPro
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Expected monthly income, in cents
    #[serde(default)]
    pub monthly_income: Money,

    /// Budget categories with monthly allocations
    #[serde(default = "default_budget")]
    pub budget: Vec<BudgetCategory>,

    #[serde(default)]
    pub budget_goals: Vec<BudgetGoal>,

    #[serde(default)]
    pub savings_goals: Vec<SavingsGoal>,

    /// Category names used to match income transactions
    #[serde(default = "default_income_categories")]
    pub income_categories: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_budget() -> Vec<BudgetCategory> {
    vec![BudgetCategory::default_other()]
}

fn default_income_categories() -> Vec<String> {
    DEFAULT_INCOME_CATEGORIES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            monthly_income: Money::zero(),
            budget: default_budget(),
            budget_goals: Vec::new(),
            savings_goals: Vec::new(),
            income_categories: default_income_categories(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> BudgetResult<Self> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings = Self::parse(&contents, SettingsFormat::from_path(&settings_path))?;
            log::debug!("Loaded settings from {}", settings_path.display());
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            log::debug!(
                "No settings at {}, using defaults",
                settings_path.display()
            );
            Ok(Settings::default())
        }
    }

    /// Parse settings text in the given format
    pub fn parse(contents: &str, format: SettingsFormat) -> BudgetResult<Self> {
        match format {
            SettingsFormat::Json => serde_json::from_str(contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            }),
            SettingsFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            }),
        }
    }

    /// Serialize settings in the given format
    pub fn render(&self, format: SettingsFormat) -> BudgetResult<String> {
        match format {
            SettingsFormat::Json => serde_json::to_string_pretty(self).map_err(|e| {
                BudgetError::Config(format!("Failed to serialize settings: {}", e))
            }),
            SettingsFormat::Yaml => serde_yaml::to_string(self).map_err(|e| {
                BudgetError::Config(format!("Failed to serialize settings: {}", e))
            }),
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> BudgetResult<()> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = self.render(SettingsFormat::from_path(&settings_path))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
