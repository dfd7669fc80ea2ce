//! User settings for Budget Planner
//!
//! Settings shape the initial planner state (starting budget, seed items,
//! sort order) and how it is displayed. Expenses themselves are never saved.

use serde::{Deserialize, Serialize};

use super::paths::PlannerPaths;
use crate::error::PlannerError;
use crate::models::SortMode;

/// How ids for new expenses are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random UUIDs (default)
    #[default]
    Uuid,
    /// A counter continuing after the seed ids
    Sequential,
}

/// User settings for Budget Planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Budget the planner starts with, in whole currency units
    #[serde(default = "default_budget")]
    pub default_budget: f64,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Initial ordering of the expense list
    #[serde(default)]
    pub default_sort: SortMode,

    /// Id generation strategy for new expenses
    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Whether to start with the example expenses
    #[serde(default = "default_seed_items")]
    pub seed_items: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_budget() -> f64 {
    20_000.0
}

fn default_currency() -> String {
    "৳".to_string()
}

fn default_seed_items() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_budget: default_budget(),
            currency_symbol: default_currency(),
            default_sort: SortMode::default(),
            id_strategy: IdStrategy::default(),
            seed_items: default_seed_items(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &PlannerPaths) -> Result<Self, PlannerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PlannerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PlannerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PlannerPaths) -> Result<(), PlannerError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PlannerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            PlannerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_budget, 20_000.0);
        assert_eq!(settings.currency_symbol, "৳");
        assert_eq!(settings.default_sort, SortMode::Default);
        assert_eq!(settings.id_strategy, IdStrategy::Uuid);
        assert!(settings.seed_items);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.default_budget, 20_000.0);
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_budget = 1234.0;
        settings.id_strategy = IdStrategy::Sequential;
        settings.currency_symbol = "$".into();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_budget, 1234.0);
        assert_eq!(loaded.id_strategy, IdStrategy::Sequential);
        assert_eq!(loaded.currency_symbol, "$");
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"default_sort": "desc"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_sort, SortMode::Desc);
        assert_eq!(loaded.default_budget, 20_000.0);
        assert!(loaded.seed_items);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, PlannerError::Config(_)));
    }
}
