//! User settings for family-report
//!
//! Holds the deployment-specific business taxonomy (which categories are
//! fixed expenses), projection horizons, the previous-month rollover policy
//! and output preferences.

use serde::{Deserialize, Serialize};

use super::paths::ReportPaths;
use crate::error::ReportError;
use crate::export::ReportFormat;
use crate::metrics::{FixedCategories, ProjectionHorizons};
use crate::models::RolloverPolicy;

/// User settings for family-report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Categories counted as fixed expenses
    #[serde(default = "default_fixed_categories")]
    pub fixed_categories: FixedCategories,

    /// Month counts for the balance projections
    #[serde(default)]
    pub projection_horizons: ProjectionHorizons,

    /// How the month before January is resolved
    #[serde(default)]
    pub rollover: RolloverPolicy,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Name shown for spending without a category
    #[serde(default = "default_uncategorized_label")]
    pub uncategorized_label: String,

    /// Output format when none is requested
    #[serde(default)]
    pub default_format: ReportFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_fixed_categories() -> FixedCategories {
    FixedCategories::new(["Rent", "Utilities", "Education"])
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_uncategorized_label() -> String {
    "Uncategorized".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            fixed_categories: default_fixed_categories(),
            projection_horizons: ProjectionHorizons::default(),
            rollover: RolloverPolicy::default(),
            currency_symbol: default_currency(),
            uncategorized_label: default_uncategorized_label(),
            default_format: ReportFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ReportPaths) -> Result<Self, ReportError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ReportError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ReportError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ReportPaths) -> Result<(), ReportError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ReportError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            ReportError::Io(format!("Failed to write settings file: {}", e))
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
        assert!(settings.fixed_categories.contains(Some("Rent")));
        assert!(!settings.fixed_categories.contains(Some("Food")));
        assert_eq!(settings.projection_horizons, ProjectionHorizons { short: 3, long: 6 });
        assert_eq!(settings.rollover, RolloverPolicy::RollOver);
        assert_eq!(settings.default_format, ReportFormat::Csv);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            fixed_categories: FixedCategories::new(["Mortgage"]),
            rollover: RolloverPolicy::Reject,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(loaded.fixed_categories.contains(Some("Mortgage")));
        assert!(!loaded.fixed_categories.contains(Some("Rent")));
        assert_eq!(loaded.rollover, RolloverPolicy::Reject);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "fixed_categories": ["Renta", "Servicios"] }"#).unwrap();
        assert!(settings.fixed_categories.contains(Some("Servicios")));
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.uncategorized_label, "Uncategorized");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }
}
