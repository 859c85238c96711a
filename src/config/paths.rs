//! Path management for family-report
//!
//! Provides XDG-compliant path resolution for configuration and the
//! transaction data file.
//!
//! ## Path Resolution Order
//!
//! 1. `FAMILY_REPORT_DIR` environment variable (if set)
//! 2. The platform configuration directory joined with `family-report`
//!    (`$XDG_CONFIG_HOME` or `~/.config` on Linux, `%APPDATA%` on Windows)

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::ReportError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "FAMILY_REPORT_DIR";

/// Manages all paths used by family-report
#[derive(Debug, Clone)]
pub struct ReportPaths {
    /// Base directory for all family-report data
    base_dir: PathBuf,
}

impl ReportPaths {
    /// Create a new ReportPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ReportError> {
        let base_dir = if let Ok(custom) = std::env::var(DIR_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ReportPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/family-report/ or equivalent)
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the data directory (~/.config/family-report/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ReportError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ReportError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ReportError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default base directory for the platform
fn resolve_default_path() -> Result<PathBuf, ReportError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| ReportError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("family-report"))
}
