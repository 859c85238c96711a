//! Configuration module for family-report
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (fixed categories, rollover policy, formatting)

pub mod paths;
pub mod settings;

pub use paths::ReportPaths;
pub use settings::Settings;
