//! Custom error types for family-report
//!
//! This module defines the error hierarchy for the report engine using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for report generation
#[derive(Error, Debug)]
pub enum ReportError {
    /// No private transactions matched the owner and period
    #[error("No private transactions found for '{owner}' in {period}")]
    EmptyResult { owner: String, period: String },

    /// Month out of range, unparsable period, or a rejected year rollover
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// The transaction source failed
    #[error("Upstream failure: {0}")]
    Upstream(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for input data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Document emission errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ReportError {
    /// Create an "empty result" error for a private report
    pub fn empty_result(owner: impl Into<String>, period: impl ToString) -> Self {
        Self::EmptyResult {
            owner: owner.into(),
            period: period.to_string(),
        }
    }

    /// Check if this is an "empty result" error
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResult { .. })
    }

    /// Check if this is an invalid period error
    pub fn is_invalid_period(&self) -> bool {
        matches!(self, Self::InvalidPeriod(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for report operations
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReportError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_empty_result_error() {
        let err = ReportError::empty_result("ana", "2025-03");
        assert_eq!(
            err.to_string(),
            "No private transactions found for 'ana' in 2025-03"
        );
        assert!(err.is_empty_result());
        assert!(!err.is_invalid_period());
    }

    #[test]
    fn test_invalid_period_error() {
        let err = ReportError::InvalidPeriod("month 13 is out of range".into());
        assert_eq!(err.to_string(), "Invalid period: month 13 is out of range");
        assert!(err.is_invalid_period());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let report_err: ReportError = io_err.into();
        assert!(matches!(report_err, ReportError::Io(_)));
    }
}
