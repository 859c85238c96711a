//! family-report - monthly family finance reports
//!
//! This library turns a month of income and expense records into a
//! multi-section financial report: totals, balance, fixed/variable expense
//! split, category shares, per-account totals, month-over-month deltas and
//! balance projections. Reports are emitted as CSV or as a spreadsheet with
//! charts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, periods, transactions and transaction sets
//! - `source`: Transaction sources (JSON file, in-memory)
//! - `metrics`: Pure metric calculations
//! - `reports`: Report variants, assembly and the report service
//! - `export`: CSV and spreadsheet document emitters
//! - `display`: Terminal rendering
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use family_report::config::{ReportPaths, Settings};
//! use family_report::models::ReportPeriod;
//! use family_report::reports::{ReportRequest, ReportService};
//! use family_report::source::JsonFileSource;
//!
//! let paths = ReportPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let source = JsonFileSource::new(paths.transactions_file());
//! let request = ReportRequest::public(ReportPeriod::parse("2025-03")?);
//! let document = ReportService::new(&source, &settings).export(&request)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod metrics;
pub mod models;
pub mod reports;
pub mod source;

pub use error::{ReportError, ReportResult};
