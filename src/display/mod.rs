//! Display formatting for terminal output
//!
//! Renders assembled reports as plain-text tables for the `summary`
//! command.

pub mod report;

pub use report::{double_separator, format_bar, render_report, separator};
