//! Metric calculation
//!
//! Pure, deterministic calculations over a month of transactions:
//! scalar metrics, category breakdown, per-account totals and
//! month-over-month comparison.

pub mod accounts;
pub mod breakdown;
pub mod calculator;
pub mod comparison;
pub mod rows;

pub use accounts::account_summary;
pub use breakdown::{category_breakdown, top_categories};
pub use calculator::{FinancialSummary, FixedCategories, ProjectionHorizons};
pub use comparison::{percent_change, MonthComparison};
pub use rows::{AccountSummaryRow, CategoryBreakdownRow, Metric, MetricRow, MetricValue};
