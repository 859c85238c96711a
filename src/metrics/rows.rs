//! Row types produced by the calculators
//!
//! Values stay numeric here. Turning them into "$1,234.56" or "20.00%" is
//! left to the document emitters.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

use crate::models::Money;

/// A named line of the financial analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    TotalIncome,
    TotalExpenses,
    Balance,
    SpentRatio,
    FixedExpenses,
    VariableExpenses,
    FixedRatio,
    VariableRatio,
    Projection { months: u32 },
    IncomeChange,
    ExpenseChange,
}

impl Metric {
    /// Human-readable label used as the first column of the analysis
    pub fn label(&self) -> String {
        match self {
            Self::TotalIncome => "Total Income".into(),
            Self::TotalExpenses => "Total Expenses".into(),
            Self::Balance => "Balance".into(),
            Self::SpentRatio => "Income Spent".into(),
            Self::FixedExpenses => "Fixed Expenses".into(),
            Self::VariableExpenses => "Variable Expenses".into(),
            Self::FixedRatio => "Fixed Expenses Share".into(),
            Self::VariableRatio => "Variable Expenses Share".into(),
            Self::Projection { months } => format!("Projection ({} months)", months),
            Self::IncomeChange => "Income Change vs Previous Month".into(),
            Self::ExpenseChange => "Expense Change vs Previous Month".into(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw value of a metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum MetricValue {
    /// A monetary amount
    Currency(Money),
    /// A percentage, already scaled to 0-100
    Percent(f64),
}

impl MetricValue {
    /// Numeric value for charting (currency in whole units, percent as-is)
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Currency(money) => money.as_f64(),
            Self::Percent(pct) => *pct,
        }
    }
}

/// One line of the "Financial Analysis" section
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricRow {
    pub metric: Metric,
    pub value: MetricValue,
}

impl MetricRow {
    pub fn currency(metric: Metric, amount: Money) -> Self {
        Self {
            metric,
            value: MetricValue::Currency(amount),
        }
    }

    pub fn percent(metric: Metric, pct: f64) -> Self {
        Self {
            metric,
            value: MetricValue::Percent(pct),
        }
    }
}

/// Spending of one category within the month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdownRow {
    /// Category name; `None` for uncategorized spending
    pub category: Option<String>,
    /// Total spent in the category
    pub amount: Money,
    /// Share of total expenses (0-100)
    pub percentage: f64,
    /// Number of expense records
    pub transaction_count: usize,
}

impl CategoryBreakdownRow {
    /// Display name, substituting `uncategorized` for a missing category
    ///
    /// A real category spelled like `uncategorized` gets a " (category)"
    /// suffix so the two rows stay distinguishable.
    pub fn label<'a>(&'a self, uncategorized: &'a str) -> Cow<'a, str> {
        match self.category.as_deref() {
            None => Cow::Borrowed(uncategorized),
            Some(name) if name == uncategorized => Cow::Owned(format!("{} (category)", name)),
            Some(name) => Cow::Borrowed(name),
        }
    }
}

/// Per-account totals for the month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummaryRow {
    pub account: String,
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_labels() {
        assert_eq!(Metric::TotalIncome.label(), "Total Income");
        assert_eq!(
            Metric::Projection { months: 6 }.to_string(),
            "Projection (6 months)"
        );
    }

    #[test]
    fn test_metric_value_as_f64() {
        assert_eq!(MetricValue::Currency(Money::from_cents(12345)).as_f64(), 123.45);
        assert_eq!(MetricValue::Percent(20.0).as_f64(), 20.0);
    }

    #[test]
    fn test_category_label() {
        let row = CategoryBreakdownRow {
            category: None,
            amount: Money::from_cents(100),
            percentage: 100.0,
            transaction_count: 1,
        };
        assert_eq!(row.label("Uncategorized"), "Uncategorized");

        let named = CategoryBreakdownRow {
            category: Some("Food".into()),
            ..row.clone()
        };
        assert_eq!(named.label("Uncategorized"), "Food");
    }

    #[test]
    fn test_category_named_like_uncategorized_bucket() {
        let bucket = CategoryBreakdownRow {
            category: None,
            amount: Money::from_cents(100),
            percentage: 50.0,
            transaction_count: 1,
        };
        let named = CategoryBreakdownRow {
            category: Some("Uncategorized".into()),
            ..bucket.clone()
        };

        assert_eq!(bucket.label("Uncategorized"), "Uncategorized");
        assert_eq!(named.label("Uncategorized"), "Uncategorized (category)");
        assert_eq!(named.label("Other"), "Uncategorized");
    }
}
