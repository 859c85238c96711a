//! Comparative Calculator
//!
//! Month-over-month change of income and expenses, used by the detailed
//! private report.

use serde::Serialize;

use super::rows::{Metric, MetricRow};
use crate::models::{Money, TransactionSet};

/// Relative change from `previous` to `current`, in percent
///
/// Zero when there is no positive previous total to compare against.
pub fn percent_change(current: Money, previous: Money) -> f64 {
    if !previous.is_positive() {
        return 0.0;
    }
    (current - previous).cents() as f64 * 100.0 / previous.cents() as f64
}

/// Change of this month's totals against the previous month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthComparison {
    pub income_change: f64,
    pub expense_change: f64,
}

impl MonthComparison {
    pub fn calculate(
        current_expenses: &TransactionSet,
        current_incomes: &TransactionSet,
        previous_expenses: &TransactionSet,
        previous_incomes: &TransactionSet,
    ) -> Self {
        Self {
            income_change: percent_change(current_incomes.total(), previous_incomes.total()),
            expense_change: percent_change(current_expenses.total(), previous_expenses.total()),
        }
    }

    /// Rows appended to the analysis section of the detailed report
    pub fn metric_rows(&self) -> Vec<MetricRow> {
        vec![
            MetricRow::percent(Metric::IncomeChange, self.income_change),
            MetricRow::percent(Metric::ExpenseChange, self.expense_change),
        ]
    }
}
