//! Metric Calculator
//!
//! Pure functions turning one month of expenses and incomes into totals,
//! ratios and projections. Every ratio is guarded: a zero (or negative)
//! denominator yields `0.0`, so results are always finite.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::rows::{Metric, MetricRow};
use crate::models::{Money, TransactionSet};

/// Category names whose spending counts as fixed expenses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixedCategories(BTreeSet<String>);

impl FixedCategories {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Check whether a (possibly missing) category is fixed
    pub fn contains(&self, category: Option<&str>) -> bool {
        category.is_some_and(|name| self.0.contains(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Month counts for the two balance projections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionHorizons {
    pub short: u32,
    pub long: u32,
}

impl Default for ProjectionHorizons {
    fn default() -> Self {
        Self { short: 3, long: 6 }
    }
}

/// `part` as a percentage of `whole`, or 0 when `whole` is not positive
pub fn percentage_of(part: Money, whole: Money) -> f64 {
    if !whole.is_positive() {
        return 0.0;
    }
    part.cents() as f64 * 100.0 / whole.cents() as f64
}

/// Sum of all amounts in the set
pub fn total(set: &TransactionSet) -> Money {
    set.total()
}

/// Income minus expenses
pub fn balance(expenses: &TransactionSet, incomes: &TransactionSet) -> Money {
    total(incomes) - total(expenses)
}

/// Percentage of income that was spent
pub fn spent_ratio(expenses: &TransactionSet, incomes: &TransactionSet) -> f64 {
    percentage_of(total(expenses), total(incomes))
}

/// Spending in fixed categories
pub fn fixed_total(expenses: &TransactionSet, fixed: &FixedCategories) -> Money {
    expenses
        .iter()
        .filter(|t| fixed.contains(t.category.as_deref()))
        .map(|t| t.amount)
        .sum()
}

/// Spending outside fixed categories, including uncategorized spending
pub fn variable_total(expenses: &TransactionSet, fixed: &FixedCategories) -> Money {
    total(expenses) - fixed_total(expenses, fixed)
}

/// Fixed spending as a share of all expenses
pub fn fixed_ratio(expenses: &TransactionSet, fixed: &FixedCategories) -> f64 {
    percentage_of(fixed_total(expenses, fixed), total(expenses))
}

/// Variable spending as a share of all expenses
pub fn variable_ratio(expenses: &TransactionSet, fixed: &FixedCategories) -> f64 {
    percentage_of(variable_total(expenses, fixed), total(expenses))
}

/// Linear extrapolation of a monthly balance
pub fn projection(balance: Money, months: u32) -> Money {
    balance * i64::from(months)
}

/// All scalar metrics for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
    pub spent_ratio: f64,
    pub fixed_expenses: Money,
    pub variable_expenses: Money,
    pub fixed_ratio: f64,
    pub variable_ratio: f64,
    pub horizons: ProjectionHorizons,
    pub short_projection: Money,
    pub long_projection: Money,
}

impl FinancialSummary {
    /// Calculate every metric from one month of expenses and incomes
    pub fn calculate(
        expenses: &TransactionSet,
        incomes: &TransactionSet,
        fixed: &FixedCategories,
        horizons: ProjectionHorizons,
    ) -> Self {
        let total_income = total(incomes);
        let total_expenses = total(expenses);
        let balance = total_income - total_expenses;
        let fixed_expenses = fixed_total(expenses, fixed);
        let variable_expenses = total_expenses - fixed_expenses;

        Self {
            total_income,
            total_expenses,
            balance,
            spent_ratio: percentage_of(total_expenses, total_income),
            fixed_expenses,
            variable_expenses,
            fixed_ratio: percentage_of(fixed_expenses, total_expenses),
            variable_ratio: percentage_of(variable_expenses, total_expenses),
            horizons,
            short_projection: projection(balance, horizons.short),
            long_projection: projection(balance, horizons.long),
        }
    }

    /// The analysis section, in report order
    pub fn metric_rows(&self) -> Vec<MetricRow> {
        vec![
            MetricRow::currency(Metric::TotalIncome, self.total_income),
            MetricRow::currency(Metric::TotalExpenses, self.total_expenses),
            MetricRow::currency(Metric::Balance, self.balance),
            MetricRow::percent(Metric::SpentRatio, self.spent_ratio),
            MetricRow::currency(Metric::FixedExpenses, self.fixed_expenses),
            MetricRow::currency(Metric::VariableExpenses, self.variable_expenses),
            MetricRow::percent(Metric::FixedRatio, self.fixed_ratio),
            MetricRow::percent(Metric::VariableRatio, self.variable_ratio),
            MetricRow::currency(
                Metric::Projection {
                    months: self.horizons.short,
                },
                self.short_projection,
            ),
            MetricRow::currency(
                Metric::Projection {
                    months: self.horizons.long,
                },
                self.long_projection,
            ),
        ]
    }
}
