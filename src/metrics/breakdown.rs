//! Category breakdown
//!
//! Groups a month of expenses by category. Rows are ordered by category
//! name, with the uncategorized bucket (records without a category) last.

use std::collections::BTreeMap;

use super::calculator::percentage_of;
use super::rows::CategoryBreakdownRow;
use crate::models::{Money, TransactionSet};

/// Grouping key; `Uncategorized` sorts after every named category
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum CategoryKey {
    Named(String),
    Uncategorized,
}

impl From<Option<&str>> for CategoryKey {
    fn from(category: Option<&str>) -> Self {
        match category {
            Some(name) => Self::Named(name.to_string()),
            None => Self::Uncategorized,
        }
    }
}

impl CategoryKey {
    fn into_category(self) -> Option<String> {
        match self {
            Self::Named(name) => Some(name),
            Self::Uncategorized => None,
        }
    }
}

/// Spending per category with each category's share of total expenses
pub fn category_breakdown(expenses: &TransactionSet) -> Vec<CategoryBreakdownRow> {
    let mut groups: BTreeMap<CategoryKey, (Money, usize)> = BTreeMap::new();

    for txn in expenses {
        let entry = groups
            .entry(CategoryKey::from(txn.category.as_deref()))
            .or_insert((Money::zero(), 0));
        entry.0 += txn.amount;
        entry.1 += 1;
    }

    let total = expenses.total();

    groups
        .into_iter()
        .map(|(key, (amount, count))| CategoryBreakdownRow {
            category: key.into_category(),
            amount,
            percentage: percentage_of(amount, total),
            transaction_count: count,
        })
        .collect()
}

/// Largest categories first, at most `limit` rows
pub fn top_categories(rows: &[CategoryBreakdownRow], limit: usize) -> Vec<&CategoryBreakdownRow> {
    let mut sorted: Vec<_> = rows.iter().collect();
    sorted.sort_by(|a, b| b.amount.cmp(&a.amount));
    sorted.into_iter().take(limit).collect()
}
