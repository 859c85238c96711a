//! Transaction sources
//!
//! The report engine never talks to a database itself. It asks a
//! [`TransactionSource`] for the expenses and incomes of a month, filtered
//! by visibility and, for private reports, by owner.

pub mod json;
pub mod memory;

pub use json::JsonFileSource;
pub use memory::MemorySource;

use crate::error::ReportResult;
use crate::models::{ReportPeriod, Transaction, TransactionKind, Visibility};

/// Which records a report may see
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFilter {
    /// Only records booked on accounts with this visibility
    pub visibility: Visibility,
    /// Only records of this owner (any owner when `None`)
    pub owner: Option<String>,
}

impl SourceFilter {
    /// Every public record, whoever recorded it
    pub fn public() -> Self {
        Self {
            visibility: Visibility::Public,
            owner: None,
        }
    }

    /// The private records of one owner
    pub fn private(owner: impl Into<String>) -> Self {
        Self {
            visibility: Visibility::Private,
            owner: Some(owner.into()),
        }
    }

    /// Check whether a record passes this filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        txn.visibility == self.visibility
            && self.owner.as_deref().map_or(true, |owner| txn.owner == owner)
    }
}

/// Supplier of materialized transaction sequences
pub trait TransactionSource {
    /// All records of `kind` within `period` that pass `filter`
    fn fetch(
        &self,
        kind: TransactionKind,
        period: ReportPeriod,
        filter: &SourceFilter,
    ) -> ReportResult<Vec<Transaction>>;

    fn fetch_expenses(
        &self,
        period: ReportPeriod,
        filter: &SourceFilter,
    ) -> ReportResult<Vec<Transaction>> {
        self.fetch(TransactionKind::Expense, period, filter)
    }

    fn fetch_incomes(
        &self,
        period: ReportPeriod,
        filter: &SourceFilter,
    ) -> ReportResult<Vec<Transaction>> {
        self.fetch(TransactionKind::Income, period, filter)
    }
}

/// Select the records of `kind` in `period` passing `filter`, keeping order
pub(crate) fn select<'a, I>(
    records: I,
    kind: TransactionKind,
    period: ReportPeriod,
    filter: &SourceFilter,
) -> Vec<Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    records
        .into_iter()
        .filter(|t| t.kind == kind && period.contains(t.date) && filter.matches(t))
        .cloned()
        .collect()
}
