//! In-memory transaction source

use super::{select, SourceFilter, TransactionSource};
use crate::error::ReportResult;
use crate::models::{ReportPeriod, Transaction, TransactionKind};

/// A source backed by a vector of records
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    transactions: Vec<Transaction>,
}

impl MemorySource {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl TransactionSource for MemorySource {
    fn fetch(
        &self,
        kind: TransactionKind,
        period: ReportPeriod,
        filter: &SourceFilter,
    ) -> ReportResult<Vec<Transaction>> {
        Ok(select(&self.transactions, kind, period, filter))
    }
}
