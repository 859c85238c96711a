//! Transaction sets
//!
//! A [`TransactionSet`] is the immutable input of one report: every record
//! shares one kind and falls within one calendar month.

use super::money::Money;
use super::period::ReportPeriod;
use super::transaction::{Transaction, TransactionKind};
use crate::error::{ReportError, ReportResult};

/// All expenses or all incomes of one month
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionSet {
    kind: TransactionKind,
    period: ReportPeriod,
    transactions: Vec<Transaction>,
}

impl TransactionSet {
    /// Build a set, checking kind and month of every record
    pub fn new(
        kind: TransactionKind,
        period: ReportPeriod,
        transactions: Vec<Transaction>,
    ) -> ReportResult<Self> {
        if let Some(txn) = transactions.iter().find(|t| t.kind != kind) {
            return Err(ReportError::Validation(format!(
                "{} set contains a {} record dated {}",
                kind, txn.kind, txn.date
            )));
        }

        if let Some(txn) = transactions.iter().find(|t| !period.contains(t.date)) {
            return Err(ReportError::Validation(format!(
                "{} dated {} falls outside {}",
                txn.kind, txn.date, period
            )));
        }

        Ok(Self {
            kind,
            period,
            transactions,
        })
    }

    /// An empty set for the period
    pub fn empty(kind: TransactionKind, period: ReportPeriod) -> Self {
        Self {
            kind,
            period,
            transactions: Vec::new(),
        }
    }

    pub fn expenses(period: ReportPeriod, transactions: Vec<Transaction>) -> ReportResult<Self> {
        Self::new(TransactionKind::Expense, period, transactions)
    }

    pub fn incomes(period: ReportPeriod, transactions: Vec<Transaction>) -> ReportResult<Self> {
        Self::new(TransactionKind::Income, period, transactions)
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn period(&self) -> ReportPeriod {
        self.period
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of all amounts
    pub fn total(&self) -> Money {
        self.transactions.iter().map(|t| t.amount).sum()
    }
}

impl<'a> IntoIterator for &'a TransactionSet {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
