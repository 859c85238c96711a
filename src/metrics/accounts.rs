//! Per-account summary
//!
//! Totals income and expenses for each account a month's records were
//! booked against. Accounts are ordered by name.

use std::collections::BTreeMap;

use super::rows::AccountSummaryRow;
use crate::models::{Money, TransactionSet};

/// Label for records that name no account at all
pub const NO_ACCOUNT: &str = "(no account)";

/// Income, expenses and balance per account
pub fn account_summary(
    expenses: &TransactionSet,
    incomes: &TransactionSet,
) -> Vec<AccountSummaryRow> {
    let mut totals: BTreeMap<&str, (Money, Money)> = BTreeMap::new();

    for txn in incomes {
        let entry = totals
            .entry(txn.account().unwrap_or(NO_ACCOUNT))
            .or_insert((Money::zero(), Money::zero()));
        entry.0 += txn.amount;
    }

    for txn in expenses {
        let entry = totals
            .entry(txn.account().unwrap_or(NO_ACCOUNT))
            .or_insert((Money::zero(), Money::zero()));
        entry.1 += txn.amount;
    }

    totals
        .into_iter()
        .map(|(account, (income, expense))| AccountSummaryRow {
            account: account.to_string(),
            total_income: income,
            total_expenses: expense,
            balance: income - expense,
        })
        .collect()
}
