//! Transaction model
//!
//! Expenses and incomes share one shape and are distinguished by
//! [`TransactionKind`]. Amounts are always stored positive; the sign is
//! implied by the kind.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Whether a record is money going out or coming in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "expense"),
            Self::Income => write!(f, "income"),
        }
    }
}

/// Visibility of the account a transaction was booked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Shared with the whole family
    Public,
    /// Visible only to the owner; also assumed when a record omits it
    #[default]
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
        }
    }
}

/// A single income or expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Expense or income
    pub kind: TransactionKind,

    /// Transaction date
    pub date: NaiveDate,

    /// Amount (always positive)
    pub amount: Money,

    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Category name; `None` is reported as uncategorized
    #[serde(default)]
    pub category: Option<String>,

    /// Account the money left
    #[serde(default)]
    pub source_account: Option<String>,

    /// Account the money arrived in
    #[serde(default)]
    pub destination_account: Option<String>,

    /// Who recorded the transaction
    pub owner: String,

    /// Visibility of the booking account; private when missing
    #[serde(default)]
    pub visibility: Visibility,
}

impl Transaction {
    /// Create a new expense
    pub fn expense(date: NaiveDate, amount: Money, owner: impl Into<String>) -> Self {
        Self::new(TransactionKind::Expense, date, amount, owner)
    }

    /// Create a new income
    pub fn income(date: NaiveDate, amount: Money, owner: impl Into<String>) -> Self {
        Self::new(TransactionKind::Income, date, amount, owner)
    }

    /// Create a new public transaction with no category, accounts or description
    pub fn new(
        kind: TransactionKind,
        date: NaiveDate,
        amount: Money,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            date,
            amount,
            description: None,
            category: None,
            source_account: None,
            destination_account: None,
            owner: owner.into(),
            visibility: Visibility::Public,
        }
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the source account
    pub fn from_account(mut self, account: impl Into<String>) -> Self {
        self.source_account = Some(account.into());
        self
    }

    /// Set the destination account
    pub fn to_account(mut self, account: impl Into<String>) -> Self {
        self.destination_account = Some(account.into());
        self
    }

    /// Mark the transaction as booked on a private account
    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    /// The account this transaction is booked against
    ///
    /// Expenses are booked on the account the money left, incomes on the
    /// account it arrived in; either falls back to the other side.
    pub fn account(&self) -> Option<&str> {
        let (primary, fallback) = match self.kind {
            TransactionKind::Expense => (&self.source_account, &self.destination_account),
            TransactionKind::Income => (&self.destination_account, &self.source_account),
        };
        primary.as_deref().or(fallback.as_deref())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.description.as_deref().unwrap_or(""),
            self.amount
        )
    }
}
