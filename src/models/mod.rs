//! Core data models for family-report
//!
//! This module contains the data structures a report is computed from:
//! monetary amounts, report periods, transactions and transaction sets.

pub mod money;
pub mod period;
pub mod set;
pub mod transaction;

pub use money::Money;
pub use period::{ReportPeriod, RolloverPolicy};
pub use set::TransactionSet;
pub use transaction::{Transaction, TransactionKind, Visibility};
