//! Report variants
//!
//! One descriptor drives the assembler instead of one generator per
//! variant: it decides which records are visible and which sections the
//! report contains, in what order.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::source::SourceFilter;

/// The sections a report can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Analysis,
    AccountSummary,
    CategorySpending,
    Incomes,
    Expenses,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Analysis => "Financial Analysis",
            Self::AccountSummary => "Account Summary",
            Self::CategorySpending => "Category Spending Percentage",
            Self::Incomes => "Incomes",
            Self::Expenses => "Expenses",
        }
    }

    /// Look a section up by its title
    pub fn from_title(title: &str) -> Option<Self> {
        [
            Self::Analysis,
            Self::AccountSummary,
            Self::CategorySpending,
            Self::Incomes,
            Self::Expenses,
        ]
        .into_iter()
        .find(|kind| kind.title() == title)
    }
}

/// Which report is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReportVariant {
    /// Every public transaction of the family
    #[default]
    Public,
    /// One owner's private accounts
    PrivateSimple,
    /// One owner's private accounts, compared with the previous month
    PrivateDetailed,
}

impl ReportVariant {
    pub fn is_private(&self) -> bool {
        !matches!(self, Self::Public)
    }

    /// Whether previous-month deltas are part of the analysis
    pub fn is_comparative(&self) -> bool {
        matches!(self, Self::PrivateDetailed)
    }

    /// Sections in output order
    pub fn sections(&self) -> &'static [SectionKind] {
        use SectionKind::*;
        match self {
            Self::Public => &[Analysis, CategorySpending, Incomes, Expenses],
            Self::PrivateSimple | Self::PrivateDetailed => {
                &[Analysis, AccountSummary, CategorySpending, Incomes, Expenses]
            }
        }
    }

    /// The visibility filter for this variant
    ///
    /// Private variants need an owner; `None` is returned without one.
    pub fn filter(&self, owner: Option<&str>) -> Option<SourceFilter> {
        match self {
            Self::Public => Some(SourceFilter::public()),
            Self::PrivateSimple | Self::PrivateDetailed => owner.map(SourceFilter::private),
        }
    }

    /// Short name used in file names
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::PrivateSimple => "private",
            Self::PrivateDetailed => "private_detailed",
        }
    }

    /// Banner heading of the report
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Public => "Analysis of All Public Transactions",
            Self::PrivateSimple => "Analysis of Private Accounts",
            Self::PrivateDetailed => "Detailed Analysis of Private Accounts",
        }
    }
}

impl fmt::Display for ReportVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::PrivateSimple => write!(f, "private-simple"),
            Self::PrivateDetailed => write!(f, "private-detailed"),
        }
    }
}
