//! Report Assembler
//!
//! Lays calculated metrics and raw transactions out as an ordered list of
//! sections. The variant alone decides which sections exist: a month with
//! no data still gets every section, each with an empty body.

use serde::Serialize;

use super::variant::{ReportVariant, SectionKind};
use crate::error::{ReportError, ReportResult};
use crate::metrics::{
    account_summary, category_breakdown, AccountSummaryRow, CategoryBreakdownRow,
    FinancialSummary, FixedCategories, MetricRow, MonthComparison, ProjectionHorizons,
};
use crate::models::{ReportPeriod, Transaction, TransactionSet};

/// Contents of one section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "rows", rename_all = "snake_case")]
pub enum SectionBody {
    Metrics(Vec<MetricRow>),
    Accounts(Vec<AccountSummaryRow>),
    Categories(Vec<CategoryBreakdownRow>),
    Transactions(Vec<Transaction>),
}

impl SectionBody {
    pub fn len(&self) -> usize {
        match self {
            Self::Metrics(rows) => rows.len(),
            Self::Accounts(rows) => rows.len(),
            Self::Categories(rows) => rows.len(),
            Self::Transactions(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A titled block of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub body: SectionBody,
}

impl Section {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}

/// A fully assembled report, ready for a document emitter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Banner line
    pub title: String,
    pub variant: ReportVariant,
    pub period: ReportPeriod,
    pub owner: Option<String>,
    pub summary: FinancialSummary,
    pub comparison: Option<MonthComparison>,
    pub sections: Vec<Section>,
}

impl Report {
    /// Find a section by kind
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Rows of the analysis section
    pub fn metric_rows(&self) -> &[MetricRow] {
        match self.section(SectionKind::Analysis).map(|s| &s.body) {
            Some(SectionBody::Metrics(rows)) => rows,
            _ => &[],
        }
    }

    /// Rows of the category spending section
    pub fn category_rows(&self) -> &[CategoryBreakdownRow] {
        match self.section(SectionKind::CategorySpending).map(|s| &s.body) {
            Some(SectionBody::Categories(rows)) => rows,
            _ => &[],
        }
    }

    /// Rows of the account summary section (private variants only)
    pub fn account_rows(&self) -> &[AccountSummaryRow] {
        match self.section(SectionKind::AccountSummary).map(|s| &s.body) {
            Some(SectionBody::Accounts(rows)) => rows,
            _ => &[],
        }
    }
}

/// Expenses and incomes of the month before the report period
#[derive(Debug, Clone, Copy)]
pub struct PreviousMonth<'a> {
    pub expenses: &'a TransactionSet,
    pub incomes: &'a TransactionSet,
}

/// Everything the assembler needs for one report
#[derive(Debug, Clone, Copy)]
pub struct ReportInputs<'a> {
    pub variant: ReportVariant,
    pub owner: Option<&'a str>,
    pub expenses: &'a TransactionSet,
    pub incomes: &'a TransactionSet,
    /// Required by comparative variants, ignored by the others
    pub previous: Option<PreviousMonth<'a>>,
}

/// Builds reports from transaction sets
#[derive(Debug, Clone, Default)]
pub struct ReportAssembler {
    fixed: FixedCategories,
    horizons: ProjectionHorizons,
}

impl ReportAssembler {
    pub fn new(fixed: FixedCategories, horizons: ProjectionHorizons) -> Self {
        Self { fixed, horizons }
    }

    /// Calculate every metric and lay the sections out for the variant
    ///
    /// A comparative variant without the previous month is a validation
    /// error; a missing comparison is never reported as a 0% change.
    pub fn assemble(&self, inputs: ReportInputs<'_>) -> ReportResult<Report> {
        let ReportInputs {
            variant,
            owner,
            expenses,
            incomes,
            previous,
        } = inputs;
        let period = expenses.period();

        let summary = FinancialSummary::calculate(expenses, incomes, &self.fixed, self.horizons);

        let comparison = match (variant.is_comparative(), previous) {
            (false, _) => None,
            (true, Some(prev)) => Some(MonthComparison::calculate(
                expenses,
                incomes,
                prev.expenses,
                prev.incomes,
            )),
            (true, None) => {
                return Err(ReportError::Validation(format!(
                    "The {} report needs the previous month's records",
                    variant
                )))
            }
        };

        let sections = variant
            .sections()
            .iter()
            .map(|kind| {
                let body = match kind {
                    SectionKind::Analysis => {
                        let mut rows = summary.metric_rows();
                        if let Some(comparison) = &comparison {
                            rows.extend(comparison.metric_rows());
                        }
                        SectionBody::Metrics(rows)
                    }
                    SectionKind::AccountSummary => {
                        SectionBody::Accounts(account_summary(expenses, incomes))
                    }
                    SectionKind::CategorySpending => {
                        SectionBody::Categories(category_breakdown(expenses))
                    }
                    SectionKind::Incomes => SectionBody::Transactions(incomes.as_slice().to_vec()),
                    SectionKind::Expenses => {
                        SectionBody::Transactions(expenses.as_slice().to_vec())
                    }
                };
                Section { kind: *kind, body }
            })
            .collect();

        Ok(Report {
            title: report_title(variant, owner, period),
            variant,
            period,
            owner: owner.map(str::to_string),
            summary,
            comparison,
            sections,
        })
    }
}

fn report_title(variant: ReportVariant, owner: Option<&str>, period: ReportPeriod) -> String {
    match owner.filter(|_| variant.is_private()) {
        Some(owner) => format!("{} ({}) - {}", variant.heading(), owner, period),
        None => format!("{} - {}", variant.heading(), period),
    }
}
