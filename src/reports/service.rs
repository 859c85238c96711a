//! Report service
//!
//! Runs one report request end to end: fetch the month's records from a
//! transaction source, assemble the report, and hand it to an emitter.

use tracing::{debug, info};

use super::assembler::{PreviousMonth, Report, ReportAssembler, ReportInputs};
use super::variant::ReportVariant;
use crate::config::Settings;
use crate::error::{ReportError, ReportResult};
use crate::export::{Document, ExportOptions, ReportFormat};
use crate::models::{ReportPeriod, TransactionSet};
use crate::source::{SourceFilter, TransactionSource};

/// What the caller asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub period: ReportPeriod,
    pub variant: ReportVariant,
    /// Required by the private variants
    pub owner: Option<String>,
    pub format: ReportFormat,
}

impl ReportRequest {
    /// A public report in the default format
    pub fn public(period: ReportPeriod) -> Self {
        Self {
            period,
            variant: ReportVariant::Public,
            owner: None,
            format: ReportFormat::default(),
        }
    }

    /// A private report for one owner
    pub fn private(period: ReportPeriod, owner: impl Into<String>, detailed: bool) -> Self {
        Self {
            period,
            variant: if detailed {
                ReportVariant::PrivateDetailed
            } else {
                ReportVariant::PrivateSimple
            },
            owner: Some(owner.into()),
            format: ReportFormat::default(),
        }
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }
}

/// Service producing reports from a transaction source
pub struct ReportService<'a, S: TransactionSource + ?Sized> {
    source: &'a S,
    settings: &'a Settings,
}

impl<'a, S: TransactionSource + ?Sized> ReportService<'a, S> {
    /// Create a new report service
    pub fn new(source: &'a S, settings: &'a Settings) -> Self {
        Self { source, settings }
    }

    /// Fetch, calculate and assemble the requested report
    pub fn generate(&self, request: &ReportRequest) -> ReportResult<Report> {
        let variant = request.variant;
        let owner = request.owner.as_deref().map(str::trim).filter(|o| !o.is_empty());

        let filter = variant.filter(owner).ok_or_else(|| {
            ReportError::Validation(format!("The {} report requires an owner", variant))
        })?;

        let (expenses, incomes) = self.fetch_month(request.period, &filter)?;
        debug!(
            variant = %variant,
            period = %request.period,
            expenses = expenses.len(),
            incomes = incomes.len(),
            "fetched current month"
        );

        if variant.is_private() && expenses.is_empty() && incomes.is_empty() {
            return Err(ReportError::empty_result(
                owner.unwrap_or_default(),
                request.period,
            ));
        }

        let previous = if variant.is_comparative() {
            let prev_period = request.period.previous(self.settings.rollover)?;
            let sets = self.fetch_month(prev_period, &filter)?;
            debug!(
                period = %prev_period,
                expenses = sets.0.len(),
                incomes = sets.1.len(),
                "fetched previous month"
            );
            Some(sets)
        } else {
            None
        };

        let assembler = ReportAssembler::new(
            self.settings.fixed_categories.clone(),
            self.settings.projection_horizons,
        );
        let report = assembler.assemble(ReportInputs {
            variant,
            owner,
            expenses: &expenses,
            incomes: &incomes,
            previous: previous.as_ref().map(|(expenses, incomes)| PreviousMonth {
                expenses,
                incomes,
            }),
        })?;

        info!(title = %report.title, sections = report.sections.len(), "report assembled");
        Ok(report)
    }

    /// Generate the report and emit it in the requested format
    pub fn export(&self, request: &ReportRequest) -> ReportResult<Document> {
        let report = self.generate(request)?;
        let options = ExportOptions::from(self.settings);
        let document = request.format.emitter(options).emit(&report)?;

        info!(
            filename = %document.filename,
            bytes = document.bytes.len(),
            "document emitted"
        );
        Ok(document)
    }

    fn fetch_month(
        &self,
        period: ReportPeriod,
        filter: &SourceFilter,
    ) -> ReportResult<(TransactionSet, TransactionSet)> {
        let expenses = TransactionSet::expenses(period, self.source.fetch_expenses(period, filter)?)?;
        let incomes = TransactionSet::incomes(period, self.source.fetch_incomes(period, filter)?)?;
        Ok((expenses, incomes))
    }
}
