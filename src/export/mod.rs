//! Export module for family-report
//!
//! Serializes an assembled report into a downloadable document:
//! - CSV: multi-section delimited text
//! - XLSX: one sheet per section, with a bar chart over the analysis and a
//!   pie chart over category shares
//!
//! Emitters only lay out and format; they never compute or filter.

pub mod csv;
pub mod format;
pub mod xlsx;

pub use self::csv::{parse_sections, CsvEmitter, ParsedSection};
pub use format::{format_currency, format_metric, format_percent};
pub use xlsx::XlsxEmitter;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Settings;
use crate::error::ReportResult;
use crate::reports::Report;

/// Output format of a report document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Delimited text
    #[default]
    Csv,
    /// Spreadsheet with charts
    Xlsx,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }

    /// The emitter producing this format
    pub fn emitter(&self, options: ExportOptions) -> Box<dyn DocumentEmitter> {
        match self {
            Self::Csv => Box::new(CsvEmitter::new(options)),
            Self::Xlsx => Box::new(XlsxEmitter::new(options)),
        }
    }

    /// Suggested file name, e.g. `public_transactions_2025_03.csv`
    pub fn filename(&self, report: &Report) -> String {
        format!(
            "{}_transactions_{:04}_{:02}.{}",
            report.variant.slug(),
            report.period.year(),
            report.period.month(),
            self.extension()
        )
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Presentation settings shared by every emitter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub currency_symbol: String,
    pub uncategorized_label: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for ExportOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            uncategorized_label: settings.uncategorized_label.clone(),
        }
    }
}

/// An emitted report, ready to be delivered as an attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub bytes: Vec<u8>,
    pub media_type: &'static str,
    pub filename: String,
}

impl Document {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Serializes a report into one output format
pub trait DocumentEmitter {
    fn format(&self) -> ReportFormat;

    fn emit(&self, report: &Report) -> ReportResult<Document>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{FixedCategories, ProjectionHorizons};
    use crate::models::{ReportPeriod, TransactionKind, TransactionSet};
    use crate::reports::{ReportAssembler, ReportInputs, ReportVariant};

    fn empty_report(variant: ReportVariant, month: u32) -> Report {
        let period = ReportPeriod::new(2025, month).unwrap();
        let expenses = TransactionSet::empty(TransactionKind::Expense, period);
        let incomes = TransactionSet::empty(TransactionKind::Income, period);
        ReportAssembler::new(FixedCategories::default(), ProjectionHorizons::default()).assemble(
            ReportInputs {
                variant,
                owner: Some("ana"),
                expenses: &expenses,
                incomes: &incomes,
                previous: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_filenames() {
        let report = empty_report(ReportVariant::Public, 3);
        assert_eq!(
            ReportFormat::Csv.filename(&report),
            "public_transactions_2025_03.csv"
        );

        let report = empty_report(ReportVariant::PrivateSimple, 11);
        assert_eq!(
            ReportFormat::Xlsx.filename(&report),
            "private_transactions_2025_11.xlsx"
        );
    }

    #[test]
    fn test_emitter_selection() {
        for format in [ReportFormat::Csv, ReportFormat::Xlsx] {
            let emitter = format.emitter(ExportOptions::default());
            assert_eq!(emitter.format(), format);

            let document = emitter.emit(&empty_report(ReportVariant::Public, 1)).unwrap();
            assert_eq!(document.media_type, format.media_type());
            assert!(!document.is_empty());
        }
    }

    #[test]
    fn test_format_serde() {
        assert_eq!(serde_json::to_string(&ReportFormat::Xlsx).unwrap(), "\"xlsx\"");
        let format: ReportFormat = serde_json::from_str("\"csv\"").unwrap();
        assert_eq!(format, ReportFormat::Csv);
    }
}
