//! CSV emitter
//!
//! Writes a report as one delimited-text document: a `# <title>` banner,
//! then for every section a `### <Section> ###` title line, a header row,
//! the section's rows and a blank line. Fields are quoted by the csv writer.

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use super::format::{format_currency, format_metric, format_percent};
use super::{Document, DocumentEmitter, ExportOptions, ReportFormat};
use crate::error::{ReportError, ReportResult};
use crate::models::Transaction;
use crate::reports::{Report, Section, SectionBody};

pub const ANALYSIS_HEADER: [&str; 2] = ["Metric", "Value"];
pub const CATEGORY_HEADER: [&str; 3] = ["Category", "Amount", "Share"];
pub const ACCOUNT_HEADER: [&str; 4] = ["Account", "Total Income", "Total Expenses", "Balance"];
pub const TRANSACTION_HEADER: [&str; 7] = [
    "Date",
    "Amount",
    "Description",
    "Category",
    "Source Account",
    "Destination Account",
    "Owner",
];

/// Multi-section CSV writer
#[derive(Debug, Clone, Default)]
pub struct CsvEmitter {
    options: ExportOptions,
}

impl CsvEmitter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    fn write_section(&self, out: &mut Vec<u8>, section: &Section) -> ReportResult<()> {
        let symbol = self.options.currency_symbol.as_str();
        let mut wtr = WriterBuilder::new()
            .flexible(true)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut *out);

        wtr.write_record([section_line(section.title())])?;

        match &section.body {
            SectionBody::Metrics(rows) => {
                wtr.write_record(ANALYSIS_HEADER)?;
                for row in rows {
                    wtr.write_record([row.metric.label(), format_metric(row.value, symbol)])?;
                }
            }
            SectionBody::Categories(rows) => {
                wtr.write_record(CATEGORY_HEADER)?;
                for row in rows {
                    wtr.write_record([
                        row.label(&self.options.uncategorized_label).to_string(),
                        format_currency(row.amount, symbol),
                        format_percent(row.percentage),
                    ])?;
                }
            }
            SectionBody::Accounts(rows) => {
                wtr.write_record(ACCOUNT_HEADER)?;
                for row in rows {
                    wtr.write_record([
                        row.account.clone(),
                        format_currency(row.total_income, symbol),
                        format_currency(row.total_expenses, symbol),
                        format_currency(row.balance, symbol),
                    ])?;
                }
            }
            SectionBody::Transactions(rows) => {
                wtr.write_record(TRANSACTION_HEADER)?;
                for txn in rows {
                    wtr.write_record(transaction_record(txn, symbol))?;
                }
            }
        }

        wtr.flush()?;
        drop(wtr);
        out.push(b'\n');
        Ok(())
    }
}

impl DocumentEmitter for CsvEmitter {
    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }

    fn emit(&self, report: &Report) -> ReportResult<Document> {
        let mut out = Vec::new();

        {
            let mut wtr = WriterBuilder::new()
                .terminator(Terminator::Any(b'\n'))
                .from_writer(&mut out);
            wtr.write_record([format!("# {}", report.title)])?;
            wtr.flush()?;
        }

        for section in &report.sections {
            self.write_section(&mut out, section)?;
        }

        Ok(Document {
            bytes: out,
            media_type: self.format().media_type(),
            filename: self.format().filename(report),
        })
    }
}

fn section_line(title: &str) -> String {
    format!("### {} ###", title)
}

fn transaction_record(txn: &Transaction, symbol: &str) -> [String; 7] {
    [
        txn.date.format("%Y-%m-%d").to_string(),
        format_currency(txn.amount, symbol),
        txn.description.clone().unwrap_or_default(),
        txn.category.clone().unwrap_or_default(),
        txn.source_account.clone().unwrap_or_default(),
        txn.destination_account.clone().unwrap_or_default(),
        txn.owner.clone(),
    ]
}

/// One section read back from a CSV document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSection {
    pub title: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Split a CSV document back into its titled sections
pub fn parse_sections(bytes: &[u8]) -> ReportResult<Vec<ParsedSection>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut sections: Vec<ParsedSection> = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| {
            ReportError::Export(format!("CSV parse error at record {}: {}", i + 1, e))
        })?;

        if let Some(title) = section_title(&record) {
            sections.push(ParsedSection {
                title: title.to_string(),
                header: Vec::new(),
                rows: Vec::new(),
            });
            continue;
        }

        let fields: Vec<String> = record.iter().map(str::to_string).collect();
        match sections.last_mut() {
            Some(section) if section.header.is_empty() => section.header = fields,
            Some(section) => section.rows.push(fields),
            // Banner line
            None => {}
        }
    }

    Ok(sections)
}

fn section_title(record: &StringRecord) -> Option<&str> {
    if record.len() != 1 {
        return None;
    }
    record
        .get(0)?
        .strip_prefix("### ")?
        .strip_suffix(" ###")
}
