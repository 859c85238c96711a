//! Spreadsheet emitter
//!
//! One worksheet per report section. The analysis sheet carries a bar chart
//! over the metric values and the category sheet a pie chart over the
//! amounts; raw transaction sheets are not charted.

use rust_xlsxwriter::{Chart, ChartType, ColNum, Format, RowNum, Workbook, Worksheet};

use super::format::format_metric;
use super::{Document, DocumentEmitter, ExportOptions, ReportFormat};
use crate::error::ReportResult;
use crate::metrics::{AccountSummaryRow, CategoryBreakdownRow, MetricRow, MetricValue};
use crate::models::Transaction;
use crate::reports::{Report, SectionBody, SectionKind};

/// Column where charts are anchored
const CHART_COLUMN: ColNum = 4;

/// Worksheet name of a section
pub fn sheet_name(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Analysis => "Financial Analysis",
        SectionKind::AccountSummary => "Accounts",
        SectionKind::CategorySpending => "Category Spending",
        SectionKind::Incomes => "Incomes",
        SectionKind::Expenses => "Expenses",
    }
}

/// Cell formats shared by every sheet
struct Formats {
    header: Format,
    currency: Format,
    percent: Format,
}

impl Formats {
    fn new(symbol: &str) -> Self {
        Self {
            header: Format::new().set_bold(),
            currency: Format::new().set_num_format(format!("\"{}\"#,##0.00", symbol)),
            percent: Format::new().set_num_format("0.00\"%\""),
        }
    }
}

/// Multi-sheet XLSX writer with charts
#[derive(Debug, Clone, Default)]
pub struct XlsxEmitter {
    options: ExportOptions,
}

impl XlsxEmitter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    fn write_metrics(
        &self,
        sheet: &mut Worksheet,
        name: &str,
        title: &str,
        rows: &[MetricRow],
        formats: &Formats,
    ) -> ReportResult<()> {
        write_header(sheet, &["Metric", "Value", "Formatted"], formats)?;

        for (i, row) in rows.iter().enumerate() {
            let r = i as RowNum + 1;
            sheet.write_string(r, 0, row.metric.label())?;
            let format = match row.value {
                MetricValue::Currency(_) => &formats.currency,
                MetricValue::Percent(_) => &formats.percent,
            };
            sheet.write_number_with_format(r, 1, row.value.as_f64(), format)?;
            sheet.write_string(r, 2, format_metric(row.value, &self.options.currency_symbol))?;
        }
        sheet.set_column_width(0, 34)?;
        sheet.set_column_width(2, 16)?;

        if !rows.is_empty() {
            let last = rows.len() as RowNum;
            let mut chart = Chart::new(ChartType::Bar);
            chart
                .add_series()
                .set_name("Value")
                .set_categories((name, 1, 0, last, 0))
                .set_values((name, 1, 1, last, 1));
            chart.title().set_name(title);
            chart.legend().set_hidden();
            sheet.insert_chart(1, CHART_COLUMN, &chart)?;
        }
        Ok(())
    }

    fn write_categories(
        &self,
        sheet: &mut Worksheet,
        name: &str,
        title: &str,
        rows: &[CategoryBreakdownRow],
        formats: &Formats,
    ) -> ReportResult<()> {
        write_header(sheet, &["Category", "Amount", "Share"], formats)?;

        for (i, row) in rows.iter().enumerate() {
            let r = i as RowNum + 1;
            sheet.write_string(r, 0, row.label(&self.options.uncategorized_label))?;
            sheet.write_number_with_format(r, 1, row.amount.as_f64(), &formats.currency)?;
            sheet.write_number_with_format(r, 2, row.percentage, &formats.percent)?;
        }
        sheet.set_column_width(0, 24)?;

        if !rows.is_empty() {
            let last = rows.len() as RowNum;
            let mut chart = Chart::new(ChartType::Pie);
            chart
                .add_series()
                .set_name("Amount")
                .set_categories((name, 1, 0, last, 0))
                .set_values((name, 1, 1, last, 1));
            chart.title().set_name(title);
            sheet.insert_chart(1, CHART_COLUMN, &chart)?;
        }
        Ok(())
    }

    fn write_accounts(
        &self,
        sheet: &mut Worksheet,
        rows: &[AccountSummaryRow],
        formats: &Formats,
    ) -> ReportResult<()> {
        write_header(
            sheet,
            &["Account", "Total Income", "Total Expenses", "Balance"],
            formats,
        )?;

        for (i, row) in rows.iter().enumerate() {
            let r = i as RowNum + 1;
            sheet.write_string(r, 0, row.account.as_str())?;
            sheet.write_number_with_format(r, 1, row.total_income.as_f64(), &formats.currency)?;
            sheet.write_number_with_format(r, 2, row.total_expenses.as_f64(), &formats.currency)?;
            sheet.write_number_with_format(r, 3, row.balance.as_f64(), &formats.currency)?;
        }
        sheet.set_column_width(0, 24)?;
        Ok(())
    }

    fn write_transactions(
        &self,
        sheet: &mut Worksheet,
        rows: &[Transaction],
        formats: &Formats,
    ) -> ReportResult<()> {
        write_header(
            sheet,
            &[
                "Date",
                "Amount",
                "Description",
                "Category",
                "Source Account",
                "Destination Account",
                "Owner",
            ],
            formats,
        )?;

        for (i, txn) in rows.iter().enumerate() {
            let r = i as RowNum + 1;
            sheet.write_string(r, 0, txn.date.format("%Y-%m-%d").to_string())?;
            sheet.write_number_with_format(r, 1, txn.amount.as_f64(), &formats.currency)?;
            let text_fields = [
                txn.description.as_deref(),
                txn.category.as_deref(),
                txn.source_account.as_deref(),
                txn.destination_account.as_deref(),
                Some(txn.owner.as_str()),
            ];
            for (offset, field) in text_fields.into_iter().enumerate() {
                if let Some(value) = field {
                    sheet.write_string(r, offset as ColNum + 2, value)?;
                }
            }
        }
        sheet.set_column_width(2, 30)?;
        Ok(())
    }
}

impl DocumentEmitter for XlsxEmitter {
    fn format(&self) -> ReportFormat {
        ReportFormat::Xlsx
    }

    fn emit(&self, report: &Report) -> ReportResult<Document> {
        let formats = Formats::new(&self.options.currency_symbol);
        let mut workbook = Workbook::new();

        for section in &report.sections {
            let name = sheet_name(section.kind);
            let sheet = workbook.add_worksheet();
            sheet.set_name(name)?;

            match &section.body {
                SectionBody::Metrics(rows) => {
                    self.write_metrics(sheet, name, &report.title, rows, &formats)?
                }
                SectionBody::Categories(rows) => {
                    self.write_categories(sheet, name, section.title(), rows, &formats)?
                }
                SectionBody::Accounts(rows) => self.write_accounts(sheet, rows, &formats)?,
                SectionBody::Transactions(rows) => {
                    self.write_transactions(sheet, rows, &formats)?
                }
            }
        }

        let bytes = workbook.save_to_buffer()?;
        Ok(Document {
            bytes,
            media_type: self.format().media_type(),
            filename: self.format().filename(report),
        })
    }
}

fn write_header(sheet: &mut Worksheet, columns: &[&str], formats: &Formats) -> ReportResult<()> {
    for (col, title) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as ColNum, *title, &formats.header)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{FixedCategories, ProjectionHorizons};
    use crate::models::{Money, ReportPeriod, TransactionKind, TransactionSet};
    use crate::reports::{PreviousMonth, ReportAssembler, ReportInputs, ReportVariant};
    use chrono::NaiveDate;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    fn report(variant: ReportVariant, with_data: bool) -> Report {
        let period = ReportPeriod::new(2025, 6).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let (expenses, incomes) = if with_data {
            (
                vec![
                    Transaction::expense(date, Money::from_cents(90000), "ana").with_category("Rent"),
                    Transaction::expense(date, Money::from_cents(12000), "ana")
                        .with_category("Food"),
                    Transaction::expense(date, Money::from_cents(3000), "ana"),
                ],
                vec![Transaction::income(date, Money::from_cents(250000), "ana")],
            )
        } else {
            (vec![], vec![])
        };
        let expenses = TransactionSet::expenses(period, expenses).unwrap();
        let incomes = TransactionSet::incomes(period, incomes).unwrap();

        let may = ReportPeriod::new(2025, 5).unwrap();
        let prev_expenses = TransactionSet::empty(TransactionKind::Expense, may);
        let prev_incomes = TransactionSet::empty(TransactionKind::Income, may);

        ReportAssembler::new(FixedCategories::new(["Rent"]), ProjectionHorizons::default())
            .assemble(ReportInputs {
                variant,
                owner: Some("ana"),
                expenses: &expenses,
                incomes: &incomes,
                previous: Some(PreviousMonth {
                    expenses: &prev_expenses,
                    incomes: &prev_incomes,
                }),
            })
            .unwrap()
    }

    /// Unpacked workbook parts
    struct Parts(ZipArchive<Cursor<Vec<u8>>>);

    impl Parts {
        fn of(document: &Document) -> Self {
            Self(ZipArchive::new(Cursor::new(document.bytes.clone())).unwrap())
        }

        fn read(&mut self, name: &str) -> String {
            let mut text = String::new();
            self.0
                .by_name(name)
                .unwrap()
                .read_to_string(&mut text)
                .unwrap();
            text
        }

        fn charts(&mut self) -> Vec<String> {
            let mut names: Vec<String> = self
                .0
                .file_names()
                .filter(|name| name.starts_with("xl/charts/chart"))
                .map(str::to_string)
                .collect();
            names.sort();
            names.iter().map(|name| self.read(name)).collect()
        }

        fn sheet_has_drawing(&mut self, index: usize) -> bool {
            self.read(&format!("xl/worksheets/sheet{}.xml", index))
                .contains("<drawing")
        }
    }

    #[test]
    fn test_emits_zip_container() {
        let document = XlsxEmitter::default()
            .emit(&report(ReportVariant::PrivateDetailed, true))
            .unwrap();
        assert!(document.bytes.starts_with(b"PK"));
        assert_eq!(
            document.media_type,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert_eq!(document.filename, "private_detailed_transactions_2025_06.xlsx");
    }

    #[test]
    fn test_charts_cover_analysis_and_categories() {
        let document = XlsxEmitter::default()
            .emit(&report(ReportVariant::PrivateDetailed, true))
            .unwrap();
        let mut parts = Parts::of(&document);

        let workbook = parts.read("xl/workbook.xml");
        for kind in ReportVariant::PrivateDetailed.sections() {
            assert!(workbook.contains(sheet_name(*kind)), "{}", sheet_name(*kind));
        }

        let charts = parts.charts();
        assert_eq!(charts.len(), 2);

        let bar = charts
            .iter()
            .find(|xml| xml.contains("c:barChart"))
            .expect("bar chart");
        assert!(bar.contains("'Financial Analysis'!$A$2:$A$13"));
        assert!(bar.contains("'Financial Analysis'!$B$2:$B$13"));

        let pie = charts
            .iter()
            .find(|xml| xml.contains("c:pieChart"))
            .expect("pie chart");
        assert!(pie.contains("'Category Spending'!$A$2:$A$4"));
        assert!(pie.contains("'Category Spending'!$B$2:$B$4"));

        // Analysis, Accounts, Category Spending, Incomes, Expenses
        assert!(parts.sheet_has_drawing(1));
        assert!(!parts.sheet_has_drawing(2));
        assert!(parts.sheet_has_drawing(3));
        assert!(!parts.sheet_has_drawing(4));
        assert!(!parts.sheet_has_drawing(5));
    }

    #[test]
    fn test_empty_categories_get_no_pie_chart() {
        let document = XlsxEmitter::default()
            .emit(&report(ReportVariant::Public, false))
            .unwrap();
        let mut parts = Parts::of(&document);

        let charts = parts.charts();
        assert_eq!(charts.len(), 1);
        assert!(charts[0].contains("c:barChart"));
        assert!(charts[0].contains("'Financial Analysis'!$B$2:$B$11"));
        assert!(!charts[0].contains("c:pieChart"));

        // Financial Analysis, Category Spending, Incomes, Expenses
        assert!(parts.sheet_has_drawing(1));
        assert!(!parts.sheet_has_drawing(2));
        assert!(!parts.sheet_has_drawing(3));
        assert!(!parts.sheet_has_drawing(4));
    }

    #[test]
    fn test_sheet_names_are_unique_and_short() {
        let names: Vec<&str> = ReportVariant::PrivateDetailed
            .sections()
            .iter()
            .map(|kind| sheet_name(*kind))
            .collect();
        for (i, name) in names.iter().enumerate() {
            assert!(name.len() <= 31);
            assert!(!names[i + 1..].contains(name));
        }
    }
}
