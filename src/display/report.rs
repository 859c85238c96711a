//! Report formatting for terminal output

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::export::{format_currency, format_metric, format_percent, ExportOptions};
use crate::models::Money;
use crate::reports::{Report, SectionBody};

const WIDTH: usize = 60;
const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct MetricLine {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct CategoryLine {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

#[derive(Tabled)]
struct AccountLine {
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Render every section of a report as text
pub fn render_report(report: &Report, options: &ExportOptions) -> String {
    let symbol = options.currency_symbol.as_str();
    let mut out = String::new();

    out.push_str(&double_separator(WIDTH));
    out.push('\n');
    out.push_str(&report.title);
    out.push('\n');
    out.push_str(&double_separator(WIDTH));
    out.push('\n');

    for section in &report.sections {
        out.push('\n');
        out.push_str(section.title());
        out.push('\n');
        out.push_str(&separator(section.title().chars().count()));
        out.push('\n');

        let body = match &section.body {
            SectionBody::Metrics(rows) => table(rows.iter().map(|row| MetricLine {
                metric: row.metric.label(),
                value: format_metric(row.value, symbol),
            })),
            SectionBody::Categories(rows) => {
                let max = rows.iter().map(|r| r.percentage).fold(0.0, f64::max);
                table(rows.iter().map(|row| CategoryLine {
                    category: row.label(&options.uncategorized_label).to_string(),
                    amount: format_currency(row.amount, symbol),
                    share: format_percent(row.percentage),
                    bar: format_bar(row.percentage, max, BAR_WIDTH),
                }))
            }
            SectionBody::Accounts(rows) => table(rows.iter().map(|row| AccountLine {
                account: row.account.clone(),
                income: format_currency(row.total_income, symbol),
                expenses: format_currency(row.total_expenses, symbol),
                balance: format_currency(row.balance, symbol),
            })),
            SectionBody::Transactions(rows) => {
                let total: Money = rows.iter().map(|t| t.amount).sum();
                format!(
                    "{} transactions, {}",
                    rows.len(),
                    format_currency(total, symbol)
                )
            }
        };
        out.push_str(&body);
        out.push('\n');
    }

    out
}

fn table<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    let mut rows = rows.into_iter().peekable();
    if rows.peek().is_none() {
        return "(none)".to_string();
    }
    Table::new(rows).with(Style::psql()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{FixedCategories, ProjectionHorizons};
    use crate::models::{ReportPeriod, Transaction, TransactionSet};
    use crate::reports::{ReportAssembler, ReportInputs, ReportVariant};
    use chrono::NaiveDate;

    fn report(with_data: bool) -> Report {
        let period = ReportPeriod::new(2025, 4).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        let expenses = if with_data {
            vec![
                Transaction::expense(date, Money::from_cents(80000), "ana").with_category("Rent"),
                Transaction::expense(date, Money::from_cents(20000), "ana").with_category("Food"),
            ]
        } else {
            vec![]
        };
        let expenses = TransactionSet::expenses(period, expenses).unwrap();
        let incomes = TransactionSet::incomes(
            period,
            vec![Transaction::income(date, Money::from_cents(200000), "ana")],
        )
        .unwrap();
        ReportAssembler::new(FixedCategories::new(["Rent"]), ProjectionHorizons::default())
            .assemble(ReportInputs {
                variant: ReportVariant::Public,
                owner: None,
                expenses: &expenses,
                incomes: &incomes,
                previous: None,
            })
            .unwrap()
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_render_report() {
        let text = render_report(&report(true), &ExportOptions::default());
        assert!(text.contains("Analysis of All Public Transactions - 2025-04"));
        assert!(text.contains("Financial Analysis"));
        assert!(text.contains("$2,000.00"));
        assert!(text.contains("Income Spent"));
        assert!(text.contains("50.00%"));
        assert!(text.contains("80.00%"));
        assert!(text.contains("1 transactions, $2,000.00"));
    }

    #[test]
    fn test_render_empty_sections() {
        let text = render_report(&report(false), &ExportOptions::default());
        assert!(text.contains("(none)"));
        assert!(text.contains("0 transactions, $0.00"));
    }
}
