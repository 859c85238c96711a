//! CLI commands for reports
//!
//! Bridges clap argument parsing with the report service: `report` writes a
//! document to disk, `summary` prints the report to the terminal.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::Settings;
use crate::display::{render_report, separator};
use crate::error::{ReportError, ReportResult};
use crate::export::{format_currency, format_percent, ExportOptions, ReportFormat};
use crate::metrics::top_categories;
use crate::models::ReportPeriod;
use crate::reports::{ReportRequest, ReportService, ReportVariant};
use crate::source::TransactionSource;

/// Which report to build
#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// Report month (e.g., "2025-03"); defaults to the current month
    #[arg(short, long)]
    pub period: Option<String>,

    /// Report variant
    #[arg(short, long, value_enum, default_value_t = ReportVariant::Public)]
    pub variant: ReportVariant,

    /// Owner whose private accounts are reported
    #[arg(short, long)]
    pub owner: Option<String>,
}

impl RequestArgs {
    /// Resolve the arguments into a request
    pub fn to_request(&self, format: ReportFormat) -> ReportResult<ReportRequest> {
        let period = match &self.period {
            Some(period) => ReportPeriod::parse(period)?,
            None => ReportPeriod::current_month(),
        };

        Ok(ReportRequest {
            period,
            variant: self.variant,
            owner: self.owner.clone(),
            format,
        })
    }
}

/// Arguments of the `report` command
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Output format; defaults to the configured format
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Output file; defaults to the suggested file name
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Generate a report document and write it to disk
pub fn handle_report_command<S: TransactionSource + ?Sized>(
    source: &S,
    settings: &Settings,
    args: ReportArgs,
) -> ReportResult<PathBuf> {
    let format = args.format.unwrap_or(settings.default_format);
    let request = args.request.to_request(format)?;

    let document = ReportService::new(source, settings).export(&request)?;
    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(&document.filename));

    std::fs::write(&path, &document.bytes).map_err(|e| {
        ReportError::Export(format!("Failed to write {}: {}", path.display(), e))
    })?;

    info!(path = %path.display(), media_type = document.media_type, "report written");
    println!("Report exported to: {}", path.display());
    Ok(path)
}

/// Arguments of the `summary` command
#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Show the top N spending categories only
    #[arg(long)]
    pub top: Option<usize>,
}

/// Print a report to the terminal
pub fn handle_summary_command<S: TransactionSource + ?Sized>(
    source: &S,
    settings: &Settings,
    args: SummaryArgs,
) -> ReportResult<()> {
    let request = args.request.to_request(settings.default_format)?;
    let report = ReportService::new(source, settings).generate(&request)?;
    let options = ExportOptions::from(settings);

    match args.top {
        Some(n) => {
            println!("Top {} Spending Categories: {}\n", n, report.period);
            println!("{:<35} {:>12} {:>8}", "Category", "Amount", "%");
            println!("{}", separator(60));
            for row in top_categories(report.category_rows(), n) {
                println!(
                    "{:<35} {:>12} {:>8}",
                    row.label(&options.uncategorized_label),
                    format_currency(row.amount, &options.currency_symbol),
                    format_percent(row.percentage)
                );
            }
            println!(
                "\nTotal Spending: {}",
                format_currency(report.summary.total_expenses, &options.currency_symbol)
            );
        }
        None => println!("{}", render_report(&report, &options)),
    }
    Ok(())
}
