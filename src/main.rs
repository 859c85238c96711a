use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use family_report::cli::{handle_report_command, handle_summary_command, ReportArgs, SummaryArgs};
use family_report::config::{ReportPaths, Settings};
use family_report::source::JsonFileSource;

#[derive(Parser)]
#[command(
    name = "family-report",
    author = "Kaylee Beyene",
    version,
    about = "Monthly family finance reports",
    long_about = "family-report analyses a month of family income and expense records \
                  and produces a multi-section report: totals, balance, fixed and \
                  variable spending, category shares and balance projections, as CSV \
                  or as a spreadsheet with charts."
)]
struct Cli {
    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// Transaction file (defaults to the data directory)
    #[arg(long, global = true, env = "FAMILY_REPORT_DATA")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a report document
    Report(ReportArgs),

    /// Print a report to the terminal
    Summary(SummaryArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level.to_string().to_lowercase());

    // Initialize paths and settings
    let paths = ReportPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let data_file = cli.data.unwrap_or_else(|| paths.transactions_file());
    let source = JsonFileSource::new(&data_file);

    match cli.command {
        Some(Commands::Report(args)) => {
            handle_report_command(&source, &settings, args)?;
        }
        Some(Commands::Summary(args)) => {
            handle_summary_command(&source, &settings, args)?;
        }
        Some(Commands::Config) => {
            println!("family-report Configuration");
            println!("===========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Transaction file:  {}", data_file.display());
            println!();
            println!("Settings:");
            let fixed: Vec<&str> = settings.fixed_categories.iter().collect();
            println!("  Fixed categories:    {}", fixed.join(", "));
            println!(
                "  Projections:         {} and {} months",
                settings.projection_horizons.short, settings.projection_horizons.long
            );
            println!("  Year rollover:       {:?}", settings.rollover);
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Uncategorized label: {}", settings.uncategorized_label);
            println!("  Default format:      {}", settings.default_format);
        }
        None => {
            println!("family-report - Monthly family finance reports");
            println!();
            println!("Run 'family-report --help' for usage information.");
        }
    }

    Ok(())
}

pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
