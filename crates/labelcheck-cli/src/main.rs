//! # labelcheck CLI entry point
//!
//! Parses command-line arguments, installs the tracing subscriber, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use labelcheck_cli::catalog::{run_catalog, CatalogArgs};
use labelcheck_cli::report::{run_report, ReportArgs};
use labelcheck_cli::summary::{run_summary, SummaryArgs};
use labelcheck_cli::template::{run_template, TemplateArgs};
use labelcheck_cli::Environment;

/// Food-label compliance checklist
///
/// Audits a product label against Colombian nutritional labeling
/// resolutions: answers come from an answer sheet, results are printed
/// as a summary or rendered as a paginated PDF report.
#[derive(Parser, Debug)]
#[command(name = "labelcheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog YAML to use instead of the built-in checklist.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output directory for generated reports.
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the checklist catalog.
    Catalog(CatalogArgs),

    /// Apply an answer sheet and print aggregates and the item list.
    Summary(SummaryArgs),

    /// Apply an answer sheet and write the PDF report.
    Report(ReportArgs),

    /// Print an answer-sheet template for the active catalog.
    Template(TemplateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("labelcheck CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = Environment::load(
        cli.config.as_deref(),
        cli.catalog.as_deref(),
        cli.output_dir.as_deref(),
    )
    .and_then(|env| {
        let mut out = std::io::stdout().lock();
        match cli.command {
            Commands::Catalog(args) => run_catalog(&args, &env, &mut out),
            Commands::Summary(args) => run_summary(&args, &env, &mut out),
            Commands::Report(args) => run_report(&args, &env, &mut out),
            Commands::Template(args) => run_template(&args, &env, &mut out),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
