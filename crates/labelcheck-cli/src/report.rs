//! # Report Subcommand
//!
//! Applies an answer sheet and writes the PDF report into the output
//! directory. The file name comes from `--file-name`, else from the
//! sheet's `metadata.file_name`, else defaults to `informe_YYYYMMDD.pdf`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use labelcheck_core::Timestamp;
use labelcheck_report::{render_report, report_file_name, ReportMetadata};

use crate::{Environment, MetadataArgs};

/// Arguments for `labelcheck report`.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Answer sheet (YAML, or JSON with a `.json` extension).
    #[arg(value_name = "ANSWERS")]
    pub answers: PathBuf,

    /// Report file name, with or without `.pdf`.
    #[arg(long)]
    pub file_name: Option<String>,

    #[command(flatten)]
    pub metadata: MetadataArgs,
}

/// Execute the report subcommand. Prints the path of the written file.
pub fn run_report(args: &ReportArgs, env: &Environment, out: &mut impl Write) -> Result<u8> {
    let (mut sheet, state) = env.answer(&args.answers)?;
    args.metadata.apply_to(&mut sheet.metadata);
    let now = Timestamp::now();

    let rows = state
        .rows(&env.catalog)
        .context("audit state does not cover the catalog")?;
    let meta = ReportMetadata::new(&sheet.metadata, state.compute_aggregates(), now);
    let bytes = render_report(&rows, &meta, &env.config.report).context("failed to render report")?;

    let requested = args.file_name.as_deref().or(sheet.metadata.file_name.as_deref());
    let path = env.output_dir.join(report_file_name(requested, now));

    std::fs::create_dir_all(&env.output_dir).with_context(|| {
        format!("failed to create output directory: {}", env.output_dir.display())
    })?;
    std::fs::write(&path, &bytes)
        .with_context(|| format!("failed to write report: {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        session = %state.session_id(),
        bytes = bytes.len(),
        "report written"
    );
    writeln!(out, "{}", path.display())?;
    Ok(0)
}
