//! # Summary Subcommand
//!
//! Applies an answer sheet and prints the aggregate result, the
//! per-category breakdown, and the item list. `--only-non-compliant`
//! narrows the item list only; totals always cover the whole catalog.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde_json::json;

use labelcheck_core::Timestamp;
use labelcheck_report::layout::counts_line;
use labelcheck_report::ReportMetadata;
use labelcheck_state::DisplayFilter;

use crate::{Environment, MetadataArgs, OutputFormat};

/// Arguments for `labelcheck summary`.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Answer sheet (YAML, or JSON with a `.json` extension).
    #[arg(value_name = "ANSWERS")]
    pub answers: PathBuf,

    /// List only non-compliant items.
    #[arg(long)]
    pub only_non_compliant: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub metadata: MetadataArgs,
}

/// Execute the summary subcommand.
pub fn run_summary(args: &SummaryArgs, env: &Environment, out: &mut impl Write) -> Result<u8> {
    let (mut sheet, state) = env.answer(&args.answers)?;
    args.metadata.apply_to(&mut sheet.metadata);
    let stats = state.compute_aggregates();
    let breakdown = state.category_breakdown(&env.catalog);
    let filter = DisplayFilter::from_only_non_compliant(args.only_non_compliant);
    let visible = state.visible_items(&env.catalog, filter)?;
    let meta = ReportMetadata::new(&sheet.metadata, stats, Timestamp::now());

    match args.format {
        OutputFormat::Json => {
            let items: Vec<_> = visible
                .iter()
                .map(|v| {
                    json!({
                        "category": v.item.category,
                        "title": v.item.title,
                        "status": v.entry.status,
                        "label": v.entry.status.label(),
                        "note": v.entry.note,
                        "severity": v.item.severity,
                        "applicability": v.item.applicability,
                    })
                })
                .collect();
            let document = json!({
                "session_id": state.session_id().to_string(),
                "metadata": sheet.metadata,
                "compliance_percentage": stats.compliance_percentage(),
                "answered": stats.answered(),
                "stats": stats,
                "categories": breakdown,
                "items": items,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&document)?)?;
        }
        OutputFormat::Text => {
            writeln!(
                out,
                "Producto: {} | Proveedor: {} | Responsable: {}",
                meta.product_or_placeholder(),
                meta.provider_or_placeholder(),
                meta.responsible_or_placeholder()
            )?;
            writeln!(out, "Cumplimiento total: {}%", stats.compliance_percentage())?;
            writeln!(out, "{}", counts_line(&stats))?;

            writeln!(out)?;
            writeln!(out, "Por categoría:")?;
            for category in &breakdown {
                writeln!(
                    out,
                    "  {}: {}% ({})",
                    category.category,
                    category.compliance_percentage,
                    counts_line(&category.stats)
                )?;
            }

            writeln!(out)?;
            writeln!(out, "Ítems:")?;
            if visible.is_empty() {
                writeln!(out, "  (ninguno)")?;
            }
            for v in &visible {
                writeln!(out, "  [{}] {}", v.entry.status.label(), v.item.title)?;
                if !v.entry.note.trim().is_empty() {
                    writeln!(out, "      Observación: {}", v.entry.note)?;
                }
            }
        }
    }
    Ok(0)
}
