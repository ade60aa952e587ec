//! # Catalog Subcommand
//!
//! Lists the active checklist, grouped by category.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use labelcheck_core::ChecklistItem;

use crate::{Environment, OutputFormat};

/// Arguments for `labelcheck catalog`.
#[derive(Args, Debug, Default)]
pub struct CatalogArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the catalog subcommand.
pub fn run_catalog(args: &CatalogArgs, env: &Environment, out: &mut impl Write) -> Result<u8> {
    match args.format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&env.catalog)?)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{} ({} ítems)", env.catalog.name(), env.catalog.len())?;
            for category in env.catalog.categories() {
                writeln!(out)?;
                writeln!(out, "{}", category.name)?;
                for item in category.items {
                    write_item(out, item)?;
                }
            }
        }
    }
    Ok(0)
}

fn write_item(out: &mut impl Write, item: &ChecklistItem) -> std::io::Result<()> {
    let tags: Vec<&str> = [
        item.severity.map(|s| s.label()),
        item.applicability.map(|a| a.label()),
    ]
    .into_iter()
    .flatten()
    .collect();
    if tags.is_empty() {
        writeln!(out, "  - {}", item.title)?;
    } else {
        writeln!(out, "  - {} [{}]", item.title, tags.join(" | "))?;
    }
    writeln!(out, "      Qué verificar: {}", item.what_to_check)?;
    writeln!(out, "      Recomendación: {}", item.recommendation)?;
    writeln!(out, "      Referencia: {}", item.reference)
}
