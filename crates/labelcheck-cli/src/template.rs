//! # Template Subcommand
//!
//! Prints an answer sheet listing every catalog item as unanswered, ready
//! to be filled in and passed to `summary` or `report`.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use labelcheck_state::AnswerSheet;

use crate::Environment;

/// Arguments for `labelcheck template`.
#[derive(Args, Debug, Default)]
pub struct TemplateArgs {}

/// Execute the template subcommand.
pub fn run_template(_args: &TemplateArgs, env: &Environment, out: &mut impl Write) -> Result<u8> {
    let yaml = AnswerSheet::template(&env.catalog)
        .to_yaml()
        .context("failed to serialize answer-sheet template")?;
    out.write_all(yaml.as_bytes())?;
    Ok(0)
}
