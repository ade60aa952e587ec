//! # labelcheck-cli — Command-Line Front End
//!
//! Provides the `labelcheck` binary. The CLI stands in for the
//! interactive form: answers arrive as answer-sheet files and every
//! command runs one session from a fresh audit state.
//!
//! ## Subcommands
//!
//! ```bash
//! labelcheck catalog --format json
//! labelcheck template > respuestas.yaml
//! labelcheck summary respuestas.yaml --only-non-compliant
//! labelcheck report respuestas.yaml --file-name auditoria_lote_7
//! ```
//!
//! Global flags (`-v`, `--config`, `--catalog`, `--output-dir`) are
//! resolved once into an [`Environment`] shared by all handlers.

pub mod catalog;
pub mod config;
pub mod report;
pub mod summary;
pub mod template;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use labelcheck_catalog::Catalog;
use labelcheck_core::SessionMetadata;
use labelcheck_state::{AnswerSheet, AuditState};

use crate::config::Config;

/// Output format of listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Session metadata given on the command line. Non-blank values override
/// the answer sheet's.
#[derive(Args, Debug, Clone, Default)]
pub struct MetadataArgs {
    /// Product name.
    #[arg(long)]
    pub product: Option<String>,

    /// Provider name.
    #[arg(long)]
    pub provider: Option<String>,

    /// Person responsible for the verification.
    #[arg(long)]
    pub responsible: Option<String>,
}

impl MetadataArgs {
    /// Overlay the given flags onto `metadata`.
    pub fn apply_to(&self, metadata: &mut SessionMetadata) {
        metadata.merge(SessionMetadata {
            product: self.product.clone(),
            provider: self.provider.clone(),
            responsible: self.responsible.clone(),
            file_name: None,
        });
    }
}

/// Everything a handler needs besides its own arguments.
#[derive(Debug)]
pub struct Environment {
    /// Effective configuration.
    pub config: Config,
    /// Active catalog.
    pub catalog: Catalog,
    /// Directory reports are written to.
    pub output_dir: PathBuf,
}

impl Environment {
    /// Resolve global flags: flags win over the config file, which wins
    /// over built-in defaults.
    pub fn load(
        config_path: Option<&Path>,
        catalog_path: Option<&Path>,
        output_dir: Option<&Path>,
    ) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config: {}", path.display()))?,
            None => Config::default(),
        };

        let catalog = match catalog_path.or(config.catalog.as_deref()) {
            Some(path) => Catalog::from_yaml_path(path)
                .with_context(|| format!("failed to load catalog: {}", path.display()))?,
            None => Catalog::builtin().context("built-in catalog is invalid")?,
        };

        let output_dir = output_dir
            .map(Path::to_path_buf)
            .or_else(|| config.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        tracing::debug!(
            catalog = catalog.name(),
            items = catalog.len(),
            output_dir = %output_dir.display(),
            "environment resolved"
        );

        Ok(Self {
            config,
            catalog,
            output_dir,
        })
    }

    /// Read an answer sheet and apply it to a freshly seeded state.
    pub fn answer(&self, answers: &Path) -> Result<(AnswerSheet, AuditState)> {
        let sheet = AnswerSheet::from_path(answers)
            .with_context(|| format!("failed to read answer sheet: {}", answers.display()))?;
        let mut state = AuditState::seeded(&self.catalog);
        sheet
            .apply(&mut state)
            .with_context(|| format!("failed to apply answer sheet: {}", answers.display()))?;
        Ok((sheet, state))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Environment over the built-in catalog writing into `output_dir`.
    pub fn builtin_env(output_dir: &Path) -> Environment {
        match Environment::load(None, None, Some(output_dir)) {
            Ok(env) => env,
            Err(e) => panic!("environment: {e:#}"),
        }
    }

    /// Title of the `n`th built-in item.
    pub fn builtin_title(env: &Environment, n: usize) -> String {
        env.catalog.items()[n].title.clone()
    }
}
