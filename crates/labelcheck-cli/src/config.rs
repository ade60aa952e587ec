//! # Configuration File
//!
//! Optional YAML file passed with `--config`:
//!
//! ```yaml
//! catalog: catalogs/etiquetado.yaml   # relative to this file
//! output_dir: informes/
//! report:
//!   title: "Informe de verificación de etiquetado nutricional"
//!   note_chunk_chars: 60
//!   font_size: 8.0
//! ```
//!
//! Every key is optional and unknown keys are rejected. Command-line
//! flags take precedence over values read here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use labelcheck_core::ConfigurationError;
use labelcheck_report::ReportOptions;

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Catalog YAML; the compiled-in catalog when absent.
    pub catalog: Option<PathBuf>,
    /// Directory reports are written to.
    pub output_dir: Option<PathBuf>,
    /// Report rendering options.
    pub report: ReportOptions,
}

impl Config {
    /// Parse a configuration document and check its report options.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigurationError> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| ConfigurationError::Parse(format!("config: {e}")))?;
        config
            .report
            .validate()
            .map_err(|e| ConfigurationError::Parse(format!("config: {e}")))?;
        Ok(config)
    }

    /// Read a configuration file. Relative paths inside it are resolved
    /// against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml_str(&content)?;
        let base = path.parent().unwrap_or(Path::new("."));
        config.catalog = config.catalog.map(|p| resolve_path(&p, base));
        config.output_dir = config.output_dir.map(|p| resolve_path(&p, base));
        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }
}

/// `path` unchanged if absolute, otherwise joined onto `base`.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
