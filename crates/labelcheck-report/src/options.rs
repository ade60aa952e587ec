//! Rendering options, loaded from the `report:` section of the config file.

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Default report title.
pub const DEFAULT_TITLE: &str = "Informe de verificación de etiquetado nutricional";

/// Default length of the runs long notes are pre-chunked into.
pub const DEFAULT_NOTE_CHUNK_CHARS: usize = 60;

/// Default body font size in points.
pub const DEFAULT_FONT_SIZE: f64 = 8.0;

const MIN_FONT_SIZE: f64 = 4.0;
const MAX_FONT_SIZE: f64 = 24.0;

/// Tunable parts of the report layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportOptions {
    /// Title printed at the top of the first page.
    pub title: String,
    /// Notes are split into runs of at most this many characters before
    /// wrapping.
    pub note_chunk_chars: usize,
    /// Table and body font size in points.
    pub font_size: f64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            note_chunk_chars: DEFAULT_NOTE_CHUNK_CHARS,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl ReportOptions {
    /// Reject values the layout cannot honor.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.note_chunk_chars == 0 {
            return Err(ReportError::invalid_option(
                "note_chunk_chars",
                "must be at least 1",
            ));
        }
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&self.font_size) {
            return Err(ReportError::invalid_option(
                "font_size",
                format!(
                    "must be between {MIN_FONT_SIZE} and {MAX_FONT_SIZE}, got {}",
                    self.font_size
                ),
            ));
        }
        Ok(())
    }
}
