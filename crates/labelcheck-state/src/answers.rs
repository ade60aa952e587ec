//! # Answer Sheets
//!
//! An answer sheet is how a front end hands a batch of user actions to
//! the kernel: session metadata, an optional bulk action, and per-item
//! status/note answers.
//!
//! ```yaml
//! metadata:
//!   product: "Café molido 500 g"
//!   provider: "Tostadora Andina S.A.S."
//!   responsible: "Laura Gómez"
//!   file_name: "informe_cafe"
//! bulk: not_applicable          # optional: reset | not_applicable
//! answers:
//!   - title: "Idioma español obligatorio"
//!     status: compliant         # also accepts yes / no / na / none
//!   - title: "Lote y fecha de vencimiento legibles"
//!     status: non_compliant
//!     note: "Fecha ilegible en la tapa"
//! ```
//!
//! ## Atomicity
//!
//! Every title is checked before anything is applied: a sheet naming an
//! unknown item fails with [`StateError::UnknownItem`] and leaves the
//! state untouched.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use labelcheck_catalog::Catalog;
use labelcheck_core::{AuditStatus, SessionMetadata, StateError};

use crate::audit::AuditState;

/// Errors while loading or applying an answer sheet.
#[derive(Error, Debug)]
pub enum AnswerSheetError {
    /// The document is not a valid answer sheet.
    #[error("answer sheet parse error: {0}")]
    Parse(String),

    /// The document could not be read.
    #[error("answer sheet io error: {0}")]
    Io(#[from] std::io::Error),

    /// An answer referenced an item outside the audit state.
    #[error(transparent)]
    State(#[from] StateError),
}

/// Whole-checklist action applied before individual answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkAction {
    /// [`AuditState::reset_all`].
    Reset,
    /// [`AuditState::mark_all_not_applicable`].
    NotApplicable,
}

/// One item's answer. Absent fields leave the entry unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Answer {
    /// Item title.
    pub title: String,
    /// New status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AuditStatus>,
    /// New note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A batch of user actions for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerSheet {
    /// Session metadata.
    #[serde(default)]
    pub metadata: SessionMetadata,
    /// Optional bulk action, applied first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulk: Option<BulkAction>,
    /// Answers, applied in order.
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl AnswerSheet {
    /// Parse a YAML answer sheet.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, AnswerSheetError> {
        serde_yaml::from_str(yaml).map_err(|e| AnswerSheetError::Parse(e.to_string()))
    }

    /// Parse a JSON answer sheet.
    pub fn from_json_str(json: &str) -> Result<Self, AnswerSheetError> {
        serde_json::from_str(json).map_err(|e| AnswerSheetError::Parse(e.to_string()))
    }

    /// Read an answer sheet; `.json` files are parsed as JSON, anything
    /// else as YAML.
    pub fn from_path(path: &Path) -> Result<Self, AnswerSheetError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// A sheet listing every catalog item as unanswered with an empty
    /// note, for a front end to fill in.
    pub fn template(catalog: &Catalog) -> Self {
        Self {
            metadata: SessionMetadata::default(),
            bulk: None,
            answers: catalog
                .iter()
                .map(|item| Answer {
                    title: item.title.clone(),
                    status: Some(AuditStatus::Unanswered),
                    note: Some(String::new()),
                })
                .collect(),
        }
    }

    /// Render the sheet as YAML.
    pub fn to_yaml(&self) -> Result<String, AnswerSheetError> {
        serde_yaml::to_string(self).map_err(|e| AnswerSheetError::Parse(e.to_string()))
    }

    /// Apply the bulk action and then every answer to `state`.
    ///
    /// Returns the number of answers applied.
    ///
    /// # Errors
    ///
    /// [`StateError::UnknownItem`] for the first answer naming an item
    /// the state does not hold; nothing is applied in that case.
    pub fn apply(&self, state: &mut AuditState) -> Result<usize, StateError> {
        if let Some(missing) = self.answers.iter().find(|a| !state.contains(&a.title)) {
            return Err(StateError::unknown(missing.title.as_str()));
        }

        match self.bulk {
            Some(BulkAction::Reset) => state.reset_all(),
            Some(BulkAction::NotApplicable) => state.mark_all_not_applicable(),
            None => {}
        }

        for answer in &self.answers {
            if let Some(status) = answer.status {
                state.set_status(&answer.title, status)?;
            }
            if let Some(note) = &answer.note {
                state.set_note(&answer.title, note.as_str())?;
            }
        }

        tracing::debug!(
            session = %state.session_id(),
            answers = self.answers.len(),
            bulk = ?self.bulk,
            "answer sheet applied"
        );
        Ok(self.answers.len())
    }
}
