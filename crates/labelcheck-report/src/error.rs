//! # Report Errors
//!
//! Report generation either returns a complete byte buffer or one of
//! these. Blank metadata is never an error: it renders as a placeholder.

use thiserror::Error;

/// Errors from report layout and serialization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The renderer was given zero rows.
    #[error("report has no rows")]
    EmptyReport,

    /// A metadata field has the wrong type or an out-of-range value.
    #[error("invalid report metadata field {field:?}: {reason}")]
    InvalidMetadata {
        /// Name of the offending field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A rendering option is outside the range the layout supports.
    #[error("invalid report option {option:?}: {reason}")]
    InvalidOptions {
        /// Name of the offending option.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ReportError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidMetadata {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOptions {
            option: option.into(),
            reason: reason.into(),
        }
    }
}
