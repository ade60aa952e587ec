//! # Error Hierarchy
//!
//! Defines the error types shared across labelcheck. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Catalog problems are configuration errors and are fatal at startup.
//! - Audit-state lookups that miss a title report the title verbatim.
//! - There is no numeric error class: percentage computation is total.

use thiserror::Error;

/// Top-level error type for labelcheck.
#[derive(Error, Debug)]
pub enum LabelcheckError {
    /// The checklist catalog is malformed.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// An audit-state operation referenced an unknown item.
    #[error("state error: {0}")]
    State(#[from] StateError),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error raised while building or loading a checklist catalog.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Two items share a title. Titles key the audit state, so this is
    /// never resolved by overwriting.
    #[error("duplicate checklist title {title:?} (in categories {first_category:?} and {second_category:?})")]
    DuplicateTitle {
        /// The repeated title.
        title: String,
        /// Category of the first occurrence.
        first_category: String,
        /// Category of the repeated occurrence.
        second_category: String,
    },

    /// The catalog contains no items.
    #[error("catalog {name:?} contains no items")]
    EmptyCatalog {
        /// Catalog name.
        name: String,
    },

    /// A required item field is blank.
    #[error("checklist item {title:?} has a blank {field} field")]
    MissingField {
        /// Title of the offending item (may itself be blank).
        title: String,
        /// Name of the blank field.
        field: &'static str,
    },

    /// A catalog or configuration document could not be parsed or validated.
    #[error("configuration parse error: {0}")]
    Parse(String),

    /// The catalog document could not be read.
    #[error("configuration io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error in audit-state operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The title is not part of the initialized audit state.
    #[error("unknown checklist item {title:?}")]
    UnknownItem {
        /// The title that was looked up.
        title: String,
    },
}

impl StateError {
    /// Build an [`StateError::UnknownItem`] for a title.
    pub fn unknown(title: impl Into<String>) -> Self {
        Self::UnknownItem {
            title: title.into(),
        }
    }
}
