//! # Audit Status
//!
//! Defines the `AuditStatus` enum with the four answers a checklist item
//! can carry. This is the ONE definition used by the audit state, the
//! aggregate computation, the display filter, the report table and the
//! non-conformity summary.
//!
//! ## Invariant
//!
//! The table label and the summary filter both derive from the same
//! variant: [`AuditStatus::label`] and [`AuditStatus::is_non_conformity`]
//! cannot disagree, because `is_non_conformity` is defined on the variant
//! whose label is [`NON_COMPLIANT_LABEL`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::LabelcheckError;

/// Humanized label for [`AuditStatus::Compliant`].
pub const COMPLIANT_LABEL: &str = "Cumple";
/// Humanized label for [`AuditStatus::NonCompliant`].
pub const NON_COMPLIANT_LABEL: &str = "No cumple";
/// Humanized label for [`AuditStatus::NotApplicable`].
pub const NOT_APPLICABLE_LABEL: &str = "No aplica";
/// Humanized label for [`AuditStatus::Unanswered`].
pub const UNANSWERED_LABEL: &str = "Sin responder";

/// The answer recorded for one checklist item.
///
/// Any status is reachable from any other: this is a form, not a
/// workflow state machine.
///
/// Deserialization also accepts the short forms of early answer files
/// (`yes`, `no`, `na`, `none`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    /// Not yet answered. Initial value of every entry.
    #[default]
    #[serde(alias = "none")]
    Unanswered,
    /// The label meets the requirement.
    #[serde(alias = "yes")]
    Compliant,
    /// The label fails the requirement (a non-conformity).
    #[serde(alias = "no")]
    NonCompliant,
    /// The requirement does not apply to this product.
    #[serde(alias = "na")]
    NotApplicable,
}

/// Total number of audit statuses.
pub const AUDIT_STATUS_COUNT: usize = 4;

impl AuditStatus {
    /// Returns all statuses in display order.
    pub fn all() -> &'static [AuditStatus] {
        &[
            Self::Compliant,
            Self::NonCompliant,
            Self::NotApplicable,
            Self::Unanswered,
        ]
    }

    /// Returns the snake_case identifier, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unanswered => "unanswered",
            Self::Compliant => "compliant",
            Self::NonCompliant => "non_compliant",
            Self::NotApplicable => "not_applicable",
        }
    }

    /// Humanized label shown in the report table and the CLI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unanswered => UNANSWERED_LABEL,
            Self::Compliant => COMPLIANT_LABEL,
            Self::NonCompliant => NON_COMPLIANT_LABEL,
            Self::NotApplicable => NOT_APPLICABLE_LABEL,
        }
    }

    /// Whether this status is a non-conformity.
    ///
    /// The only predicate used to select "non-compliant" subsets.
    pub fn is_non_conformity(&self) -> bool {
        matches!(self, Self::NonCompliant)
    }

    /// Whether this status counts toward the compliance denominator.
    pub fn is_decided(&self) -> bool {
        matches!(self, Self::Compliant | Self::NonCompliant)
    }
}

impl std::fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditStatus {
    type Err = LabelcheckError;

    /// Parse a status from its identifier or a legacy short form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unanswered" | "none" => Ok(Self::Unanswered),
            "compliant" | "yes" => Ok(Self::Compliant),
            "non_compliant" | "no" => Ok(Self::NonCompliant),
            "not_applicable" | "na" => Ok(Self::NotApplicable),
            other => Err(LabelcheckError::Serialization(format!(
                "unknown audit status: {other:?}"
            ))),
        }
    }
}
