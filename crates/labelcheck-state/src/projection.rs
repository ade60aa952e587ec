//! # Report Projection
//!
//! Flattens catalog + audit state into the ordered row sequence the
//! report renderer consumes. The recommendation is carried on every row,
//! whatever its status.

use serde::Serialize;

use labelcheck_catalog::Catalog;
use labelcheck_core::{AuditStatus, Severity, StateError};

use crate::audit::AuditState;

/// One row of the report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Category of the item.
    pub category: String,
    /// Item title.
    pub title: String,
    /// Recorded status.
    pub status: AuditStatus,
    /// Static remediation text.
    pub recommendation: String,
    /// Regulatory citation.
    pub reference: String,
    /// Auditor's note.
    pub note: String,
    /// Optional severity tag, shown in the non-conformity summary.
    pub severity: Option<Severity>,
}

impl ReportRow {
    /// Humanized status printed in the table.
    pub fn status_label(&self) -> &'static str {
        self.status.label()
    }

    /// Whether the row belongs in the non-conformity summary.
    pub fn is_non_conformity(&self) -> bool {
        self.status.is_non_conformity()
    }
}

/// Rows selected for the non-conformity summary, in table order.
pub fn non_conformities(rows: &[ReportRow]) -> impl Iterator<Item = &ReportRow> {
    rows.iter().filter(|row| row.is_non_conformity())
}

impl AuditState {
    /// Project every catalog item into a report row, in catalog order.
    ///
    /// # Errors
    ///
    /// [`StateError::UnknownItem`] if a catalog item has no entry, i.e.
    /// the state was not seeded with this catalog.
    pub fn rows(&self, catalog: &Catalog) -> Result<Vec<ReportRow>, StateError> {
        catalog
            .iter()
            .map(|item| {
                let entry = self.require_entry(&item.title)?;
                Ok(ReportRow {
                    category: item.category.clone(),
                    title: item.title.clone(),
                    status: entry.status,
                    recommendation: item.recommendation.clone(),
                    reference: item.reference.clone(),
                    note: entry.note.clone(),
                    severity: item.severity,
                })
            })
            .collect()
    }
}
