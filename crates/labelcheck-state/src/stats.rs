//! # Aggregate Statistics
//!
//! Counts per status and the compliance percentage. Always derived from
//! the current entries; never stored.
//!
//! ## Compliance Percentage
//!
//! ```text
//! answered   = compliant + non_compliant
//! percentage = round(100 * compliant / answered)   if answered > 0
//!            = 0                                   otherwise
//! ```
//!
//! `not_applicable` and `unanswered` entries are outside the denominator,
//! so adding more of them never moves the percentage. Rounding is
//! half-up, done in integer arithmetic; the result is always in `0..=100`.

use serde::{Deserialize, Serialize};

use labelcheck_catalog::Catalog;
use labelcheck_core::AuditStatus;

use crate::audit::AuditState;

/// Compliance percentage over decided answers.
pub fn compliance_percentage(compliant: usize, non_compliant: usize) -> u8 {
    let answered = compliant as u128 + non_compliant as u128;
    if answered == 0 {
        return 0;
    }
    let pct = (200 * compliant as u128 + answered) / (2 * answered);
    pct.min(100) as u8
}

/// Counts of each status across a set of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Number of entries.
    pub total: usize,
    /// Entries marked compliant.
    pub compliant: usize,
    /// Entries marked non-compliant.
    pub non_compliant: usize,
    /// Entries marked not applicable.
    pub not_applicable: usize,
    /// Entries not yet answered.
    pub unanswered: usize,
}

impl AggregateStats {
    /// Tally a sequence of statuses.
    pub fn from_statuses(statuses: impl IntoIterator<Item = AuditStatus>) -> Self {
        let mut stats = Self::default();
        for status in statuses {
            stats.record(status);
        }
        stats
    }

    fn record(&mut self, status: AuditStatus) {
        self.total += 1;
        match status {
            AuditStatus::Compliant => self.compliant += 1,
            AuditStatus::NonCompliant => self.non_compliant += 1,
            AuditStatus::NotApplicable => self.not_applicable += 1,
            AuditStatus::Unanswered => self.unanswered += 1,
        }
    }

    /// Count for one status.
    pub fn count(&self, status: AuditStatus) -> usize {
        match status {
            AuditStatus::Compliant => self.compliant,
            AuditStatus::NonCompliant => self.non_compliant,
            AuditStatus::NotApplicable => self.not_applicable,
            AuditStatus::Unanswered => self.unanswered,
        }
    }

    /// Compliant plus non-compliant entries.
    pub fn answered(&self) -> usize {
        self.compliant + self.non_compliant
    }

    /// Compliance percentage, `0..=100`.
    pub fn compliance_percentage(&self) -> u8 {
        compliance_percentage(self.compliant, self.non_compliant)
    }

    /// Number of non-conformities.
    pub fn non_conformities(&self) -> usize {
        self.non_compliant
    }
}

/// Aggregate statistics of one catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    /// Category label.
    pub category: String,
    /// Counts within the category.
    pub stats: AggregateStats,
    /// Compliance percentage within the category.
    pub compliance_percentage: u8,
}

impl AuditState {
    /// Per-category aggregates, in catalog category order.
    ///
    /// Items without an entry are skipped. Display only; the overall
    /// figure is always [`AuditState::compute_aggregates`].
    pub fn category_breakdown(&self, catalog: &Catalog) -> Vec<CategoryStats> {
        catalog
            .categories()
            .into_iter()
            .map(|category| {
                let stats = AggregateStats::from_statuses(
                    category
                        .items
                        .iter()
                        .filter_map(|item| self.entry(&item.title))
                        .map(|entry| entry.status),
                );
                CategoryStats {
                    category: category.name.to_string(),
                    compliance_percentage: stats.compliance_percentage(),
                    stats,
                }
            })
            .collect()
    }
}
