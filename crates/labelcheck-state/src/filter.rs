//! # Display Filter
//!
//! The interactive view can show every item or only non-conformities.
//! The filter is a view concern: aggregates and reports always cover the
//! full catalog.

use labelcheck_catalog::Catalog;
use labelcheck_core::{ChecklistItem, StateError};

use crate::audit::{AuditEntry, AuditState};

/// Which items an interactive listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayFilter {
    /// Every item.
    #[default]
    All,
    /// Only items whose status is a non-conformity.
    NonCompliantOnly,
}

impl DisplayFilter {
    /// Map the "show only non-compliant" flag of a front end.
    pub fn from_only_non_compliant(only_non_compliant: bool) -> Self {
        if only_non_compliant {
            Self::NonCompliantOnly
        } else {
            Self::All
        }
    }

    fn admits(&self, entry: &AuditEntry) -> bool {
        match self {
            Self::All => true,
            Self::NonCompliantOnly => entry.status.is_non_conformity(),
        }
    }
}

/// A catalog item paired with its current entry.
#[derive(Debug, Clone, Copy)]
pub struct VisibleItem<'a> {
    /// The catalog item.
    pub item: &'a ChecklistItem,
    /// Its audit entry.
    pub entry: &'a AuditEntry,
}

impl AuditState {
    /// Items to display under `filter`, in catalog order.
    ///
    /// # Errors
    ///
    /// [`StateError::UnknownItem`] if a catalog item has no entry.
    pub fn visible_items<'a>(
        &'a self,
        catalog: &'a Catalog,
        filter: DisplayFilter,
    ) -> Result<Vec<VisibleItem<'a>>, StateError> {
        let mut visible = Vec::new();
        for item in catalog {
            let entry = self.require_entry(&item.title)?;
            if filter.admits(entry) {
                visible.push(VisibleItem { item, entry });
            }
        }
        Ok(visible)
    }
}
