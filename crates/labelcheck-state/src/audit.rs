//! # Audit State
//!
//! The mutable record of one audit session.
//!
//! ## Lifecycle
//!
//! ```text
//! new() ──▶ initialize(catalog) ──▶ set_status / set_note / bulk actions ──▶ dropped
//!               ▲        │
//!               └────────┘  (idempotent: fills missing entries only)
//! ```
//!
//! Entries are created `unanswered` with an empty note when the catalog
//! is seeded. After that, only explicit user actions change them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use labelcheck_catalog::Catalog;
use labelcheck_core::{AuditStatus, SessionId, StateError, Timestamp};

use crate::stats::AggregateStats;

/// The answer and note recorded for one checklist item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Current status.
    pub status: AuditStatus,
    /// Free-text observation.
    #[serde(default)]
    pub note: String,
}

/// Per-session audit state, keyed by item title.
#[derive(Debug, Clone, Serialize)]
pub struct AuditState {
    session_id: SessionId,
    started_at: Timestamp,
    entries: BTreeMap<String, AuditEntry>,
}

impl AuditState {
    /// Create an empty, unseeded state for a new session.
    pub fn new() -> Self {
        Self {
            session_id: SessionId::new(),
            started_at: Timestamp::now(),
            entries: BTreeMap::new(),
        }
    }

    /// Create a state and seed it with every item of `catalog`.
    pub fn seeded(catalog: &Catalog) -> Self {
        let mut state = Self::new();
        state.initialize(catalog);
        state
    }

    /// Seed an entry for every catalog item that has none yet.
    ///
    /// Existing entries are never overwritten, so calling this again on a
    /// resumed session keeps every answer and note. Returns the number of
    /// entries created.
    pub fn initialize(&mut self, catalog: &Catalog) -> usize {
        let mut created = 0usize;
        for item in catalog {
            if !self.entries.contains_key(&item.title) {
                self.entries.insert(item.title.clone(), AuditEntry::default());
                created += 1;
            }
        }
        tracing::debug!(
            session = %self.session_id,
            created,
            total = self.entries.len(),
            "audit state initialized"
        );
        created
    }

    /// Overwrite the status of an item. The note is left untouched.
    ///
    /// # Errors
    ///
    /// [`StateError::UnknownItem`] if `title` has no entry.
    pub fn set_status(&mut self, title: &str, status: AuditStatus) -> Result<(), StateError> {
        let entry = self.entry_mut(title)?;
        entry.status = status;
        Ok(())
    }

    /// Overwrite the note of an item.
    ///
    /// # Errors
    ///
    /// [`StateError::UnknownItem`] if `title` has no entry.
    pub fn set_note(&mut self, title: &str, text: impl Into<String>) -> Result<(), StateError> {
        let entry = self.entry_mut(title)?;
        entry.note = text.into();
        Ok(())
    }

    /// Set every entry back to `unanswered` with an empty note.
    pub fn reset_all(&mut self) {
        for entry in self.entries.values_mut() {
            *entry = AuditEntry::default();
        }
        tracing::info!(session = %self.session_id, entries = self.entries.len(), "all entries reset");
    }

    /// Mark every entry `not_applicable`. Notes are kept.
    pub fn mark_all_not_applicable(&mut self) {
        for entry in self.entries.values_mut() {
            entry.status = AuditStatus::NotApplicable;
        }
        tracing::info!(
            session = %self.session_id,
            entries = self.entries.len(),
            "all entries marked not applicable"
        );
    }

    /// Counts per status and the compliance percentage.
    pub fn compute_aggregates(&self) -> AggregateStats {
        AggregateStats::from_statuses(self.entries.values().map(|e| e.status))
    }

    /// The entry for `title`, if any.
    pub fn entry(&self, title: &str) -> Option<&AuditEntry> {
        self.entries.get(title)
    }

    /// The entry for `title`, or [`StateError::UnknownItem`].
    pub fn require_entry(&self, title: &str) -> Result<&AuditEntry, StateError> {
        self.entries
            .get(title)
            .ok_or_else(|| StateError::unknown(title))
    }

    /// Whether `title` has an entry.
    pub fn contains(&self, title: &str) -> bool {
        self.entries.contains_key(title)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the state has no entries (not yet seeded).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Session identifier.
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// When the session started.
    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    fn entry_mut(&mut self, title: &str) -> Result<&mut AuditEntry, StateError> {
        self.entries
            .get_mut(title)
            .ok_or_else(|| StateError::unknown(title))
    }
}

impl Default for AuditState {
    fn default() -> Self {
        Self::new()
    }
}
