//! # labelcheck-state — Audit State
//!
//! Owns the mutable part of an audit session: one [`AuditEntry`] per
//! catalog item, keyed by title. Everything else is derived on demand.
//!
//! - **Audit** (`audit.rs`): the [`AuditState`] struct and its mutations
//!   (`initialize`, `set_status`, `set_note`, `reset_all`,
//!   `mark_all_not_applicable`).
//!
//! - **Stats** (`stats.rs`): [`AggregateStats`] and the compliance
//!   percentage, computed over compliant + non-compliant answers only.
//!
//! - **Projection** (`projection.rs`): the flat, catalog-ordered
//!   [`ReportRow`] sequence consumed by the report renderer.
//!
//! - **Filter** (`filter.rs`): the interactive "only non-compliant" view.
//!   It never influences aggregates or reports.
//!
//! - **Answers** (`answers.rs`): answer sheets, the YAML/JSON documents a
//!   front end uses to hand a batch of user actions to the kernel.
//!
//! ## Design
//!
//! There is no ambient session: the caller owns the `AuditState` and
//! passes it by reference. Sessions never share state.

pub mod answers;
pub mod audit;
pub mod filter;
pub mod projection;
pub mod stats;

pub use answers::{Answer, AnswerSheet, AnswerSheetError, BulkAction};
pub use audit::{AuditEntry, AuditState};
pub use filter::{DisplayFilter, VisibleItem};
pub use projection::{non_conformities, ReportRow};
pub use stats::{compliance_percentage, AggregateStats, CategoryStats};
