//! # labelcheck-core — Foundational Types for Label Audits
//!
//! This crate is the leaf of the labelcheck workspace. It defines the
//! vocabulary every other crate speaks: the four-way audit status, the
//! checklist item record, session identity, UTC timestamps, and the
//! error taxonomy.
//!
//! ## Key Design Principles
//!
//! 1. **Typed records, not tuples.** A [`ChecklistItem`] has named fields.
//!    Optional tags (`severity`, `applicability`) are `Option`s, so catalogs
//!    with and without tags share one schema.
//!
//! 2. **Single `AuditStatus` enum.** One definition, four variants, one
//!    humanized label per variant, and one non-conformity predicate
//!    ([`AuditStatus::is_non_conformity`]) used everywhere a
//!    "non-compliant rows" subset is needed.
//!
//! 3. **UTC-only timestamps.** [`Timestamp`] truncates to seconds and
//!    renders the date forms used in reports and default file names.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `labelcheck-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod item;
pub mod session;
pub mod status;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::{ConfigurationError, LabelcheckError, StateError};
pub use identity::SessionId;
pub use item::{Applicability, ChecklistItem, Severity};
pub use session::SessionMetadata;
pub use status::{AuditStatus, AUDIT_STATUS_COUNT};
pub use temporal::Timestamp;
