//! # labelcheck-catalog — The Checklist Catalog
//!
//! The catalog is the static universe of checklist items. It is loaded
//! once per session, validated, and never mutated afterwards.
//!
//! - **Builtin** ([`builtin`]): the compiled-in requirement list covering
//!   Resolutions 5109 (general labeling), 810 and 2492 (nutrition facts
//!   and front-of-pack seals) and 333 (claims).
//!
//! - **Catalog** ([`catalog`]): the validated, ordered item sequence and
//!   its category grouping.
//!
//! - **Loader** ([`loader`]): YAML catalog documents selected at
//!   configuration time.
//!
//! ## Invariant
//!
//! Titles are unique across the whole catalog. Every construction path
//! goes through [`Catalog::new`], which rejects duplicates with
//! [`ConfigurationError::DuplicateTitle`](labelcheck_core::ConfigurationError).

pub mod builtin;
pub mod catalog;
pub mod loader;

pub use catalog::{Catalog, Category};
