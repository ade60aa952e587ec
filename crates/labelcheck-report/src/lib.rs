//! # labelcheck-report — Report Renderer
//!
//! Renders an audit as a paginated landscape PDF: a title block with the
//! session metadata and compliance percentage, a five-column table of
//! every checklist item with a header repeated on each page, and a
//! trailing list of non-conformities.
//!
//! - **Metadata** (`metadata.rs`): [`ReportMetadata`], decoding from
//!   untyped values, and [`report_file_name`].
//! - **Options** (`options.rs`): configurable title, note chunk length and
//!   font size.
//! - **Font** (`font.rs`): Helvetica glyph widths and WinAnsi encoding.
//! - **Wrap** (`wrap.rs`): the word wrapper; never truncates.
//! - **Layout** (`layout.rs`): pagination into positioned draw operations.
//! - **PDF** (`pdf.rs`): serialization of a laid-out document.
//!
//! ## Crate Policy
//!
//! - Pure: no filesystem access. Callers receive a byte buffer.
//! - Every row reaches the output in full; overflow wraps or paginates.

pub mod error;
pub mod font;
pub mod layout;
pub mod metadata;
pub mod options;
pub mod pdf;
pub mod render;
pub mod wrap;

pub use error::ReportError;
pub use layout::{layout_report, Document, Page};
pub use metadata::{report_file_name, ReportMetadata, PLACEHOLDER};
pub use options::ReportOptions;
pub use render::render_report;
