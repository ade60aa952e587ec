//! # Report Metadata
//!
//! The scalar header fields of a report: who and what was audited, when,
//! and the aggregate result. Metadata built in code is typed and always
//! valid; metadata decoded from an untyped JSON/YAML value goes through
//! [`ReportMetadata::from_value`], which is where type errors surface.
//!
//! Also home to [`report_file_name`], the suggested download name.

use serde::Serialize;
use serde_json::{Map, Value};

use labelcheck_core::{SessionMetadata, Timestamp};
use labelcheck_state::AggregateStats;

use crate::error::ReportError;

/// Rendered in place of a missing or blank field.
pub const PLACEHOLDER: &str = "-";

/// Prefix of the default file name; followed by `YYYYMMDD`.
pub const DEFAULT_FILE_PREFIX: &str = "informe_";

const KNOWN_FIELDS: &[&str] = &[
    "title",
    "product",
    "provider",
    "responsible",
    "generated_at",
    "compliance_percentage",
    "stats",
];

/// Scalar metadata printed above the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMetadata {
    /// Overrides the configured report title when set and non-blank.
    pub title: Option<String>,
    /// Product name.
    pub product: Option<String>,
    /// Provider name.
    pub provider: Option<String>,
    /// Responsible party.
    pub responsible: Option<String>,
    /// Generation time; its date is printed.
    pub generated_at: Timestamp,
    /// Aggregate compliance percentage, `0..=100`.
    pub compliance_percentage: u8,
    /// Status counts.
    pub stats: AggregateStats,
}

impl ReportMetadata {
    /// Metadata for a session, with the percentage taken from `stats`.
    pub fn new(session: &SessionMetadata, stats: AggregateStats, generated_at: Timestamp) -> Self {
        Self {
            title: None,
            product: session.product.clone(),
            provider: session.provider.clone(),
            responsible: session.responsible.clone(),
            generated_at,
            compliance_percentage: stats.compliance_percentage(),
            stats,
        }
    }

    /// Decode metadata from an untyped value.
    ///
    /// Text fields accept a string or null. `generated_at` is an RFC 3339
    /// string and defaults to now. `stats` defaults to all-zero counts and
    /// `compliance_percentage` defaults to the percentage of `stats`.
    ///
    /// # Errors
    ///
    /// [`ReportError::InvalidMetadata`] naming the first field whose value
    /// has the wrong type, is out of range, or is not a known field.
    pub fn from_value(value: &Value) -> Result<Self, ReportError> {
        let object = value.as_object().ok_or_else(|| {
            ReportError::invalid("metadata", format!("expected an object, got {}", kind(value)))
        })?;

        if let Some(unknown) = object.keys().find(|k| !KNOWN_FIELDS.contains(&k.as_str())) {
            return Err(ReportError::invalid(unknown.as_str(), "unknown field"));
        }

        let generated_at = match object.get("generated_at") {
            None | Some(Value::Null) => Timestamp::now(),
            Some(Value::String(s)) => Timestamp::parse(s)
                .map_err(|e| ReportError::invalid("generated_at", e.to_string()))?,
            Some(other) => {
                return Err(ReportError::invalid(
                    "generated_at",
                    format!("expected an RFC 3339 string, got {}", kind(other)),
                ))
            }
        };

        let stats = match object.get("stats") {
            None | Some(Value::Null) => AggregateStats::default(),
            Some(raw) => serde_json::from_value(raw.clone())
                .map_err(|e| ReportError::invalid("stats", e.to_string()))?,
        };

        let compliance_percentage = match object.get("compliance_percentage") {
            None | Some(Value::Null) => stats.compliance_percentage(),
            Some(raw) => percentage(raw)?,
        };

        Ok(Self {
            title: text_field(object, "title")?,
            product: text_field(object, "product")?,
            provider: text_field(object, "provider")?,
            responsible: text_field(object, "responsible")?,
            generated_at,
            compliance_percentage,
            stats,
        })
    }

    /// Reject a percentage outside `0..=100`.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.compliance_percentage > 100 {
            return Err(ReportError::invalid(
                "compliance_percentage",
                format!("must be within 0..=100, got {}", self.compliance_percentage),
            ));
        }
        Ok(())
    }

    /// The title to print: this metadata's, or `fallback` when unset.
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => fallback,
        }
    }

    /// Product name or [`PLACEHOLDER`].
    pub fn product_or_placeholder(&self) -> &str {
        or_placeholder(&self.product)
    }

    /// Provider name or [`PLACEHOLDER`].
    pub fn provider_or_placeholder(&self) -> &str {
        or_placeholder(&self.provider)
    }

    /// Responsible party or [`PLACEHOLDER`].
    pub fn responsible_or_placeholder(&self) -> &str {
        or_placeholder(&self.responsible)
    }
}

fn or_placeholder(field: &Option<String>) -> &str {
    match field.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => PLACEHOLDER,
    }
}

fn text_field(object: &Map<String, Value>, field: &str) -> Result<Option<String>, ReportError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ReportError::invalid(
            field,
            format!("expected a string, got {}", kind(other)),
        )),
    }
}

fn percentage(raw: &Value) -> Result<u8, ReportError> {
    let Some(n) = raw.as_u64() else {
        return Err(ReportError::invalid(
            "compliance_percentage",
            format!("expected an integer in 0..=100, got {raw}"),
        ));
    };
    u8::try_from(n)
        .ok()
        .filter(|p| *p <= 100)
        .ok_or_else(|| {
            ReportError::invalid(
                "compliance_percentage",
                format!("must be within 0..=100, got {n}"),
            )
        })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Suggested file name for a report.
///
/// The requested name is trimmed, a trailing `.pdf` (any case) is removed,
/// and path separators, reserved characters and control characters become
/// `_`. A blank result falls back to `informe_YYYYMMDD` for `now`. The
/// returned name always ends in `.pdf`.
pub fn report_file_name(requested: Option<&str>, now: Timestamp) -> String {
    let stem = strip_pdf_suffix(requested.unwrap_or("").trim()).trim();
    let sanitized: String = stem
        .chars()
        .map(|c| if is_reserved(c) { '_' } else { c })
        .collect();
    if sanitized.is_empty() {
        format!("{DEFAULT_FILE_PREFIX}{}.pdf", now.file_stamp())
    } else {
        format!("{sanitized}.pdf")
    }
}

fn strip_pdf_suffix(name: &str) -> &str {
    let cut = name.len().saturating_sub(4);
    match name.get(cut..) {
        Some(suffix) if name.len() >= 4 && suffix.eq_ignore_ascii_case(".pdf") => &name[..cut],
        _ => name,
    }
}

fn is_reserved(c: char) -> bool {
    matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') || c.is_control()
}
