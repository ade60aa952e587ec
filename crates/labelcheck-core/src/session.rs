//! # Session Metadata
//!
//! The free-text fields an auditor fills in once per session: what was
//! audited, who supplied it, who performed the audit, and the desired
//! report file name.

use serde::{Deserialize, Serialize};

/// Metadata collected alongside the answers of one audit session.
///
/// Every field is optional; blank values are legal and render as a
/// placeholder in the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionMetadata {
    /// Product name.
    #[serde(default)]
    pub product: Option<String>,
    /// Provider or manufacturer.
    #[serde(default)]
    pub provider: Option<String>,
    /// Person responsible for the verification.
    #[serde(default)]
    pub responsible: Option<String>,
    /// Desired report file name, without or with a `.pdf` suffix.
    #[serde(default)]
    pub file_name: Option<String>,
}

impl SessionMetadata {
    /// Overlay non-empty fields of `other` onto `self`.
    pub fn merge(&mut self, other: SessionMetadata) {
        fn pick(slot: &mut Option<String>, value: Option<String>) {
            if let Some(v) = value {
                if !v.trim().is_empty() {
                    *slot = Some(v);
                }
            }
        }
        pick(&mut self.product, other.product);
        pick(&mut self.provider, other.provider);
        pick(&mut self.responsible, other.responsible);
        pick(&mut self.file_name, other.file_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_existing_when_other_blank() {
        let mut base = SessionMetadata {
            product: Some("Café molido".into()),
            ..Default::default()
        };
        base.merge(SessionMetadata {
            product: Some("  ".into()),
            provider: Some("Tostadora Andina".into()),
            ..Default::default()
        });
        assert_eq!(base.product.as_deref(), Some("Café molido"));
        assert_eq!(base.provider.as_deref(), Some("Tostadora Andina"));
        assert_eq!(base.responsible, None);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let res: Result<SessionMetadata, _> =
            serde_json::from_value(serde_json::json!({ "producto": "x" }));
        assert!(res.is_err());
    }
}
