//! # Checklist Items
//!
//! The immutable record describing one requirement of the labeling
//! resolutions, plus the two optional informational tags carried by
//! later catalogs.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// How serious a failure of this requirement is.
///
/// Informational only: never consulted by aggregates or filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Blocks the product from market.
    Critical,
    /// Must be corrected in the next print run.
    Medium,
    /// Cosmetic or editorial.
    Minor,
}

impl Severity {
    /// Humanized label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Crítico",
            Self::Medium => "Medio",
            Self::Minor => "Menor",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which kind of label a requirement applies to.
///
/// Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Applicability {
    /// Retail packaging of a finished product.
    FinishedProduct,
    /// Labels of raw materials received from suppliers.
    RawMaterial,
    /// Both finished products and raw materials.
    Both,
}

impl Applicability {
    /// Humanized label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FinishedProduct => "Producto terminado",
            Self::RawMaterial => "Materia prima",
            Self::Both => "Ambos",
        }
    }
}

impl std::fmt::Display for Applicability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One requirement of the checklist.
///
/// `title` is the lookup key for the audit state and must be unique
/// across the whole catalog, not only within its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Category label; items are displayed grouped in catalog order.
    pub category: String,
    /// Unique title.
    pub title: String,
    /// What the auditor must verify on the label.
    pub what_to_check: String,
    /// Remediation text for a non-conformity.
    pub recommendation: String,
    /// Regulatory citation (e.g. `Resol. 810 Art. 27`).
    pub reference: String,
    /// Optional severity tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Optional applicability tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicability: Option<Applicability>,
}

impl ChecklistItem {
    /// Check that every required text field is non-blank.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let required: [(&'static str, &str); 5] = [
            ("title", &self.title),
            ("category", &self.category),
            ("what_to_check", &self.what_to_check),
            ("recommendation", &self.recommendation),
            ("reference", &self.reference),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigurationError::MissingField {
                    title: self.title.clone(),
                    field,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> ChecklistItem {
        ChecklistItem {
            category: "Resolución 5109".into(),
            title: "Idioma español obligatorio".into(),
            what_to_check: "Verificar que toda la información esté en español.".into(),
            recommendation: "Agregar rótulo complementario en español si aplica.".into(),
            reference: "Resol. 5109 Art. 18".into(),
            severity: None,
            applicability: None,
        }
    }

    #[test]
    fn test_valid_item_passes() {
        assert!(item().validate().is_ok());
    }

    #[test]
    fn test_blank_reference_rejected() {
        let mut it = item();
        it.reference = "   ".into();
        match it.validate() {
            Err(ConfigurationError::MissingField { field, .. }) => assert_eq!(field, "reference"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut it = item();
        it.title = String::new();
        assert!(matches!(
            it.validate(),
            Err(ConfigurationError::MissingField { field: "title", .. })
        ));
    }

    #[test]
    fn test_optional_tags_omitted_from_json() {
        let json = serde_json::to_value(item()).unwrap();
        assert!(json.get("severity").is_none());
        assert!(json.get("applicability").is_none());
    }

    #[test]
    fn test_tags_deserialize_snake_case() {
        let json = serde_json::json!({
            "category": "Frontal",
            "title": "Forma y color del sello",
            "what_to_check": "Revisar forma octogonal.",
            "recommendation": "Rediseñar sellos.",
            "reference": "Resol. 810/2492",
            "severity": "critical",
            "applicability": "finished_product"
        });
        let parsed: ChecklistItem = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.severity, Some(Severity::Critical));
        assert_eq!(parsed.applicability, Some(Applicability::FinishedProduct));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Severity::Minor.to_string(), "Menor");
        assert_eq!(Applicability::RawMaterial.to_string(), "Materia prima");
    }
}
