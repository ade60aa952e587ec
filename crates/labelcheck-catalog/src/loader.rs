//! # YAML Catalog Documents
//!
//! A catalog may be supplied as a YAML document at configuration time
//! instead of the builtin list. The document nests items under their
//! category; it is flattened in document order and validated through
//! [`Catalog::new`], so uniqueness and required-field rules are the same
//! as for the builtin catalog.
//!
//! ```yaml
//! name: "Etiquetado nutricional"
//! categories:
//!   - name: "Resolución 5109 — Rotulado general"
//!     items:
//!       - title: "Idioma español obligatorio"
//!         what_to_check: "Verificar que toda la información esté en español."
//!         recommendation: "Agregar rótulo complementario en español si aplica."
//!         reference: "Resol. 5109 Art. 18"
//!         severity: medium
//!         applicability: both
//! ```

use std::path::Path;

use serde::Deserialize;

use labelcheck_core::{Applicability, ChecklistItem, ConfigurationError, Severity};

use crate::catalog::Catalog;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    name: String,
    categories: Vec<CategoryDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoryDocument {
    name: String,
    #[serde(default)]
    items: Vec<ItemDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ItemDocument {
    title: String,
    what_to_check: String,
    recommendation: String,
    reference: String,
    #[serde(default)]
    severity: Option<Severity>,
    #[serde(default)]
    applicability: Option<Applicability>,
}

impl Catalog {
    /// Parse and validate a YAML catalog document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigurationError> {
        let doc: CatalogDocument =
            serde_yaml::from_str(yaml).map_err(|e| ConfigurationError::Parse(e.to_string()))?;

        let items = doc
            .categories
            .into_iter()
            .flat_map(|category| {
                let name = category.name;
                category.items.into_iter().map(move |item| ChecklistItem {
                    category: name.clone(),
                    title: item.title,
                    what_to_check: item.what_to_check,
                    recommendation: item.recommendation,
                    reference: item.reference,
                    severity: item.severity,
                    applicability: item.applicability,
                })
            })
            .collect();

        Catalog::new(doc.name, items)
    }

    /// Read, parse and validate a YAML catalog file.
    pub fn from_yaml_path(path: &Path) -> Result<Self, ConfigurationError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            catalog = catalog.name(),
            items = catalog.len(),
            "loaded catalog document"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
name: "Muestra"
categories:
  - name: "General"
    items:
      - title: "Idioma español obligatorio"
        what_to_check: "Verificar idioma."
        recommendation: "Traducir."
        reference: "Resol. 5109 Art. 18"
        severity: medium
        applicability: both
      - title: "Lote legible"
        what_to_check: "Comprobar lote."
        recommendation: "Imprimir lote."
        reference: "Resol. 5109 Art. 10"
  - name: "Frontal"
    items:
      - title: "Forma del sello"
        what_to_check: "Octágono negro."
        recommendation: "Rediseñar."
        reference: "Resol. 810/2492"
        severity: critical
"#;

    #[test]
    fn test_from_yaml_flattens_categories_in_order() {
        let catalog = Catalog::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(catalog.name(), "Muestra");
        assert_eq!(catalog.len(), 3);
        let items = catalog.items();
        assert_eq!(items[0].category, "General");
        assert_eq!(items[2].category, "Frontal");
        assert_eq!(items[0].severity, Some(Severity::Medium));
        assert_eq!(items[1].severity, None);
        assert_eq!(items[1].applicability, None);
    }

    #[test]
    fn test_from_yaml_rejects_duplicate_titles_across_categories() {
        let yaml = r#"
name: "dup"
categories:
  - name: "A"
    items:
      - { title: "X", what_to_check: "a", recommendation: "b", reference: "c" }
  - name: "B"
    items:
      - { title: "X", what_to_check: "a", recommendation: "b", reference: "c" }
"#;
        assert!(matches!(
            Catalog::from_yaml_str(yaml),
            Err(ConfigurationError::DuplicateTitle { .. })
        ));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_severity() {
        let yaml = r#"
name: "bad"
categories:
  - name: "A"
    items:
      - { title: "X", what_to_check: "a", recommendation: "b", reference: "c", severity: urgent }
"#;
        assert!(matches!(
            Catalog::from_yaml_str(yaml),
            Err(ConfigurationError::Parse(_))
        ));
    }

    #[test]
    fn test_from_yaml_rejects_missing_reference() {
        let yaml = r#"
name: "bad"
categories:
  - name: "A"
    items:
      - { title: "X", what_to_check: "a", recommendation: "b" }
"#;
        assert!(matches!(
            Catalog::from_yaml_str(yaml),
            Err(ConfigurationError::Parse(_))
        ));
    }

    #[test]
    fn test_from_yaml_empty_categories_is_empty_catalog() {
        let yaml = "name: \"vacío\"\ncategories: []\n";
        assert!(matches!(
            Catalog::from_yaml_str(yaml),
            Err(ConfigurationError::EmptyCatalog { .. })
        ));
    }

    #[test]
    fn test_from_yaml_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let catalog = Catalog::from_yaml_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_from_yaml_path_missing_file() {
        let res = Catalog::from_yaml_path(Path::new("/nonexistent/catalog.yaml"));
        assert!(matches!(res, Err(ConfigurationError::Io(_))));
    }
}
