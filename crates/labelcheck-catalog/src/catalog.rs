//! # Catalog
//!
//! A validated, ordered sequence of [`ChecklistItem`]s. Iteration is
//! restartable and always yields items in catalog order, which is the
//! order used by the audit-state projection and the report table.

use std::collections::HashMap;

use serde::Serialize;

use labelcheck_core::{ChecklistItem, ConfigurationError};

/// A group of items sharing a category label, in catalog order.
#[derive(Debug, Clone, Serialize)]
pub struct Category<'a> {
    /// Category label.
    pub name: &'a str,
    /// Items of the category, in catalog order.
    pub items: Vec<&'a ChecklistItem>,
}

/// The immutable checklist catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    name: String,
    items: Vec<ChecklistItem>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from items, validating them.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::EmptyCatalog`] if `items` is empty.
    /// - [`ConfigurationError::MissingField`] if a required field is blank.
    /// - [`ConfigurationError::DuplicateTitle`] if two items share a title,
    ///   whether or not they are in the same category.
    pub fn new(
        name: impl Into<String>,
        items: Vec<ChecklistItem>,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if items.is_empty() {
            return Err(ConfigurationError::EmptyCatalog { name });
        }

        let mut index: HashMap<String, usize> = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            item.validate()?;
            if let Some(&first) = index.get(&item.title) {
                return Err(ConfigurationError::DuplicateTitle {
                    title: item.title.clone(),
                    first_category: items[first].category.clone(),
                    second_category: item.category.clone(),
                });
            }
            index.insert(item.title.clone(), pos);
        }

        tracing::debug!(catalog = %name, items = items.len(), "catalog validated");
        Ok(Self { name, items, index })
    }

    /// The compiled-in catalog.
    pub fn builtin() -> Result<Self, ConfigurationError> {
        crate::builtin::builtin_catalog()
    }

    /// Catalog name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Iterate items in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChecklistItem> {
        self.items.iter()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items. Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by title.
    pub fn get(&self, title: &str) -> Option<&ChecklistItem> {
        self.index.get(title).map(|&pos| &self.items[pos])
    }

    /// Whether a title belongs to the catalog.
    pub fn contains(&self, title: &str) -> bool {
        self.index.contains_key(title)
    }

    /// Titles in catalog order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.title.as_str())
    }

    /// Items grouped by category, categories in order of first appearance.
    pub fn categories(&self) -> Vec<Category<'_>> {
        let mut groups: Vec<Category<'_>> = Vec::new();
        for item in &self.items {
            match groups.iter_mut().find(|g| g.name == item.category) {
                Some(group) => group.items.push(item),
                None => groups.push(Category {
                    name: &item.category,
                    items: vec![item],
                }),
            }
        }
        groups
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ChecklistItem;
    type IntoIter = std::slice::Iter<'a, ChecklistItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
