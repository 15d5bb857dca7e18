//! src/model/entry.rs
//! ============================================================================
//! # Catalog entries
//!
//! An [`Entry`] is one directory item as it appears in the JSON document.
//! The document is not validated: absent or `null` fields become empty
//! strings and are shown as empty text.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

/// One catalog item. No identity beyond its position; duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    #[serde(deserialize_with = "nullable_string")]
    pub name: String,

    #[serde(deserialize_with = "nullable_string")]
    pub description: String,

    #[serde(deserialize_with = "nullable_string")]
    pub category: String,

    #[serde(deserialize_with = "nullable_string")]
    pub url: String,
}

impl Entry {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            url: url.into(),
        }
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The full list as loaded. Never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Decode a JSON array of entries.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let entries: Vec<Entry> = serde_json::from_slice(bytes)?;
        Ok(Self::new(entries))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Distinct categories, sorted. Used for the category picker.
    pub fn categories(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, category: &str) -> Entry {
        Entry::new(name, "", category, "")
    }

    #[test]
    fn test_categories_are_distinct_and_sorted() {
        let catalog = Catalog::new(vec![
            entry("a", "Search Engine"),
            entry("b", "Database"),
            entry("c", "Search Engine"),
            entry("d", "Cloud Storage"),
            entry("e", "Database"),
        ]);

        assert_eq!(
            catalog.categories(),
            vec!["Cloud Storage", "Database", "Search Engine"]
        );
    }

    #[test]
    fn test_categories_of_empty_catalog() {
        assert!(Catalog::default().categories().is_empty());
    }

    #[test]
    fn test_from_json_keeps_order_and_duplicates() {
        let json = br#"[
            {"name": "Redis", "description": "KV store", "category": "Database", "url": "https://github.com/redis"},
            {"name": "Redis", "description": "KV store", "category": "Database", "url": "https://github.com/redis"},
            {"name": "Elastic", "description": "Search", "category": "Search Engine", "url": "https://github.com/elastic"}
        ]"#;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(0), catalog.get(1));
        assert_eq!(catalog.get(2).unwrap().name, "Elastic");
    }

    #[test]
    fn test_missing_and_null_fields_become_empty() {
        let json = br#"[{"name": "Bare", "description": null, "extra": 42}]"#;

        let catalog = Catalog::from_json(json).unwrap();
        let bare = catalog.get(0).unwrap();
        assert_eq!(bare.name, "Bare");
        assert_eq!(bare.description, "");
        assert_eq!(bare.category, "");
        assert_eq!(bare.url, "");
    }

    #[test]
    fn test_non_array_document_is_rejected() {
        assert!(Catalog::from_json(br#"{"servers": []}"#).is_err());
        assert!(Catalog::from_json(b"not json").is_err());
    }
}
