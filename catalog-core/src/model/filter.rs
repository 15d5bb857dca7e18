//! src/model/filter.rs
//! ============================================================================
//! # Filter engine
//!
//! [`FilterState`] holds the three user criteria. [`apply`] turns a catalog
//! and a filter state into a [`VisibleSet`]: the indices of every entry that
//! passes all three predicates, in catalog order. It is recomputed from
//! scratch on every change.

use compact_str::CompactString;

use crate::model::{
    entry::{Catalog, Entry},
    tabs::{self, ALL_TAB, TabScope},
};

/// Current tab / search / category selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub tab: CompactString,
    /// Already trimmed. Empty means no search restriction.
    pub search_text: String,
    /// `None` is the "All Categories" reset option.
    pub category: Option<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            tab: CompactString::const_new(ALL_TAB),
            search_text: String::new(),
            category: None,
        }
    }
}

impl FilterState {
    pub fn set_tab(&mut self, tab: &str) {
        self.tab = CompactString::new(tab);
    }

    /// Stores the trimmed input.
    pub fn set_search(&mut self, raw: &str) {
        self.search_text = raw.trim().to_string();
    }

    /// An empty string is treated like the reset option.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category.filter(|c| !c.is_empty());
    }

    pub fn scope(&self) -> TabScope {
        tabs::scope_for(&self.tab)
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Predicates resolved once per recomputation.
struct CompiledFilter<'a> {
    scope: TabScope,
    needle: Option<String>,
    category: Option<&'a str>,
}

impl<'a> CompiledFilter<'a> {
    fn new(state: &'a FilterState) -> Self {
        Self {
            scope: state.scope(),
            needle: (!state.search_text.is_empty()).then(|| state.search_text.to_lowercase()),
            category: state.category.as_deref(),
        }
    }

    fn matches(&self, entry: &Entry) -> bool {
        self.scope.allows(&entry.category) && self.matches_search(entry) && self.matches_category(entry)
    }

    fn matches_search(&self, entry: &Entry) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => {
                entry.name.to_lowercase().contains(needle.as_str())
                    || entry.description.to_lowercase().contains(needle.as_str())
            }
        }
    }

    fn matches_category(&self, entry: &Entry) -> bool {
        self.category.is_none_or(|wanted| entry.category == wanted)
    }
}

/// Catalog indices of the visible entries, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSet {
    indices: Vec<usize>,
}

impl VisibleSet {
    /// Every entry of `catalog`.
    pub fn all(catalog: &Catalog) -> Self {
        Self {
            indices: (0..catalog.len()).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Catalog index of the `position`-th visible entry.
    pub fn get(&self, position: usize) -> Option<usize> {
        self.indices.get(position).copied()
    }

    pub fn entries<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a Entry> + 'a {
        self.indices.iter().filter_map(move |&i| catalog.get(i))
    }
}

/// Recompute the visible subset. Pure; same inputs give the same output.
pub fn apply(catalog: &Catalog, state: &FilterState) -> VisibleSet {
    let filter = CompiledFilter::new(state);
    let indices = catalog
        .iter()
        .enumerate()
        .filter(|(_, entry)| filter.matches(entry))
        .map(|(i, _)| i)
        .collect();

    VisibleSet { indices }
}
