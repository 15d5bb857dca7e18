//! src/model/catalog_view.rs
//! ============================================================================
//! # `CatalogView`: Explicit State of the Catalog Filter View
//!
//! Owns the loaded catalog, its category list, the filter criteria, the
//! derived visible set and the card selection. Every filter mutation
//! recomputes the visible set synchronously before returning.

use tracing::{debug, info, warn};

use crate::model::{
    entry::{Catalog, Entry},
    filter::{self, FilterState, VisibleSet},
    tabs::TabScope,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// Terminal for the session. Holds the error text for the log/status.
    Failed(String),
}

/// Visible vs. total entry counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub visible: usize,
    pub total: usize,
}

impl Counters {
    /// `"1 Server"` / `"12 Servers"`
    pub fn count_label(&self) -> String {
        let noun = if self.visible == 1 { "Server" } else { "Servers" };
        format!("{} {noun}", self.visible)
    }

    /// `"Showing 3 of 12 servers"`
    pub fn summary(&self) -> String {
        format!("Showing {} of {} servers", self.visible, self.total)
    }
}

#[derive(Debug, Clone)]
pub struct CatalogView {
    catalog: Catalog,
    categories: Vec<String>,
    filter: FilterState,
    visible: VisibleSet,
    load_state: LoadState,
    /// Position within `visible`, not a catalog index.
    selected: usize,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogView {
    /// Empty view waiting for the loader.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::default(),
            categories: Vec::new(),
            filter: FilterState::default(),
            visible: VisibleSet::default(),
            load_state: LoadState::Loading,
            selected: 0,
        }
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        let mut view = Self::new();
        view.load_succeeded(catalog);
        view
    }

    pub fn load_succeeded(&mut self, catalog: Catalog) {
        info!(entries = catalog.len(), "Catalog loaded");
        self.categories = catalog.categories();
        self.catalog = catalog;
        self.load_state = LoadState::Ready;
        self.recompute();
    }

    /// Drops whatever was loaded; no partial data is ever shown.
    pub fn load_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!("Catalog unavailable: {reason}");
        self.catalog = Catalog::default();
        self.categories.clear();
        self.visible = VisibleSet::default();
        self.selected = 0;
        self.load_state = LoadState::Failed(reason);
    }

    pub fn set_tab(&mut self, tab: &str) {
        self.filter.set_tab(tab);
        if self.filter.scope() == TabScope::Unmapped {
            debug!("Tab '{tab}' has no category mapping; showing every entry");
        }
        self.recompute();
    }

    pub fn set_search(&mut self, raw: &str) {
        self.filter.set_search(raw);
        self.recompute();
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.filter.set_category(category);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.visible = filter::apply(&self.catalog, &self.filter);
        self.clamp_selection();
        debug!(
            tab = %self.filter.tab,
            search = %self.filter.search_text,
            category = ?self.filter.category,
            visible = self.visible.len(),
            total = self.catalog.len(),
            "Recomputed visible set"
        );
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.visible.len().saturating_sub(1));
    }

    pub fn counters(&self) -> Counters {
        Counters {
            visible: self.visible.len(),
            total: self.catalog.len(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.visible.entries(&self.catalog)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.visible
            .get(self.selected)
            .and_then(|index| self.catalog.get(index))
    }

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_previous(&mut self) {
        self.move_selection(-1);
    }

    /// Moves by `delta` cards, clamped to the visible range.
    pub fn move_selection(&mut self, delta: isize) {
        let last = self.visible.len().saturating_sub(1);
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible.len().saturating_sub(1);
    }
}
