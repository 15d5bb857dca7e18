//! Tab table: which categories each tab shows.
//!
//! `"all"` shows everything. A tab id missing from [`TABS`] also shows
//! everything, as [`TabScope::Unmapped`] so callers can tell it apart
//! from `All`.

/// Identifier of the tab that applies no category restriction.
pub const ALL_TAB: &str = "all";

/// What a tab lets through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabScope {
    /// The "all" sentinel.
    All,
    /// Only entries whose category is listed.
    Categories(&'static [&'static str]),
    /// Tab id with no table row. Passes every entry.
    Unmapped,
}

impl TabScope {
    #[inline]
    pub fn allows(&self, category: &str) -> bool {
        match self {
            Self::All | Self::Unmapped => true,
            Self::Categories(allowed) => allowed.iter().any(|c| *c == category),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub scope: TabScope,
}

/// Tabs in display order.
pub const TABS: [TabSpec; 7] = [
    TabSpec {
        id: ALL_TAB,
        label: "All Servers",
        scope: TabScope::All,
    },
    TabSpec {
        id: "featured",
        label: "Featured",
        scope: TabScope::Categories(&[
            "Search Engine",
            "Database",
            "Version Control",
            "Cloud Storage",
        ]),
    },
    TabSpec {
        id: "database",
        label: "Databases",
        scope: TabScope::Categories(&["Database"]),
    },
    TabSpec {
        id: "search",
        label: "Search",
        scope: TabScope::Categories(&["Search Engine"]),
    },
    TabSpec {
        id: "project",
        label: "Project Management",
        scope: TabScope::Categories(&["Project Management"]),
    },
    TabSpec {
        id: "development",
        label: "Development",
        scope: TabScope::Categories(&["Development Tools", "Version Control", "API Integration"]),
    },
    TabSpec {
        id: "cloud",
        label: "Cloud",
        scope: TabScope::Categories(&["Cloud Storage"]),
    },
];

pub fn scope_for(tab: &str) -> TabScope {
    TABS.iter()
        .find(|spec| spec.id == tab)
        .map_or(TabScope::Unmapped, |spec| spec.scope)
}

/// Position of `tab` in the tab bar, if it has one.
pub fn tab_index(tab: &str) -> Option<usize> {
    TABS.iter().position(|spec| spec.id == tab)
}
