pub mod error;

pub mod cli;

pub mod config;

pub mod controller {
    pub mod actions;
    pub use actions::Action;

    pub mod action_dispatcher;
    pub use action_dispatcher::{ActionDispatcher, Flow, LinkOpener, SystemBrowser};

    pub mod event_loop;
    pub use event_loop::{EventLoop, TaskResult};

    pub mod key_handler;
    pub use key_handler::KeyHandler;
}

pub mod model {
    pub mod entry;
    pub use entry::{Catalog, Entry};

    pub mod tabs;
    pub use tabs::{ALL_TAB, TABS, TabScope, TabSpec};

    pub mod filter;
    pub use filter::{FilterState, VisibleSet};

    pub mod style;
    pub use style::StyleTag;

    pub mod catalog_view;
    pub use catalog_view::{CatalogView, Counters, LoadState};

    pub mod ui_state;
    pub use ui_state::{Notification, NotificationLevel, UIMode, UIOverlay, UIState};
}

pub mod source {
    pub mod catalog_source;
    pub use catalog_source::CatalogSource;

    pub mod loader;
    pub use loader::{load_catalog, spawn_catalog_load};
}

pub mod view {
    pub mod theme;

    pub mod ui;

    pub mod components {
        pub mod card_list;
        pub use card_list::CardList;
        pub mod category_picker;
        pub use category_picker::CategoryPickerOverlay;
        pub mod filter_bar;
        pub use filter_bar::FilterBar;
        pub mod header;
        pub use header::Header;
        pub mod help_overlay;
        pub use help_overlay::HelpOverlay;
        pub mod placeholder;
        pub use placeholder::Placeholder;
        pub mod status_bar;
        pub use status_bar::StatusBar;
        pub mod tab_bar;
        pub use tab_bar::TabBar;
    }

    pub use components::*;
}

pub mod printer;

pub mod logging;
pub use logging::Logger;

pub use error::AppError;

pub use model::{catalog_view::CatalogView, ui_state::UIState};
