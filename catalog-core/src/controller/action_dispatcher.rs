//! src/controller/action_dispatcher.rs
//! ============================================================================
//! # Action dispatcher
//!
//! Applies one [`Action`] to the view and UI state. Filter changes go
//! through [`CatalogView`], which recomputes the visible set before the
//! call returns, so the next frame always draws fresh data.

use std::time::Instant;

use tracing::{debug, error, info, warn};

use crate::{
    controller::actions::Action,
    error::AppError,
    model::{
        catalog_view::CatalogView,
        tabs::{self, TABS},
        ui_state::{UIMode, UIOverlay, UIState},
    },
    view::{components::card_list::CARD_HEIGHT, ui::CHROME_ROWS},
};

/// Opens entry links. The production impl hands URLs to the platform.
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<(), AppError>;
}

/// Uses the `open` crate (default browser / `xdg-open`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), AppError> {
        open::that_detached(url).map_err(|e| AppError::browser(url, e))
    }
}

/// Whether the main loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DispatcherStats {
    pub total_actions: u64,
    pub filter_changes: u64,
    pub links_opened: u64,
}

pub struct ActionDispatcher<O: LinkOpener = SystemBrowser> {
    opener: O,
    open_links: bool,
    stats: DispatcherStats,
}

impl ActionDispatcher<SystemBrowser> {
    pub fn new(open_links: bool) -> Self {
        Self::with_opener(SystemBrowser, open_links)
    }
}

impl<O: LinkOpener> ActionDispatcher<O> {
    pub fn with_opener(opener: O, open_links: bool) -> Self {
        Self {
            opener,
            open_links,
            stats: DispatcherStats::default(),
        }
    }

    pub fn stats(&self) -> DispatcherStats {
        self.stats
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    pub fn handle(&mut self, view: &mut CatalogView, ui: &mut UIState, action: Action) -> Flow {
        self.stats.total_actions += 1;

        match action {
            Action::Quit => return Flow::Quit,

            Action::NoOp => return Flow::Continue,

            Action::Tick => {
                if ui.expire_notification(Instant::now()) {
                    ui.request_redraw();
                }
                return Flow::Continue;
            }

            Action::CatalogLoaded(Ok(catalog)) => view.load_succeeded(catalog),

            Action::CatalogLoaded(Err(e)) => {
                error!("Catalog load failed: {e}");
                view.load_failed(e.to_string());
                ui.close_overlay();
            }

            Action::SelectTab(index) => self.select_tab(view, index),

            Action::NextTab => {
                let next = Self::current_tab_index(view).map_or(0, |i| (i + 1) % TABS.len());
                self.select_tab(view, next);
            }

            Action::PreviousTab => {
                let prev = Self::current_tab_index(view)
                    .map_or(0, |i| (i + TABS.len() - 1) % TABS.len());
                self.select_tab(view, prev);
            }

            Action::FocusSearch => ui.mode = UIMode::Search,

            Action::LeaveSearch => ui.mode = UIMode::Browse,

            Action::SearchInput(c) => {
                ui.search_input.push(c);
                self.search_changed(view, ui);
            }

            Action::SearchBackspace => {
                if ui.search_input.pop().is_some() {
                    self.search_changed(view, ui);
                }
            }

            Action::ClearSearch => {
                ui.search_input.clear();
                self.search_changed(view, ui);
            }

            Action::OpenCategoryPicker => {
                ui.picker_index = view
                    .filter()
                    .category
                    .as_ref()
                    .and_then(|current| view.categories().iter().position(|c| c == current))
                    .map_or(0, |pos| pos + 1);
                ui.overlay = UIOverlay::CategoryPicker;
            }

            Action::PickerUp => ui.picker_index = ui.picker_index.saturating_sub(1),

            Action::PickerDown => {
                // Row 0 is "All Categories"
                ui.picker_index = (ui.picker_index + 1).min(view.categories().len());
            }

            Action::ConfirmCategory => {
                let category = ui
                    .picker_index
                    .checked_sub(1)
                    .and_then(|i| view.categories().get(i))
                    .cloned();
                debug!("Category filter set to {:?}", category);
                view.set_category(category);
                self.stats.filter_changes += 1;
                ui.close_overlay();
            }

            Action::CloseOverlay => ui.close_overlay(),

            Action::ToggleHelp => ui.toggle_help(),

            Action::MoveSelectionUp => view.select_previous(),

            Action::MoveSelectionDown => view.select_next(),

            Action::PageUp => view.move_selection(-Self::page_size(ui)),

            Action::PageDown => view.move_selection(Self::page_size(ui)),

            Action::SelectFirst => view.select_first(),

            Action::SelectLast => view.select_last(),

            Action::OpenSelected => self.open_selected(view, ui),

            Action::Resize(_, height) => ui.viewport_height = height,
        }

        ui.request_redraw();
        Flow::Continue
    }

    fn current_tab_index(view: &CatalogView) -> Option<usize> {
        tabs::tab_index(&view.filter().tab)
    }

    fn select_tab(&mut self, view: &mut CatalogView, index: usize) {
        let Some(spec) = TABS.get(index) else {
            warn!("No tab at position {index}");
            return;
        };
        debug!("Tab selected: {}", spec.id);
        view.set_tab(spec.id);
        self.stats.filter_changes += 1;
    }

    fn search_changed(&mut self, view: &mut CatalogView, ui: &UIState) {
        view.set_search(&ui.search_input);
        self.stats.filter_changes += 1;
    }

    fn page_size(ui: &UIState) -> isize {
        let rows = ui.viewport_height.saturating_sub(CHROME_ROWS) / CARD_HEIGHT;
        rows.max(1) as isize
    }

    fn open_selected(&mut self, view: &CatalogView, ui: &mut UIState) {
        let Some(entry) = view.selected_entry() else {
            return;
        };

        if entry.url.is_empty() {
            ui.show_warning(format!("{} has no link", entry.name));
            return;
        }

        if !self.open_links {
            ui.show_info(entry.url.as_str());
            return;
        }

        match self.opener.open(&entry.url) {
            Ok(()) => {
                info!("Opened {}", entry.url);
                self.stats.links_opened += 1;
                ui.show_info(format!("Opened {}", entry.url));
            }
            Err(e) => {
                warn!("{e}");
                ui.show_error(e.to_string());
            }
        }
    }
}
