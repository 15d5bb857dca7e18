//! src/view/ui.rs
//! ============================================================
//! Frame renderer that draws the whole TUI from the current
//! `CatalogView` and `UIState`. Every frame repaints the full card
//! list; there is no diffing.

use std::time::{Duration, Instant};

use ratatui::prelude::*;
use tracing::{instrument, warn};

use crate::{
    model::{
        catalog_view::{CatalogView, LoadState},
        ui_state::{UIOverlay, UIState},
    },
    view::components::{
        card_list::CardList, category_picker::CategoryPickerOverlay, filter_bar::FilterBar,
        header::Header, help_overlay::HelpOverlay, placeholder::Placeholder,
        status_bar::StatusBar, tab_bar::TabBar,
    },
};

/// Rows not available to cards: header, tab bar, filter bar, status bar
/// and the card list border.
pub const CHROME_ROWS: u16 = 1 + 3 + 3 + 1 + 2;

#[derive(Debug, Default, Clone, Copy)]
pub struct RenderStats {
    pub frames: u64,
    pub slow: u64,
    pub total: Duration,
}

impl RenderStats {
    /// Average frame cost in milliseconds.
    pub fn avg_ms(&self) -> f64 {
        if self.frames == 0 {
            0.0
        } else {
            self.total.as_secs_f64() * 1000.0 / self.frames as f64
        }
    }
}

pub struct UIRenderer {
    stats: RenderStats,
}

impl UIRenderer {
    pub fn new() -> Self {
        Self {
            stats: RenderStats::default(),
        }
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    #[instrument(level = "trace", skip_all)]
    pub fn render(&mut self, frame: &mut Frame<'_>, view: &CatalogView, ui_state: &UIState) {
        let start = Instant::now();

        let [header, tabs, filters, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let counters = view.counters();

        Header::render(frame, counters, header);
        TabBar::render(frame, &view.filter().tab, tabs);
        FilterBar::render(frame, view.filter(), ui_state, filters);
        Self::draw_body(frame, view, body);
        StatusBar::new().render(frame, counters, ui_state, status);
        Self::draw_overlay(frame, view, ui_state);

        let dur = start.elapsed();
        self.stats.total += dur;
        self.stats.frames += 1;
        if dur.as_millis() > 16 {
            self.stats.slow += 1;
            warn!("Slow render: {}ms (target: <16ms)", dur.as_millis());
        }
    }

    fn draw_body(frame: &mut Frame<'_>, view: &CatalogView, area: Rect) {
        match view.load_state() {
            LoadState::Loading => Placeholder::loading().render(frame, area),
            LoadState::Failed(_) => Placeholder::load_error().render(frame, area),
            LoadState::Ready if view.visible().is_empty() => {
                Placeholder::no_results().render(frame, area);
            }
            LoadState::Ready => CardList::new().render(frame, view, area),
        }
    }

    fn draw_overlay(frame: &mut Frame<'_>, view: &CatalogView, ui_state: &UIState) {
        let screen = frame.area();
        match ui_state.overlay {
            UIOverlay::None => {}
            UIOverlay::Help => HelpOverlay::render(frame, centered(screen, 60, 60)),
            UIOverlay::CategoryPicker => CategoryPickerOverlay::render(
                frame,
                view.categories(),
                view.filter().category.as_deref(),
                ui_state.picker_index,
                centered(screen, 40, 70),
            ),
        }
    }
}

impl Default for UIRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rectangle of `pct_x` × `pct_y` percent centred in `area`.
pub fn centered(area: Rect, pct_x: u16, pct_y: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - pct_y) / 2),
        Constraint::Percentage(pct_y),
        Constraint::Percentage((100 - pct_y) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - pct_x) / 2),
        Constraint::Percentage(pct_x),
        Constraint::Percentage((100 - pct_x) / 2),
    ])
    .areas(middle);

    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::{Catalog, Entry};
    use crate::view::{
        components::{
            card_list::FILTERED_MARK,
            placeholder::{LOAD_ERROR_TITLE, NO_RESULTS_TITLE},
        },
        theme,
    };
    use ratatui::{Terminal, backend::TestBackend};

    fn draw_buffer(view: &CatalogView, ui_state: &UIState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut renderer = UIRenderer::new();
        terminal
            .draw(|frame| renderer.render(frame, view, ui_state))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn draw(view: &CatalogView, ui_state: &UIState) -> String {
        let buffer = draw_buffer(view, ui_state);
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn sample() -> CatalogView {
        CatalogView::with_catalog(Catalog::new(vec![
            Entry::new("Redis", "In-memory data store", "Database", "https://github.com/redis"),
            Entry::new("Elastic", "Search engine", "Search Engine", "https://github.com/elastic"),
        ]))
    }

    #[test]
    fn test_cards_show_name_category_description_and_link() {
        let screen = draw(&sample(), &UIState::new());

        assert!(screen.contains("Redis"));
        assert!(screen.contains("Database"));
        assert!(screen.contains("In-memory data store"));
        assert!(screen.contains("https://github.com/redis"));
        assert!(screen.contains("2 Servers"));
        assert!(screen.contains("Showing 2 of 2 servers"));
    }

    #[test]
    fn test_mismatched_filters_show_no_results() {
        let mut view = sample();
        view.set_tab("search");
        view.set_category(Some("Database".into()));

        let screen = draw(&view, &UIState::new());
        assert!(screen.contains(NO_RESULTS_TITLE));
        assert!(screen.contains("Showing 0 of 2 servers"));
        assert!(!screen.contains("https://github.com/redis"));
    }

    #[test]
    fn test_load_failure_replaces_cards() {
        let mut view = CatalogView::new();
        view.load_failed("boom");

        let screen = draw(&view, &UIState::new());
        assert!(screen.contains(LOAD_ERROR_TITLE));
        assert!(screen.contains("0 Servers"));
        assert!(screen.contains("Showing 0 of 0 servers"));
    }

    #[test]
    fn test_category_picker_lists_reset_and_categories() {
        let view = sample();
        let mut ui_state = UIState::new();
        ui_state.overlay = UIOverlay::CategoryPicker;

        let screen = draw(&view, &ui_state);
        assert!(screen.contains("All Categories"));
        assert!(screen.contains("Search Engine"));
    }

    #[test]
    fn test_stats_count_frames() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut renderer = UIRenderer::new();
        let view = CatalogView::new();
        let ui_state = UIState::new();

        for _ in 0..3 {
            terminal
                .draw(|frame| renderer.render(frame, &view, &ui_state))
                .unwrap();
        }
        assert_eq!(renderer.stats().frames, 3);
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered(outer, 40, 60);
        assert!(inner.width <= 40 && inner.height <= 30);
        assert!(inner.x >= 20 && inner.y >= 10);
    }

    /// Text of the tab-row cells drawn with the active-tab background.
    fn active_tab_text(view: &CatalogView) -> String {
        let buffer = draw_buffer(view, &UIState::new());
        // header row, then the tab bar's top border
        let tab_row: u16 = 2;
        (0..buffer.area.width)
            .map(|x| &buffer[(x, tab_row)])
            .filter(|cell| cell.bg == theme::PURPLE)
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_selected_tab_is_the_only_active_one() {
        let mut view = sample();
        assert_eq!(active_tab_text(&view), "1 All Servers");

        view.set_tab("database");
        assert_eq!(active_tab_text(&view), "3 Databases");
    }

    #[test]
    fn test_unmapped_tab_highlights_nothing() {
        let mut view = sample();
        view.set_tab("community");
        assert_eq!(active_tab_text(&view), "");
    }

    #[test]
    fn test_list_title_marks_active_filters() {
        let mut view = sample();
        assert!(!draw(&view, &UIState::new()).contains(FILTERED_MARK));

        view.set_tab("database");
        assert!(draw(&view, &UIState::new()).contains(FILTERED_MARK));

        view.set_tab("all");
        view.set_search("  ");
        assert!(!draw(&view, &UIState::new()).contains(FILTERED_MARK));
    }
}
