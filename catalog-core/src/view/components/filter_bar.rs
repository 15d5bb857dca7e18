//! Search field and category selector, side by side.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    model::{
        filter::FilterState,
        ui_state::{UIMode, UIOverlay, UIState},
    },
    view::theme,
};

pub const SEARCH_PLACEHOLDER: &str = "Press / to search servers…";
pub const ALL_CATEGORIES: &str = "All Categories";

pub struct FilterBar;

impl FilterBar {
    pub fn render(frame: &mut Frame<'_>, filter: &FilterState, ui_state: &UIState, area: Rect) {
        let [search_area, category_area] =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
                .areas(area);

        Self::render_search(frame, ui_state, search_area);
        Self::render_category(frame, filter, ui_state, category_area);
    }

    fn render_search(frame: &mut Frame<'_>, ui_state: &UIState, area: Rect) {
        let focused = ui_state.mode == UIMode::Search;

        let content = if focused {
            Line::from(vec![
                Span::styled(ui_state.search_input.as_str(), Style::default().fg(theme::FOREGROUND)),
                Span::styled("│", Style::default().fg(theme::CYAN)),
            ])
        } else if ui_state.search_input.is_empty() {
            Line::styled(SEARCH_PLACEHOLDER, theme::hint_style())
        } else {
            Line::styled(ui_state.search_input.as_str(), Style::default().fg(theme::FOREGROUND))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(theme::border_style(focused))
            .style(theme::panel_style());

        frame.render_widget(Paragraph::new(content).block(block), area);
    }

    fn render_category(frame: &mut Frame<'_>, filter: &FilterState, ui_state: &UIState, area: Rect) {
        let focused = ui_state.overlay == UIOverlay::CategoryPicker;
        let label = filter.category.as_deref().unwrap_or(ALL_CATEGORIES);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Category [c] ")
            .border_style(theme::border_style(focused))
            .style(theme::panel_style());

        let paragraph = Paragraph::new(Line::from(vec![
            Span::styled(label, Style::default().fg(theme::FOREGROUND)),
            Span::styled(" ▾", theme::hint_style()),
        ]))
        .block(block);

        frame.render_widget(paragraph, area);
    }
}
