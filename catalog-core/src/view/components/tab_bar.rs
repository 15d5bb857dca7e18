use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};

use crate::{
    model::tabs::{self, TABS},
    view::theme,
};

/// One tab per row of the tab table, numbered for the `1`–`7` shortcuts.
pub struct TabBar;

impl TabBar {
    pub fn render(frame: &mut Frame<'_>, active_tab: &str, area: Rect) {
        let titles = TABS.iter().enumerate().map(|(i, spec)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), theme::hint_style()),
                Span::raw(spec.label),
            ])
        });

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme::border_style(false))
                    .style(theme::panel_style()),
            )
            .style(Style::default().fg(theme::FOREGROUND))
            .highlight_style(
                Style::default()
                    .fg(theme::BACKGROUND)
                    .bg(theme::PURPLE)
                    .add_modifier(Modifier::BOLD),
            )
            .divider(Span::styled("│", theme::hint_style()))
            // an unmapped id highlights none
            .select(tabs::tab_index(active_tab));

        frame.render_widget(tabs, area);
    }
}
