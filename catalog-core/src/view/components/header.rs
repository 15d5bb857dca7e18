use ratatui::{prelude::*, widgets::Paragraph};

use crate::{model::catalog_view::Counters, view::theme};

pub const APP_TITLE: &str = "MCP Server Directory";

/// Title on the left, server count on the right.
pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame<'_>, counters: Counters, area: Rect) {
        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(16)]).areas(area);

        Paragraph::new(Line::from(vec![Span::styled(
            format!(" {APP_TITLE}"),
            Style::default().fg(theme::PURPLE).add_modifier(Modifier::BOLD),
        )]))
        .style(theme::panel_style())
        .render(left, frame.buffer_mut());

        Paragraph::new(format!("{} ", counters.count_label()))
            .style(theme::panel_style().fg(theme::GREEN))
            .alignment(Alignment::Right)
            .render(right, frame.buffer_mut());
    }
}
