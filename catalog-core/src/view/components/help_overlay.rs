use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::view::theme;

const BINDINGS: &[(&str, &str)] = &[
    ("1-7", "Select tab"),
    ("Tab / ← →", "Next / previous tab"),
    ("/", "Search name and description"),
    ("c", "Choose category"),
    ("↑ ↓ / j k", "Move selection"),
    ("PgUp PgDn", "Move by a page"),
    ("g / G", "First / last server"),
    ("Enter / o", "Open link in browser"),
    ("?", "Toggle this help"),
    ("q / Ctrl+C", "Quit"),
];

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame<'_>, area: Rect) {
        frame.render_widget(Clear, area);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(keys, what)| {
                Line::from(vec![
                    Span::styled(
                        format!("{keys:>12}  "),
                        Style::default().fg(theme::YELLOW).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*what, Style::default().fg(theme::FOREGROUND)),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(theme::PURPLE))
            .style(theme::panel_style());

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
