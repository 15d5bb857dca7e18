//! Full-body messages shown instead of the card list.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::view::theme;

pub const NO_RESULTS_TITLE: &str = "No Matching Servers Found";
pub const NO_RESULTS_MESSAGE: &str =
    "Try adjusting your search or filters to find what you're looking for.";

pub const LOAD_ERROR_TITLE: &str = "Error Loading Servers";
pub const LOAD_ERROR_MESSAGE: &str =
    "There was a problem loading the server data. Please try again later.";

pub const LOADING_TITLE: &str = "Loading servers…";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub title: &'static str,
    pub message: &'static str,
    accent: Color,
}

impl Placeholder {
    pub const fn no_results() -> Self {
        Self {
            title: NO_RESULTS_TITLE,
            message: NO_RESULTS_MESSAGE,
            accent: theme::YELLOW,
        }
    }

    pub const fn load_error() -> Self {
        Self {
            title: LOAD_ERROR_TITLE,
            message: LOAD_ERROR_MESSAGE,
            accent: theme::RED,
        }
    }

    pub const fn loading() -> Self {
        Self {
            title: LOADING_TITLE,
            message: "",
            accent: theme::YELLOW,
        }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent))
            .style(theme::panel_style());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // vertically centre the two lines
        let top_pad = inner.height.saturating_sub(3) / 2;
        let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::from("")).collect();
        lines.push(Line::styled(
            self.title,
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
        ));
        if !self.message.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::styled(self.message, theme::hint_style()));
        }

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, inner);
    }
}
