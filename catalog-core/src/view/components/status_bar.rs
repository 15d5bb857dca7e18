//! src/view/components/status_bar.rs
//!
//! Left: the "Showing X of Y servers" summary. Right: the current
//! notification if any, otherwise key hints for the active mode.

use crate::{
    model::{
        catalog_view::Counters,
        ui_state::{NotificationLevel, UIMode, UIState},
    },
    view::theme,
};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget},
};

const BROWSE_HINTS: &str = "1-7 tabs · / search · c category · ⏎ open · ? help · q quit";
const SEARCH_HINTS: &str = "type to filter · ⌫ delete · ^U clear · ⏎/Esc done";

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, counters: Counters, ui_state: &UIState, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(area);

        Paragraph::new(format!(" {}", counters.summary()))
            .style(Style::default().fg(theme::FOREGROUND).bg(theme::CURRENT_LINE))
            .alignment(Alignment::Left)
            .render(layout[0], frame.buffer_mut());

        let (right_text, right_style) = match &ui_state.notification {
            Some(note) => {
                let color = match note.level {
                    NotificationLevel::Info => theme::GREEN,
                    NotificationLevel::Warning => theme::YELLOW,
                    NotificationLevel::Error => theme::RED,
                };
                (note.message.to_string(), Style::default().fg(color))
            }
            None => {
                let hints = match ui_state.mode {
                    UIMode::Browse => BROWSE_HINTS,
                    UIMode::Search => SEARCH_HINTS,
                };
                (hints.to_string(), theme::hint_style())
            }
        };

        Paragraph::new(format!("{right_text} "))
            .style(right_style.bg(theme::CURRENT_LINE))
            .alignment(Alignment::Right)
            .render(layout[1], frame.buffer_mut());
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
