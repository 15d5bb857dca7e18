//! Category picker overlay: "All Categories" followed by the sorted
//! categories derived from the catalog.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, HighlightSpacing, List, ListItem, ListState},
};

use crate::{
    model::style::StyleTag,
    view::{components::filter_bar::ALL_CATEGORIES, theme},
};

pub struct CategoryPickerOverlay;

impl CategoryPickerOverlay {
    pub fn render(
        frame: &mut Frame<'_>,
        categories: &[String],
        current: Option<&str>,
        picker_index: usize,
        area: Rect,
    ) {
        frame.render_widget(Clear, area);

        let reset = ListItem::new(Line::from(vec![Span::styled(
            ALL_CATEGORIES,
            Style::default().fg(theme::FOREGROUND),
        )]));

        let items: Vec<ListItem> = std::iter::once(reset)
            .chain(categories.iter().map(|category| {
                let tag = StyleTag::for_category(category);
                let marker = if current == Some(category.as_str()) { "● " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme::GREEN)),
                    Span::styled(
                        category.as_str(),
                        Style::default().fg(theme::category_color(tag)),
                    ),
                ]))
            }))
            .collect();

        let mut state = ListState::default().with_selected(Some(picker_index));

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Category ")
                    .title_alignment(Alignment::Center)
                    .title_bottom(Line::styled(" ⏎ select · Esc cancel ", theme::hint_style()))
                    .border_style(Style::default().fg(theme::CYAN))
                    .style(theme::panel_style()),
            )
            .highlight_style(theme::highlight_style())
            .highlight_symbol("▶ ")
            .highlight_spacing(HighlightSpacing::Always);

        frame.render_stateful_widget(list, area, &mut state);
    }
}
