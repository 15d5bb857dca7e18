//! src/view/components/card_list.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState},
};

use crate::{
    model::{catalog_view::CatalogView, entry::Entry, style::StyleTag},
    view::theme,
};

/// Rows per card: title line, description, link, spacer.
pub const CARD_HEIGHT: u16 = 4;

/// Appended to the list title while any filter is narrowing the catalog.
pub const FILTERED_MARK: &str = "filtered";

pub struct CardList;

impl CardList {
    pub fn new() -> Self {
        Self
    }

    /// Draws every visible entry; the list scrolls to keep the selection on screen.
    pub fn render(&self, frame: &mut Frame<'_>, view: &CatalogView, area: Rect) {
        let items: Vec<ListItem> = view.visible_entries().map(Self::card).collect();

        let mut list_state = ListState::default().with_selected(Some(view.selected()));

        let title = if view.filter().is_default() {
            " Servers ".to_string()
        } else {
            format!(" Servers · {FILTERED_MARK} ")
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_style(Style::default().fg(theme::PURPLE).bold())
                    .border_style(theme::border_style(false))
                    .style(theme::panel_style()),
            )
            .highlight_style(theme::highlight_style())
            .highlight_symbol("▌")
            .highlight_spacing(HighlightSpacing::Always);

        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn card(entry: &Entry) -> ListItem<'_> {
        let tag = StyleTag::for_category(&entry.category);

        let title = Line::from(vec![
            Span::styled(
                entry.name.as_str(),
                Style::default().fg(theme::FOREGROUND).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!(" {} ", entry.category), theme::category_badge_style(tag)),
        ]);

        let description = Line::styled(
            format!(" {}", entry.description),
            Style::default().fg(theme::FOREGROUND),
        );

        let link = Line::from(vec![
            Span::styled(" ↗ ", theme::hint_style()),
            Span::styled(entry.url.as_str(), theme::link_style()),
        ]);

        ListItem::new(vec![title, description, link, Line::from("")])
    }
}

impl Default for CardList {
    fn default() -> Self {
        Self::new()
    }
}
