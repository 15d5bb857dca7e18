//! src/view/theme.rs
//! ============================================================================
//! # Catppuccin Mocha Theme Color Palette
//!
//! Color constants for the Catppuccin Mocha theme plus the per-category
//! badge colours. Colors are from the official Catppuccin theme
//! specification: https://github.com/catppuccin/catppuccin

use ratatui::style::{Color, Modifier, Style};

use crate::model::style::StyleTag;

pub const BACKGROUND: Color = Color::Rgb(30, 30, 46); // Base
pub const CURRENT_LINE: Color = Color::Rgb(69, 71, 90); // Surface1
pub const FOREGROUND: Color = Color::Rgb(205, 214, 244); // Text
pub const COMMENT: Color = Color::Rgb(127, 132, 156); // Overlay1
pub const BLUE: Color = Color::Rgb(137, 180, 250); // Blue
pub const CYAN: Color = Color::Rgb(137, 220, 235); // Sky
pub const TEAL: Color = Color::Rgb(148, 226, 213); // Teal
pub const GREEN: Color = Color::Rgb(166, 227, 161); // Green
pub const ORANGE: Color = Color::Rgb(250, 179, 135); // Peach
pub const PINK: Color = Color::Rgb(245, 194, 231); // Pink
pub const PURPLE: Color = Color::Rgb(203, 166, 247); // Mauve
pub const RED: Color = Color::Rgb(243, 139, 168); // Red
pub const YELLOW: Color = Color::Rgb(249, 226, 175); // Yellow

pub const fn category_color(tag: StyleTag) -> Color {
    match tag {
        StyleTag::Database => BLUE,
        StyleTag::Search => ORANGE,
        StyleTag::Web => PINK,
        StyleTag::Workflow => GREEN,
        StyleTag::Development => PURPLE,
        StyleTag::Project => YELLOW,
        StyleTag::Knowledge => TEAL,
        StyleTag::Cloud => CYAN,
        StyleTag::Default => COMMENT,
    }
}

/// Badge drawn next to the entry name.
pub fn category_badge_style(tag: StyleTag) -> Style {
    Style::default()
        .bg(category_color(tag))
        .fg(BACKGROUND)
        .add_modifier(Modifier::BOLD)
}

pub fn panel_style() -> Style {
    Style::default().bg(BACKGROUND).fg(FOREGROUND)
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(CYAN)
    } else {
        Style::default().fg(COMMENT)
    }
}

pub fn highlight_style() -> Style {
    Style::default()
        .bg(CURRENT_LINE)
        .add_modifier(Modifier::BOLD)
}

pub fn hint_style() -> Style {
    Style::default().fg(COMMENT)
}

pub fn link_style() -> Style {
    Style::default().fg(BLUE).add_modifier(Modifier::UNDERLINED)
}
