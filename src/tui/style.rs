//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

/// Color palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;

    pub const HEADER_BG: Color = Color::Blue;
    pub const HEADER_FG: Color = Color::White;

    pub const TAB_ACTIVE: Color = Color::Cyan;
    pub const TAB_INACTIVE: Color = Color::DarkGray;

    pub const CURSOR: Color = Color::Yellow;
    pub const CURRENT_PAGE: Color = Color::Cyan;
    pub const NO_RESULT: Color = Color::Yellow;
    pub const SEARCH: Color = Color::Green;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    pub fn default() -> Style {
        Style::default().bg(Theme::BG).fg(Theme::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    pub fn table_header() -> Style {
        Style::default()
            .bg(Theme::HEADER_BG)
            .fg(Theme::HEADER_FG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_cursor() -> Style {
        Style::default()
            .bg(Theme::HEADER_BG)
            .fg(Theme::CURSOR)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::TAB_ACTIVE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::TAB_INACTIVE)
    }

    pub fn current_page() -> Style {
        Style::default()
            .fg(Theme::CURRENT_PAGE)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn no_result() -> Style {
        Style::default()
            .fg(Theme::NO_RESULT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn search_active() -> Style {
        Style::default().fg(Theme::SEARCH)
    }
}
