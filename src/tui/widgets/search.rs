//! Search bar widget.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::view::SearchView;

use super::super::state::InputMode;
use super::super::style::Styles;

pub fn render_search(
    frame: &mut Frame,
    area: Rect,
    search: &SearchView,
    raw_input: &str,
    input_mode: InputMode,
) {
    let active = input_mode == InputMode::Search;
    let prompt_style = if active {
        Styles::search_active()
    } else {
        Styles::dim()
    };

    let text = if raw_input.is_empty() && !active {
        Span::styled(search.placeholder, Styles::dim())
    } else {
        Span::styled(raw_input.to_string(), Styles::default())
    };

    let line = Line::from(vec![Span::styled(" / ", prompt_style), text]);
    frame.render_widget(Paragraph::new(line), area);

    if active {
        // Put the terminal cursor after the typed text.
        let x = area.x + 3 + raw_input.chars().count() as u16;
        frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
    }
}
