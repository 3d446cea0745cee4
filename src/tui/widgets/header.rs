//! Top tab bar: one tab per extracted table.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::super::state::AppState;
use super::super::style::Styles;

pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans: Vec<Span> = vec![Span::styled(" htgrid ", Styles::tab_active())];
    spans.push(Span::styled("│", Styles::dim()));

    for (i, tab) in state.tabs.iter().enumerate() {
        let style = if i == state.active {
            Styles::tab_active()
        } else {
            Styles::tab_inactive()
        };
        spans.push(Span::styled(format!(" {} ", tab.grid.title()), style));
    }

    spans.push(Span::styled("│", Styles::dim()));
    spans.push(Span::styled(" ?:help ", Styles::dim()));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
