//! Help popup.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::super::style::Styles;

const BINDINGS: [(&str, &str); 10] = [
    ("/", "search (type to filter, Enter keeps, Esc clears)"),
    ("[ ]", "move the sort cursor between columns"),
    ("s, Enter", "sort the cursor column (asc → desc → asc)"),
    ("← →", "previous / next page"),
    ("g, Home", "first page"),
    ("G, End", "last page"),
    ("+ -", "cycle the page size"),
    ("Tab", "next table"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

pub fn render_help(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(52, BINDINGS.len() as u16 + 2, area);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!(" {keys:<9}"), Styles::tab_active()),
                Span::styled((*action).to_string(), Styles::default()),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Keys ")
        .borders(Borders::ALL)
        .style(Styles::default());

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
