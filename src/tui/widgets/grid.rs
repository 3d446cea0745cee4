//! Data grid table widget.
//! Thin TUI wrapper over [`crate::view::GridView`].

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::grid::SortDirection;
use crate::view::{GridBody, GridView, RowView};

use super::super::style::Styles;

pub fn render_grid(frame: &mut Frame, area: Rect, view: &GridView, header_cursor: usize) {
    // Announce the active sort in the title, e.g. " People · Age (sorted ascending) ".
    let title = match view.headers.iter().find(|h| h.sort.is_some()) {
        Some(h) => format!(" {} · {} ({}) ", view.title, h.name, h.sort_label),
        None => format!(" {} ", view.title),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Styles::default());

    let rows = match &view.body {
        GridBody::NoResult(message) => {
            let paragraph = Paragraph::new(*message)
                .style(Styles::no_result())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }
        GridBody::Rows(rows) => rows,
    };

    // Header with sort indicator and cursor highlight.
    let headers: Vec<Span> = view
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let indicator = match h.sort {
                Some(SortDirection::Ascending) => " ▲",
                Some(SortDirection::Descending) => " ▼",
                None => "",
            };
            let style = if i == header_cursor {
                Styles::header_cursor()
            } else {
                Styles::table_header()
            };
            Span::styled(format!("{}{}", h.name, indicator), style)
        })
        .collect();
    let header = Row::new(headers).style(Styles::table_header()).height(1);

    let body: Vec<Row> = rows
        .iter()
        .map(|r| Row::new(r.cells.iter().map(|c| Span::raw(c.clone()))).height(1))
        .collect();

    // The last column absorbs the leftover width.
    let widths = column_widths(view, rows);
    let constraints: Vec<Constraint> = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            if i + 1 == widths.len() {
                Constraint::Fill(1)
            } else {
                Constraint::Length(w)
            }
        })
        .collect();

    let table = Table::new(body, constraints)
        .header(header)
        .block(block)
        .column_spacing(1);

    frame.render_widget(table, area);
}

/// Content-sized column widths: the widest of header and visible cells,
/// clamped so one long column cannot starve the others.
fn column_widths(view: &GridView, rows: &[RowView]) -> Vec<u16> {
    const MAX_WIDTH: usize = 40;

    view.headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let header_width = h.name.chars().count() + 2; // room for the indicator
            let cell_width = rows
                .iter()
                .map(|r| r.cells[i].chars().count())
                .max()
                .unwrap_or(0);
            header_width.max(cell_width).min(MAX_WIDTH) as u16
        })
        .collect()
}
