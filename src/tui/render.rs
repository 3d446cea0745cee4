//! Main rendering logic for the TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::state::AppState;
use super::widgets::{render_footer, render_grid, render_header, render_help, render_search};

/// Main render function. One grid (the active tab) is visible at a time.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let tab = state.active_tab();
    let view = tab.grid.view();

    let search_height = if view.search.is_some() { 1 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(1),             // Tab bar
        Constraint::Length(search_height), // Search box
        Constraint::Min(5),                // Grid
        Constraint::Length(1),             // Pager + status
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    if let Some(search) = &view.search {
        render_search(
            frame,
            chunks[1],
            search,
            &tab.search_input,
            state.input_mode,
        );
    }
    render_grid(frame, chunks[2], &view, tab.header_cursor);
    render_footer(frame, chunks[3], &view);

    if state.show_help {
        render_help(frame, area);
    }
}
