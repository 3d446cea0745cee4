//! UI state for the viewer.

use crate::grid::Grid;

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Keystrokes edit the search key of the active grid.
    Search,
}

/// One tab: an independent grid plus its UI-only cursor state.
pub struct GridTab {
    pub grid: Grid,
    /// Column the sort cursor sits on.
    pub header_cursor: usize,
    /// Raw search box contents (the grid stores the normalized key).
    pub search_input: String,
}

impl GridTab {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            header_cursor: 0,
            search_input: String::new(),
        }
    }
}

/// Application state: one tab per extracted table, nothing shared between
/// them.
pub struct AppState {
    pub tabs: Vec<GridTab>,
    pub active: usize,
    pub input_mode: InputMode,
    pub show_help: bool,
}

impl AppState {
    pub fn new(grids: Vec<Grid>) -> Self {
        Self {
            tabs: grids.into_iter().map(GridTab::new).collect(),
            active: 0,
            input_mode: InputMode::Normal,
            show_help: false,
        }
    }

    pub fn active_tab(&self) -> &GridTab {
        &self.tabs[self.active]
    }

    pub fn active_tab_mut(&mut self) -> &mut GridTab {
        &mut self.tabs[self.active]
    }

    pub fn next_tab(&mut self) {
        self.active = (self.active + 1) % self.tabs.len();
        self.input_mode = InputMode::Normal;
    }

    pub fn prev_tab(&mut self) {
        self.active = (self.active + self.tabs.len() - 1) % self.tabs.len();
        self.input_mode = InputMode::Normal;
    }
}
