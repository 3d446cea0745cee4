//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::grid::Command;

use super::state::{AppState, InputMode};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }
    if state.show_help {
        return handle_help(state, key);
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Search => handle_search_mode(state, key),
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter => {
            state.show_help = false;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return KeyAction::Quit,
        KeyCode::Char('?') => {
            state.show_help = true;
            return KeyAction::None;
        }

        // Tab navigation between tables.
        KeyCode::Tab => state.next_tab(),
        KeyCode::BackTab => state.prev_tab(),

        // Search input mode.
        KeyCode::Char('/') => {
            if state.active_tab().grid.search_enabled() {
                state.input_mode = InputMode::Search;
            }
        }

        // Header cursor and sort activation.
        KeyCode::Char('[') => {
            let tab = state.active_tab_mut();
            tab.header_cursor = tab.header_cursor.saturating_sub(1);
        }
        KeyCode::Char(']') => {
            let tab = state.active_tab_mut();
            let last = tab.grid.columns().len().saturating_sub(1);
            tab.header_cursor = (tab.header_cursor + 1).min(last);
        }
        KeyCode::Enter | KeyCode::Char('s') => {
            let tab = state.active_tab_mut();
            let column = tab.header_cursor;
            tab.grid.apply(Command::Sort(column));
        }

        // Page navigation.
        KeyCode::Left => {
            let tab = state.active_tab_mut();
            let page = tab.grid.state().page;
            tab.grid.apply(Command::GoToPage(page.saturating_sub(1)));
        }
        KeyCode::Right => {
            let tab = state.active_tab_mut();
            let page = tab.grid.state().page;
            tab.grid.apply(Command::GoToPage(page + 1));
        }
        KeyCode::Char('g') | KeyCode::Home => {
            state.active_tab_mut().grid.apply(Command::GoToPage(1));
        }
        KeyCode::Char('G') | KeyCode::End => {
            let tab = state.active_tab_mut();
            let last = tab.grid.total_pages();
            tab.grid.apply(Command::GoToPage(last));
        }

        // Page-size cycling through the configured set.
        KeyCode::Char('+') | KeyCode::Char('=') => cycle_page_size(state, 1),
        KeyCode::Char('-') => cycle_page_size(state, -1),

        _ => {}
    }
    KeyAction::None
}

fn handle_search_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let tab = state.active_tab_mut();
    match key.code {
        // Esc abandons the search entirely.
        KeyCode::Esc => {
            tab.search_input.clear();
            tab.grid.apply(Command::Search(String::new()));
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            tab.search_input.pop();
            let input = tab.search_input.clone();
            tab.grid.apply(Command::Search(input));
        }
        KeyCode::Char(c) => {
            tab.search_input.push(c);
            let input = tab.search_input.clone();
            tab.grid.apply(Command::Search(input));
        }
        _ => {}
    }
    KeyAction::None
}

fn cycle_page_size(state: &mut AppState, step: isize) {
    let tab = state.active_tab_mut();
    let sizes = tab.grid.page_sizes().to_vec();
    let current = tab.grid.state().page_size;
    let Some(position) = sizes.iter().position(|&s| s == current) else {
        return;
    };
    let len = sizes.len() as isize;
    let next = (position as isize + step).rem_euclid(len) as usize;
    tab.grid.apply(Command::SetPageSize(sizes[next]));
}
