//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::grid::Grid;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application: one tab per grid.
pub struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App over one or more grids.
    pub fn new(grids: Vec<Grid>) -> Self {
        Self {
            state: AppState::new(grids),
            should_quit: false,
        }
    }

    /// Runs the TUI application until quit.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        // Main loop
        loop {
            terminal.draw(|frame| render(frame, &self.state))?;

            match events.next() {
                Ok(Event::Tick) => {}
                Ok(Event::Key(key)) => {
                    if handle_key(&mut self.state, key) == KeyAction::Quit {
                        self.should_quit = true;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // ratatui re-measures on the next draw.
                }
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }
}
