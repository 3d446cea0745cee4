//! Terminal event source.

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

/// Events delivered to the main loop.
#[derive(Debug)]
pub enum Event {
    /// Periodic tick for redraws.
    Tick,
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Polls crossterm on a background thread and forwards events over a
/// channel. The thread never touches grid state; it only forwards input.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                if event::poll(timeout).unwrap_or(false) {
                    let forwarded = match event::read() {
                        Ok(CrosstermEvent::Key(key)) => tx.send(Event::Key(key)),
                        Ok(CrosstermEvent::Resize(width, height)) => {
                            tx.send(Event::Resize(width, height))
                        }
                        Ok(_) => Ok(()),
                        Err(_) => break,
                    };
                    if forwarded.is_err() {
                        break;
                    }
                }
                if last_tick.elapsed() >= tick_rate {
                    if tx.send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });
        Self { rx }
    }

    /// Blocks until the next event.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
