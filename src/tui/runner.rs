//! TUI Runner - main loop that owns the terminal
//!
//! The TuiRunner is responsible for:
//! - Dispatching events to App for handling
//! - Rendering on every tick

use std::time::Duration;

use eyre::Result;

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views;

/// TUI Runner that manages the terminal and event loop
pub struct TuiRunner {
    /// Application state
    app: App,
    /// Terminal handle
    terminal: Tui,
    /// Event handler
    event_handler: EventHandler,
}

impl TuiRunner {
    /// Create a new TuiRunner
    pub fn new(terminal: Tui, app: App, tick_rate: Duration) -> Self {
        Self {
            app,
            terminal,
            event_handler: EventHandler::new(tick_rate),
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> Result<()> {
        loop {
            // Draw the UI
            self.terminal.draw(|frame| views::render(self.app.state(), frame))?;

            // Handle events
            match self.event_handler.next().await? {
                Event::Tick => {}
                Event::Key(key_event) => {
                    if self.app.handle_key(key_event) {
                        break;
                    }
                }
                Event::Resize(_, _) => {
                    // Redrawn on the next loop iteration
                }
            }

            // Check if we should quit
            if self.app.state().should_quit {
                break;
            }
        }

        Ok(())
    }
}
