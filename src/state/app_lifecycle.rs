//! Application lifecycle management.
//!
//! The main loop is synchronous: poll for a terminal event with a tick
//! timeout, execute the resulting command, and redraw. All derivations run
//! to completion inside the loop.

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

use crate::tui::Tui;
use crate::ui;

use super::App;

/// Interval between ticks (toast countdown, periodic redraw).
const TICK_RATE: Duration = Duration::from_millis(100);

impl App {
    /// Runs the main application loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if terminal operations fail.
    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        let size = terminal.size()?;
        self.terminal_area = Rect::new(0, 0, size.width, size.height);
        self.sync_table_scroll();
        terminal.draw(|frame| ui::render(self, frame))?;

        let mut last_tick = Instant::now();

        while !self.exit {
            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse_input(mouse);
                    }
                    Event::Resize(width, height) => {
                        self.terminal_area = Rect::new(0, 0, width, height);
                        self.sync_table_scroll();
                    }
                    _ => {}
                }
                terminal.draw(|frame| ui::render(self, frame))?;
            }

            if last_tick.elapsed() >= TICK_RATE {
                if self.ui.tick_toast() {
                    terminal.draw(|frame| ui::render(self, frame))?;
                }
                last_tick = Instant::now();
            }
        }

        tracing::info!("Exiting");
        Ok(())
    }
}
