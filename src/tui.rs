//! Terminal setup and teardown.
//!
//! The terminal runs in raw mode on the alternate screen with mouse capture
//! enabled. A panic hook restores it before the panic report prints.

use std::io::{self, Stdout};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

/// Terminal type used by the application.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches the terminal into TUI mode.
///
/// # Errors
/// Returns an error if raw mode or the alternate screen cannot be entered.
pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;

    install_panic_hook();

    Terminal::new(CrosstermBackend::new(io::stdout()))
}

/// Restores the terminal to its normal state.
///
/// # Errors
/// Returns an error if the terminal cannot be restored.
pub fn restore() -> io::Result<()> {
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Best effort: the original hook must still run.
        let _ = restore();
        previous(info);
    }));
}
