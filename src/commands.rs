//! Command pattern for key event handling.
//!
//! Key events are translated into [`AppCommand`]s by [`KeyMapper`] based on
//! the current [`InputContext`]. The app then executes commands without
//! knowing which key produced them.
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//! app.execute_command(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Determines which keybindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the customer table.
    Table,
    /// Typing into the name filter.
    NameFilter,
    /// Typing into the amount filter.
    AmountFilter,
}

impl InputContext {
    /// Returns `true` if this context accepts text input.
    #[must_use]
    pub const fn accepts_text_input(&self) -> bool {
        matches!(self, Self::NameFilter | Self::AmountFilter)
    }
}

// ============================================================================
// App Commands
// ============================================================================

/// All commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Close the toast or leave a filter input.
    Dismiss,

    // === Focus ===
    /// Cycle focus between table, name filter and amount filter.
    CycleFocus,
    /// Focus the name filter input.
    FocusNameFilter,
    /// Focus the amount filter input.
    FocusAmountFilter,

    // === Table Navigation ===
    /// Move the highlight up one row.
    MoveUp,
    /// Move the highlight down one row.
    MoveDown,
    /// Move the highlight up one page.
    PageUp,
    /// Move the highlight down one page.
    PageDown,
    /// Highlight the first row.
    GoToTop,
    /// Highlight the last row.
    GoToBottom,
    /// Select the highlighted row's customer.
    Activate,
    /// Cycle the name column sort.
    CycleSort,

    // === Chart ===
    /// Focus the previous day on the chart.
    ChartPrev,
    /// Focus the next day on the chart.
    ChartNext,
    /// Copy the selected customer's daily totals.
    CopyTotals,

    // === Filter Input ===
    /// Type a character into the focused filter.
    TypeChar(char),
    /// Delete the last character of the focused filter.
    Backspace,
    /// Clear the focused filter.
    ClearFilter,

    // === No Operation ===
    /// Unhandled key.
    Noop,
}

impl AppCommand {
    /// Returns `true` if this command moves the table highlight.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::MoveUp | Self::MoveDown | Self::PageUp | Self::PageDown | Self::GoToTop | Self::GoToBottom
        )
    }
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to a command for the given context.
    ///
    /// Ctrl+C quits from every context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }
        match context {
            InputContext::Table => Self::map_table_keys(key),
            InputContext::NameFilter | InputContext::AmountFilter => Self::map_filter_keys(key),
        }
    }

    fn map_table_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Tab => AppCommand::CycleFocus,
            KeyCode::Char('/') => AppCommand::FocusNameFilter,
            KeyCode::Char('$') => AppCommand::FocusAmountFilter,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::PageUp => AppCommand::PageUp,
            KeyCode::PageDown => AppCommand::PageDown,
            KeyCode::Home | KeyCode::Char('g') => AppCommand::GoToTop,
            KeyCode::End | KeyCode::Char('G') => AppCommand::GoToBottom,
            KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Activate,
            KeyCode::Char('s') => AppCommand::CycleSort,
            KeyCode::Left | KeyCode::Char('h') => AppCommand::ChartPrev,
            KeyCode::Right | KeyCode::Char('l') => AppCommand::ChartNext,
            KeyCode::Char('c') => AppCommand::CopyTotals,
            _ => AppCommand::Noop,
        }
    }

    fn map_filter_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => AppCommand::Dismiss,
            KeyCode::Tab => AppCommand::CycleFocus,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Up => AppCommand::MoveUp,
            KeyCode::Down => AppCommand::MoveDown,
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                AppCommand::ClearFilter
            }
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
