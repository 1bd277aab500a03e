//! UI state management for LedgerLens.
//!
//! This module manages presentation concerns that are not part of the data
//! pipeline:
//! - Which element has keyboard focus (table or one of the filter inputs)
//! - Toast notifications
//! - The focused bar of the chart
//!
//! # Design
//!
//! UI state is kept apart from filters and selection so that the derived
//! views only depend on data-relevant state.

use super::FilterField;

// ============================================================================
// Focus
// ============================================================================

/// Which element receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The customer table has focus.
    #[default]
    Table,
    /// The name filter input has focus.
    NameFilter,
    /// The amount filter input has focus.
    AmountFilter,
}

impl Focus {
    /// Cycles to the next focus target.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Table => Self::NameFilter,
            Self::NameFilter => Self::AmountFilter,
            Self::AmountFilter => Self::Table,
        }
    }

    /// The filter input this focus edits, if any.
    #[must_use]
    pub const fn filter_field(self) -> Option<FilterField> {
        match self {
            Self::Table => None,
            Self::NameFilter => Some(FilterField::Name),
            Self::AmountFilter => Some(FilterField::Amount),
        }
    }
}

impl From<FilterField> for Focus {
    fn from(field: FilterField) -> Self {
        match field {
            FilterField::Name => Self::NameFilter,
            FilterField::Amount => Self::AmountFilter,
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

/// Number of ticks a toast stays visible.
pub const TOAST_TICKS: u8 = 20;

/// UI state: focus, toasts and chart cursor.
#[derive(Debug, Default)]
pub struct UiState {
    /// Element that receives keyboard input.
    pub focus: Focus,
    /// Toast message and remaining ticks.
    pub toast: Option<(String, u8)>,
    /// Index of the focused day slot in the chart.
    pub chart_cursor: usize,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cycles focus between the table and the two filter inputs.
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// Returns focus to the table.
    pub fn focus_table(&mut self) {
        self.focus = Focus::Table;
    }

    /// Shows a toast notification for [`TOAST_TICKS`] ticks.
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some((message.into(), TOAST_TICKS));
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed.
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            *ticks = ticks.saturating_sub(1);
            if *ticks == 0 {
                self.toast = None;
                return true;
            }
        }
        false
    }

    /// Moves the chart cursor left.
    pub fn chart_cursor_prev(&mut self) {
        self.chart_cursor = self.chart_cursor.saturating_sub(1);
    }

    /// Moves the chart cursor right, stopping at the last slot.
    pub fn chart_cursor_next(&mut self, slot_count: usize) {
        if self.chart_cursor + 1 < slot_count {
            self.chart_cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle() {
        let mut ui = UiState::new();
        assert_eq!(ui.focus, Focus::Table);
        ui.cycle_focus();
        assert_eq!(ui.focus, Focus::NameFilter);
        ui.cycle_focus();
        assert_eq!(ui.focus, Focus::AmountFilter);
        ui.cycle_focus();
        assert_eq!(ui.focus, Focus::Table);
    }

    #[test]
    fn test_focus_filter_field() {
        assert_eq!(Focus::Table.filter_field(), None);
        assert_eq!(Focus::NameFilter.filter_field(), Some(FilterField::Name));
        assert_eq!(Focus::from(FilterField::Amount), Focus::AmountFilter);
    }

    #[test]
    fn test_toast_expires() {
        let mut ui = UiState::new();
        ui.show_toast("[+] Copied");
        for _ in 0..TOAST_TICKS - 1 {
            assert!(!ui.tick_toast());
        }
        assert!(ui.tick_toast());
        assert!(ui.toast.is_none());
        assert!(!ui.tick_toast());
    }

    #[test]
    fn test_chart_cursor_bounds() {
        let mut ui = UiState::new();
        ui.chart_cursor_prev();
        assert_eq!(ui.chart_cursor, 0);
        ui.chart_cursor_next(2);
        ui.chart_cursor_next(2);
        assert_eq!(ui.chart_cursor, 1);
    }
}
