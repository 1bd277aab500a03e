//! Command execution and input handling for LedgerLens.
//!
//! This module maps keyboard and mouse input to commands and executes them
//! against the application state.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::{App, FilterField, Focus};
use crate::commands::{AppCommand, InputContext, KeyMapper};
use crate::ui::layout::{AppLayout, contains};

impl App {
    /// Maps a key event in the current context and executes it.
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = KeyMapper::map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines the current input context from the focused element.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        match self.ui.focus {
            Focus::Table => InputContext::Table,
            Focus::NameFilter => InputContext::NameFilter,
            Focus::AmountFilter => InputContext::AmountFilter,
        }
    }

    /// Executes an application command.
    pub fn execute_command(&mut self, command: AppCommand) {
        let navigation = command.is_navigation();

        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::Dismiss => {
                if self.ui.focus == Focus::Table {
                    self.ui.toast = None;
                } else {
                    self.ui.focus_table();
                }
            }

            // === Focus ===
            AppCommand::CycleFocus => self.ui.cycle_focus(),
            AppCommand::FocusNameFilter => self.ui.focus = Focus::NameFilter,
            AppCommand::FocusAmountFilter => self.ui.focus = Focus::AmountFilter,

            // === Table Navigation ===
            AppCommand::MoveUp => self.table.move_up(),
            AppCommand::MoveDown => {
                let count = self.visible_rows().len();
                self.table.move_down(count);
            }
            AppCommand::PageUp => {
                for _ in 0..self.page_size() {
                    self.table.move_up();
                }
            }
            AppCommand::PageDown => {
                let count = self.visible_rows().len();
                for _ in 0..self.page_size() {
                    self.table.move_down(count);
                }
            }
            AppCommand::GoToTop => self.table.go_to_top(),
            AppCommand::GoToBottom => {
                let count = self.visible_rows().len();
                self.table.go_to_bottom(count);
            }
            AppCommand::Activate => {
                self.activate_row(self.table.highlighted);
            }
            AppCommand::CycleSort => self.cycle_sort(),

            // === Chart ===
            AppCommand::ChartPrev => self.ui.chart_cursor_prev(),
            AppCommand::ChartNext => {
                let slots = self.selected_series().day_slots().len();
                self.ui.chart_cursor_next(slots);
            }
            AppCommand::CopyTotals => self.copy_selected_totals(),

            // === Filter Input ===
            AppCommand::TypeChar(c) => {
                if let Some(field) = self.ui.focus.filter_field()
                    && self.filters.push(field, c)
                {
                    self.on_filters_changed(field);
                }
            }
            AppCommand::Backspace => {
                if let Some(field) = self.ui.focus.filter_field() {
                    self.filters.backspace(field);
                    self.on_filters_changed(field);
                }
            }
            AppCommand::ClearFilter => {
                if let Some(field) = self.ui.focus.filter_field() {
                    self.filters.clear(field);
                    self.on_filters_changed(field);
                }
            }

            AppCommand::Noop => {}
        }

        if navigation {
            self.sync_table_scroll();
        }
    }

    // ========================================================================
    // Table Actions
    // ========================================================================

    /// Selects the customer of the row at `index` in the visible rows.
    ///
    /// Indices outside the visible rows are ignored.
    pub fn activate_row(&mut self, index: usize) {
        let rows = self.visible_rows();
        let Some(row) = rows.get(index) else {
            return;
        };
        self.table.highlighted = index;
        if self.selection.customer_name() != Some(row.customer_name.as_str()) {
            tracing::info!(customer = %row.customer_name, "Selected customer");
            self.ui.chart_cursor = 0;
            self.select_customer(row.customer_name.clone());
        }
        self.sync_table_scroll();
    }

    /// Advances the name column sort and keeps the highlight in range.
    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
        tracing::debug!(sort = ?self.sort, "Sort changed");
        self.sync_table_scroll();
    }

    fn on_filters_changed(&mut self, field: FilterField) {
        tracing::debug!(?field, value = self.filters.value(field), "Filter changed");
        self.sync_table_scroll();
    }

    /// Clamps the highlight to the visible rows and scrolls it into view.
    pub(crate) fn sync_table_scroll(&mut self) {
        let heights: Vec<u16> = self.visible_rows().iter().map(|r| r.height()).collect();
        let viewport = self.layout().table_rows().height;
        self.table.scroll_to_highlight(&heights, viewport);
    }

    fn page_size(&self) -> usize {
        usize::from(self.layout().table_rows().height / 2).max(1)
    }

    /// Layout of the last drawn frame.
    #[must_use]
    pub(crate) fn layout(&self) -> AppLayout {
        AppLayout::new(self.terminal_area, self.selection.is_selected())
    }

    // ========================================================================
    // Clipboard
    // ========================================================================

    fn copy_selected_totals(&mut self) {
        let Some(name) = self.selection.customer_name().map(str::to_owned) else {
            self.ui.show_toast("[x] Select a customer first");
            return;
        };
        let csv = self.selected_totals().to_csv();
        match self.clipboard.copy_text(&csv) {
            Ok(()) => self.ui.show_toast(format!("[+] Copied daily totals for {name}")),
            Err(err) => {
                tracing::warn!("Clipboard copy failed: {err}");
                self.ui.show_toast(format!("[x] {err}"));
            }
        }
    }

    // ========================================================================
    // Mouse Input
    // ========================================================================

    /// Handles mouse clicks and wheel scrolling.
    pub(crate) fn handle_mouse_input(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.execute_command(AppCommand::MoveUp),
            MouseEventKind::ScrollDown => self.execute_command(AppCommand::MoveDown),
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    /// Routes a left click to the element under the cursor.
    pub(crate) fn handle_click(&mut self, column: u16, row: u16) {
        let layout = self.layout();

        if contains(layout.name_filter, column, row) {
            self.ui.focus = Focus::NameFilter;
            return;
        }
        if contains(layout.amount_filter, column, row) {
            self.ui.focus = Focus::AmountFilter;
            return;
        }
        if contains(layout.table_header(), column, row) {
            if contains(layout.name_column(), column, row) {
                self.cycle_sort();
            }
            return;
        }

        let rows_area = layout.table_rows();
        if contains(rows_area, column, row) {
            self.ui.focus_table();
            let heights: Vec<u16> = self.visible_rows().iter().map(|r| r.height()).collect();
            if let Some(index) = self.table.row_at_line(&heights, row - rows_area.y) {
                self.activate_row(index);
            }
        }
    }
}
