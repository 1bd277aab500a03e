//! State management module for LedgerLens.
//!
//! The application state is decomposed into small sub-states, each with its
//! own transition functions:
//!
//! - [`FilterState`] - Values of the name and amount filter inputs
//! - [`SortDirection`] - Sort state of the name column
//! - [`TableNavigation`] - Highlighted row and scroll offset
//! - [`Selection`] - The selected customer
//! - [`UiState`] - Focus, toasts and chart cursor
//! - [`AppConfig`] - Configuration read at startup
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                          App                             │
//! ├─────────────┬──────────────┬─────────────┬───────────────┤
//! │ GroupedView │ FilterState  │ Selection   │ UiState       │
//! │ (derived    │ SortDirection│             │ - focus       │
//! │  at load)   │ TableNav     │             │ - toast       │
//! └─────────────┴──────────────┴─────────────┴───────────────┘
//! ```
//!
//! Table rows and chart series are pure functions of this state and are
//! recomputed whenever they are needed.

use ratatui::layout::Rect;

use crate::domain::{ChartSeries, DailyTotals, Dataset, GroupedView, group_by_customer};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod filters;
pub mod platform;
pub mod selection;
pub mod table;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use filters::{FilterField, FilterState};
pub use selection::Selection;
pub use table::{SortDirection, TableNavigation, TableRow, build_rows};
pub use ui_state::{Focus, UiState};

use platform::ClipboardManager;

// ============================================================================
// Startup Options
// ============================================================================

/// Options that customize the initial application state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupOptions {
    /// Customer to select on startup.
    pub select: Option<String>,
    /// Initial value of the name filter.
    pub name_filter: Option<String>,
    /// Initial value of the amount filter.
    pub amount_filter: Option<String>,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    // ========================================================================
    // Data
    // ========================================================================
    /// Transactions grouped by customer, derived once from the dataset.
    pub grouped: GroupedView,

    // ========================================================================
    // Sub-states
    // ========================================================================
    /// Filter input values.
    pub filters: FilterState,

    /// Name column sort.
    pub sort: SortDirection,

    /// Table highlight and scroll offset.
    pub table: TableNavigation,

    /// Selected customer.
    pub selection: Selection,

    /// Focus, toasts and chart cursor.
    pub ui: UiState,

    /// Configuration read at startup.
    pub config: AppConfig,

    // ========================================================================
    // App-level state
    // ========================================================================
    /// Whether the application should exit.
    pub exit: bool,

    /// Terminal area of the last draw, used for mouse hit-testing.
    pub(crate) terminal_area: Rect,

    pub(crate) clipboard: ClipboardManager,
}

impl App {
    /// Creates the application state for a dataset.
    #[must_use]
    pub fn new(dataset: &Dataset, config: AppConfig, options: StartupOptions) -> Self {
        let grouped = group_by_customer(&dataset.customers, &dataset.transactions);

        let mut app = Self {
            grouped,
            filters: FilterState::new(),
            sort: SortDirection::default(),
            table: TableNavigation::new(),
            selection: Selection::default(),
            ui: UiState::new(),
            config,
            exit: false,
            terminal_area: Rect::default(),
            clipboard: ClipboardManager::new(),
        };
        app.apply_startup_options(options);
        app
    }

    fn apply_startup_options(&mut self, options: StartupOptions) {
        if let Some(name) = options.name_filter {
            self.filters.set(FilterField::Name, &name);
        }
        if let Some(amount) = options.amount_filter {
            self.filters.set(FilterField::Amount, &amount);
        }
        if let Some(customer) = options.select {
            if self.grouped.contains(&customer) {
                self.select_customer(customer);
            } else {
                tracing::warn!(%customer, "Startup selection does not match any customer");
                self.ui.show_toast(format!("[x] No customer named '{customer}'"));
            }
        }
    }

    /// Selects `customer` and logs the chart points it cannot place.
    fn select_customer(&mut self, customer: String) {
        self.selection.select(customer);
        let series = self.selected_series();
        for label in series.undated_labels() {
            tracing::warn!(%label, "Dropping chart point with unparseable date");
        }
    }

    // ========================================================================
    // Derived Views
    // ========================================================================

    /// Rows of the customer table for the current filters and sort.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<TableRow> {
        build_rows(&self.grouped, &self.filters, self.sort)
    }

    /// Daily totals of the selected customer.
    #[must_use]
    pub fn selected_totals(&self) -> DailyTotals {
        self.selection.daily_totals(&self.grouped)
    }

    /// Chart series of the selected customer.
    #[must_use]
    pub fn selected_series(&self) -> ChartSeries {
        self.selection.chart_series(&self.grouped)
    }

    /// Currency symbol for amount labels.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.config.currency_symbol
    }
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Command execution, key and mouse input
mod app_commands;

// ============================================================================
// Tests
// ============================================================================
