//! Table adapter for the customer table.
//!
//! This module reshapes the grouped view into the rows shown by the table,
//! applying the filters and the name sort, and tracks which row is
//! highlighted and how far the table is scrolled.
//!
//! # Pipeline
//!
//! ```text
//! GroupedView ──► name filter ──► amount filter (narrows transactions) ──► sort
//! ```
//!
//! Rows are recomputed from scratch on every call; nothing is cached.

use crate::domain::{GroupedView, Transaction};

use super::FilterState;

/// Maximum number of lines a single row occupies in the table.
///
/// Rows with more transactions show the first `MAX_ROW_LINES - 1` and a
/// summary line.
pub const MAX_ROW_LINES: usize = 10;

// ============================================================================
// Sort Direction
// ============================================================================

/// Sort state of the name column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Rows keep grouping order.
    #[default]
    Unsorted,
    /// Names in ascending order.
    Ascending,
    /// Names in descending order.
    Descending,
}

impl SortDirection {
    /// Next state in the header toggle cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Unsorted => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Unsorted,
        }
    }

    /// Header indicator for this state.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Unsorted => "⇅",
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

// ============================================================================
// Table Rows
// ============================================================================

/// One row of the customer table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Grouping key of the row.
    pub customer_name: String,
    /// Transactions shown in this render pass (narrowed by the amount filter).
    pub transactions: Vec<Transaction>,
}

impl TableRow {
    /// Number of terminal lines the row occupies.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.transactions.len().clamp(1, MAX_ROW_LINES) as u16
    }
}

/// Derives the visible table rows.
///
/// A row survives when its name passes the name filter and at least one of
/// its transactions passes the amount filter. Surviving rows only carry the
/// matching transactions. Sorting is stable, so equal names keep grouping
/// order.
#[must_use]
pub fn build_rows(grouped: &GroupedView, filters: &FilterState, sort: SortDirection) -> Vec<TableRow> {
    let mut rows: Vec<TableRow> = grouped
        .groups()
        .iter()
        .filter(|group| filters.name_matches(&group.name))
        .filter_map(|group| {
            let transactions: Vec<Transaction> = group
                .transactions
                .iter()
                .filter(|txn| filters.amount_matches(txn))
                .cloned()
                .collect();
            if transactions.is_empty() && !filters.amount.is_empty() {
                return None;
            }
            Some(TableRow {
                customer_name: group.name.clone(),
                transactions,
            })
        })
        .collect();

    match sort {
        SortDirection::Unsorted => {}
        SortDirection::Ascending => rows.sort_by(|a, b| a.customer_name.cmp(&b.customer_name)),
        SortDirection::Descending => rows.sort_by(|a, b| b.customer_name.cmp(&a.customer_name)),
    }

    tracing::debug!(
        rows = rows.len(),
        groups = grouped.len(),
        ?sort,
        "Derived table rows"
    );
    rows
}

// ============================================================================
// Table Navigation
// ============================================================================

/// Highlight and scroll position of the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableNavigation {
    /// Index of the highlighted row in the derived rows.
    pub highlighted: usize,
    /// Index of the first row drawn.
    pub offset: usize,
}

impl TableNavigation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the highlight up one row.
    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Moves the highlight down one row, stopping at the last row.
    pub fn move_down(&mut self, row_count: usize) {
        if self.highlighted + 1 < row_count {
            self.highlighted += 1;
        }
    }

    /// Highlights the first row.
    pub fn go_to_top(&mut self) {
        self.highlighted = 0;
        self.offset = 0;
    }

    /// Highlights the last row.
    pub fn go_to_bottom(&mut self, row_count: usize) {
        self.highlighted = row_count.saturating_sub(1);
    }

    /// Keeps the highlight and offset inside the row set after it changed.
    pub fn clamp(&mut self, row_count: usize) {
        let last = row_count.saturating_sub(1);
        self.highlighted = self.highlighted.min(last);
        self.offset = self.offset.min(last);
    }

    /// Adjusts the offset so the highlighted row is fully visible.
    ///
    /// # Arguments
    ///
    /// * `heights` - Height of every row, in row order
    /// * `viewport` - Number of lines available for rows
    pub fn scroll_to_highlight(&mut self, heights: &[u16], viewport: u16) {
        if heights.is_empty() {
            self.go_to_top();
            return;
        }
        self.clamp(heights.len());

        if self.highlighted < self.offset {
            self.offset = self.highlighted;
            return;
        }

        let viewport = usize::from(viewport);
        while self.offset < self.highlighted {
            let used: usize = heights[self.offset..=self.highlighted]
                .iter()
                .map(|&h| usize::from(h))
                .sum();
            if used <= viewport {
                break;
            }
            self.offset += 1;
        }
    }

    /// Maps a line inside the row area to the row drawn on it.
    ///
    /// # Arguments
    ///
    /// * `heights` - Height of every row, in row order
    /// * `line` - Line index relative to the first drawn row
    ///
    /// # Returns
    ///
    /// The index of the row under that line, if any.
    #[must_use]
    pub fn row_at_line(&self, heights: &[u16], line: u16) -> Option<usize> {
        let mut top = 0u16;
        for (index, &height) in heights.iter().enumerate().skip(self.offset) {
            let bottom = top.saturating_add(height);
            if line < bottom {
                return Some(index);
            }
            top = bottom;
        }
        None
    }
}
