//! Layout calculations for LedgerLens.
//!
//! Rendering and mouse hit-testing both go through [`AppLayout`], so a
//! click always lands on the element that was drawn under it.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ============================================================================
// Constants
// ============================================================================

/// Height of the filter input bar.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer area.
pub const FOOTER_HEIGHT: u16 = 1;

/// Lines taken by the table header (title row plus spacing).
pub const TABLE_HEADER_LINES: u16 = 2;

/// Share of the content width given to the table when the detail panel is open.
pub const TABLE_PERCENT_WITH_DETAIL: u16 = 55;

/// Width of the name column, as a share of the table width.
pub const NAME_COLUMN_PERCENT: u16 = 35;

/// Spacing between table columns.
pub const COLUMN_SPACING: u16 = 1;

/// Column constraints of the customer table.
pub const TABLE_COLUMNS: [Constraint; 2] = [
    Constraint::Percentage(NAME_COLUMN_PERCENT),
    Constraint::Min(10),
];

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Name filter input.
    pub name_filter: Rect,
    /// Amount filter input.
    pub amount_filter: Rect,
    /// Customer table, including its border.
    pub table: Rect,
    /// Detail panel, present only while a customer is selected.
    pub detail: Option<Rect>,
    /// Footer with key hints.
    pub footer: Rect,
}

impl AppLayout {
    /// Calculates the layout for the terminal area.
    #[must_use]
    pub fn new(area: Rect, with_detail: bool) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        let inputs = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(rows[0]);

        let (table, detail) = if with_detail {
            let content = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(TABLE_PERCENT_WITH_DETAIL),
                    Constraint::Percentage(100 - TABLE_PERCENT_WITH_DETAIL),
                ])
                .split(rows[1]);
            (content[0], Some(content[1]))
        } else {
            (rows[1], None)
        };

        Self {
            name_filter: inputs[0],
            amount_filter: inputs[1],
            table,
            detail,
            footer: rows[2],
        }
    }

    /// Area inside the table border.
    #[must_use]
    pub fn table_inner(&self) -> Rect {
        inner(self.table)
    }

    /// Line of the table holding the column titles.
    #[must_use]
    pub fn table_header(&self) -> Rect {
        let inner = self.table_inner();
        Rect::new(inner.x, inner.y, inner.width, inner.height.min(1))
    }

    /// Area where table rows are drawn.
    #[must_use]
    pub fn table_rows(&self) -> Rect {
        let inner = self.table_inner();
        let skip = TABLE_HEADER_LINES.min(inner.height);
        Rect::new(inner.x, inner.y + skip, inner.width, inner.height - skip)
    }

    /// Horizontal extent of the name column.
    #[must_use]
    pub fn name_column(&self) -> Rect {
        let inner = self.table_inner();
        Layout::horizontal(TABLE_COLUMNS)
            .spacing(COLUMN_SPACING)
            .split(inner)[0]
    }
}

/// Shrinks a bordered area by one cell on every side.
#[must_use]
pub fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

/// Returns `true` if the cell at `(column, row)` lies inside `area`.
#[must_use]
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

// ============================================================================
// Tests
// ============================================================================
