//! Panel rendering for the main content area.
//!
//! The content area holds the customer table and, while a customer is
//! selected, the [`detail`] panel with that customer's daily totals.
//!
//! The table is drawn from the scroll offset kept in
//! [`TableNavigation`](crate::state::TableNavigation), with row heights taken
//! from [`TableRow::height`] so that mouse hit-testing sees the same rows.

pub mod detail;

use ratatui::{
    Frame,
    layout::{Alignment, Margin},
    style::Style,
    symbols::scrollbar,
    text::{Line, Span, Text},
    widgets::{Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table},
};

use super::helpers::create_border_block;
use super::layout::{AppLayout, COLUMN_SPACING, TABLE_COLUMNS};
use crate::state::table::MAX_ROW_LINES;
use crate::state::{App, Focus, TableRow};
use crate::theme::{HEADER_STYLE, HIGHLIGHT_STYLE, MUTED_COLOR, PRIMARY_COLOR, WARNING_COLOR};

/// Marker in front of the selected customer's name.
const SELECTED_MARKER: &str = "▶ ";

// ============================================================================
// Customer Table
// ============================================================================

/// Renders the customer table.
///
/// Shows an empty-state message when no row survives the filters, and a
/// scrollbar when the rows overflow the viewport.
pub fn render_table(app: &App, frame: &mut Frame, layout: &AppLayout) {
    let rows = app.visible_rows();
    let title = format!("Customers ({}/{})", rows.len(), app.grouped.len());
    let block = create_border_block(&title, app.ui.focus == Focus::Table);
    frame.render_widget(block, layout.table);

    let rows_area = layout.table_rows();
    if rows.is_empty() {
        let message = if app.grouped.is_empty() {
            "No transactions loaded"
        } else {
            "No customers match the current filters"
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center);
        frame.render_widget(header_row_table(app, Vec::new()), layout.table_inner());
        frame.render_widget(empty, rows_area);
        return;
    }

    let selected = app.selection.customer_name();
    let body: Vec<Row> = rows
        .iter()
        .enumerate()
        .skip(app.table.offset)
        .map(|(index, row)| {
            let is_selected = selected == Some(row.customer_name.as_str());
            let is_highlighted = index == app.table.highlighted;
            table_row(row, is_selected, is_highlighted, app.currency())
        })
        .collect();

    frame.render_widget(header_row_table(app, body), layout.table_inner());

    let total_lines: usize = rows.iter().map(|r| usize::from(r.height())).sum();
    if total_lines > usize::from(rows_area.height) {
        let scrolled_lines: usize = rows
            .iter()
            .take(app.table.offset)
            .map(|r| usize::from(r.height()))
            .sum();
        let mut state = ScrollbarState::new(total_lines.saturating_sub(usize::from(rows_area.height)))
            .position(scrolled_lines);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .symbols(scrollbar::VERTICAL)
            .begin_symbol(None)
            .end_symbol(None);
        frame.render_stateful_widget(
            scrollbar,
            layout.table.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut state,
        );
    }
}

fn header_row_table<'a>(app: &App, body: Vec<Row<'a>>) -> Table<'a> {
    let header = Row::new(vec![
        Cell::from(format!("Name {}", app.sort.icon())),
        Cell::from("Transactions"),
    ])
    .style(HEADER_STYLE)
    .bottom_margin(1);

    Table::new(body, TABLE_COLUMNS)
        .header(header)
        .column_spacing(COLUMN_SPACING)
}

/// Builds one multi-line table row.
fn table_row<'a>(row: &TableRow, selected: bool, highlighted: bool, currency: &str) -> Row<'a> {
    let name_style = if selected {
        Style::default().fg(PRIMARY_COLOR)
    } else {
        Style::default()
    };
    let marker = if selected { SELECTED_MARKER } else { "  " };
    let name = Line::from(vec![
        Span::styled(marker, name_style),
        Span::styled(row.customer_name.clone(), name_style),
    ]);

    let row_style = if highlighted {
        HIGHLIGHT_STYLE
    } else {
        Style::default()
    };

    Row::new(vec![
        Cell::from(name),
        Cell::from(transaction_lines(row, currency)),
    ])
    .height(row.height())
    .style(row_style)
}

/// Formats the transactions cell, capped at [`MAX_ROW_LINES`] lines.
///
/// Longer lists show their first entries followed by a `… N more` line.
pub(crate) fn transaction_lines<'a>(row: &TableRow, currency: &str) -> Text<'a> {
    let amount_style = Style::default().fg(WARNING_COLOR);
    let count = row.transactions.len();

    if count == 0 {
        return Text::from(Span::styled("No transactions", Style::default().fg(MUTED_COLOR)));
    }

    let shown = if count > MAX_ROW_LINES {
        MAX_ROW_LINES - 1
    } else {
        count
    };

    let mut lines: Vec<Line> = row
        .transactions
        .iter()
        .take(shown)
        .map(|txn| Line::from(Span::styled(txn.display_line(currency), amount_style)))
        .collect();

    if count > shown {
        lines.push(Line::from(Span::styled(
            format!("… {} more", count - shown),
            Style::default().fg(MUTED_COLOR),
        )));
    }
    Text::from(lines)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Transaction;
    use crate::state::FilterField;
    use crate::test_utils::{AppMother, TestTerminal, test_terminal};
    use crate::ui::helpers::buffer_to_string;
    use rstest::rstest;

    fn draw(terminal: &mut TestTerminal, app: &App) -> String {
        terminal
            .draw(|frame| {
                let layout = AppLayout::new(frame.area(), app.selection.is_selected());
                render_table(app, frame, &layout);
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn row_with(count: usize) -> TableRow {
        TableRow {
            customer_name: "Alice".to_string(),
            transactions: (0..count)
                .map(|i| Transaction::new(1, "2024-01-01", i as f64))
                .collect(),
        }
    }

    #[test]
    fn test_transaction_lines_lists_every_entry() {
        let text = transaction_lines(&row_with(3), "$");
        assert_eq!(text.lines.len(), 3);
        assert_eq!(
            text.lines[1].to_string(),
            "Date: 2024-01-01, Amount: $1"
        );
    }

    #[test]
    fn test_transaction_lines_caps_long_rows() {
        let text = transaction_lines(&row_with(25), "$");
        assert_eq!(text.lines.len(), MAX_ROW_LINES);
        assert_eq!(text.lines[MAX_ROW_LINES - 1].to_string(), "… 16 more");
        assert_eq!(row_with(25).height() as usize, MAX_ROW_LINES);
    }

    #[rstest]
    fn test_table_shows_groups_and_header(mut test_terminal: TestTerminal) {
        let app = AppMother::standard();
        let screen = draw(&mut test_terminal, &app);

        assert!(screen.contains("Customers (4/4)"));
        assert!(screen.contains("Name ⇅"));
        assert!(screen.contains("Transactions"));
        assert!(screen.contains("Alice"));
        assert!(screen.contains("Unknown"));
        assert!(screen.contains("Date: 2024-01-03, Amount: $42"));
    }

    #[rstest]
    fn test_selected_customer_has_marker(mut test_terminal: TestTerminal) {
        let app = AppMother::with_selection("Bob");
        let screen = draw(&mut test_terminal, &app);

        assert!(screen.contains("▶ Bob"));
        assert!(!screen.contains("▶ Alice"));
    }

    #[rstest]
    fn test_empty_state(mut test_terminal: TestTerminal) {
        let mut app = AppMother::standard();
        app.filters.set(FilterField::Name, "zzz");
        let screen = draw(&mut test_terminal, &app);

        assert!(screen.contains("Customers (0/4)"));
        assert!(screen.contains("No customers match the current filters"));
    }

    #[rstest]
    fn test_amount_filter_narrows_transactions(mut test_terminal: TestTerminal) {
        let mut app = AppMother::standard();
        app.filters.set(FilterField::Amount, "50");
        let screen = draw(&mut test_terminal, &app);

        assert!(screen.contains("Amount: $150"));
        assert!(screen.contains("Amount: $250"));
        assert!(!screen.contains("Amount: $7.5"));
        assert!(!screen.contains("Alice "));
    }
}
