//! Detail panel with the selected customer's daily totals as a bar chart.
//!
//! The chart draws one bar per calendar day between the first and last
//! transaction. Days without transactions keep an empty slot so the bar
//! spacing follows time. The focused bar is moved with the chart keys and
//! its date and total are shown on the line under the chart.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
};

use crate::domain::{DaySlot, format_amount};
use crate::state::App;
use crate::theme::{ACCENT_COLOR, MUTED_COLOR, PRIMARY_COLOR, SECONDARY_COLOR, WARNING_COLOR};
use crate::ui::helpers::{create_border_block, truncate};

/// Width of one bar in cells.
pub const BAR_WIDTH: u16 = 5;

/// Gap between bars in cells.
pub const BAR_GAP: u16 = 1;

/// Label of the value axis.
pub const VALUE_AXIS_LABEL: &str = "Transaction Amount";

/// Date format of the bar labels.
const BAR_LABEL_FORMAT: &str = "%m-%d";

/// Date format of the focused bar line.
const TOOLTIP_DATE_FORMAT: &str = "%b %-d, %Y";

// ============================================================================
// Rendering
// ============================================================================

/// Renders the detail panel into `area`.
///
/// Nothing is drawn while no customer is selected.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(name) = app.selection.customer_name() else {
        return;
    };

    let title = truncate(
        &format!("{name}'s Transactions"),
        usize::from(area.width.saturating_sub(4)),
    );
    let block = create_border_block(&title, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [label_area, chart_area, tooltip_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            VALUE_AXIS_LABEL,
            Style::default().fg(MUTED_COLOR).add_modifier(Modifier::ITALIC),
        )),
        label_area,
    );

    let slots = app.selected_series().day_slots();
    if slots.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No dated transactions to chart",
                Style::default().fg(MUTED_COLOR),
            )),
            chart_area,
        );
        return;
    }

    let cursor = app.ui.chart_cursor.min(slots.len() - 1);
    let start = window_start(cursor, visible_bars(chart_area.width));
    let end = (start + visible_bars(chart_area.width)).min(slots.len());

    let bars: Vec<Bar> = slots[start..end]
        .iter()
        .enumerate()
        .map(|(offset, slot)| day_bar(slot, start + offset == cursor, app.currency()))
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .bar_style(Style::default().fg(SECONDARY_COLOR));
    frame.render_widget(chart, chart_area);

    frame.render_widget(
        Paragraph::new(tooltip_line(&slots[cursor], app.currency())),
        tooltip_area,
    );
}

/// Builds the bar for one day slot.
///
/// Every bar has the same color; the focused one is marked by its label.
fn day_bar<'a>(slot: &DaySlot, focused: bool, currency: &str) -> Bar<'a> {
    let label = slot.date.format(BAR_LABEL_FORMAT).to_string();
    let total = slot.total.unwrap_or(0.0);
    let label_style = if focused {
        Style::default()
            .fg(ACCENT_COLOR)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(MUTED_COLOR)
    };

    Bar::default()
        .value(bar_value(total))
        .label(Line::styled(label, label_style))
        .text_value(format!("{currency}{}", format_amount(total)))
        .value_style(Style::default().fg(WARNING_COLOR).add_modifier(Modifier::BOLD))
}

/// Line describing the focused bar.
pub(crate) fn tooltip_line<'a>(slot: &DaySlot, currency: &str) -> Line<'a> {
    let date = slot.date.format(TOOLTIP_DATE_FORMAT).to_string();
    let value = match slot.total {
        Some(total) => Span::styled(
            format!("{currency}{}", format_amount(total)),
            Style::default().fg(WARNING_COLOR).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("No transactions", Style::default().fg(MUTED_COLOR)),
    };
    Line::from(vec![
        Span::styled(format!("{date}: "), Style::default().fg(PRIMARY_COLOR)),
        value,
    ])
}

// ============================================================================
// Chart Geometry
// ============================================================================

/// Bar height in cents. Negative totals draw as empty bars.
#[must_use]
pub fn bar_value(total: f64) -> u64 {
    (total * 100.0).round().max(0.0) as u64
}

/// Number of bars that fit in `width` cells.
#[must_use]
pub fn visible_bars(width: u16) -> usize {
    usize::from((width + BAR_GAP) / (BAR_WIDTH + BAR_GAP)).max(1)
}

/// First slot of the window that keeps `cursor` visible.
#[must_use]
pub fn window_start(cursor: usize, visible: usize) -> usize {
    (cursor + 1).saturating_sub(visible.max(1))
}

// ============================================================================
// Tests
// ============================================================================
