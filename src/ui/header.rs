//! Header rendering for LedgerLens.
//!
//! Renders the name and amount filter inputs above the table.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{App, FilterField, Focus};
use crate::theme::PLACEHOLDER_STYLE;

use super::helpers::create_border_block;
use super::layout::AppLayout;

/// Renders both filter inputs.
pub fn render(frame: &mut Frame, layout: &AppLayout, app: &App) {
    render_input(frame, layout.name_filter, app, FilterField::Name);
    render_input(frame, layout.amount_filter, app, FilterField::Amount);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App, field: FilterField) {
    let focused = app.ui.focus == Focus::from(field);
    let title = match field {
        FilterField::Name => "Name [/]",
        FilterField::Amount => "Amount [$]",
    };
    let block = create_border_block(title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let value = app.filters.value(field);
    let line = if value.is_empty() {
        Line::from(Span::styled(field.placeholder(), PLACEHOLDER_STYLE))
    } else {
        Line::from(value)
    };

    // Keep the end of long input visible.
    let width = usize::from(inner.width.saturating_sub(1));
    let chars = value.chars().count();
    let scroll = chars.saturating_sub(width) as u16;
    frame.render_widget(Paragraph::new(line).scroll((0, scroll)), inner);

    if focused {
        let x = inner.x + (chars as u16).saturating_sub(scroll).min(inner.width - 1);
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

// ============================================================================
// Tests
// ============================================================================
