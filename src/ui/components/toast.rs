//! Toast notification overlay.
//!
//! Toasts sit in the bottom-right corner above the footer and never take
//! input. The message prefix picks the style: `[+]` for success, `[x]` for
//! failure, anything else is informational.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{ERROR_COLOR, MUTED_COLOR, SUCCESS_COLOR};

const MIN_WIDTH: u16 = 20;
const HEIGHT: u16 = 3;
/// Borders plus one space on each side of the message.
const WIDTH_PADDING: u16 = 4;
/// Distance from the right and bottom edges.
const MARGIN: u16 = 2;

/// Kind of a toast, derived from its message prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn of(message: &str) -> Self {
        if message.starts_with("[+]") {
            Self::Success
        } else if message.starts_with("[x]") {
            Self::Failure
        } else {
            Self::Info
        }
    }

    const fn color(self) -> Color {
        match self {
            Self::Success => SUCCESS_COLOR,
            Self::Failure => ERROR_COLOR,
            Self::Info => Color::White,
        }
    }
}

/// Renders `message` as a toast inside `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_area(area, message);
    if toast_area.width == 0 || toast_area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(MUTED_COLOR))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(toast_area);

    frame.render_widget(Clear, toast_area);
    frame.render_widget(block, toast_area);
    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(ToastKind::of(message).color()))
            .alignment(Alignment::Center),
        inner,
    );
}

/// Placement of a toast for `message`, clipped to `area`.
#[must_use]
pub fn toast_area(area: Rect, message: &str) -> Rect {
    let wanted = (message.chars().count() as u16).saturating_add(WIDTH_PADDING);
    let width = wanted.clamp(MIN_WIDTH, (area.width / 2).max(MIN_WIDTH)).min(area.width);
    let height = HEIGHT.min(area.height);

    let x = area.x + area.width.saturating_sub(width + MARGIN);
    let y = area.y + area.height.saturating_sub(height + MARGIN);
    Rect::new(x, y, width, height)
}

// ============================================================================
// Tests
// ============================================================================
