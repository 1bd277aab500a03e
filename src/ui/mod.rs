//! UI rendering module for LedgerLens.
//!
//! # Module Structure
//!
//! - `header` - Name and amount filter inputs
//! - `panels` - Customer table and the detail chart panel
//! - `footer` - Key hints
//! - `components` - Reusable overlays (toast notifications)
//! - `layout` - Layout calculations shared with mouse hit-testing
//! - `helpers` - Styled blocks and buffer utilities

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;

use ratatui::Frame;

use crate::state::App;

use layout::AppLayout;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Renders the whole application.
///
/// The detail panel only takes space while a customer is selected. Toasts
/// are drawn last, on top of everything else.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let layout = AppLayout::new(area, app.selection.is_selected());

    header::render(frame, &layout, app);
    panels::render_table(app, frame, &layout);
    if let Some(detail) = layout.detail {
        panels::detail::render(app, frame, detail);
    }
    footer::render(frame, layout.footer, app);

    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, area, message);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{AppMother, TestTerminal, test_terminal};
    use helpers::buffer_to_string;
    use rstest::rstest;

    #[rstest]
    fn test_render_without_selection(mut test_terminal: TestTerminal) {
        let app = AppMother::standard();
        test_terminal.draw(|frame| render(&app, frame)).unwrap();
        let screen = buffer_to_string(test_terminal.backend().buffer());

        assert!(screen.contains("Filter by name"));
        assert!(screen.contains("Customers (4/4)"));
        assert!(screen.contains("q:Quit"));
        assert!(!screen.contains("Transaction Amount"));
    }

    #[rstest]
    fn test_render_with_selection_and_toast(mut test_terminal: TestTerminal) {
        let mut app = AppMother::with_selection("Alice");
        app.ui.show_toast("[+] Hello");
        test_terminal.draw(|frame| render(&app, frame)).unwrap();
        let screen = buffer_to_string(test_terminal.backend().buffer());

        assert!(screen.contains("Alice's Transactions"));
        assert!(screen.contains("Transaction Amount"));
        assert!(screen.contains("[+] Hello"));
    }
}
