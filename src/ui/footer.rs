//! Footer rendering module for LedgerLens.
//!
//! The footer shows the key hints of the current input context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Key hints for an input context.
#[must_use]
pub fn hints(context: &InputContext, selected: bool) -> &'static str {
    if context.accepts_text_input() {
        "Type to filter  Backspace:Delete  Ctrl+U:Clear  Tab:Next  Esc:Done"
    } else if selected {
        "q:Quit  ↑↓:Move  Enter:Select  s:Sort  ←→:Bar  c:Copy  /:Name  $:Amount"
    } else {
        "q:Quit  ↑↓:Move  Enter:Select  s:Sort  /:Name  $:Amount  Tab:Focus"
    }
}

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let text = hints(&app.get_input_context(), app.selection.is_selected());
    let footer = Paragraph::new(text)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Focus;
    use crate::test_utils::AppMother;
    use crate::ui::helpers::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_table_hints() {
        let app = AppMother::standard();
        let content = draw(&app, 90);

        for shortcut in ["q:Quit", "Enter:Select", "s:Sort", "/:Name", "$:Amount"] {
            assert!(
                content.contains(shortcut),
                "Footer should contain '{shortcut}', got: {content}"
            );
        }
        assert!(!content.contains("c:Copy"));
    }

    #[test]
    fn test_selected_hints_include_chart_keys() {
        let app = AppMother::with_selection("Alice");
        let content = draw(&app, 90);

        assert!(content.contains("←→:Bar"));
        assert!(content.contains("c:Copy"));
    }

    #[test]
    fn test_filter_hints() {
        let mut app = AppMother::standard();
        app.ui.focus = Focus::NameFilter;
        let content = draw(&app, 90);

        assert!(content.contains("Esc:Done"));
        assert!(!content.contains("q:Quit"));
    }

    #[test]
    fn test_narrow_and_empty_areas_do_not_panic() {
        let app = AppMother::standard();
        let _ = draw(&app, 20);

        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 80, 0), &app))
            .unwrap();
    }
}
