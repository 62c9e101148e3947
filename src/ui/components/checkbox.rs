//! Checkbox Component
//!
//! A one-line `[x] label` toggle with focus highlighting.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// Render a checkbox row. Occupies one row.
pub fn render_checkbox(frame: &mut Frame, area: Rect, label: &str, checked: bool, focused: bool) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let line = Line::from(vec![
        Span::styled(mark, style),
        Span::raw(" "),
        Span::styled(label.to_string(), style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_checked_and_unchecked_marks() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| {
                render_checkbox(frame, Rect::new(0, 0, 30, 1), "Remember Me", true, false);
                render_checkbox(frame, Rect::new(0, 1, 30, 1), "Remember Me", false, true);
            })
            .unwrap();

        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains("[x] Remember Me"));
        assert!(rendered.contains("[ ] Remember Me"));
    }
}
