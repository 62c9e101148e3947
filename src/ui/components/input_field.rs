//! Input Field Component
//!
//! A single-line text input with a label, focus highlighting, and optional
//! password masking. Rounded borders to match the rest of the form.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Whether to mask the value (for passwords)
    pub is_password: bool,
}

impl<'a> InputFieldConfig<'a> {
    /// Create a new input field configuration
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            is_password: false,
        }
    }

    /// Set whether the input is focused
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set whether to mask the value (for passwords)
    pub fn password(mut self, is_password: bool) -> Self {
        self.is_password = is_password;
        self
    }
}

/// Rows consumed by an input field: label (1) + bordered box (3).
pub fn input_field_height() -> u16 {
    4
}

/// Render an input field with label and input box.
///
/// Returns the height consumed.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let label_style = if config.focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    // Clip every sub-rect to the given area so a cramped terminal cannot
    // push a row outside the buffer.
    let label_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    }
    .intersection(area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        label_area,
    );

    let input_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: 3,
    }
    .intersection(area);

    let border_color = if config.focused {
        COLOR_ACCENT
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let mut content = if config.is_password {
        "\u{2022}".repeat(config.value.chars().count())
    } else {
        config.value.to_string()
    };
    if config.focused {
        content.push('\u{2588}'); // Block cursor
    }

    let text_style = if config.focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(content, text_style))).block(block),
        input_area,
    );

    input_field_height()
}
