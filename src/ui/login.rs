//! Login form card rendering.
//!
//! Renders the centered login card: header, name and password inputs, the
//! remember-me row with the forgot-password hint, the login button, an
//! optional warning banner with the last rejection reason, and the
//! registration footer.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::auth::Field;
use crate::ui::components::{render_checkbox, render_input_field, InputFieldConfig};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_LINK, COLOR_WARNING};

/// Card width in columns (clamped to the terminal width).
const CARD_WIDTH: u16 = 46;

/// Render the login form centered in `area`.
pub fn render_login(frame: &mut Frame, area: Rect, app: &App) {
    let card = centered_card(area, CARD_WIDTH, login_card_height(app));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let x = inner.x + 2;
    let width = inner.width.saturating_sub(4);
    let mut y = inner.y;

    // Every row is clipped to the card interior so a cramped terminal
    // cannot push a widget outside the buffer.
    let row = |y: u16, h: u16| Rect::new(x, y, width, h).intersection(inner);

    // Header
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Login",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        Rect::new(inner.x, y, inner.width, 1).intersection(inner),
    );
    y += 2;

    // Name input
    let name = InputFieldConfig::new("name", app.draft.get(Field::Name))
        .focused(app.focus == Focus::Name);
    y += render_input_field(frame, row(y, 4), &name);

    // Password input
    let password = InputFieldConfig::new("password", app.draft.get(Field::Password))
        .focused(app.focus == Focus::Password)
        .password(true);
    y += render_input_field(frame, row(y, 4), &password);
    y += 1;

    // Remember me + forgot password footer row
    render_checkbox(
        frame,
        Rect::new(x, y, width / 2, 1).intersection(inner),
        "Remember Me",
        app.remember_me,
        app.focus == Focus::RememberMe,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Forgot Password",
            Style::default()
                .fg(COLOR_LINK)
                .add_modifier(Modifier::UNDERLINED),
        )))
        .alignment(Alignment::Right),
        Rect::new(x + width / 2, y, width - width / 2, 1).intersection(inner),
    );
    y += 2;

    // Login button
    let button_style = if app.focus == Focus::LoginButton {
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(COLOR_ACCENT)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("[ Login ]", button_style)))
            .alignment(Alignment::Center),
        row(y, 1),
    );
    y += 1;

    // Status line: warning banner or in-flight note
    if let Some(reason) = app.error() {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("\u{26a0} ", Style::default().fg(COLOR_WARNING)),
                Span::styled(reason.to_string(), Style::default().fg(COLOR_WARNING)),
            ]))
            .alignment(Alignment::Center),
            row(y, 1),
        );
        y += 1;
    } else if app.is_verifying() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "verifying...",
                Style::default().fg(COLOR_DIM),
            )))
            .alignment(Alignment::Center),
            row(y, 1),
        );
        y += 1;
    }
    y += 1;

    // Registration footer
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Do not have an account ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                "Register here",
                Style::default()
                    .fg(COLOR_LINK)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]))
        .alignment(Alignment::Center),
        row(y, 1),
    );
}

/// Card height for the current state (a status row is added while an error
/// or an in-flight attempt is shown).
pub fn login_card_height(app: &App) -> u16 {
    let mut height = 18;
    if app.error().is_some() || app.is_verifying() {
        height += 1;
    }
    height
}

fn centered_card(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
