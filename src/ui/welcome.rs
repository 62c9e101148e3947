//! Welcome screen rendering.
//!
//! Shown once a verification attempt resolves. Not editable; displays the
//! logged-in name and the transient session token.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, VerificationOutcome};
use crate::auth::Field;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_SUCCESS};

const CARD_WIDTH: u16 = 46;
const CARD_HEIGHT: u16 = 9;

/// Render the welcome card centered in `area`.
pub fn render_welcome(frame: &mut Frame, area: Rect, app: &App) {
    let width = CARD_WIDTH.min(area.width);
    let height = CARD_HEIGHT.min(area.height);
    let card = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let token = match &app.outcome {
        VerificationOutcome::Success { token } => token.as_str(),
        // The welcome screen is only reachable after a success; render a
        // blank token rather than panicking if it is ever forced otherwise.
        _ => "",
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome!",
            Style::default()
                .fg(COLOR_SUCCESS)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Logged in as: {}", app.draft.get(Field::Name))),
        Line::from(Span::styled(
            format!("session: {}", token),
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[q] Quit",
            Style::default().fg(COLOR_DIM),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}
