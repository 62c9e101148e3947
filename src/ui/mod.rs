//! UI rendering for the login view.
//!
//! One render entry point, [`render`], selects between the editable login
//! form (with its optional error banner) and the welcome screen based on
//! app state. The form controls live under [`components`].

pub mod components;
mod login;
mod theme;
mod welcome;

pub use login::{login_card_height, render_login};
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG, COLOR_LINK, COLOR_SUCCESS,
    COLOR_WARNING,
};
pub use welcome::render_welcome;

use ratatui::Frame;

use crate::app::{App, Screen};

/// Render the whole UI for the current app state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match app.screen {
        Screen::Login => render_login(frame, area, app),
        Screen::Welcome => render_welcome(frame, area, app),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::VerificationOutcome;
    use crate::auth::{CredentialDraft, Field};

    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_screen_selects_the_rendered_view() {
        let mut app = App::new();
        app.update_field(Field::Name, "MAINT".to_string());

        let backend = TestBackend::new(60, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        let rendered = buffer_text(&terminal);
        assert!(rendered.contains("[ Login ]"));
        assert!(!rendered.contains("Welcome!"));

        app.screen = Screen::Welcome;
        app.outcome = VerificationOutcome::Success {
            token: crate::auth::evaluate(&CredentialDraft {
                name: Some("MAINT".to_string()),
                password: Some("safetyiskey".to_string()),
            })
            .unwrap(),
        };
        terminal.draw(|frame| render(frame, &app)).unwrap();
        let rendered = buffer_text(&terminal);
        assert!(rendered.contains("Welcome!"));
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }
}
