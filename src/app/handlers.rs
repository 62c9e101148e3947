//! Key-event handling for the App.
//!
//! Typing edits whichever text input has focus, Tab/Shift+Tab (or the
//! arrow keys) cycle focus, Space flips the remember-me toggle when it has
//! focus, and Enter submits from anywhere on the form. The welcome screen
//! only accepts quit keys.

use crossterm::event::{KeyCode, KeyEvent};

use super::{App, Focus, Screen};

impl App {
    /// Handle a key press for the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Login => self.handle_login_key(key),
            Screen::Welcome => self.handle_welcome_key(key),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                self.mark_dirty();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                self.mark_dirty();
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Char(' ') if self.focus == Focus::RememberMe => self.toggle_remember_me(),
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.delete_char(),
            _ => {}
        }
    }

    fn handle_welcome_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    /// Append a character to the focused text input, if any.
    fn insert_char(&mut self, c: char) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let mut value = self.draft.get(field).to_string();
        value.push(c);
        self.update_field(field, value);
    }

    /// Remove the last character of the focused text input, if any.
    fn delete_char(&mut self) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let mut value = self.draft.get(field).to_string();
        value.pop();
        self.update_field(field, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Field;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_edits_the_focused_field() {
        let mut app = App::new();
        type_str(&mut app, "MAINT");
        assert_eq!(app.draft.get(Field::Name), "MAINT");

        app.handle_key(press(KeyCode::Tab));
        type_str(&mut app, "safetyiskey");
        assert_eq!(app.draft.get(Field::Password), "safetyiskey");
        // Name untouched by password edits
        assert_eq!(app.draft.get(Field::Name), "MAINT");
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let mut app = App::new();
        type_str(&mut app, "MAINTX");
        app.handle_key(press(KeyCode::Backspace));
        assert_eq!(app.draft.get(Field::Name), "MAINT");
    }

    #[test]
    fn test_backspace_on_empty_field_is_harmless() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Backspace));
        assert_eq!(app.draft.get(Field::Name), "");
    }

    #[test]
    fn test_space_toggles_remember_me_only_when_focused() {
        let mut app = App::new();
        // Space in the name field is just a character
        app.handle_key(press(KeyCode::Char(' ')));
        assert_eq!(app.draft.get(Field::Name), " ");
        assert!(!app.remember_me);

        app.focus = Focus::RememberMe;
        app.handle_key(press(KeyCode::Char(' ')));
        assert!(app.remember_me);
        app.handle_key(press(KeyCode::Char(' ')));
        assert!(!app.remember_me);
    }

    #[test]
    fn test_esc_quits_from_the_form() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_submits_from_any_control() {
        for focus in [
            Focus::Name,
            Focus::Password,
            Focus::RememberMe,
            Focus::LoginButton,
        ] {
            let mut app = App::new();
            app.focus = focus;
            app.handle_key(press(KeyCode::Enter));
            assert!(app.is_verifying(), "Enter should submit from {:?}", focus);
        }
    }

    #[test]
    fn test_welcome_screen_ignores_editing_keys() {
        let mut app = App::new();
        app.screen = Screen::Welcome;
        type_str(&mut app, "x");
        app.handle_key(press(KeyCode::Backspace));
        assert_eq!(app.draft.get(Field::Name), "");

        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
