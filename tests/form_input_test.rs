//! Tests for form editing and the full keyboard journey.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gatehouse::app::{App, Focus, Screen};
use gatehouse::auth::Field;
use gatehouse::ui;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
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

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        app.handle_key(press(KeyCode::Char(c)));
    }
}

#[test]
fn test_focus_starts_on_the_name_field() {
    let app = App::new();
    assert_eq!(app.focus, Focus::Name);
}

#[test]
fn test_tab_walks_the_form_in_order() {
    let mut app = App::new();
    app.handle_key(press(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Password);
    app.handle_key(press(KeyCode::Tab));
    assert_eq!(app.focus, Focus::RememberMe);
    app.handle_key(press(KeyCode::Tab));
    assert_eq!(app.focus, Focus::LoginButton);
    app.handle_key(press(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Name);
}

#[test]
fn test_arrow_keys_walk_the_form_both_ways() {
    let mut app = App::new();
    app.handle_key(press(KeyCode::Down));
    assert_eq!(app.focus, Focus::Password);
    app.handle_key(press(KeyCode::Up));
    assert_eq!(app.focus, Focus::Name);
    app.handle_key(press(KeyCode::BackTab));
    assert_eq!(app.focus, Focus::LoginButton);
}

#[test]
fn test_fields_are_edited_independently() {
    let mut app = App::new();
    type_str(&mut app, "MAINT");
    app.handle_key(press(KeyCode::Tab));
    type_str(&mut app, "safetyiskey");
    app.handle_key(press(KeyCode::Backspace));

    assert_eq!(app.draft.get(Field::Name), "MAINT");
    assert_eq!(app.draft.get(Field::Password), "safetyiske");
}

#[tokio::test(start_paused = true)]
async fn test_full_keyboard_journey_to_welcome() {
    let mut app = App::new();
    let mut rx = app.message_rx.take().unwrap();

    // Type name, move to password, type it, tick remember-me, submit
    type_str(&mut app, "MAINT");
    app.handle_key(press(KeyCode::Tab));
    type_str(&mut app, "safetyiskey");
    app.handle_key(press(KeyCode::Tab));
    app.handle_key(press(KeyCode::Char(' ')));
    assert!(app.remember_me);
    app.handle_key(press(KeyCode::Enter));
    assert!(app.is_verifying());

    let msg = rx.recv().await.unwrap();
    app.handle_message(msg);
    assert_eq!(app.screen, Screen::Welcome);

    // The welcome screen shows the logged-in name and token
    let backend = TestBackend::new(60, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, &app)).unwrap();
    let rendered = buffer_text(&terminal);
    assert!(rendered.contains("Logged in as: MAINT"));
    assert!(rendered.contains("a success token"));
}

#[tokio::test(start_paused = true)]
async fn test_rejection_journey_renders_the_banner_and_stays_editable() {
    let mut app = App::new();
    let mut rx = app.message_rx.take().unwrap();

    type_str(&mut app, "MAINT");
    app.handle_key(press(KeyCode::Tab));
    type_str(&mut app, "wrong");
    app.handle_key(press(KeyCode::Enter));

    let msg = rx.recv().await.unwrap();
    app.handle_message(msg);

    let backend = TestBackend::new(60, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, &app)).unwrap();
    let rendered = buffer_text(&terminal);
    assert!(rendered.contains("name or password is incorrect"));
    assert!(rendered.contains("[ Login ]"));

    // Still editable: fix the password and the draft updates
    app.handle_key(press(KeyCode::Backspace));
    type_str(&mut app, "x");
    assert_eq!(app.draft.get(Field::Password), "wronx");
}
