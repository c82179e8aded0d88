//! Keyboard event handling.
//!
//! Keys are routed to the focused field only; a field never sees a key
//! while another field holds focus. App-level keys (quit, focus movement)
//! are resolved here before anything reaches a dropdown.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::select::SelectKey;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    // Ctrl+C always quits, even with a dropdown open.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    let focused_open = app.focused_field().map(|f| f.is_open()).unwrap_or(false);

    match key.code {
        // Focus movement between fields.
        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrev,

        // 'q' quits only while the focused dropdown is closed, so it can
        // never race a navigation sequence inside an open list.
        KeyCode::Char('q') if !focused_open => Action::Quit,

        // Dropdown keys, routed to the focused field.
        KeyCode::Enter | KeyCode::Char(' ') => Action::Key(SelectKey::Activate),
        KeyCode::Up => Action::Key(SelectKey::Up),
        KeyCode::Down => Action::Key(SelectKey::Down),
        KeyCode::Esc => Action::Key(SelectKey::Escape),

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(&Config::default())
    }

    #[test]
    fn test_dropdown_keys_map_to_select_keys() {
        let app = app();
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Enter)),
            Action::Key(SelectKey::Activate)
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char(' '))),
            Action::Key(SelectKey::Activate)
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Up)),
            Action::Key(SelectKey::Up)
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Down)),
            Action::Key(SelectKey::Down)
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Esc)),
            Action::Key(SelectKey::Escape)
        );
    }

    #[test]
    fn test_quit_only_while_closed() {
        let mut app = app();
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('q'))), Action::Quit);

        app.apply(Action::Key(SelectKey::Activate));
        assert!(app.focused_field().unwrap().is_open());
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('q'))), Action::None);
    }

    #[test]
    fn test_ctrl_c_quits_even_while_open() {
        let mut app = app();
        app.apply(Action::Key(SelectKey::Activate));
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(&app, event), Action::Quit);
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let app = app();
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('x'))), Action::None);
        assert_eq!(handle_key_event(&app, key(KeyCode::Home)), Action::None);
    }

    #[test]
    fn test_tab_moves_focus() {
        let app = app();
        assert_eq!(handle_key_event(&app, key(KeyCode::Tab)), Action::FocusNext);
        assert_eq!(
            handle_key_event(&app, key(KeyCode::BackTab)),
            Action::FocusPrev
        );
    }
}
