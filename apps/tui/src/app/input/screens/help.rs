use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

/// Opens and closes the help overlay. Returns true when the key was used.
pub fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if app.screen == AppScreen::Search {
        return false;
    }

    if matches!(key, KeyCode::F(1) | KeyCode::Char('?')) {
        app.screen = if app.screen == AppScreen::Help {
            AppScreen::Map
        } else {
            AppScreen::Help
        };
        return true;
    }

    if app.screen == AppScreen::Help {
        if matches!(key, KeyCode::Esc | KeyCode::Char('q')) {
            app.screen = AppScreen::Map;
        }
        return true;
    }

    false
}
