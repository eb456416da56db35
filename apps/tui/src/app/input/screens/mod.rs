use crate::app::state::{App, AppScreen};
use cozy_map_core::SpotEndpoint;
use crossterm::event::KeyCode;

mod help;
mod map;
mod search;

pub fn dispatch_input(app: &mut App, key: KeyCode) -> Option<SpotEndpoint> {
    if help::handle_help_toggle(app, key) {
        return None;
    }

    match app.screen {
        AppScreen::Map => map::handle_map_input(app, key),
        AppScreen::Search => {
            search::handle_search_input(app, key);
            None
        }
        AppScreen::Help => None,
    }
}
