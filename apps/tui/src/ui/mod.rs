// Rendering for the terminal map and its overlays

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::map::render_map_screen(app, f);

    match app.screen {
        AppScreen::Map => {}
        AppScreen::Search => screens::search::render_search(app, f),
        AppScreen::Help => screens::help::render_help(f),
    }
}
