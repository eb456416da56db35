use crate::app::state::{App, PanDirection};
use cozy_map_core::SpotEndpoint;
use crossterm::event::KeyCode;

pub fn handle_map_input(app: &mut App, key: KeyCode) -> Option<SpotEndpoint> {
    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Up | KeyCode::Char('k') => app.pan(PanDirection::North),
        KeyCode::Down | KeyCode::Char('j') => app.pan(PanDirection::South),
        KeyCode::Left | KeyCode::Char('h') => app.pan(PanDirection::West),
        KeyCode::Right | KeyCode::Char('l') => app.pan(PanDirection::East),
        KeyCode::Char('+' | '=') => app.zoom_in(),
        KeyCode::Char('-' | '_') => app.zoom_out(),
        KeyCode::Char('c') => app.reset_view(),
        KeyCode::Tab => app.select_next(),
        KeyCode::BackTab => app.select_prev(),
        KeyCode::Enter => app.center_on_selected(),
        KeyCode::Esc => app.clear_selection(),
        KeyCode::Char('/') => app.open_search(),
        KeyCode::Char('e') => app.export_and_report(),
        KeyCode::Char('m') => return app.toggle_filter(),
        KeyCode::Char('r') => return Some(app.reload()),
        _ => {}
    }
    None
}
