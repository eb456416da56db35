use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(c) => {
            app.search.query.push(c);
            app.refresh_search();
        }
        KeyCode::Backspace => {
            app.search.query.pop();
            app.refresh_search();
        }
        KeyCode::Enter => app.accept_search(),
        KeyCode::Esc => app.cancel_search(),
        _ => {}
    }
}
