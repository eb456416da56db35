pub mod helpers;
pub mod screens;

use crate::app::state::App;
use cozy_map_core::SpotEndpoint;
use crossterm::event::KeyCode;

/// Applies a key press. Returns a request the caller should start.
pub fn handle_input(app: &mut App, key: KeyCode) -> Option<SpotEndpoint> {
    screens::dispatch_input(app, key)
}
